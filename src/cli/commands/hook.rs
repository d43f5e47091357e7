//! Hook command: print the shell integration script.

use std::process::ExitCode;
use tracing::debug;

use crate::hook::{self, HookShell};

/// Execute the `hook` command.
pub fn cmd_hook(shell: HookShell) -> anyhow::Result<ExitCode> {
    let exe = which::which("preexec")
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "preexec".to_string());
    debug!(shell = %shell, exe = %exe, "Generating hook");
    print!("{}", hook::script(shell, &exe));
    Ok(ExitCode::SUCCESS)
}
