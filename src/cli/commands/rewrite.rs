//! Rewrite command: print a sanitized copy of a command.

use anyhow::bail;
use std::process::ExitCode;
use tracing::debug;

use crate::cli::input;
use crate::rewrite::{safe_rewrite, safe_rewrite_bytes, visible_runes};

/// Execute the `rewrite` command. Reads stdin when no command is given.
pub fn cmd_rewrite(normalize: bool, command: &[String]) -> anyhow::Result<ExitCode> {
    let rewritten = if command.is_empty() {
        let raw = input::read_stdin_bytes()?;
        safe_rewrite_bytes(&raw, normalize).trim().to_string()
    } else {
        safe_rewrite(&input::joined(command), normalize)
    };
    if rewritten.is_empty() {
        bail!("usage: preexec rewrite [--normalize] [--] <command>");
    }
    debug!(
        normalize,
        visible = visible_runes(&rewritten),
        bytes = rewritten.len(),
        "Command rewritten"
    );
    println!("{}", rewritten);
    Ok(ExitCode::SUCCESS)
}
