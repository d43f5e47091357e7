//! Shell hook scripts that run `preexec check` before each command.
//!
//! Every script maps exit code 20 to "blocked" and 10 to "review", and lets
//! anything else through.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from hook generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HookError {
    #[error("unsupported shell: {0} (use zsh, bash, fish, powershell)")]
    UnsupportedShell(String),
}

/// Shells a hook can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HookShell {
    Zsh,
    Bash,
    Fish,
    #[value(alias = "pwsh")]
    Powershell,
}

impl FromStr for HookShell {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zsh" => Ok(HookShell::Zsh),
            "bash" => Ok(HookShell::Bash),
            "fish" => Ok(HookShell::Fish),
            "powershell" | "pwsh" => Ok(HookShell::Powershell),
            _ => Err(HookError::UnsupportedShell(s.to_string())),
        }
    }
}

impl fmt::Display for HookShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HookShell::Zsh => "zsh",
            HookShell::Bash => "bash",
            HookShell::Fish => "fish",
            HookShell::Powershell => "powershell",
        };
        f.write_str(name)
    }
}

/// Hook script for `shell`, invoking the binary at `exe`.
///
/// An empty `exe` falls back to `preexec` on `PATH`.
pub fn script(shell: HookShell, exe: &str) -> String {
    let exe = if exe.is_empty() { "preexec" } else { exe };
    match shell {
        HookShell::Zsh => format!(
            r#"# PreExec hook for zsh
__preexec_cmd() {{
  local cmd="$1"
  local code
  {exe} check -- "$cmd"
  code=$?
  if [ "$code" -eq 20 ]; then
    echo "PreExec BLOCK: command not executed."
    return 1
  fi
  if [ "$code" -eq 10 ]; then
    echo "PreExec WARN: review above. Run again to execute."
    return 1
  fi
  return 0
}}
preexec_functions+=(__preexec_cmd)
"#
        ),
        HookShell::Bash => format!(
            r#"# PreExec hook for bash (DEBUG trap)
__preexec_trap() {{
  if [ -n "$BASH_COMMAND" ] && [ "$BASH_COMMAND" != "printf" ]; then
    local cmd="$BASH_COMMAND"
    local code
    {exe} check -- "$cmd"
    code=$?
    if [ "$code" -eq 20 ]; then
      echo "PreExec BLOCK: command not executed."
      return 1
    fi
    if [ "$code" -eq 10 ]; then
      echo "PreExec WARN: review above. Run again to execute."
      return 1
    fi
  fi
}}
trap '__preexec_trap' DEBUG
"#
        ),
        HookShell::Fish => format!(
            r#"# PreExec hook for fish
function __preexec_cmd --on-event fish_preexec
  set -l cmd (string join " " $argv)
  {exe} check -- $cmd
  set -l code $status
  if [ $code -eq 20 ]
    echo "PreExec BLOCK: command not executed."
    return 1
  end
  if [ $code -eq 10 ]
    echo "PreExec WARN: review above. Run again to execute."
    return 1
  end
  return 0
end
"#
        ),
        HookShell::Powershell => format!(
            r#"# PreExec hook for PowerShell - add to $PROFILE
function preexec_check {{
  param([string]$cmd)
  $result = & {exe} check -- $cmd 2>&1
  $exitCode = $LASTEXITCODE
  if ($exitCode -eq 20) {{
    Write-Host "PreExec BLOCK: command not executed."
    return $false
  }}
  if ($exitCode -eq 10) {{
    Write-Host $result
    Write-Host "PreExec WARN: review above. Run again to execute."
    return $false
  }}
  return $true
}}
"#
        ),
    }
}

/// Hook script for a shell given by name.
pub fn script_for(shell: &str, exe: &str) -> Result<String, HookError> {
    Ok(script(shell.parse()?, exe))
}
