//! Command-line argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::hook::HookShell;

/// preexec - inspect commands before execution
#[derive(Parser, Debug)]
#[command(name = "preexec")]
#[command(author, version, long_about = None)]
#[command(
    about = "preexec - inspect shell commands for homoglyphs, hidden characters and injection idioms before they run",
    after_help = "Exit codes: 0=PASS, 10=WARN, 20=BLOCK, 2=ERROR"
)]
pub struct Cli {
    /// Logging verbosity level
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    /// Logging output format
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: crate::logging::LogFormat,

    /// Control color output (auto, always, never). Respects NO_COLOR env var.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Config file [default: <config dir>/preexec/config.toml]
    #[arg(long = "config", global = true, env = "PREEXEC_CONFIG")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect a single command
    Check {
        /// Output format: text, json
        #[arg(short = 'F', long, default_value = "text")]
        format: OutputFormat,

        /// Read the command from the clipboard
        #[arg(long, conflicts_with = "command")]
        clipboard: bool,

        /// Command to inspect (everything after `--` is taken verbatim)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Scan files or directories line by line
    Scan {
        /// Only inspect lines inside ``` fenced code blocks
        #[arg(long)]
        extract: bool,

        /// Output format: text, json
        #[arg(short = 'F', long, default_value = "text")]
        format: OutputFormat,

        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Scan shell history
    History {
        /// Shell whose history file to read
        #[arg(long, default_value = "zsh")]
        shell: HistoryShell,

        /// Only scan the last N lines
        #[arg(long, default_value_t = 1000)]
        last: usize,
    },

    /// Reveal hidden code points or URLs in a string (reads stdin if omitted)
    Show {
        /// List every code point with its byte offset
        #[arg(long, required_unless_present = "urls", conflicts_with = "urls")]
        codepoints: bool,

        /// List URLs and flag non-ASCII hosts
        #[arg(long)]
        urls: bool,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        input: Vec<String>,
    },

    /// Print a shell hook script
    Hook {
        #[arg(value_enum)]
        shell: HookShell,
    },

    /// List or try out rules
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },

    /// Describe rules (all of them if none given)
    Explain { rules: Vec<String> },

    /// Compare the findings for two commands (reads two stdin lines if omitted)
    Diff {
        first: Option<String>,
        second: Option<String>,
    },

    /// Print a sanitized command: escapes and hidden characters removed
    Rewrite {
        /// Also fold Cyrillic look-alikes to Latin
        #[arg(long)]
        normalize: bool,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Scan the given paths, or the staged files, for a git pre-commit hook
    PreCommit { paths: Vec<PathBuf> },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize default configuration
    Init {
        /// Path to create config file
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Show current configuration
    Show,
}

#[derive(Subcommand, Debug)]
pub enum RulesAction {
    /// List rule ids in execution order
    List,

    /// Show only one rule's findings for a command
    Test {
        /// Rule id, e.g. unicode-homoglyph
        rule: String,

        /// Command to inspect [default: a sample that trips several rules]
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

/// Logging verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HistoryShell {
    Zsh,
    Bash,
}

impl HistoryShell {
    /// History file name relative to the home directory.
    pub fn history_file(self) -> &'static str {
        match self {
            HistoryShell::Zsh => ".zsh_history",
            HistoryShell::Bash => ".bash_history",
        }
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Apply the mode to `colored`'s global switch.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// Exit codes shared by every subcommand.
pub const EXIT_PASS: u8 = 0;
pub const EXIT_WARN: u8 = 10;
pub const EXIT_BLOCK: u8 = 20;
pub const EXIT_ERROR: u8 = 2;
