use clap::Parser;
use colored::*;
use preexec::cli::args::{Cli, Commands, EXIT_ERROR};
use preexec::cli::commands::{
    cmd_check, cmd_config, cmd_diff, cmd_explain, cmd_history, cmd_hook, cmd_pre_commit,
    cmd_rewrite, cmd_rules, cmd_scan, cmd_show,
};
use preexec::config::Config;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.apply();

    // Initialize structured logging before any command runs.
    if let Err(e) = preexec::logging::init(cli.log_level.into(), cli.log_format) {
        eprintln!(
            "{}: Failed to initialize logging: {}",
            "Error".red().bold(),
            e
        );
        return ExitCode::from(EXIT_ERROR);
    }

    match run(cli.command, cli.config_file.as_deref()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands, config_file: Option<&Path>) -> anyhow::Result<ExitCode> {
    let config = || Config::load_or_default(config_file);
    match command {
        Commands::Check {
            format,
            clipboard,
            command,
        } => cmd_check(&config(), format, clipboard, &command),
        Commands::Scan {
            extract,
            format,
            paths,
        } => cmd_scan(&config(), &paths, extract, format),
        Commands::History { shell, last } => cmd_history(&config(), shell, last),
        Commands::Show { urls, input, .. } => cmd_show(&config(), urls, &input),
        Commands::Hook { shell } => cmd_hook(shell),
        Commands::Rules { action } => cmd_rules(&config(), action),
        Commands::Explain { rules } => cmd_explain(&rules),
        Commands::Diff { first, second } => cmd_diff(&config(), first, second),
        Commands::Rewrite { normalize, command } => cmd_rewrite(normalize, &command),
        Commands::PreCommit { paths } => cmd_pre_commit(&config(), paths),
        Commands::Config { action } => cmd_config(action, config_file),
    }
}
