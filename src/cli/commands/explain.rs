use std::process::ExitCode;

use crate::detection::Rule;

/// Execute the `explain` command: describe the named rules, or all.
pub fn cmd_explain(names: &[String]) -> anyhow::Result<ExitCode> {
    let rules = if names.is_empty() {
        Rule::ALL.to_vec()
    } else {
        names
            .iter()
            .map(|n| n.parse::<Rule>())
            .collect::<Result<Vec<_>, _>>()?
    };
    for rule in rules {
        println!("{}: {}", rule.id(), rule.description());
    }
    Ok(ExitCode::SUCCESS)
}
