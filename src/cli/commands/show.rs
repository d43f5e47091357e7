//! Show command: reveal code points or URLs hidden in a string.

use colored::*;
use std::process::ExitCode;
use tracing::debug;

use crate::cli::input;
use crate::config::Config;
use crate::urls;

/// Execute the `show` command.
///
/// Without `--urls` this lists code points; clap makes one of the two flags
/// mandatory.
pub fn cmd_show(config: &Config, show_urls: bool, args: &[String]) -> anyhow::Result<ExitCode> {
    let text = input::args_or_stdin(args)?;

    if show_urls {
        let found = urls::find_urls(&text).collect::<Vec<_>>();
        debug!(url_count = found.len(), "URLs extracted");
        for m in found {
            println!("{}", m.url);
            let host = m.host();
            if urls::has_idn(m.url) {
                println!(
                    "  {} host contains non-ASCII (IDN): {}",
                    "^".red().bold(),
                    host
                );
            }
            if config.is_denied_domain(host) {
                println!("  {} host is on the deny list: {}", "^".red().bold(), host);
            } else if config.is_allowed_domain(host) {
                println!("  {} host is on the allow list", "✓".green());
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    for (offset, c) in text.char_indices() {
        let line = format!("{}: U+{:04X} {:?}", offset, c as u32, c);
        if c.is_ascii() && !c.is_ascii_control() {
            println!("{}", line);
        } else {
            println!("{}", line.yellow());
        }
    }
    Ok(ExitCode::SUCCESS)
}
