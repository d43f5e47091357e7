//! CLI command implementations.
//!
//! Each submodule implements one top-level subcommand. Commands return the
//! process exit code: 0/10/20 for the worst severity seen, or an error
//! (reported by `main` as exit code 2).

pub mod check;
pub mod config;
pub mod diff;
pub mod explain;
pub mod history;
pub mod hook;
pub mod precommit;
pub mod rewrite;
pub mod rules;
pub mod scan;
pub mod show;

pub use check::cmd_check;
pub use config::cmd_config;
pub use diff::cmd_diff;
pub use explain::cmd_explain;
pub use history::cmd_history;
pub use hook::cmd_hook;
pub use precommit::cmd_pre_commit;
pub use rewrite::cmd_rewrite;
pub use rules::cmd_rules;
pub use scan::cmd_scan;
pub use show::cmd_show;
