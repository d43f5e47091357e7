//! Engine-level behaviour: aggregation, ordering, policy and offsets.

mod common;

use preexec::detection::{self, Rule, Severity};
use std::collections::HashMap;

const ZERO_WIDTH: [char; 6] = [
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}', '\u{2060}', '\u{180E}',
];
const BIDI: [char; 4] = ['\u{202E}', '\u{202D}', '\u{2066}', '\u{2069}'];

// =============================================================================
// Aggregate severity
// =============================================================================

#[test]
fn any_zero_width_character_blocks() {
    for c in ZERO_WIDTH {
        let cmd = format!("echo hi{c}there");
        let result = common::inspect(&cmd);
        assert_eq!(result.severity(), Severity::Block, "U+{:04X}", c as u32);
        assert_eq!(result.exit_code(), 20);
    }
}

#[test]
fn any_bidi_control_blocks() {
    for c in BIDI {
        let cmd = format!("ls {c}txt.exe");
        let result = common::inspect(&cmd);
        assert_eq!(result.severity(), Severity::Block, "U+{:04X}", c as u32);
    }
}

#[test]
fn curl_pipe_bash_warns() {
    let result = common::inspect("curl -sSL https://example.com/install.sh | bash");
    assert_eq!(common::rule_ids(&result), ["pipe-to-shell"]);
    assert_eq!(result.severity(), Severity::Warn);
    assert_eq!(result.exit_code(), 10);
}

#[test]
fn shortened_url_piped_to_shell_reports_both_rules() {
    let cmd = "curl https://bit.ly/xyz | sh";
    let result = common::inspect(cmd);
    assert_eq!(
        common::rule_ids(&result),
        ["pipe-to-shell", "shortener-domains"]
    );
    let shortener = &result.findings()[1];
    assert_eq!(shortener.token(), "https://bit.ly/xyz");
    assert_eq!(shortener.position(), 5);
}

#[test]
fn plain_command_passes() {
    let result = common::inspect("ls -la /tmp");
    assert!(result.is_clean());
    assert_eq!(result.severity(), Severity::Pass);
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn empty_input_passes() {
    let result = common::inspect("");
    assert!(result.is_clean());
    assert_eq!(result.severity(), Severity::Pass);
}

#[test]
fn block_outranks_warn() {
    let result = common::inspect("curl https://x.io/i | sh \u{200B}");
    assert_eq!(common::rule_ids(&result), ["zero-width", "pipe-to-shell"]);
    assert_eq!(result.severity(), Severity::Block);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn findings_follow_rule_order_not_position() {
    let cmd = "curl https://bit.ly/a | sh; echo \u{200B}";
    let result = common::inspect(cmd);
    assert_eq!(
        common::rule_ids(&result),
        ["zero-width", "pipe-to-shell", "shortener-domains"]
    );
    let positions: Vec<usize> = result.findings().iter().map(|f| f.position()).collect();
    assert_eq!(positions, [cmd.find('\u{200B}').unwrap(), 0, 5]);
}

#[test]
fn rule_order_is_fixed() {
    let ids: Vec<&str> = Rule::ALL.iter().map(|r| r.id()).collect();
    assert_eq!(
        ids,
        [
            "unicode-homoglyph",
            "zero-width",
            "bidi-controls",
            "ansi-escape",
            "pipe-to-shell",
            "dotfile-write",
            "persistence-patterns",
            "shortener-domains",
            "subshell-command",
        ]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let cmd = "echo `id` $(whoami) <(ls) \x1b[31m \u{0430}";
    assert_eq!(common::inspect(cmd), common::inspect(cmd));
}

// =============================================================================
// Policy
// =============================================================================

#[test]
fn disabling_pipe_to_shell_keeps_other_rules() {
    let mut policy = HashMap::new();
    policy.insert("pipe_to_shell".to_string(), false);

    let result = detection::run("curl https://bit.ly/xyz | sh", &policy);
    assert_eq!(common::rule_ids(&result), ["shortener-domains"]);
    assert_eq!(result.severity(), Severity::Warn);
}

#[test]
fn disabling_every_rule_passes_anything() {
    let policy: HashMap<String, bool> = Rule::ALL
        .iter()
        .map(|r| (r.config_key().to_string(), false))
        .collect();
    let result = detection::run("curl x | sh \u{202E} \x1b[2J $(id)", &policy);
    assert!(result.is_clean());
    assert_eq!(result.severity(), Severity::Pass);
}

#[test]
fn unknown_policy_keys_are_ignored() {
    let mut policy = HashMap::new();
    policy.insert("not_a_rule".to_string(), false);
    let result = detection::run("curl x | sh", &policy);
    assert_eq!(common::rule_ids(&result), ["pipe-to-shell"]);
}

// =============================================================================
// Byte offsets
// =============================================================================

#[test]
fn positions_are_byte_offsets() {
    let inputs = [
        "echo 'привет' && curl https://bit.ly/x | sh",
        "ls \u{202E}txt.exe && echo \u{200B}",
        "printf '\x1b[31m日本語\x1b[0m' `id`",
        "curl https://ex\u{0430}mple.com/i.sh | bash",
        "echo 'ελληνικά' >> ~/.bashrc; eval $(cat x)",
    ];
    for cmd in inputs {
        let result = common::inspect(cmd);
        assert!(!result.is_clean(), "{cmd:?} should produce findings");
        common::assert_positions_slice_tokens(cmd, &result);
    }
}

#[test]
fn shortener_position_after_multibyte_prefix() {
    let cmd = "echo 'привет' && curl https://bit.ly/x | sh";
    let result = common::inspect(cmd);
    let f = result.by_rule("shortener-domains").next().unwrap();
    assert_eq!(f.position(), cmd.find("https://").unwrap());
    assert!(f.position() > cmd[..f.position()].chars().count());
}

// =============================================================================
// Subshell limitation
// =============================================================================

#[test]
fn simple_substitution_is_flagged() {
    let result = common::inspect("$(whoami)");
    assert_eq!(common::rule_ids(&result), ["subshell-command"]);
    assert_eq!(result.findings()[0].token(), "$(whoami)");
}

#[test]
fn nested_substitution_stops_at_first_close_paren() {
    let result = common::inspect("$(echo $(whoami))");
    let tokens: Vec<&str> = result
        .by_rule("subshell-command")
        .map(|f| f.token())
        .collect();
    assert_eq!(tokens, ["$(echo $(whoami)"]);
}
