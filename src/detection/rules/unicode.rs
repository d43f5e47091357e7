//! Unicode spoofing detectors: homoglyphs, invisible characters, BiDi overrides.

use super::hex;
use crate::detection::finding::{Finding, Severity};

const ZERO_WIDTH: [char; 6] = [
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{200C}', // ZERO WIDTH NON-JOINER
    '\u{200D}', // ZERO WIDTH JOINER
    '\u{FEFF}', // BOM / ZERO WIDTH NO-BREAK SPACE
    '\u{2060}', // WORD JOINER
    '\u{180E}', // MONGOLIAN VOWEL SEPARATOR
];

const BIDI_CONTROLS: [char; 4] = [
    '\u{202E}', // RIGHT-TO-LEFT OVERRIDE
    '\u{202D}', // LEFT-TO-RIGHT OVERRIDE
    '\u{2066}', // FIRST STRONG ISOLATE
    '\u{2069}', // POP DIRECTIONAL ISOLATE
];

/// Well-known Cyrillic look-alikes with their Latin counterpart.
const CYRILLIC_LOOKALIKES: [(char, char); 8] = [
    ('\u{0430}', 'a'),
    ('\u{0435}', 'e'),
    ('\u{043E}', 'o'),
    ('\u{0440}', 'p'),
    ('\u{0441}', 'c'),
    ('\u{0443}', 'y'),
    ('\u{0445}', 'x'),
    ('\u{0501}', 'd'),
];

pub(crate) fn is_zero_width(c: char) -> bool {
    ZERO_WIDTH.contains(&c)
}

pub(crate) fn is_bidi_control(c: char) -> bool {
    BIDI_CONTROLS.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Cyrillic,
    Greek,
    Armenian,
}

fn script_of(c: char) -> Option<Script> {
    match c as u32 {
        // Cyrillic and Cyrillic Supplement
        0x0400..=0x052F => Some(Script::Cyrillic),
        0x0370..=0x03FF => Some(Script::Greek),
        0x0530..=0x058F => Some(Script::Armenian),
        _ => None,
    }
}

pub(super) fn homoglyphs(cmd: &str) -> Vec<Finding> {
    cmd.char_indices()
        .filter_map(|(pos, c)| {
            let script = script_of(c)?;
            Some(Finding::new(
                "unicode-homoglyph",
                Severity::Warn,
                token_at(cmd, pos),
                describe(c, script),
                pos,
                "use ASCII-only domain",
            ))
        })
        .collect()
}

fn describe(c: char, script: Script) -> String {
    if let Some(&(_, latin)) = CYRILLIC_LOOKALIKES.iter().find(|(cyr, _)| *cyr == c) {
        return format!(
            "Cyrillic '{}' (U+{}) used instead of Latin '{}' (U+{})",
            c,
            hex(c),
            latin,
            hex(latin)
        );
    }
    match script {
        Script::Cyrillic => format!("Cyrillic character (U+{}) may look like Latin", hex(c)),
        Script::Greek => format!("Greek character (U+{}) may look like Latin", hex(c)),
        Script::Armenian => format!("non-ASCII character U+{} in command", hex(c)),
    }
}

fn is_token_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '|' | '&' | ';' | '"' | '\'')
}

/// The word containing the character at byte offset `pos`.
fn token_at(s: &str, pos: usize) -> &str {
    let start = s[..pos]
        .char_indices()
        .rev()
        .find(|&(_, c)| is_token_boundary(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let end = s[pos..]
        .char_indices()
        .find(|&(_, c)| is_token_boundary(c))
        .map_or(s.len(), |(i, _)| pos + i);
    &s[start..end]
}

pub(super) fn zero_width(cmd: &str) -> Vec<Finding> {
    cmd.char_indices()
        .filter(|&(_, c)| is_zero_width(c))
        .map(|(pos, c)| {
            Finding::new(
                "zero-width",
                Severity::Block,
                c.to_string(),
                format!("zero-width or invisible character (U+{}) detected", hex(c)),
                pos,
                "paste as plain text; remove hidden characters",
            )
        })
        .collect()
}

pub(super) fn bidi_controls(cmd: &str) -> Vec<Finding> {
    cmd.char_indices()
        .filter(|&(_, c)| is_bidi_control(c))
        .map(|(pos, c)| {
            Finding::new(
                "bidi-controls",
                Severity::Block,
                c.to_string(),
                format!("BiDi control character (U+{}) can reorder text", hex(c)),
                pos,
                "remove bidirectional override characters",
            )
        })
        .collect()
}
