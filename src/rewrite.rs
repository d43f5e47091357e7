//! Sanitizing transform applied by `preexec rewrite`.

use crate::detection::rules::{escape_sequence_end, is_bidi_control, is_zero_width};

/// Cyrillic look-alikes folded to Latin when normalization is requested.
const HOMOGLYPH_FOLDS: [(char, char); 19] = [
    ('\u{0430}', 'a'),
    ('\u{0435}', 'e'),
    ('\u{043E}', 'o'),
    ('\u{043F}', 'p'),
    ('\u{0441}', 'c'),
    ('\u{0443}', 'y'),
    ('\u{0445}', 'x'),
    ('\u{0501}', 'd'),
    ('\u{0432}', 'b'),
    ('\u{0437}', 'z'),
    ('\u{0438}', 'u'),
    ('\u{0439}', 'i'),
    ('\u{043A}', 'k'),
    ('\u{043C}', 'm'),
    ('\u{043D}', 'n'),
    ('\u{0433}', 'g'),
    ('\u{0442}', 't'),
    ('\u{0440}', 'r'),
    ('\u{0444}', 'f'),
];

fn fold_homoglyph(c: char) -> Option<char> {
    HOMOGLYPH_FOLDS
        .iter()
        .find(|(cyr, _)| *cyr == c)
        .map(|&(_, latin)| latin)
}

fn is_hidden(c: char) -> bool {
    is_zero_width(c) || is_bidi_control(c)
}

/// Walk `s`, skipping escape sequences, and hand every other char to `f`.
fn for_each_unescaped(s: &str, mut f: impl FnMut(char)) {
    let mut i = 0;
    while let Some(c) = s[i..].chars().next() {
        if c == '\u{1B}' {
            i = escape_sequence_end(s, i);
            continue;
        }
        f(c);
        i += c.len_utf8();
    }
}

/// Strip ANSI escape sequences and zero-width/BiDi controls from `cmd`.
///
/// With `normalize_homoglyphs`, common Cyrillic look-alikes are also
/// replaced by their Latin equivalent. Hidden characters are removed
/// regardless of the flag.
pub fn safe_rewrite(cmd: &str, normalize_homoglyphs: bool) -> String {
    let mut out = String::with_capacity(cmd.len());
    for_each_unescaped(cmd, |c| {
        if is_hidden(c) {
            return;
        }
        let c = if normalize_homoglyphs {
            fold_homoglyph(c).unwrap_or(c)
        } else {
            c
        };
        out.push(c);
    });
    out
}

/// Like [`safe_rewrite`] for raw bytes; malformed UTF-8 is dropped.
pub fn safe_rewrite_bytes(input: &[u8], normalize_homoglyphs: bool) -> String {
    let valid: String = input.utf8_chunks().map(|chunk| chunk.valid()).collect();
    safe_rewrite(&valid, normalize_homoglyphs)
}

/// Remove escape sequences and hidden characters, leaving letters as-is.
pub fn strip_ansi(s: &str) -> String {
    safe_rewrite(s, false)
}

/// Number of characters that occupy a cell when `s` is displayed.
///
/// Escape sequences, zero-width/BiDi controls and C0/C1 control characters
/// are not counted.
pub fn visible_runes(s: &str) -> usize {
    let mut n = 0;
    for_each_unescaped(s, |c| {
        if !is_hidden(c) && !c.is_control() {
            n += 1;
        }
    });
    n
}
