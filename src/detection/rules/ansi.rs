//! Terminal escape sequence detector.

use crate::detection::finding::{Finding, Severity};

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;

/// Bytes examined after ESC before giving up on an unterminated sequence.
const MAX_ESCAPE_LOOKAHEAD: usize = 64;

/// End (exclusive byte offset) of the escape sequence starting at `start`.
///
/// Consumes up to and including a final byte in `0x40..=0x7E`, BEL or a
/// newline, but never more than [`MAX_ESCAPE_LOOKAHEAD`] bytes. The result
/// is rounded up to a char boundary so it can be used to slice `s`.
pub(crate) fn escape_sequence_end(s: &str, start: usize) -> usize {
    let bytes = s.as_bytes();
    let mut end = start + 1;
    while end < bytes.len() {
        let b = bytes[end];
        end += 1;
        if (0x40..=0x7E).contains(&b) || b == BEL || b == b'\n' {
            break;
        }
        if end - start > MAX_ESCAPE_LOOKAHEAD {
            break;
        }
    }
    while !s.is_char_boundary(end) {
        end += 1;
    }
    end
}

pub(super) fn escapes(cmd: &str) -> Vec<Finding> {
    let bytes = cmd.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != ESC {
            i += 1;
            continue;
        }
        let end = escape_sequence_end(cmd, i);
        out.push(Finding::new(
            "ansi-escape",
            Severity::Warn,
            &cmd[i..end],
            "ESC (U+001B) control sequence detected",
            i,
            "paste as plain text",
        ));
        i = end;
    }
    out
}
