//! Where commands come from: arguments, stdin or the clipboard.

use anyhow::Context;
use std::io::{self, Read};
use tracing::debug;

/// Join trailing arguments back into one command line.
pub fn joined(args: &[String]) -> String {
    args.join(" ")
}

/// Read all of stdin as raw bytes.
pub fn read_stdin_bytes() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .context("Failed to read from stdin")?;
    debug!(bytes = buf.len(), "Read stdin");
    Ok(buf)
}

/// Read stdin as text, replacing malformed UTF-8.
pub fn read_stdin() -> anyhow::Result<String> {
    let bytes = read_stdin_bytes()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Arguments joined, or trimmed stdin when there are none.
pub fn args_or_stdin(args: &[String]) -> anyhow::Result<String> {
    if args.is_empty() {
        Ok(read_stdin()?.trim().to_string())
    } else {
        Ok(joined(args))
    }
}

/// Current clipboard text, trimmed.
pub fn read_clipboard() -> anyhow::Result<String> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
    let text = clipboard
        .get_text()
        .context("Failed to read text from clipboard")?;
    debug!(bytes = text.len(), "Read clipboard");
    Ok(text.trim().to_string())
}
