//! URL extraction and host inspection.
//!
//! Used by the shortener rule and by `preexec show --urls`.

use regex::Regex;
use std::sync::LazyLock;

/// `http(s)://` up to whitespace or a shell delimiter.
static URL_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s'"<>|&;)\]]+"#)
        .expect("URL pattern is valid")
});

/// A URL-like substring and its byte offset in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlMatch<'a> {
    pub start: usize,
    pub url: &'a str,
}

impl<'a> UrlMatch<'a> {
    /// Host part with scheme, path and port removed.
    pub fn host(&self) -> &'a str {
        host_for_display(self.url)
    }
}

/// All URL-like substrings of `s`, left to right, with their offsets.
pub fn find_urls(s: &str) -> impl Iterator<Item = UrlMatch<'_>> {
    URL_LIKE.find_iter(s).map(|m| UrlMatch {
        start: m.start(),
        url: m.as_str(),
    })
}

/// All URL-like substrings of `s`, left to right.
pub fn extract_urls(s: &str) -> Vec<&str> {
    find_urls(s).map(|m| m.url).collect()
}

/// Host part of `url`: scheme stripped, truncated at the first `/` or `:`.
pub fn host_for_display(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    match rest.find(['/', ':']) {
        Some(i) => &rest[..i],
        None => rest,
    }
}

/// True when the host contains non-ASCII characters (possible IDN spoofing).
pub fn has_idn(url: &str) -> bool {
    !host_for_display(url).is_ascii()
}
