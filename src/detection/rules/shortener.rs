//! URL shortener and redirect domain detector.

use crate::detection::finding::{Finding, Severity};
use crate::urls::find_urls;

/// Shortener and redirect services, matched as substrings of the URL.
pub const SHORTENER_DOMAINS: [&str; 15] = [
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "ow.ly",
    "is.gd",
    "buff.ly",
    "adf.ly",
    "j.mp",
    "bc.vc",
    "bit.do",
    "lnkd.in",
    "db.tt",
    "short.link",
    "cutt.ly",
];

pub(super) fn shortener_urls(cmd: &str) -> Vec<Finding> {
    find_urls(cmd)
        .filter_map(|m| {
            let lower = m.url.to_lowercase();
            let domain = SHORTENER_DOMAINS.iter().find(|d| lower.contains(*d))?;
            Some(Finding::new(
                "shortener-domains",
                Severity::Warn,
                m.url,
                format!("URL shortener or redirect domain: {domain}"),
                m.start,
                "use full URL or trusted source",
            ))
        })
        .collect()
}
