//! Address normalization and display helpers.

use crate::config::SchemePolicy;
use regex::Regex;
use std::sync::OnceLock;

/// Matches a leading http/https scheme
static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();

fn scheme_regex() -> &'static Regex {
    SCHEME_REGEX
        .get_or_init(|| Regex::new(r"(?i)^https?://").expect("Failed to compile scheme regex"))
}

/// Result of normalizing raw address text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedUrl {
    /// Nothing to load; the pane shows its placeholder
    Blank,
    /// An absolute URL candidate, handed to the surface unvalidated
    Url(String),
}

impl NormalizedUrl {
    /// The URL, or `None` for [`NormalizedUrl::Blank`]
    pub fn as_url(&self) -> Option<&str> {
        match self {
            NormalizedUrl::Blank => None,
            NormalizedUrl::Url(url) => Some(url),
        }
    }

    /// String form; blank normalizes back to blank
    pub fn as_str(&self) -> &str {
        self.as_url().unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, NormalizedUrl::Blank)
    }

    pub fn into_url(self) -> Option<String> {
        match self {
            NormalizedUrl::Blank => None,
            NormalizedUrl::Url(url) => Some(url),
        }
    }
}

/// Whether `text` already starts with `http://` or `https://` (any case)
pub fn has_http_scheme(text: &str) -> bool {
    scheme_regex().is_match(text)
}

/// Turn typed or persisted text into a loadable URL
///
/// Surrounding whitespace is ignored. Text without an http(s) scheme gets
/// the policy's scheme prefixed exactly once. Host syntax is not checked.
pub fn normalize(raw: &str, policy: SchemePolicy) -> NormalizedUrl {
    let text = raw.trim();
    if text.is_empty() {
        return NormalizedUrl::Blank;
    }
    if has_http_scheme(text) {
        return NormalizedUrl::Url(text.to_string());
    }
    NormalizedUrl::Url(format!("{}{}", policy.prefix(), text))
}

/// Short form for lists: scheme and one trailing slash removed
pub fn display_address(url: &str) -> String {
    let without_scheme = scheme_regex().replace(url, "");
    without_scheme
        .strip_suffix('/')
        .unwrap_or(without_scheme.as_ref())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUTS: &[&str] = &[
        "",
        "   ",
        "example.com",
        "  example.com/path  ",
        "http://example.com",
        "https://example.com/",
        "HTTPS://Example.com",
        "httpbin.org",
        "ftp://files.example.com",
        "localhost:8080",
        "not a url at all",
    ];

    #[test]
    fn test_empty_is_blank() {
        assert_eq!(normalize("", SchemePolicy::Https), NormalizedUrl::Blank);
        assert_eq!(normalize(" \t\n", SchemePolicy::Https), NormalizedUrl::Blank);
    }

    #[test]
    fn test_scheme_kept_as_is() {
        assert_eq!(
            normalize("http://a.com", SchemePolicy::Https).as_str(),
            "http://a.com"
        );
        assert_eq!(
            normalize("https://a.com/x?y=1", SchemePolicy::Http).as_str(),
            "https://a.com/x?y=1"
        );
    }

    #[test]
    fn test_scheme_prefixed_per_policy() {
        assert_eq!(
            normalize("a.com", SchemePolicy::Https).as_str(),
            "https://a.com"
        );
        assert_eq!(normalize("a.com", SchemePolicy::Http).as_str(), "http://a.com");
    }

    #[test]
    fn test_bare_http_prefix_word_is_not_a_scheme() {
        assert_eq!(
            normalize("httpbin.org", SchemePolicy::Https).as_str(),
            "https://httpbin.org"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for policy in [SchemePolicy::Https, SchemePolicy::Http] {
            for input in INPUTS {
                let once = normalize(input, policy);
                let twice = normalize(once.as_str(), policy);
                assert_eq!(once, twice, "input {input:?}");
            }
        }
    }

    #[test]
    fn test_scheme_prefixed_exactly_once() {
        for input in INPUTS {
            let text = input.trim();
            if text.is_empty() || has_http_scheme(text) {
                continue;
            }
            let url = normalize(input, SchemePolicy::Https).into_url().unwrap();
            assert_eq!(url.matches("https://").count(), 1 + text.matches("https://").count());
            assert!(url.starts_with("https://"));
            assert!(url.ends_with(text));
        }
    }

    #[test]
    fn test_display_address() {
        assert_eq!(display_address("https://example.com/"), "example.com");
        assert_eq!(display_address("http://a.com/path/"), "a.com/path");
        assert_eq!(display_address("a.com"), "a.com");
        assert_eq!(display_address(""), "");
    }
}
