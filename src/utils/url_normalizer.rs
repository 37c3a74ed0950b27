//! URL normalization.
//!
//! The service accepts any string as a long URL. The only normalization is
//! making sure the value carries an HTTP scheme so that it can be used as a
//! redirect target.

const HTTP_SCHEME: &str = "http://";
const HTTPS_SCHEME: &str = "https://";

/// Normalizes a raw long URL.
///
/// # Normalization Rules
///
/// 1. Input starting with `http://` or `https://` (ASCII case-insensitive) is
///    returned unchanged, including the original case of the scheme
/// 2. Anything else gets `http://` prepended
///
/// No further validation happens: malformed hosts, whitespace, and the empty
/// string are all accepted.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("www.google.com"), "http://www.google.com");
/// assert_eq!(normalize_url("https://example.com"), "https://example.com");
/// assert_eq!(normalize_url("HTTP://EXAMPLE.COM"), "HTTP://EXAMPLE.COM");
/// ```
pub fn normalize_url(input: &str) -> String {
    if has_http_scheme(input) {
        input.to_string()
    } else {
        format!("{HTTP_SCHEME}{input}")
    }
}

fn has_http_scheme(input: &str) -> bool {
    starts_with_ignore_ascii_case(input, HTTP_SCHEME)
        || starts_with_ignore_ascii_case(input, HTTPS_SCHEME)
}

fn starts_with_ignore_ascii_case(input: &str, prefix: &str) -> bool {
    input
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_host() {
        assert_eq!(normalize_url("www.google.com"), "http://www.google.com");
    }

    #[test]
    fn test_normalize_keeps_http() {
        assert_eq!(normalize_url("http://www.google.com"), "http://www.google.com");
    }

    #[test]
    fn test_normalize_keeps_https() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_scheme_case_insensitive() {
        assert_eq!(normalize_url("HTTPS://EXAMPLE.COM"), "HTTPS://EXAMPLE.COM");
        assert_eq!(normalize_url("HtTp://example.com"), "HtTp://example.com");
    }

    #[test]
    fn test_normalize_does_not_touch_path_or_query() {
        assert_eq!(
            normalize_url("example.com/Path?q=Rust#frag"),
            "http://example.com/Path?q=Rust#frag"
        );
    }

    #[test]
    fn test_normalize_empty_string() {
        assert_eq!(normalize_url(""), "http://");
    }

    #[test]
    fn test_normalize_other_schemes_get_prefixed() {
        assert_eq!(normalize_url("ftp://example.com"), "http://ftp://example.com");
        assert_eq!(
            normalize_url("javascript:alert(1)"),
            "http://javascript:alert(1)"
        );
    }

    #[test]
    fn test_normalize_scheme_without_slashes() {
        assert_eq!(normalize_url("http:example.com"), "http://http:example.com");
        assert_eq!(normalize_url("https:/example.com"), "http://https:/example.com");
    }

    #[test]
    fn test_normalize_short_input() {
        assert_eq!(normalize_url("http"), "http://http");
        assert_eq!(normalize_url("http:/"), "http://http:/");
    }

    #[test]
    fn test_normalize_non_ascii_input() {
        assert_eq!(normalize_url("münchen.de"), "http://münchen.de");
        assert_eq!(normalize_url("ünïcödé"), "http://ünïcödé");
    }

    #[test]
    fn test_normalize_leading_whitespace_is_not_trimmed() {
        assert_eq!(normalize_url(" http://x.com"), "http:// http://x.com");
    }
}
