//! Encoding of stored URLs for the `Location` header.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes escaped in a redirect target, on top of controls and non-ASCII.
///
/// URL delimiters and existing `%XX` escapes pass through untouched.
const LOCATION: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes a long URL so it is always a valid header value.
///
/// ```ignore
/// assert_eq!(encode_location("http://a.test/x y"), "http://a.test/x%20y");
/// ```
pub fn encode_location(url: &str) -> String {
    utf8_percent_encode(url, LOCATION).to_string()
}
