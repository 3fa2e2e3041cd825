//! Percent-encoding for resource names and IDs placed in endpoint paths.
//!
//! Entity and datasource names as well as object IDs come from callers and
//! are interpolated into paths like `entities/{name}/entityobjects/{id}`.
//! Without encoding, a `/` would create a nested path and `?`/`#` would
//! truncate it.
//!
//! # Example
//!
//! ```
//! use boardsonfire_client::path::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("sales/eu"), "sales%2Feu");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 plus characters with special meaning in URLs or
/// URI templates. Percent is included so pre-encoded input is not decoded
/// twice by the server.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a single URL path segment.
///
/// The dot segments `.` and `..` are encoded too, since URL normalization
/// would otherwise resolve them against the base path.
///
/// ```
/// use boardsonfire_client::path::encode_path_segment;
///
/// assert_eq!(encode_path_segment("widget"), "widget");
/// assert_eq!(encode_path_segment("two words"), "two%20words");
/// assert_eq!(encode_path_segment(".."), "%2E%2E");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    match segment {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string(),
    }
}
