//! URL encoding utilities for constructing safe API paths.
//!
//! Saved search names are free text ("Daily Report", "Errors/Warnings") and
//! SIDs may contain dots or colons, so every interpolated path segment goes
//! through [`encode_path_segment`].
//!
//! ```
//! use splunk_client::endpoints::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("Daily Report"), "Daily%20Report");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters escaped in a path segment: RFC 3986 delimiters, `%` (no
/// double-decoding) and `/` (no path traversal), plus characters Splunk's
/// front end rejects unescaped.
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

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
