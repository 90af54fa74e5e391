//! Percent-encoding for account ids interpolated into URL paths.
//!
//! Account ids come from the API itself, but a stray `/`, `?` or `#` would
//! still change which resource is addressed, so every id is encoded as a
//! single path segment.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters encoded in a path segment (RFC 3986 section 3.3 plus `%`).
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
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
///
/// ```
/// use prisma_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("123456789012"), "123456789012");
/// assert_eq!(encode_path_segment("org/project"), "org%2Fproject");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
