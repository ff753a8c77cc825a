/// Maps a file name to the content type sent back with it.
///
/// Matching is on the literal suffix, case-sensitive, checked in order
/// with the first match winning. Everything unrecognized falls through to
/// `application/octet-stream`; `.jpg` is deliberately not an alias for
/// `.jpeg`.
pub fn content_type(file_name: &str) -> &'static str {
    // htm or html
    if file_name.ends_with(".htm") || file_name.ends_with(".html") {
        return "text/html";
    }

    // gif image
    if file_name.ends_with(".gif") {
        return "image/gif";
    }

    // jpeg image
    if file_name.ends_with(".jpeg") {
        return "image/jpeg";
    }

    "application/octet-stream"
}
