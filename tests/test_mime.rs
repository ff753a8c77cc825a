use petrel::http::mime::content_type;

#[test]
fn test_html_suffixes_map_to_text_html() {
    assert_eq!(content_type("/index.html"), "text/html");
    assert_eq!(content_type("/index.htm"), "text/html");
}

#[test]
fn test_gif_suffix() {
    assert_eq!(content_type("/banner.gif"), "image/gif");
}

#[test]
fn test_jpeg_suffix() {
    assert_eq!(content_type("/photo.jpeg"), "image/jpeg");
}

#[test]
fn test_jpg_is_not_recognized() {
    // .jpg has no mapping of its own; it gets the generic fallback
    assert_eq!(content_type("/photo.jpg"), "application/octet-stream");
}

#[test]
fn test_unknown_suffixes_fall_back_to_octet_stream() {
    assert_eq!(content_type("/archive.tar.gz"), "application/octet-stream");
    assert_eq!(content_type("/README"), "application/octet-stream");
    assert_eq!(content_type(""), "application/octet-stream");
    assert_eq!(content_type("no-dot-at-all"), "application/octet-stream");
}

#[test]
fn test_matching_is_case_sensitive() {
    assert_eq!(content_type("/INDEX.HTML"), "application/octet-stream");
    assert_eq!(content_type("/photo.JPEG"), "application/octet-stream");
}

#[test]
fn test_suffix_match_ignores_the_rest_of_the_path() {
    assert_eq!(content_type("/a/b/c/deep.html"), "text/html");
    assert_eq!(content_type("/dir.html/file.gif"), "image/gif");
}
