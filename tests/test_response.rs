use petrel::http::response::{
    Body, NOT_FOUND_BODY, Response, SEE_OTHER_BODY, StatusCode,
};
use petrel::http::writer::ResponseWriter;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::SeeOther.as_u16(), 303);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(StatusCode::SeeOther.reason_phrase(), "See Other");
}

#[test]
fn test_not_found_response_shape() {
    let resp = Response::not_found();

    assert_eq!(resp.status, StatusCode::NotFound);
    assert_eq!(resp.content_type, "text/html");
    assert!(matches!(resp.body, Body::Literal(body) if body == NOT_FOUND_BODY));
}

#[test]
fn test_see_other_response_shape() {
    let resp = Response::see_other();

    assert_eq!(resp.status, StatusCode::SeeOther);
    assert_eq!(resp.content_type, "text/html");
    assert!(matches!(resp.body, Body::Literal(body) if body == SEE_OTHER_BODY));
}

#[test]
fn test_canned_bodies_are_the_documented_literals() {
    assert_eq!(
        NOT_FOUND_BODY,
        "<HTML><HEAD><TITLE>Not Found</TITLE></HEAD><BODY>Not Found</BODY></HTML>"
    );
    assert_eq!(
        SEE_OTHER_BODY,
        "<HTML><HEAD><TITLE>See Other</TITLE></HEAD><BODY>See Other</BODY></HTML>"
    );
}

#[tokio::test]
async fn test_writer_serializes_not_found_exactly() {
    let mut out: Vec<u8> = Vec::new();

    ResponseWriter::new(Response::not_found())
        .write_to_stream(&mut out)
        .await
        .unwrap();

    let expected = format!(
        "HTTP/1.1 404 Not Found\r\nContent-type: text/html\r\n\r\n{}",
        NOT_FOUND_BODY
    );
    assert_eq!(out, expected.as_bytes());
}

#[tokio::test]
async fn test_writer_serializes_see_other_without_location_header() {
    let mut out: Vec<u8> = Vec::new();

    ResponseWriter::new(Response::see_other())
        .write_to_stream(&mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("HTTP/1.1 303 See Other\r\n"));
    assert!(!text.contains("Location"));
}

#[tokio::test]
async fn test_writer_streams_file_body_verbatim() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/index.html");
    let file = tokio::fs::File::open(path).await.unwrap();

    let mut out: Vec<u8> = Vec::new();
    ResponseWriter::new(Response::file(file, "text/html"))
        .write_to_stream(&mut out)
        .await
        .unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-type: text/html\r\n\r\n<p>hi</p>"
    );
}
