use tokio::fs::File;

use crate::http::resolve::Outcome;

/// Body sent with a 404.
pub const NOT_FOUND_BODY: &str =
    "<HTML><HEAD><TITLE>Not Found</TITLE></HEAD><BODY>Not Found</BODY></HTML>";

/// Body sent with a 303. No `Location` header accompanies it; the canned
/// body is the whole answer.
pub const SEE_OTHER_BODY: &str =
    "<HTML><HEAD><TITLE>See Other</TITLE></HEAD><BODY>See Other</BODY></HTML>";

/// HTTP status codes used in responses.
///
/// Exactly three are ever sent:
/// - `Ok` (200): the target resolved to a readable file
/// - `NotFound` (404): the target did not resolve
/// - `SeeOther` (303): the method was anything but `GET`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 303 See Other
    SeeOther,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use petrel::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::SeeOther => 303,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use petrel::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::SeeOther.reason_phrase(), "See Other");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::SeeOther => "See Other",
        }
    }
}

/// Response body: either an open file streamed to the socket, or one of
/// the canned HTML strings.
#[derive(Debug)]
pub enum Body {
    File(File),
    Literal(&'static str),
}

/// A complete response ready to be written: status line, one content-type
/// header, and the body. No other header is ever emitted, not even
/// `Content-Length`; the close after the body marks its end.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Body,
}

impl Response {
    /// Creates a 200 OK response streaming the given open file.
    pub fn file(file: File, content_type: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            body: Body::File(file),
        }
    }

    /// Creates the canned 404 Not Found response.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/html",
            body: Body::Literal(NOT_FOUND_BODY),
        }
    }

    /// Creates the canned 303 See Other response sent for non-GET methods.
    pub fn see_other() -> Self {
        Self {
            status: StatusCode::SeeOther,
            content_type: "text/html",
            body: Body::Literal(SEE_OTHER_BODY),
        }
    }

    /// Maps a resolution outcome to the response that answers it.
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Found { file, content_type } => Response::file(file, content_type),
            Outcome::NotFound => Response::not_found(),
            Outcome::MethodNotSupported => Response::see_other(),
        }
    }
}
