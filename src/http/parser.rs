use crate::http::request::{Method, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The request line contained no tokens at all.
    Empty,
    /// A GET request line had no target to resolve.
    MissingTarget,
}

/// Tokenizes a request line on whitespace.
///
/// The first token is the method; the second is the target, which a `GET`
/// must have. Anything after the target (typically a version token) is
/// ignored. Header lines are appended by the connection as it reads them.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let mut tokens = line.split_whitespace();

    let method = Method::from_token(tokens.next().ok_or(ParseError::Empty)?);
    let target = tokens.next().map(str::to_string);

    if method == Method::Get && target.is_none() {
        return Err(ParseError::MissingTarget);
    }

    Ok(Request {
        method,
        target,
        headers: Vec::new(),
    })
}
