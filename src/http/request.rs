/// Request methods as they appear on the wire.
///
/// Only `GET` is served. Every other token still parses and is answered
/// with the canned "See Other" response rather than rejected, so unknown
/// methods are carried verbatim instead of being a closed set.
///
/// Matching is case-sensitive: `get` is not `GET`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file
    Get,
    /// Anything else (POST, HEAD, a typo, ...), kept as written
    Other(String),
}

impl Method {
    /// Classifies the first token of a request line.
    ///
    /// # Example
    ///
    /// ```
    /// # use petrel::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::Get);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::Get,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Other(token) => token,
        }
    }
}

/// A parsed request: the request line plus the raw header lines that
/// followed it.
///
/// Headers are kept in arrival order and never interpreted; they only
/// matter for framing, since the first zero-length line ends them.
#[derive(Debug, Clone)]
pub struct Request {
    /// The method token from the request line
    pub method: Method,
    /// The raw target path, exactly as sent (no decoding). A request line
    /// with a single non-`GET` token has none.
    pub target: Option<String>,
    /// Raw header lines, in arrival order
    pub headers: Vec<String>,
}
