use std::collections::HashMap;

/// HTTP request methods.
///
/// All common methods are parsed so the server can answer them with a
/// proper 405; only GET is actually served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method token (case-sensitive, per RFC 9110).
    ///
    /// # Example
    ///
    /// ```
    /// # use plinth::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// A parsed HTTP request.
///
/// Holds everything extracted from the request line and headers. The path
/// is kept raw (query string and percent-escapes intact); normalization
/// happens in the file resolver.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Raw request target, e.g. "/logo.png?v=2"
    pub path: String,
    /// Protocol version token, e.g. "HTTP/1.1"
    pub version: String,
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Retrieves a header value by its exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
