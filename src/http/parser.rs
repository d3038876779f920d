use std::collections::HashMap;

use crate::http::request::{Method, Request};

/// Largest header block we accept before calling the request malformed.
pub const MAX_HEADER_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Request line is not exactly `method path version`, or the header
    /// block is not valid UTF-8, or it exceeds [`MAX_HEADER_BYTES`].
    InvalidRequest,
    /// Method token is not one we recognize.
    InvalidMethod,
    /// Header line without a `:` separator.
    InvalidHeader,
    /// Not enough data buffered yet; caller should read more.
    Incomplete,
}

/// Parses one HTTP request from the front of `buf`.
///
/// Returns the request and the number of bytes consumed. Until the full
/// header block (terminated by `\r\n\r\n`) has been buffered this returns
/// [`ParseError::Incomplete`]. Request bodies are not read: the server only
/// serves GET, and everything past the header block is ignored.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = match find_headers_end(buf) {
        Some(pos) => pos,
        None if buf.len() > MAX_HEADER_BYTES => return Err(ParseError::InvalidRequest),
        None => return Err(ParseError::Incomplete),
    };

    let headers_str =
        std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line: exactly three tokens, anything else is malformed.
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidRequest);
    }
    let (method_str, path, version) = (parts[0], parts[1], parts[2]);

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
    };

    Ok((request, headers_end + 4))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let (parsed, consumed) = parse_request(req).unwrap();

        assert_eq!(parsed.path, "/index.html");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
        assert_eq!(consumed, req.len());
    }
}
