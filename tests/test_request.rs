use plinth::http::request::{Method, Request};
use std::collections::HashMap;

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("Accept".to_string(), "text/html".to_string());

    let req = Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Accept"), Some("text/html"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_method_equality() {
    assert_eq!(Method::GET, Method::GET);
    assert_ne!(Method::GET, Method::POST);
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("INVALID"), None);
    assert_eq!(Method::from_str("get"), None); // Case-sensitive
}

#[test]
fn test_request_keeps_raw_path() {
    let req = Request {
        method: Method::GET,
        path: "/a%20b?x=1".to_string(),
        version: "HTTP/1.1".to_string(),
        headers: HashMap::new(),
    };

    // No decoding or query stripping at this layer.
    assert_eq!(req.path, "/a%20b?x=1");
}
