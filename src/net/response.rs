//! Minimal HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response returned by the
//! network layer. It contains the final URL (after redirects, if the client
//! follows them), status code + reason, response headers, and the raw body bytes.
//!
//! An empty body is a valid response at this level. Whether it counts as a
//! failure is decided by the caller (see [`Fetcher::fetch_body`](crate::net::Fetcher::fetch_body)).
use http::HeaderMap;

/// Simple structure for HTTP responses.
#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    ///
    /// May be `"Unknown"` for non-standard codes.
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            url: url::Url::parse("http://example.com/data.bin").unwrap(),
            status,
            status_text: "OK".to_string(),
            headers: HeaderMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn success_range() {
        assert!(response(200, b"x").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(404, b"x").is_success());
        assert!(!response(301, b"x").is_success());
    }

    #[test]
    fn empty_body() {
        assert!(response(200, b"").is_empty());
        assert!(!response(200, b"data").is_empty());
    }
}
