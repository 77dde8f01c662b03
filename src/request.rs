//! Incoming HTTP request metadata.
//!
//! Handlers never see the request body. None of the routes read one, so the
//! server drops it before dispatch.

use http::request::Parts;
use http::{HeaderMap, Method, Uri};

/// An incoming HTTP request, as seen by a handler.
pub struct Request {
    parts: Parts,
}

impl Request {
    pub(crate) fn new(parts: Parts) -> Self {
        Self { parts }
    }

    pub fn method(&self) -> &Method { &self.parts.method }
    pub fn uri(&self) -> &Uri { &self.parts.uri }
    pub fn path(&self) -> &str { self.parts.uri.path() }
    pub fn headers(&self) -> &HeaderMap { &self.parts.headers }

    /// The request target exactly as it appeared on the request line: path
    /// plus query for origin-form requests.
    pub fn target(&self) -> String {
        match self.parts.uri.path_and_query() {
            Some(pq) if self.parts.uri.scheme().is_none() => pq.as_str().to_owned(),
            _ => self.parts.uri.to_string(),
        }
    }

    /// Case-insensitive header lookup. Returns the first value only.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
impl Request {
    pub(crate) fn from_http<B>(req: http::Request<B>) -> Self {
        Self::new(req.into_parts().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_keeps_the_query_string() {
        let req = Request::from_http(
            http::Request::builder().uri("/diag?x=1").body(()).unwrap(),
        );
        assert_eq!(req.target(), "/diag?x=1");
        assert_eq!(req.path(), "/diag");
    }

    #[test]
    fn target_keeps_absolute_form() {
        let req = Request::from_http(
            http::Request::builder().uri("http://example.com/diag").body(()).unwrap(),
        );
        assert_eq!(req.target(), "http://example.com/diag");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = Request::from_http(
            http::Request::builder()
                .uri("/")
                .header("X-Test", "abc")
                .body(())
                .unwrap(),
        );
        assert_eq!(req.header("x-test"), Some("abc"));
        assert_eq!(req.header("X-TEST"), Some("abc"));
        assert_eq!(req.header("missing"), None);
    }
}
