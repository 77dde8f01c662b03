//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::StatusCode;
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

const APPLICATION_JSON: &str = "application/json";

/// An outgoing HTTP response.
///
/// ```rust
/// use s3api::Response;
/// use http::StatusCode;
///
/// Response::json(br#"[{"id":0}]"#.to_vec());
/// Response::empty();
/// Response::status(StatusCode::NOT_FOUND);
/// ```
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Bytes,
}

impl Response {
    /// `200 OK`, `application/json`.
    ///
    /// Takes anything convertible to [`Bytes`]; a pre-encoded `Bytes` payload
    /// is reference-counted, not copied.
    pub fn json(body: impl Into<Bytes>) -> Self {
        Self { status: StatusCode::OK, content_type: Some(APPLICATION_JSON), body: body.into() }
    }

    /// `200 OK` with an empty body and no content type.
    pub fn empty() -> Self {
        Self::status(StatusCode::OK)
    }

    /// Response with the given status and no body.
    pub fn status(code: StatusCode) -> Self {
        Self { status: code, content_type: None, body: Bytes::new() }
    }

    pub fn status_code(&self) -> StatusCode { self.status }
    pub fn content_type(&self) -> Option<&str> { self.content_type }
    pub fn body(&self) -> &Bytes { &self.body }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(self.body));
        *res.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        res
    }
}

/// Conversion into an HTTP [`Response`].
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

/// Return a bare status from a handler: `return StatusCode::NOT_FOUND`
impl IntoResponse for StatusCode {
    fn into_response(self) -> Response { Response::status(self) }
}

/// Serializes `T` with serde_json at response time.
///
/// An encode failure is logged and answered with `500 Internal Server Error`.
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => Response::json(bytes),
            Err(e) => {
                error!("response encode failed: {e}");
                Response::status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
