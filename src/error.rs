//! Unified error type.

/// The error type returned by s3api's fallible operations.
///
/// Application-level outcomes (404, 500) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: binding to a port, accepting a connection, or
/// encoding a payload.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
