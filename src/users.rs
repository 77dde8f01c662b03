//! The fixed user list and its `/users` handler.
//!
//! The list is encoded to JSON once at startup. Every request gets a
//! reference-counted clone of the same bytes, so responses are byte-identical
//! across calls and concurrent callers.

use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::Error;
use crate::{Request, Response};

/// A user as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// The hardcoded user list. Never empty. `id` is left at its default.
pub fn fixed_users() -> Vec<User> {
    vec![User {
        first_name: "Dhiraj".to_owned(),
        last_name: "Ray".to_owned(),
        email: "dhiraj@gmail.com".to_owned(),
        ..User::default()
    }]
}

/// The pre-encoded `/users` body.
///
/// Holds `None` when encoding failed at startup; the handler then answers 500
/// instead of taking the process down.
#[derive(Debug, Clone)]
pub struct UsersPayload(Option<Bytes>);

impl UsersPayload {
    /// Encodes `users` once. A failure is logged here, not per request.
    pub fn encode(users: &[User]) -> Self {
        match encode(users) {
            Ok(bytes) => Self(Some(bytes)),
            Err(e) => {
                error!("users payload encode failed: {e}");
                Self(None)
            }
        }
    }

    pub fn bytes(&self) -> Option<&Bytes> {
        self.0.as_ref()
    }
}

fn encode(users: &[User]) -> Result<Bytes, Error> {
    Ok(Bytes::from(serde_json::to_vec(users)?))
}

/// `/users` handler. Headers are logged and otherwise ignored.
pub async fn list(payload: Arc<UsersPayload>, req: Request) -> Response {
    debug!(
        uri = %req.uri(),
        user_agent = req.header("user-agent").unwrap_or("-"),
        headers = ?req.headers(),
        "users request"
    );
    match payload.bytes() {
        Some(bytes) => Response::json(bytes.clone()),
        None => Response::status(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
