//! Route table and fixed listen address.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::users::{self, UsersPayload};
use crate::{Request, Router, diag, health};

/// The port s3api listens on. Not configurable.
pub const PORT: u16 = 8888;

/// `0.0.0.0:8888`.
pub fn listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], PORT))
}

/// Builds the router over the fixed user list, encoding `/users` once.
pub fn router() -> Router {
    let payload = Arc::new(UsersPayload::encode(&users::fixed_users()));

    Router::new()
        .route("/users", move |req: Request| users::list(Arc::clone(&payload), req))
        .route("/healthz", health::liveness)
        .route("/diag", diag::report)
}
