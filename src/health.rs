//! Liveness probe.
//!
//! `/healthz` answers `200 OK` with an empty body for any method. If the
//! process can respond to HTTP at all, it is alive; nothing else is checked.

use crate::{Request, Response};

/// Liveness probe handler.
pub async fn liveness(_req: Request) -> Response {
    Response::empty()
}
