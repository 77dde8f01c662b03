//! # s3api
//!
//! A tiny HTTP service that answers three routes on port 8888:
//!
//! | Path | Response |
//! |---|---|
//! | `/users` | `200`, JSON array holding the one fixed [`User`] |
//! | `/healthz` | `200`, empty body |
//! | `/diag` | `200`, JSON echo of the request's headers and target |
//!
//! Anything else is `404`. No method check is made on any route, no request
//! body is read, and nothing is stored. Despite the name there is no
//! object-storage backend.
//!
//! ```rust,no_run
//! use s3api::{Server, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), s3api::Error> {
//!     Server::bind(app::listen_addr()).serve(app::router()).await
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod app;
pub mod diag;
pub mod health;
pub mod users;

pub use diag::DiagnosticReport;
pub use error::Error;
pub use request::Request;
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use server::{Server, serve_with_shutdown};
pub use users::User;
