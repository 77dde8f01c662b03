//! Radix-tree request router.
//!
//! Routes are keyed on path only. s3api performs no method check, so one tree
//! serves every verb: `POST /healthz` reaches the same handler as
//! `GET /healthz`. Unregistered paths fall through to `404 Not Found` in the
//! server's dispatch.

use std::future::Future;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{self, BoxedHandler};
use crate::{IntoResponse, Request};

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::route`] call returns `self` so registrations chain.
pub struct Router {
    tree: MatchitRouter<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { tree: MatchitRouter::new() }
    }

    /// Register a handler for `path`, answering every method.
    ///
    /// # Panics
    ///
    /// Panics if `path` is malformed or conflicts with an earlier route.
    /// Routes are fixed at startup, so this is a programming error.
    pub fn route<F, Fut, R>(mut self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.tree
            .insert(path, handler::erase(handler))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, path: &str) -> Option<BoxedHandler> {
        let matched = self.tree.at(path).ok()?;
        Some(Arc::clone(matched.value))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
