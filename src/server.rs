//! HTTP server and graceful shutdown.
//!
//! One tokio task per accepted connection; hyper calls the service once per
//! request on that connection. HTTP/1.1 and prior-knowledge HTTP/2 share the
//! same plain port.
//!
//! On SIGTERM or Ctrl-C the server stops accepting, asks every open
//! connection to shut down gracefully, and returns `Ok(())` from
//! [`Server::serve`] once they are gone or [`DRAIN_TIMEOUT`] has passed.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// How long shutdown waits for in-flight requests before giving up on them.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    pub fn bind(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Binds, then serves `router` until SIGTERM or Ctrl-C.
    ///
    /// A bind failure (port in use, permission denied) is returned
    /// immediately as [`Error::Io`].
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        let listener = TcpListener::bind(self.addr).await?;
        serve_with_shutdown(listener, router, shutdown_signal()).await
    }
}

/// Serves `router` on an already-bound listener until `signal` resolves.
///
/// On the signal the listener is closed and every open connection is told to
/// finish: requests already in flight complete, idle keep-alive connections
/// close at once. Connections still busy after [`DRAIN_TIMEOUT`] are
/// abandoned.
pub async fn serve_with_shutdown<S>(
    listener: TcpListener,
    router: Router,
    signal: S,
) -> Result<(), Error>
where
    S: Future<Output = ()>,
{
    let addr = listener.local_addr()?;
    let router = Arc::new(router);
    let builder = ConnBuilder::new(TokioExecutor::new());
    let graceful = GracefulShutdown::new();

    info!(addr = %addr, "s3api listening");

    tokio::pin!(signal);

    loop {
        let (stream, peer) = tokio::select! {
            biased;

            () = &mut signal => break,

            accepted = listener.accept() => match accepted {
                Ok(pair) => pair,
                Err(e) => {
                    error!("accept error: {e}");
                    continue;
                }
            },
        };

        let router = Arc::clone(&router);
        let svc = service_fn(move |req| {
            let router = Arc::clone(&router);
            async move { dispatch(&router, req, peer).await }
        });

        let conn = graceful.watch(builder.serve_connection(TokioIo::new(stream), svc).into_owned());
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                debug!(%peer, "connection closed with error: {e}");
            }
        });
    }

    drop(listener);
    info!("shutdown signal received, draining connections");

    tokio::select! {
        () = graceful.shutdown() => info!("s3api stopped"),
        () = tokio::time::sleep(DRAIN_TIMEOUT) => {
            warn!(timeout = ?DRAIN_TIMEOUT, "connections still open after drain timeout, stopping anyway");
        }
    }

    Ok(())
}

/// Routes one request and produces one response. The body is never read.
///
/// Every failure is already a response (404, 500), so hyper never sees an error.
async fn dispatch(
    router: &Router,
    req: hyper::Request<Incoming>,
    remote_addr: SocketAddr,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let (parts, _body) = req.into_parts();
    let req = Request::new(parts);
    let method = req.method().clone();
    let path = req.path().to_owned();

    let response = match router.lookup(&path) {
        Some(handler) => handler(req).await,
        None => Response::status(StatusCode::NOT_FOUND),
    };

    debug!(peer = %remote_addr, %method, %path, status = response.status_code().as_u16(), "request");
    Ok(response.into_inner())
}

/// Resolves on the first SIGTERM or SIGINT the process receives.
///
/// A handler that fails to install is logged and never fires; the other
/// still does.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c  => {}
        () = sigterm => {}
    }
}
