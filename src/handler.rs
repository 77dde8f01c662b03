//! Route handlers, erased to one shared callable type.
//!
//! A route is any `Fn(Request) -> impl Future<Output = impl IntoResponse>`:
//! a plain `async fn` such as [`health::liveness`](crate::health::liveness), or
//! a closure that clones captured state into each call, as `/users` does with
//! its pre-encoded payload. [`erase`] wraps either into a [`BoxedHandler`] so
//! the router can hold them in one tree.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

pub(crate) type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync>;

pub(crate) fn erase<F, Fut, R>(handler: F) -> BoxedHandler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    Arc::new(move |req: Request| -> BoxFuture {
        let fut = handler(req);
        Box::pin(async move { fut.await.into_response() })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn request(uri: &str) -> Request {
        Request::from_http(http::Request::builder().uri(uri).body(()).unwrap())
    }

    #[tokio::test]
    async fn status_return_becomes_a_response() {
        let handler = erase(|_req: Request| async { StatusCode::NO_CONTENT });
        let res = handler(request("/")).await;
        assert_eq!(res.status_code(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn closure_state_is_shared_across_calls() {
        let greeting = Arc::new(String::from("hi"));
        let handler = erase(move |_req: Request| {
            let greeting = Arc::clone(&greeting);
            async move { Response::json(greeting.as_bytes().to_vec()) }
        });

        for _ in 0..3 {
            let res = handler(request("/")).await;
            assert_eq!(res.body().as_ref(), b"hi");
        }
    }
}
