//! Request interceptors: code that wraps every handler, installed on the
//! router as a single tower layer.

use crate::error::LeagueError;
use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

mod layer;
mod logging;

pub use layer::{InterceptorLayer, InterceptorMiddleware};
pub use logging::RequestLoggingInterceptor;

/// An interceptor either produces the response or fails the request with a
/// [`LeagueError`], which is rendered like any handler error.
pub type InterceptorResult = Result<Response, LeagueError>;

pub type BoxInterceptorFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

/// The rest of the chain, ending with the handler.
pub struct Next {
    run: Box<dyn FnOnce(Request<Body>) -> BoxInterceptorFuture + Send>,
}

impl Next {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request<Body>) -> BoxInterceptorFuture + Send + 'static,
    {
        Self { run: Box::new(f) }
    }

    pub async fn run(self, request: Request<Body>) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// Inspect or rewrite the request before the handler runs and the response
/// after it returns.
///
/// # Example
/// ```ignore
/// struct TimingInterceptor;
///
/// #[async_trait]
/// impl Interceptor for TimingInterceptor {
///     async fn intercept(&self, req: Request<Body>, next: Next) -> InterceptorResult {
///         let started = Instant::now();
///         let res = next.run(req).await?;
///         tracing::debug!(elapsed = ?started.elapsed());
///         Ok(res)
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult;
}
