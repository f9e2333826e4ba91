use crate::interceptor::{Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use axum::{body::Body, http::Request};
use std::time::Instant;

/// An interceptor that logs request timing and status
#[derive(Clone, Default)]
pub struct RequestLoggingInterceptor;

#[async_trait]
impl Interceptor for RequestLoggingInterceptor {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let start = Instant::now();

        tracing::debug!(%method, %uri, "request started");

        match next.run(request).await {
            Ok(response) => {
                tracing::info!(
                    %method,
                    %uri,
                    status = response.status().as_u16(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "request completed"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::error!(
                    %method,
                    %uri,
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "request failed"
                );
                Err(e)
            }
        }
    }
}
