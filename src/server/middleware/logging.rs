use axum::{extract::Request, middleware::Next, response::Response};

/// Logs every incoming request before passing it on.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!("{} request into {}", request.method(), request.uri().path());

    next.run(request).await
}
