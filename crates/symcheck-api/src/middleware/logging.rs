use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Emit one `api_request` event per request with its route and latency.
///
/// The route template (`/conditions/{name}`) is logged rather than the raw
/// path so condition names typed by users stay out of the logs. Client and
/// server errors are raised to `warn`.
pub async fn request_log(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(%method, %route, status = status.as_u16(), elapsed_ms, "api_request");
    } else {
        tracing::info!(%method, %route, status = status.as_u16(), elapsed_ms, "api_request");
    }

    response
}
