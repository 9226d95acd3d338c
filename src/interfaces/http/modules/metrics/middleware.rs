//! HTTP request metrics middleware

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

/// Label for requests that matched no route, keeping path cardinality bounded
const UNMATCHED: &str = "unmatched";

/// Records `bookings_http_requests_total{method,path,status}` and
/// `bookings_http_request_duration_seconds{method,path}`.
///
/// `path` is the route template (`/choose-room/{id}`), never the raw URI.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED.to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!("bookings_http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    metrics::histogram!("bookings_http_request_duration_seconds", "method" => method, "path" => path)
        .record(duration);

    response
}
