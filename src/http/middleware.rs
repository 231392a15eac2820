use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

pub async fn tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let is_upgrade = request.headers().contains_key(http::header::UPGRADE);

    let start_time = Instant::now();
    let response = next.run(request).await;
    let elapsed_time = start_time.elapsed();

    tracing::info!(
        task = "http_request",
        http_method = %method,
        endpoint = %path,
        status = response.status().as_u16(),
        upgrade = is_upgrade,
        processing_time_us = elapsed_time.as_micros() as u64,
    );

    response
}
