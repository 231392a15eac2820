use crate::app_context::AppContext;
use crate::cli::Args;
use crate::geocoder::HttpGeocoder;
use crate::{health, http::cors, widget};
use axum::{routing::get, Router};

pub fn new(args: &Args, app_context: AppContext<HttpGeocoder>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let widget_routes = Router::new()
        .route("/config", get(widget::handlers::config))
        .route("/ws", get(widget::handlers::ws));

    Router::new()
        .nest("/health", health_routes)
        .nest("/widget", widget_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
