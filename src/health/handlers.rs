use crate::app_context::AppContext;
use crate::geocoder::HttpGeocoder;
use crate::health::responses::HealthCheckResponse;
use axum::extract::State;
use axum::response::Json;
use std::sync::atomic::Ordering;

#[axum::debug_handler]
pub async fn healthcheck(
    State(app_context): State<AppContext<HttpGeocoder>>,
) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        error: false,
        active_widgets: app_context.active_widgets.load(Ordering::Relaxed),
    })
}
