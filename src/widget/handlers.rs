use crate::app_context::AppContext;
use crate::geocoder::HttpGeocoder;
use crate::widget::responses::WidgetConfigResponse;
use crate::widget::sdk::MapBlueprint;
use crate::widget::ws::session;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::State;
use axum::response::{Json, Response};

#[axum::debug_handler]
pub async fn config(
    State(app_context): State<AppContext<HttpGeocoder>>,
) -> Json<WidgetConfigResponse> {
    Json(WidgetConfigResponse {
        error: false,
        marker_image: app_context.widget_config.marker_image.clone(),
        blueprint: MapBlueprint::from_config(&app_context.widget_config),
    })
}

#[axum::debug_handler]
pub async fn ws(
    ws: WebSocketUpgrade,
    State(app_context): State<AppContext<HttpGeocoder>>,
) -> Response {
    ws.on_upgrade(move |socket| session::run(socket, app_context))
}
