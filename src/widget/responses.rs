use crate::widget::sdk::MapBlueprint;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfigResponse {
    pub error: bool,
    pub marker_image: String,
    pub blueprint: MapBlueprint,
}
