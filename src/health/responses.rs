use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub error: bool,
    /// Widget pages currently connected over a websocket.
    pub active_widgets: usize,
}
