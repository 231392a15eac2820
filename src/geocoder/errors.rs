use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed")]
    Transport(#[from] reqwest::Error),
    #[error("geocoder returned status {0}")]
    Status(StatusCode),
    #[error("geocoder returned a malformed body")]
    MalformedBody(#[from] serde_json::Error),
}
