use crate::cli::Args;
use config::{ConfigError, WidgetConfig};
use std::fs;

pub mod config;
pub mod consts;
pub mod models;
pub mod overlay;
#[cfg(test)]
mod tests;

/// Loads the widget configuration file if one was given, falling back to the built-in
/// area of interest otherwise.
pub fn init(args: &Args) -> Result<WidgetConfig, ConfigError> {
    let widget_config = match &args.widget_config {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str::<WidgetConfig>(&raw).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        }
        None => WidgetConfig::default(),
    };
    widget_config.validate()?;
    tracing::info!(
        overlay_id = %widget_config.overlay.id,
        overlay_holes = widget_config.overlay.geometry.holes().len(),
        zoom = widget_config.map.location.zoom,
        "Loaded widget configuration."
    );
    Ok(widget_config)
}
