use crate::display::ElementId;
use crate::map::config::WidgetConfig;
use crate::map::models::{LatLng, MapOptions};
use crate::map::overlay::OverlayFeature;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::mpsc;

pub type MapEvents = mpsc::UnboundedReceiver<MapEvent>;

/// Handle to the map-rendering SDK living on the page.
#[async_trait]
pub trait MapSdk: Send + 'static {
    /// Resolves once the SDK is able to construct maps.
    async fn ready(&mut self) -> Result<(), SdkError>;

    /// Builds the map described by `blueprint` and returns the stream of its listener
    /// callbacks.
    async fn create_map(&mut self, blueprint: MapBlueprint) -> Result<MapEvents, SdkError>;
}

#[derive(Debug, Error, PartialEq)]
pub enum SdkError {
    #[error("the map SDK went away before becoming ready")]
    NeverReady,
    #[error("the map SDK is no longer connected")]
    Disconnected,
    #[error("the map was already created")]
    MapAlreadyCreated,
}

/// Listener callbacks fired by the SDK.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MapEvent {
    /// Camera settled after panning or zooming.
    ActionEnd { center: LatLng },
    TouchStart,
    TouchEnd,
    MouseDown,
    MouseUp,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum LayerKind {
    DefaultSchemeLayer,
    DefaultFeaturesLayer,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListenerHook {
    OnActionEnd,
    OnTouchStart,
    OnTouchEnd,
    OnMouseDown,
    OnMouseUp,
}

/// Something added to the map after construction, in order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "spec", rename_all = "camelCase")]
pub enum MapChild {
    Feature(OverlayFeature),
    Layer(LayerKind),
    Listener(Vec<ListenerHook>),
}

/// Everything the SDK needs to construct the widget's map.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBlueprint {
    pub mount: ElementId,
    pub options: MapOptions,
    pub layers: Vec<LayerKind>,
    pub children: Vec<MapChild>,
}

impl MapBlueprint {
    pub fn from_config(widget_config: &WidgetConfig) -> Self {
        Self {
            mount: ElementId::Map,
            options: widget_config.map.clone(),
            layers: vec![LayerKind::DefaultFeaturesLayer],
            children: vec![
                MapChild::Feature(widget_config.overlay.clone()),
                MapChild::Layer(LayerKind::DefaultSchemeLayer),
                MapChild::Listener(vec![
                    ListenerHook::OnActionEnd,
                    ListenerHook::OnTouchStart,
                    ListenerHook::OnTouchEnd,
                    ListenerHook::OnMouseUp,
                    ListenerHook::OnMouseDown,
                ]),
            ],
        }
    }
}
