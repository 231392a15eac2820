use crate::display::{DisplayPort, ElementId};
use crate::geocoder::Geocode;
use crate::map::config::WidgetConfig;
use controller::{Controller, LookupOrdering};
use sdk::{MapBlueprint, MapSdk, SdkError};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub mod controller;
pub mod handlers;
pub mod responses;
pub mod sdk;
pub mod ws;

/// Running widget instance. Dropping the handle leaves the event loop running until the
/// SDK's event stream ends.
pub struct WidgetHandle {
    shutdown: oneshot::Sender<()>,
    event_loop: JoinHandle<()>,
}

impl WidgetHandle {
    /// Stops handling map events. Lookups already in flight are not cancelled.
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        if let Err(err) = self.event_loop.await {
            tracing::error!(error = %err, "Widget event loop panicked.");
        }
    }

    /// Waits until the SDK stops sending events.
    pub async fn finished(self) {
        if let Err(err) = self.event_loop.await {
            tracing::error!(error = %err, "Widget event loop panicked.");
        }
    }
}

/// Brings one widget up: points the marker at its image, waits for the SDK, builds the
/// map and starts reacting to its listener callbacks.
pub async fn start<S, G, D>(
    mut sdk: S,
    geocoder: Arc<G>,
    display: Arc<D>,
    widget_config: &WidgetConfig,
    ordering: LookupOrdering,
) -> Result<WidgetHandle, SdkError>
where
    S: MapSdk,
    G: Geocode,
    D: DisplayPort,
{
    display.set_image_source(ElementId::Marker, &widget_config.marker_image);
    sdk.ready().await?;
    let mut events = sdk
        .create_map(MapBlueprint::from_config(widget_config))
        .await?;
    tracing::debug!(?ordering, "Map created, listening for map events.");

    let controller = Controller::new(geocoder, display, ordering);
    let (shutdown, mut shutdown_rx) = oneshot::channel();
    let event_loop = tokio::spawn(async move {
        // The SDK handle owns the page connection, keep it alive as long as the loop.
        let _sdk = sdk;
        let mut handle_dropped = false;
        loop {
            tokio::select! {
                signal = &mut shutdown_rx, if !handle_dropped => match signal {
                    Ok(()) => break,
                    Err(_) => handle_dropped = true,
                },
                event = events.recv() => match event {
                    Some(event) => {
                        controller.handle(event);
                    }
                    None => break,
                },
            }
        }
        tracing::debug!("Widget event loop finished.");
    });

    Ok(WidgetHandle {
        shutdown,
        event_loop,
    })
}
