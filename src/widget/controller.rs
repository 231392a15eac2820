use crate::display::{DisplayPort, ElementId, VisualClass};
use crate::geocoder::{GeoResult, Geocode};
use crate::map::models::LatLng;
use crate::widget::sdk::MapEvent;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// How responses of overlapping lookups are applied to the display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LookupOrdering {
    /// Every response is applied when it arrives; the last one to resolve wins.
    #[default]
    Unordered,
    /// Only the response of the most recently issued lookup is applied.
    LatestIssued,
}

/// Reacts to map listener callbacks of a single widget instance.
pub struct Controller<G, D> {
    geocoder: Arc<G>,
    display: Arc<D>,
    ordering: LookupOrdering,
    last_issued: Arc<AtomicU64>,
}

impl<G, D> Clone for Controller<G, D> {
    fn clone(&self) -> Self {
        Self {
            geocoder: self.geocoder.clone(),
            display: self.display.clone(),
            ordering: self.ordering,
            last_issued: self.last_issued.clone(),
        }
    }
}

impl<G, D> Controller<G, D>
where
    G: Geocode,
    D: DisplayPort,
{
    pub fn new(geocoder: Arc<G>, display: Arc<D>, ordering: LookupOrdering) -> Self {
        Self {
            geocoder,
            display,
            ordering,
            last_issued: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Press and release are applied right away. A settled camera starts a lookup in the
    /// background, whose handle is returned.
    pub fn handle(&self, event: MapEvent) -> Option<JoinHandle<()>> {
        match event {
            MapEvent::ActionEnd { center } => self.on_action_end(center),
            MapEvent::TouchStart | MapEvent::MouseDown => {
                self.on_press();
                None
            }
            MapEvent::TouchEnd | MapEvent::MouseUp => {
                self.on_release();
                None
            }
        }
    }

    pub fn on_press(&self) {
        self.display
            .set_class_state(ElementId::Marker, VisualClass::Animated, true);
        self.display
            .set_class_state(ElementId::Dot, VisualClass::Visible, true);
    }

    pub fn on_release(&self) {
        self.display
            .set_class_state(ElementId::Marker, VisualClass::Animated, false);
        self.display
            .set_class_state(ElementId::Dot, VisualClass::Visible, false);
    }

    pub fn on_action_end(&self, center: LatLng) -> Option<JoinHandle<()>> {
        if !center.is_finite() {
            tracing::warn!(?center, "Ignoring camera position with non-finite coordinates.");
            return None;
        }
        let sequence = self.last_issued.fetch_add(1, Ordering::SeqCst) + 1;
        let controller = self.clone();
        Some(tokio::spawn(async move {
            controller.lookup(center, sequence).await;
        }))
    }

    async fn lookup(&self, center: LatLng, sequence: u64) {
        let latlng = center.to_geocode_query();
        let result = match self.geocoder.reverse(&latlng).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(
                    task = "geocode_lookup",
                    latlng = %latlng,
                    sequence,
                    error = %err,
                    "Reverse geocoding failed."
                );
                return;
            }
        };
        let Some(name) = result.first_name() else {
            tracing::debug!(
                task = "geocode_lookup",
                latlng = %latlng,
                request = result.request().unwrap_or_default(),
                found = result.found().unwrap_or_default(),
                "Nothing found, keeping the current address."
            );
            return;
        };
        if self.ordering == LookupOrdering::LatestIssued
            && self.last_issued.load(Ordering::SeqCst) != sequence
        {
            tracing::debug!(
                task = "geocode_lookup",
                latlng = %latlng,
                sequence,
                "Dropping a stale lookup response."
            );
            return;
        }
        log_found(&latlng, sequence, &result);
        self.display.set_text(ElementId::LocationName, name);
    }
}

fn log_found(latlng: &str, sequence: u64, result: &GeoResult) {
    let Some(geo_object) = result.first_object() else {
        return;
    };
    let meta_data = geo_object.meta_data();
    tracing::info!(
        task = "geocode_lookup",
        latlng,
        sequence,
        address = %geo_object.name,
        description = geo_object.description.as_deref().unwrap_or_default(),
        kind = meta_data.and_then(|meta| meta.kind.as_deref()).unwrap_or_default(),
        precision = meta_data
            .and_then(|meta| meta.precision.as_deref())
            .unwrap_or_default(),
        full_address = meta_data.and_then(|meta| meta.text.as_deref()).unwrap_or_default(),
        pos = geo_object.point.as_ref().map(|point| point.pos.as_str()).unwrap_or_default(),
    );
}
