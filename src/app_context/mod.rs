use crate::cli::Args;
use crate::geocoder::{Geocode, HttpGeocoder};
use crate::map::config::WidgetConfig;
use crate::widget::controller::LookupOrdering;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<G: Geocode> {
    pub geocoder: Arc<G>,
    pub widget_config: Arc<WidgetConfig>,
    pub lookup_ordering: LookupOrdering,
    pub active_widgets: Arc<AtomicUsize>,
}

pub fn init(args: &Args, widget_config: WidgetConfig) -> AppContext<HttpGeocoder> {
    AppContext {
        geocoder: Arc::new(HttpGeocoder::from_args(args)),
        widget_config: Arc::new(widget_config),
        lookup_ordering: args.lookup_ordering,
        active_widgets: Arc::new(AtomicUsize::new(0)),
    }
}
