use serde::{Deserialize, Serialize};

#[cfg(test)]
pub mod recorder;

/// Page elements the widget touches, serialized as their DOM ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementId {
    #[serde(rename = "marker")]
    Marker,
    #[serde(rename = "dot")]
    Dot,
    #[serde(rename = "map")]
    Map,
    #[serde(rename = "locationName")]
    LocationName,
}

/// CSS classes toggled during press and release.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualClass {
    Animated,
    Visible,
}

/// The handful of DOM mutations the widget performs.
pub trait DisplayPort: Send + Sync + 'static {
    fn set_image_source(&self, element: ElementId, src: &str);

    fn set_class_state(&self, element: ElementId, class: VisualClass, active: bool);

    fn set_text(&self, element: ElementId, text: &str);
}
