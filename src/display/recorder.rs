use crate::display::{DisplayPort, ElementId, VisualClass};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct PageState {
    image_sources: HashMap<ElementId, String>,
    classes: HashSet<(ElementId, VisualClass)>,
    texts: HashMap<ElementId, String>,
    text_writes: Vec<(ElementId, String)>,
}

/// In-memory page that keeps the current state of every element it was asked to change.
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    state: Arc<RwLock<PageState>>,
}

impl RecordingDisplay {
    pub fn image_source(&self, element: ElementId) -> Option<String> {
        self.read(|state| state.image_sources.get(&element).cloned())
    }

    pub fn has_class(&self, element: ElementId, class: VisualClass) -> bool {
        self.read(|state| state.classes.contains(&(element, class)))
    }

    pub fn text(&self, element: ElementId) -> Option<String> {
        self.read(|state| state.texts.get(&element).cloned())
    }

    /// Every text write in the order it happened.
    pub fn text_writes(&self) -> Vec<(ElementId, String)> {
        self.read(|state| state.text_writes.clone())
    }

    fn read<T>(&self, f: impl FnOnce(&PageState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&state)
    }

    fn write(&self, f: impl FnOnce(&mut PageState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut state)
    }
}

impl DisplayPort for RecordingDisplay {
    fn set_image_source(&self, element: ElementId, src: &str) {
        self.write(|state| {
            state.image_sources.insert(element, src.to_string());
        });
    }

    fn set_class_state(&self, element: ElementId, class: VisualClass, active: bool) {
        self.write(|state| {
            if active {
                state.classes.insert((element, class));
            } else {
                state.classes.remove(&(element, class));
            }
        });
    }

    fn set_text(&self, element: ElementId, text: &str) {
        self.write(|state| {
            state.texts.insert(element, text.to_string());
            state.text_writes.push((element, text.to_string()));
        });
    }
}
