use crate::display::{ElementId, VisualClass};
use crate::map::models::LatLng;
use crate::widget::sdk::MapBlueprint;
use serde::{Deserialize, Serialize};
use serde_unit_struct::{Deserialize_unit_struct, Serialize_unit_struct};

/// Messages the page sends on behalf of the map SDK.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClientSentSocketMessage {
    Ready {
        #[allow(dead_code)]
        // Only matched on to pick the variant. Same for other variants.
        r#type: Ready,
    },
    ActionEnd {
        #[allow(dead_code)]
        r#type: ActionEnd,
        payload: ActionEndPayload,
    },
    TouchStart {
        #[allow(dead_code)]
        r#type: TouchStart,
    },
    TouchEnd {
        #[allow(dead_code)]
        r#type: TouchEnd,
    },
    MouseDown {
        #[allow(dead_code)]
        r#type: MouseDown,
    },
    MouseUp {
        #[allow(dead_code)]
        r#type: MouseUp,
    },
    Ping {
        #[allow(dead_code)]
        r#type: Ping,
    },
}

impl ClientSentSocketMessage {
    pub fn message_type(&self) -> &'static str {
        match self {
            ClientSentSocketMessage::Ready { .. } => "Ready",
            ClientSentSocketMessage::ActionEnd { .. } => "ActionEnd",
            ClientSentSocketMessage::TouchStart { .. } => "TouchStart",
            ClientSentSocketMessage::TouchEnd { .. } => "TouchEnd",
            ClientSentSocketMessage::MouseDown { .. } => "MouseDown",
            ClientSentSocketMessage::MouseUp { .. } => "MouseUp",
            ClientSentSocketMessage::Ping { .. } => "Ping",
        }
    }
}

/// Commands for the page: build the map, mutate the DOM.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ServerSentSocketMessage {
    CreateMap {
        r#type: CreateMap,
        payload: MapBlueprint,
    },
    SetImageSource {
        r#type: SetImageSource,
        payload: SetImageSourcePayload,
    },
    SetClassState {
        r#type: SetClassState,
        payload: SetClassStatePayload,
    },
    SetText {
        r#type: SetText,
        payload: SetTextPayload,
    },
    Pong {
        r#type: Pong,
    },
}

#[derive(Debug, Deserialize)]
pub struct ActionEndPayload {
    pub center: LatLng,
}

#[derive(Debug, Serialize)]
pub struct SetImageSourcePayload {
    pub element: ElementId,
    pub src: String,
}

#[derive(Debug, Serialize)]
pub struct SetClassStatePayload {
    pub element: ElementId,
    pub class: VisualClass,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct SetTextPayload {
    pub element: ElementId,
    pub text: String,
}

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Ready;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ActionEnd;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct TouchStart;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct TouchEnd;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct MouseDown;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct MouseUp;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Ping;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Pong;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct CreateMap;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct SetImageSource;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct SetClassState;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct SetText;
