use crate::display::{DisplayPort, ElementId, VisualClass};
use crate::widget::sdk::{MapBlueprint, MapEvent, MapEvents, MapSdk, SdkError};
use crate::widget::ws::message_types::{
    ClientSentSocketMessage, CreateMap, Pong, ServerSentSocketMessage, SetClassState,
    SetClassStatePayload, SetImageSource, SetImageSourcePayload, SetText, SetTextPayload,
};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

pub type Outbox = mpsc::UnboundedSender<ServerSentSocketMessage>;

/// The map SDK of a page connected over a websocket.
pub struct WsMapSdk {
    outbox: Outbox,
    ready: Option<oneshot::Receiver<()>>,
    events: Option<MapEvents>,
}

impl WsMapSdk {
    /// Returns the SDK handle together with the bridge that feeds it with what the page
    /// sends.
    pub fn new(outbox: Outbox) -> (Self, SdkBridge) {
        let (ready_tx, ready_rx) = oneshot::channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let sdk = Self {
            outbox: outbox.clone(),
            ready: Some(ready_rx),
            events: Some(events_rx),
        };
        let bridge = SdkBridge {
            ready: Some(ready_tx),
            events: events_tx,
            outbox,
        };
        (sdk, bridge)
    }
}

#[async_trait]
impl MapSdk for WsMapSdk {
    async fn ready(&mut self) -> Result<(), SdkError> {
        match self.ready.take() {
            Some(ready) => ready.await.map_err(|_| SdkError::NeverReady),
            None => Ok(()),
        }
    }

    async fn create_map(&mut self, blueprint: MapBlueprint) -> Result<MapEvents, SdkError> {
        let events = self.events.take().ok_or(SdkError::MapAlreadyCreated)?;
        self.outbox
            .send(ServerSentSocketMessage::CreateMap {
                r#type: CreateMap,
                payload: blueprint,
            })
            .map_err(|_| SdkError::Disconnected)?;
        Ok(events)
    }
}

/// Turns page messages into SDK readiness and listener events.
pub struct SdkBridge {
    ready: Option<oneshot::Sender<()>>,
    events: mpsc::UnboundedSender<MapEvent>,
    outbox: Outbox,
}

impl SdkBridge {
    pub fn on_text(&mut self, raw_msg: &str) {
        match serde_json::from_str::<ClientSentSocketMessage>(raw_msg) {
            Ok(message) => self.on_message(message),
            Err(err) => tracing::warn!(
                task = "client_sent_ws_message",
                error = %err,
                "Ignoring a malformed websocket message."
            ),
        }
    }

    pub fn on_message(&mut self, message: ClientSentSocketMessage) {
        tracing::trace!(
            task = "client_sent_ws_message",
            message_type = message.message_type()
        );
        match message {
            ClientSentSocketMessage::Ready { .. } => match self.ready.take() {
                Some(ready) => {
                    let _ = ready.send(());
                }
                None => tracing::debug!("The page reported readiness twice."),
            },
            ClientSentSocketMessage::ActionEnd { payload, .. } => {
                self.forward(MapEvent::ActionEnd {
                    center: payload.center,
                })
            }
            ClientSentSocketMessage::TouchStart { .. } => self.forward(MapEvent::TouchStart),
            ClientSentSocketMessage::TouchEnd { .. } => self.forward(MapEvent::TouchEnd),
            ClientSentSocketMessage::MouseDown { .. } => self.forward(MapEvent::MouseDown),
            ClientSentSocketMessage::MouseUp { .. } => self.forward(MapEvent::MouseUp),
            ClientSentSocketMessage::Ping { .. } => {
                let _ = self.outbox.send(ServerSentSocketMessage::Pong { r#type: Pong });
            }
        }
    }

    fn forward(&self, event: MapEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!(?event, "Widget event loop is gone, dropping a map event.");
        }
    }
}

/// DOM of a page connected over a websocket. Commands to a page that went away are
/// dropped.
pub struct WsDisplay {
    outbox: Outbox,
}

impl WsDisplay {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }

    fn send(&self, message: ServerSentSocketMessage) {
        let _ = self.outbox.send(message);
    }
}

impl DisplayPort for WsDisplay {
    fn set_image_source(&self, element: ElementId, src: &str) {
        self.send(ServerSentSocketMessage::SetImageSource {
            r#type: SetImageSource,
            payload: SetImageSourcePayload {
                element,
                src: src.to_string(),
            },
        });
    }

    fn set_class_state(&self, element: ElementId, class: VisualClass, active: bool) {
        self.send(ServerSentSocketMessage::SetClassState {
            r#type: SetClassState,
            payload: SetClassStatePayload {
                element,
                class,
                active,
            },
        });
    }

    fn set_text(&self, element: ElementId, text: &str) {
        self.send(ServerSentSocketMessage::SetText {
            r#type: SetText,
            payload: SetTextPayload {
                element,
                text: text.to_string(),
            },
        });
    }
}
