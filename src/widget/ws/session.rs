use crate::app_context::AppContext;
use crate::geocoder::Geocode;
use crate::widget;
use crate::widget::ws::bridge::{WsDisplay, WsMapSdk};
use crate::widget::ws::message_types::ServerSentSocketMessage;
use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use uuid::Uuid;

/// Serves one widget instance for as long as its page stays connected.
pub async fn run<G: Geocode>(socket: WebSocket, app_context: AppContext<G>) {
    let widget_id = Uuid::new_v4();
    let active_widgets = app_context.active_widgets.fetch_add(1, Ordering::Relaxed) + 1;
    tracing::info!(
        task = "widget_session",
        %widget_id,
        active_widgets,
        "Widget connected."
    );

    // Split the socket; an unbounded channel buffers outgoing commands so that the
    // display port never waits on the network.
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (outbox, outbox_rx) = mpsc::unbounded_channel::<ServerSentSocketMessage>();
    let mut outbox_rx = UnboundedReceiverStream::new(outbox_rx);
    let writer = tokio::spawn(async move {
        while let Some(message) = outbox_rx.next().await {
            let raw_msg = match serde_json::to_string(&message) {
                Ok(raw_msg) => raw_msg,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to serialize a widget command.");
                    continue;
                }
            };
            if let Err(err) = ws_tx.send(Message::Text(raw_msg)).await {
                tracing::debug!(%widget_id, error = %err, "Websocket send error.");
                break;
            }
        }
    });

    let (sdk, mut bridge) = WsMapSdk::new(outbox.clone());
    let display = Arc::new(WsDisplay::new(outbox));
    let geocoder = app_context.geocoder.clone();
    let widget_config = app_context.widget_config.clone();
    let ordering = app_context.lookup_ordering;
    let starting = tokio::spawn(async move {
        widget::start(sdk, geocoder, display, &widget_config, ordering).await
    });

    let mut closed_cleanly = true;
    while let Some(message) = ws_rx.next().await {
        match message {
            Ok(Message::Text(raw_msg)) => bridge.on_text(&raw_msg),
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(%widget_id, error = %err, "Websocket receive error.");
                closed_cleanly = false;
                break;
            }
        }
    }
    // Closes the event stream, which ends the widget's event loop.
    drop(bridge);

    match starting.await {
        Ok(Ok(handle)) if closed_cleanly => handle.finished().await,
        Ok(Ok(handle)) => handle.stop().await,
        Ok(Err(err)) => {
            tracing::info!(%widget_id, error = %err, "Widget left before its map was created.")
        }
        Err(err) => tracing::error!(%widget_id, error = %err, "Widget startup panicked."),
    }
    writer.abort();

    let active_widgets = app_context.active_widgets.fetch_sub(1, Ordering::Relaxed) - 1;
    tracing::info!(
        task = "widget_session",
        %widget_id,
        active_widgets,
        "Widget disconnected."
    );
}
