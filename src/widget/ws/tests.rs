use crate::geocoder::tests::{FakeGeocoderServer, FOUND_FIXTURE};
use crate::http::tests::http_test_server;
use crate::map::config::WidgetConfig;
use crate::widget;
use crate::widget::controller::LookupOrdering;
use crate::widget::sdk::{MapBlueprint, MapEvent, MapSdk, SdkError};
use crate::widget::ws::bridge::{WsDisplay, WsMapSdk};
use crate::widget::ws::message_types::ServerSentSocketMessage;
use axum::http::StatusCode;
use serde_json::{json, Value};
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn as_json(message: ServerSentSocketMessage) -> Value {
    serde_json::to_value(message).unwrap()
}

async fn next_json(outbox: &mut mpsc::UnboundedReceiver<ServerSentSocketMessage>) -> Value {
    as_json(outbox.recv().await.expect("Outbox closed unexpectedly."))
}

#[tokio::test]
async fn test_page_messages_become_map_events() {
    let (outbox, _outbox_rx) = mpsc::unbounded_channel();
    let (mut sdk, mut bridge) = WsMapSdk::new(outbox);

    bridge.on_text(r#"{"type": "Ready"}"#);
    sdk.ready().await.unwrap();
    let widget_config = WidgetConfig::default();
    let mut events = sdk
        .create_map(MapBlueprint::from_config(&widget_config))
        .await
        .unwrap();
    bridge.on_text(r#"{"type": "ActionEnd", "payload": {"center": [59.61, 42.46]}}"#);
    bridge.on_text(r#"{"type": "TouchStart"}"#);
    bridge.on_text(r#"{"type": "TouchEnd"}"#);
    bridge.on_text(r#"{"type": "MouseDown"}"#);
    bridge.on_text(r#"{"type": "MouseUp"}"#);

    assert_eq!(
        events.recv().await,
        Some(MapEvent::ActionEnd {
            center: [59.61, 42.46].into()
        })
    );
    assert_eq!(events.recv().await, Some(MapEvent::TouchStart));
    assert_eq!(events.recv().await, Some(MapEvent::TouchEnd));
    assert_eq!(events.recv().await, Some(MapEvent::MouseDown));
    assert_eq!(events.recv().await, Some(MapEvent::MouseUp));
}

#[tokio::test]
async fn test_malformed_messages_are_ignored() {
    let (outbox, mut outbox_rx) = mpsc::unbounded_channel();
    let (mut sdk, mut bridge) = WsMapSdk::new(outbox);
    bridge.on_text(r#"{"type": "Ready"}"#);
    sdk.ready().await.unwrap();
    let mut events = sdk
        .create_map(MapBlueprint::from_config(
            &WidgetConfig::default(),
        ))
        .await
        .unwrap();
    outbox_rx.recv().await.unwrap();

    bridge.on_text("not json at all");
    bridge.on_text(r#"{"type": "Teleport"}"#);
    bridge.on_text(r#"{"type": "ActionEnd", "payload": {}}"#);
    bridge.on_text(r#"{"type": "MouseUp"}"#);

    assert_eq!(events.recv().await, Some(MapEvent::MouseUp));
    assert!(outbox_rx.try_recv().is_err());
}

#[tokio::test]
async fn test_ping_is_answered_with_pong() {
    let (outbox, mut outbox_rx) = mpsc::unbounded_channel();
    let (_sdk, mut bridge) = WsMapSdk::new(outbox);

    bridge.on_text(r#"{"type": "Ping"}"#);

    assert_eq!(next_json(&mut outbox_rx).await, json!({"type": "Pong"}));
}

#[tokio::test]
async fn test_sdk_is_never_ready_when_page_leaves() {
    let (outbox, _outbox_rx) = mpsc::unbounded_channel();
    let (mut sdk, bridge) = WsMapSdk::new(outbox);

    drop(bridge);

    assert_eq!(sdk.ready().await, Err(SdkError::NeverReady));
}

#[tokio::test]
async fn test_map_is_created_once() {
    let (outbox, _outbox_rx) = mpsc::unbounded_channel();
    let (mut sdk, _bridge) = WsMapSdk::new(outbox);
    let blueprint = MapBlueprint::from_config(&WidgetConfig::default());

    assert!(sdk.create_map(blueprint.clone()).await.is_ok());
    assert_eq!(
        sdk.create_map(blueprint).await.err(),
        Some(SdkError::MapAlreadyCreated)
    );
}

#[tokio::test]
async fn test_widget_session_over_socket_messages() {
    let server = FakeGeocoderServer::spawn(StatusCode::OK, FOUND_FIXTURE).await;
    let (outbox, mut outbox_rx) = mpsc::unbounded_channel();
    let (sdk, mut bridge) = WsMapSdk::new(outbox.clone());
    let display = Arc::new(WsDisplay::new(outbox));
    let starting = tokio::spawn(async move {
        widget::start(
            sdk,
            Arc::new(server.geocoder()),
            display,
            &WidgetConfig::default(),
            LookupOrdering::Unordered,
        )
        .await
    });

    assert_eq!(
        next_json(&mut outbox_rx).await,
        json!({
            "type": "SetImageSource",
            "payload": {"element": "marker", "src": "/static/pointer.png"},
        })
    );
    bridge.on_text(r#"{"type": "Ready"}"#);
    let create_map = next_json(&mut outbox_rx).await;
    let handle = starting.await.unwrap().unwrap();

    assert_eq!(create_map["type"], "CreateMap");
    assert_eq!(create_map["payload"]["mount"], "map");
    assert_eq!(
        create_map["payload"]["options"]["location"],
        json!({"center": [59.618922936523404, 42.46392713202458], "zoom": 15.0})
    );
    assert_eq!(
        create_map["payload"]["layers"],
        json!(["DefaultFeaturesLayer"])
    );
    assert_eq!(create_map["payload"]["children"][0]["kind"], "feature");
    assert_eq!(create_map["payload"]["children"][0]["spec"]["id"], "branch");
    assert_eq!(
        create_map["payload"]["children"][1],
        json!({"kind": "layer", "spec": "DefaultSchemeLayer"})
    );
    assert_eq!(
        create_map["payload"]["children"][2],
        json!({
            "kind": "listener",
            "spec": ["onActionEnd", "onTouchStart", "onTouchEnd", "onMouseUp", "onMouseDown"],
        })
    );

    bridge.on_text(r#"{"type": "MouseDown"}"#);
    assert_eq!(
        next_json(&mut outbox_rx).await,
        json!({
            "type": "SetClassState",
            "payload": {"element": "marker", "class": "animated", "active": true},
        })
    );
    assert_eq!(
        next_json(&mut outbox_rx).await,
        json!({
            "type": "SetClassState",
            "payload": {"element": "dot", "class": "visible", "active": true},
        })
    );

    bridge.on_text(r#"{"type": "ActionEnd", "payload": {"center": [59.6189, 42.4639]}}"#);
    assert_eq!(
        next_json(&mut outbox_rx).await,
        json!({
            "type": "SetText",
            "payload": {"element": "locationName", "text": "улица Гарезсизлик, 12"},
        })
    );

    drop(bridge);
    handle.finished().await;
}

async fn active_widgets(server: &TestServer) -> u64 {
    let health = server.get("/health/check").await.json::<Value>();
    health["activeWidgets"]
        .as_u64()
        .expect("Health check has no widget count.")
}

#[tokio::test]
async fn test_socket_session_lifecycle() {
    let server = http_test_server();
    assert_eq!(active_widgets(&server).await, 0);

    let mut websocket = server
        .get_websocket("/widget/ws")
        .await
        .into_websocket()
        .await;

    assert_eq!(
        websocket.receive_json::<Value>().await,
        json!({
            "type": "SetImageSource",
            "payload": {"element": "marker", "src": "/static/pointer.png"},
        })
    );
    assert_eq!(active_widgets(&server).await, 1);

    websocket.send_text(r#"{"type": "Ready"}"#).await;
    let create_map = websocket.receive_json::<Value>().await;
    assert_eq!(create_map["type"], "CreateMap");
    assert_eq!(create_map["payload"]["mount"], "map");

    websocket.send_text(r#"{"type": "Ping"}"#).await;
    assert_eq!(
        websocket.receive_json::<Value>().await,
        json!({"type": "Pong"})
    );

    websocket.close().await;
    for _ in 0..200 {
        if active_widgets(&server).await == 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Widget was still counted as active after its socket closed.");
}
