mod common;

use axum::{http::StatusCode, routing::get as get_route, Json, Router};
use common::{body_json, get, post_json, state_with, test_state};
use marionette_server::app;
use marionette_voice::ConvaiConfig;
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Starts a fake voice provider that always issues the same signed URL.
async fn spawn_provider() -> String {
    let router = Router::new().route(
        "/v1/convai/conversation/get_signed_url",
        get_route(|| async { Json(json!({"signed_url": "wss://voice.example/session?t=1"})) }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn health_check_returns_ok() {
    let response = app(test_state()).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn process_command_returns_movements() {
    let response = app(test_state())
        .oneshot(post_json(
            "/api/process-command",
            json!({"command": "bend left elbow slightly"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["originalCommand"], "bend left elbow slightly");
    assert_eq!(json["processed"], true);
    assert!(json["timestamp"].as_str().unwrap().contains('T'));
    assert_eq!(
        json["movements"],
        json!([{"type": "move", "joint": "leftElbow", "axis": "x", "angle": 15.0}])
    );
}

#[tokio::test]
async fn process_command_reset() {
    let response = app(test_state())
        .oneshot(post_json("/api/process-command", json!({"command": "start over"})))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["movements"], json!([{"type": "reset"}]));
}

#[tokio::test]
async fn process_command_requires_command() {
    for body in [json!({}), json!({"command": ""}), json!({"command": null})] {
        let response = app(test_state())
            .oneshot(post_json("/api/process-command", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Command is required");
    }
}

#[tokio::test]
async fn process_command_does_not_move_the_rig() {
    let state = test_state();
    let router = app(state.clone());
    router
        .clone()
        .oneshot(post_json("/api/process-command", json!({"command": "nod"})))
        .await
        .unwrap();

    let session = state.session.lock().unwrap();
    assert!(session.sink().is_canonical());
    assert_eq!(session.last_transcript(), None);
}

#[tokio::test]
async fn agent_id_is_exposed() {
    let state = state_with(ConvaiConfig::new("agent-42", "secret"), None);
    let response = app(state).oneshot(get("/api/getAgentId")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({"agentId": "agent-42"}));
}

#[tokio::test]
async fn signed_url_is_relayed() {
    let base = spawn_provider().await;
    let state = state_with(
        ConvaiConfig::new("agent-42", "secret").with_base_url(base),
        None,
    );

    let response = app(state).oneshot(get("/api/signed-url")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({"signedUrl": "wss://voice.example/session?t=1"}));
}

#[tokio::test]
async fn signed_url_failure_hides_details() {
    // Unconfigured credentials fail before any request is made.
    let response = app(test_state())
        .oneshot(get("/api/signed-url"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json, json!({"error": "Failed to get signed URL"}));
}
