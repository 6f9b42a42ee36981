use axum::{
    extract::Query,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use marionette_voice::{ConvaiClient, ConvaiConfig, VoiceError};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::net::TcpListener;

/// Starts a fake provider and returns its base URL.
async fn spawn_provider(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn signed_url(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let key = headers
        .get("xi-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if key != "test-key" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "invalid api key"})),
        );
    }
    let agent = params.get("agent_id").cloned().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({"signed_url": format!("wss://voice.example/{}?token=abc", agent)})),
    )
}

fn provider() -> Router {
    Router::new().route(
        "/v1/convai/conversation/get_signed_url",
        get(signed_url),
    )
}

#[tokio::test]
async fn fetches_signed_url() {
    let base = spawn_provider(provider()).await;
    let client =
        ConvaiClient::new(ConvaiConfig::new("agent-7", "test-key").with_base_url(base)).unwrap();

    let url = client.get_signed_url().await.unwrap();
    assert_eq!(url, "wss://voice.example/agent-7?token=abc");
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let base = spawn_provider(provider()).await;
    let client = ConvaiClient::new(
        ConvaiConfig::new("agent-7", "test-key").with_base_url(format!("{}/", base)),
    )
    .unwrap();
    assert!(client.get_signed_url().await.is_ok());
}

#[tokio::test]
async fn rejected_key_surfaces_upstream_status() {
    let base = spawn_provider(provider()).await;
    let client =
        ConvaiClient::new(ConvaiConfig::new("agent-7", "wrong").with_base_url(base)).unwrap();

    match client.get_signed_url().await {
        Err(VoiceError::Upstream { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_field_is_malformed() {
    let router = Router::new().route(
        "/v1/convai/conversation/get_signed_url",
        get(|| async { Json(json!({"url": "nope"})) }),
    );
    let base = spawn_provider(router).await;
    let client =
        ConvaiClient::new(ConvaiConfig::new("agent-7", "test-key").with_base_url(base)).unwrap();

    assert!(matches!(
        client.get_signed_url().await,
        Err(VoiceError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn missing_credentials_fail_before_any_request() {
    let client = ConvaiClient::new(
        ConvaiConfig::new("", "test-key").with_base_url("http://127.0.0.1:9"),
    )
    .unwrap();
    assert!(!client.is_configured());
    assert!(matches!(
        client.get_signed_url().await,
        Err(VoiceError::MissingConfig(field)) if field == "agent_id"
    ));

    let client = ConvaiClient::new(ConvaiConfig::new("agent-7", "")).unwrap();
    assert!(matches!(
        client.get_signed_url().await,
        Err(VoiceError::MissingConfig(field)) if field == "api_key"
    ));
}

#[tokio::test]
async fn unreachable_provider_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ConvaiClient::new(
        ConvaiConfig::new("agent-7", "test-key").with_base_url(format!("http://{}", addr)),
    )
    .unwrap();
    assert!(matches!(
        client.get_signed_url().await,
        Err(VoiceError::Http(_))
    ));
}
