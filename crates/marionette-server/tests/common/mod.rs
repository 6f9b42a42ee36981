#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use marionette_server::AppState;
use marionette_voice::{ConvaiClient, ConvaiConfig};
use serde_json::Value;
use std::path::PathBuf;

/// State with an unconfigured voice provider and no static client.
pub fn test_state() -> AppState {
    state_with(ConvaiConfig::default(), None)
}

pub fn state_with(convai: ConvaiConfig, client_dir: Option<PathBuf>) -> AppState {
    let client = ConvaiClient::new(convai).expect("failed to build convai client");
    AppState::new(client, client_dir)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
