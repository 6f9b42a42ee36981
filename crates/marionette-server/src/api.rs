//! Credential relay and stateless command processing.

use crate::AppState;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use marionette_types::MovementInstruction;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Response body for `GET /api/signed-url`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SignedUrlResponse {
    #[serde(rename = "signedUrl")]
    pub signed_url: String,
}

/// Response body for `GET /api/getAgentId`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentIdResponse {
    #[serde(rename = "agentId")]
    pub agent_id: String,
}

/// Request body for `POST /api/process-command`.
#[derive(Debug, Deserialize)]
pub struct ProcessCommandRequest {
    pub command: Option<String>,
}

/// Response body for `POST /api/process-command`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessCommandResponse {
    #[serde(rename = "originalCommand")]
    pub original_command: String,
    /// RFC 3339 time the command was processed.
    pub timestamp: String,
    pub processed: bool,
    /// Movements the interpreter derived from the command.
    pub movements: Vec<MovementInstruction>,
}

/// API error type mapping to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Handler for `GET /api/signed-url`.
///
/// Exchanges the server-held API key for a short-lived session URL. Provider
/// details are logged, never returned to the browser.
pub async fn get_signed_url_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<SignedUrlResponse>, ApiError> {
    let signed_url = state.convai.get_signed_url().await.map_err(|e| {
        tracing::error!("failed to get signed url: {}", e);
        ApiError::InternalServerError("Failed to get signed URL".to_string())
    })?;

    Ok(Json(SignedUrlResponse { signed_url }))
}

/// Handler for `GET /api/getAgentId`, used for public agents.
pub async fn get_agent_id_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<AgentIdResponse> {
    Json(AgentIdResponse {
        agent_id: state.convai.agent_id().to_string(),
    })
}

/// Handler for `POST /api/process-command`.
///
/// Stateless: echoes the command with the movements it parses to, without
/// touching the server-side rig.
pub async fn process_command_handler(
    Json(payload): Json<ProcessCommandRequest>,
) -> Result<Json<ProcessCommandResponse>, ApiError> {
    let command = payload
        .command
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Command is required".to_string()))?;

    tracing::info!(command = %command, "received command");

    let movements = marionette_command::parse_command(&command);

    Ok(Json(ProcessCommandResponse {
        original_command: command,
        timestamp: chrono::Utc::now().to_rfc3339(),
        processed: true,
        movements,
    }))
}
