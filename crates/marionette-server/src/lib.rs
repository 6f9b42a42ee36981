//! Marionette server library logic.

pub mod api;
pub mod api_session;
pub mod api_skeleton;
pub mod api_sse;
pub mod config;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use marionette_rig::{Pose, Skeleton};
use marionette_types::MovementInstruction;
use marionette_voice::{ConvaiClient, SessionShell};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Default capacity for the rig update broadcast channel.
const RIG_BROADCAST_CAPACITY: usize = 256;

/// Maximum request body size (64 KiB). Commands are short sentences.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// What caused a rig update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RigUpdateSource {
    Transcript,
    Reset,
    Manual,
}

/// Broadcast whenever the server-side rig changes.
#[derive(Debug, Clone, Serialize)]
pub struct RigUpdate {
    pub source: RigUpdateSource,
    pub movements: Vec<MovementInstruction>,
    pub pose: Pose,
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Signed URL client for the voice provider.
    pub convai: Arc<ConvaiClient>,
    /// The session shell driving the server-side skeleton.
    ///
    /// Never held across an `.await`.
    pub session: Arc<Mutex<SessionShell<Skeleton>>>,
    /// Broadcast channel for rig updates (SSE stream).
    pub rig_tx: broadcast::Sender<RigUpdate>,
    /// Directory holding the built browser client, if any.
    pub client_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(convai: ConvaiClient, client_dir: Option<PathBuf>) -> Self {
        let (rig_tx, _) = broadcast::channel(RIG_BROADCAST_CAPACITY);
        Self {
            convai: Arc::new(convai),
            session: Arc::new(Mutex::new(SessionShell::new(Skeleton::new()))),
            rig_tx,
            client_dir,
        }
    }
}

/// Sends a rig update to SSE subscribers. Having no subscribers is normal.
pub fn broadcast_rig_update(tx: &broadcast::Sender<RigUpdate>, update: RigUpdate) {
    let source = update.source;
    if tx.send(update).is_err() {
        tracing::debug!(?source, "no rig stream subscribers");
    }
}

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/api/signed-url", get(api::get_signed_url_handler))
        .route("/api/getAgentId", get(api::get_agent_id_handler))
        .route("/api/process-command", post(api::process_command_handler))
        .route("/api/session", get(api_session::get_session_handler))
        .route(
            "/api/session/events",
            post(api_session::post_session_event_handler),
        )
        .route("/api/skeleton", get(api_skeleton::get_skeleton_handler))
        .route(
            "/api/skeleton/reset",
            post(api_skeleton::reset_skeleton_handler),
        )
        .route(
            "/api/skeleton/joints/{name}/rotate",
            post(api_skeleton::rotate_joint_handler),
        )
        .route("/events/rig", get(api_sse::get_rig_stream_handler));

    // Serve the browser client if it has been built.
    let router = match state.client_dir.as_deref() {
        Some(dir) if dir.join("index.html").exists() => {
            tracing::info!(path = %dir.display(), "serving client static files");
            let index = dir.join("index.html");
            router
                .nest_service("/static", ServeDir::new(dir))
                .fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        Some(dir) => {
            tracing::info!(path = %dir.display(), "client directory not found, skipping static file serving");
            router
        }
        None => router,
    };

    router
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
