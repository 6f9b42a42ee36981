//! Voice session event intake.
//!
//! The browser forwards its voice client callbacks here; transcripts are
//! interpreted and applied to the server-side skeleton.

use crate::api::ApiError;
use crate::{broadcast_rig_update, AppState, RigUpdate, RigUpdateSource};
use axum::extract::{Extension, Json};
use marionette_voice::{SessionEvent, SessionStatus, SessionUpdate};
use std::sync::Arc;

/// Handler for `POST /api/session/events`.
pub async fn post_session_event_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(event): Json<SessionEvent>,
) -> Result<Json<SessionUpdate>, ApiError> {
    let mut session = state
        .session
        .lock()
        .map_err(|_| ApiError::InternalServerError("session lock poisoned".to_string()))?;
    let update = session.handle_event(event);

    // Published under the lock so subscribers see updates in apply order.
    if let SessionUpdate::Movements { movements, .. } = &update {
        if update.moved_rig() {
            broadcast_rig_update(
                &state.rig_tx,
                RigUpdate {
                    source: RigUpdateSource::Transcript,
                    movements: movements.clone(),
                    pose: session.sink().pose(),
                },
            );
        }
    }

    Ok(Json(update))
}

/// Handler for `GET /api/session`.
pub async fn get_session_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<SessionStatus>, ApiError> {
    let session = state
        .session
        .lock()
        .map_err(|_| ApiError::InternalServerError("session lock poisoned".to_string()))?;
    Ok(Json(session.status()))
}
