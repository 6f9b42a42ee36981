//! Direct access to the server-side skeleton.

use crate::api::ApiError;
use crate::{broadcast_rig_update, AppState, RigUpdate, RigUpdateSource};
use axum::extract::{Extension, Json, Path};
use marionette_rig::{MotionSink, Pose, RigError};
use marionette_types::{Axis, MovementInstruction};
use serde::Deserialize;
use std::sync::Arc;

/// Request body for rotating a single joint.
#[derive(Debug, Deserialize)]
pub struct RotateJointRequest {
    pub axis: Axis,
    /// Signed rotation in degrees, composed onto the current orientation.
    pub degrees: f32,
}

/// Handler for `GET /api/skeleton`.
pub async fn get_skeleton_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Pose>, ApiError> {
    let session = state
        .session
        .lock()
        .map_err(|_| ApiError::InternalServerError("session lock poisoned".to_string()))?;
    Ok(Json(session.sink().pose()))
}

/// Handler for `POST /api/skeleton/reset`.
pub async fn reset_skeleton_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Pose>, ApiError> {
    let mut session = state
        .session
        .lock()
        .map_err(|_| ApiError::InternalServerError("session lock poisoned".to_string()))?;
    session.sink_mut().reset_pose();
    let pose = session.sink().pose();

    tracing::info!("skeleton reset");
    broadcast_rig_update(
        &state.rig_tx,
        RigUpdate {
            source: RigUpdateSource::Reset,
            movements: vec![MovementInstruction::Reset],
            pose: pose.clone(),
        },
    );
    Ok(Json(pose))
}

/// Handler for `POST /api/skeleton/joints/{name}/rotate`.
///
/// Addresses joints by wire name, so structural joints such as `neck` are
/// reachable too.
pub async fn rotate_joint_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(name): Path<String>,
    Json(payload): Json<RotateJointRequest>,
) -> Result<Json<Pose>, ApiError> {
    if !payload.degrees.is_finite() {
        return Err(ApiError::BadRequest("degrees must be finite".to_string()));
    }

    let mut session = state
        .session
        .lock()
        .map_err(|_| ApiError::InternalServerError("session lock poisoned".to_string()))?;
    session
        .sink_mut()
        .rotate_named(&name, payload.axis, payload.degrees)
        .map_err(|e| match e {
            RigError::UnknownJoint(_) => {
                tracing::warn!(joint = %name, "rotate requested for unknown joint");
                ApiError::NotFound(e.to_string())
            }
        })?;
    let pose = session.sink().pose();

    // Structural joints have no JointId, so only voice-addressable joints
    // are echoed as instructions.
    let movements = name
        .parse()
        .map(|joint| vec![MovementInstruction::rotate(joint, payload.axis, payload.degrees)])
        .unwrap_or_default();

    broadcast_rig_update(
        &state.rig_tx,
        RigUpdate {
            source: RigUpdateSource::Manual,
            movements,
            pose: pose.clone(),
        },
    );
    Ok(Json(pose))
}
