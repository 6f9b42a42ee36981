//! Movement instructions emitted by the command interpreter.

use crate::{Axis, JointId};
use serde::{Deserialize, Serialize};

/// A single discrete motion command for the rig.
///
/// Instructions are transient: produced per transcript and applied to a
/// motion sink immediately, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MovementInstruction {
    /// Return the rig to its canonical initial pose.
    Reset,
    /// Rotate one joint around one of its local axes by a signed angle.
    #[serde(rename = "move")]
    Rotate {
        joint: JointId,
        axis: Axis,
        /// Signed rotation in degrees.
        #[serde(rename = "angle")]
        degrees: f32,
    },
}

impl MovementInstruction {
    /// Shorthand for a `Rotate` instruction.
    pub fn rotate(joint: JointId, axis: Axis, degrees: f32) -> Self {
        Self::Rotate {
            joint,
            axis,
            degrees,
        }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Reset)
    }
}
