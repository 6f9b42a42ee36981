//! The motion sink contract and instruction application.

use crate::error::RigError;
use marionette_types::{Axis, JointId, MovementInstruction};
use serde::Serialize;

/// Something movement instructions can be applied to.
pub trait MotionSink {
    /// Composes a rotation of `degrees` around the joint's local `axis` onto
    /// its current orientation. Rotations are cumulative, not absolute.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownJoint`] if the sink has no such joint. The
    /// sink must be left unchanged in that case.
    fn rotate_joint(&mut self, joint: JointId, axis: Axis, degrees: f32) -> Result<(), RigError>;

    /// Discards all accumulated rotation and rebuilds the canonical pose.
    /// Must be idempotent.
    fn reset_pose(&mut self);
}

/// Counts of what happened while applying one instruction list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub applied: usize,
    pub skipped: usize,
    pub resets: usize,
}

/// Applies `instructions` to `sink` strictly in order.
///
/// Unknown joints are logged and skipped; they never abort the remaining
/// instructions.
pub fn apply_instructions<S>(sink: &mut S, instructions: &[MovementInstruction]) -> ApplyReport
where
    S: MotionSink + ?Sized,
{
    let mut report = ApplyReport::default();
    for instruction in instructions {
        match *instruction {
            MovementInstruction::Reset => {
                sink.reset_pose();
                report.resets += 1;
            }
            MovementInstruction::Rotate {
                joint,
                axis,
                degrees,
            } => match sink.rotate_joint(joint, axis, degrees) {
                Ok(()) => report.applied += 1,
                Err(e) => {
                    tracing::warn!(joint = %joint, axis = %axis, degrees, "skipping instruction: {}", e);
                    report.skipped += 1;
                }
            },
        }
    }
    report
}
