//! Procedural humanoid rig and the motion sink contract.
//!
//! The rig is a fixed set of joints at canonical positions, connected by
//! bones. Each joint carries an orientation accumulator; rotations compose
//! onto the current orientation around the joint's local axis. Joints do
//! not propagate rotation to their children.
//!
//! Anything that wants to be driven by movement instructions implements
//! [`MotionSink`]; [`apply_instructions`] feeds a parsed command into one.

pub mod error;
pub mod layout;
pub mod math;
pub mod sink;
pub mod skeleton;

pub use error::RigError;
pub use layout::{JointSpec, CANONICAL_BONES, CANONICAL_JOINTS};
pub use math::{Quat, Vec3};
pub use sink::{apply_instructions, ApplyReport, MotionSink};
pub use skeleton::{BonePose, JointPose, Pose, RigJoint, Skeleton};
