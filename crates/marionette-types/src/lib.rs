//! Shared types for the Marionette voice-driven skeleton.
//!
//! This crate holds the vocabulary every other crate speaks: the closed set
//! of addressable joints, the rotation axes, and the movement instructions
//! produced by the command interpreter and consumed by the rig.
//!
//! Wire names match the browser client: joints use camelCase
//! (`leftShoulder`), axes are lowercase (`x`), and instructions serialize as
//! `{"type":"move","joint":..,"axis":..,"angle":..}` or `{"type":"reset"}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod instruction;
pub use instruction::MovementInstruction;

/// Addressable joints of the humanoid rig.
///
/// The declaration order is the canonical enumeration order used by the
/// command interpreter when emitting per-joint instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JointId {
    Head,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    Spine,
    Hips,
}

impl JointId {
    /// Every joint, in canonical enumeration order.
    pub const ALL: [JointId; 15] = [
        Self::Head,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::Spine,
        Self::Hips,
    ];

    /// Returns the wire name of this joint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::LeftShoulder => "leftShoulder",
            Self::RightShoulder => "rightShoulder",
            Self::LeftElbow => "leftElbow",
            Self::RightElbow => "rightElbow",
            Self::LeftWrist => "leftWrist",
            Self::RightWrist => "rightWrist",
            Self::LeftHip => "leftHip",
            Self::RightHip => "rightHip",
            Self::LeftKnee => "leftKnee",
            Self::RightKnee => "rightKnee",
            Self::LeftAnkle => "leftAnkle",
            Self::RightAnkle => "rightAnkle",
            Self::Spine => "spine",
            Self::Hips => "hips",
        }
    }
}

impl std::fmt::Display for JointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JointId {
    type Err = ParseJointIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|joint| joint.as_str() == s)
            .ok_or_else(|| ParseJointIdError(s.to_string()))
    }
}

/// Error returned when parsing an unknown joint name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown joint: {0}")]
pub struct ParseJointIdError(pub String);

/// Rotation axis in the joint's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the wire name of this axis.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// Returns the unit vector along this axis as `[x, y, z]`.
    pub fn unit(self) -> [f32; 3] {
        match self {
            Self::X => [1.0, 0.0, 0.0],
            Self::Y => [0.0, 1.0, 0.0],
            Self::Z => [0.0, 0.0, 1.0],
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joint_names_round_trip() {
        for joint in JointId::ALL {
            assert_eq!(joint.as_str().parse::<JointId>(), Ok(joint));
        }
    }

    #[test]
    fn joint_unknown_name() {
        assert_eq!(
            "neck".parse::<JointId>(),
            Err(ParseJointIdError("neck".to_string()))
        );
        assert!("LeftShoulder".parse::<JointId>().is_err());
    }

    #[test]
    fn joint_order_is_declaration_order() {
        let mut sorted = JointId::ALL;
        sorted.sort();
        assert_eq!(sorted, JointId::ALL);
        assert_eq!(JointId::ALL[0], JointId::Head);
        assert_eq!(JointId::ALL[14], JointId::Hips);
    }

    #[test]
    fn joint_serde_uses_wire_name() {
        let json = serde_json::to_string(&JointId::RightAnkle).unwrap();
        assert_eq!(json, "\"rightAnkle\"");
        let axis = serde_json::to_string(&Axis::Z).unwrap();
        assert_eq!(axis, "\"z\"");
    }
}
