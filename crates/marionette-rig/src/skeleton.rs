//! The humanoid rig: joint registry, bones and pose snapshots.

use crate::error::RigError;
use crate::layout::{JointSpec, CANONICAL_BONES, CANONICAL_JOINTS};
use crate::math::{Quat, Vec3};
use crate::sink::MotionSink;
use marionette_types::{Axis, JointId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Live state of one joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigJoint {
    pub name: &'static str,
    pub position: Vec3,
    pub radius: f32,
    /// Accumulated orientation relative to the canonical pose.
    pub rotation: Quat,
}

impl RigJoint {
    fn from_spec(spec: &JointSpec) -> Self {
        Self {
            name: spec.name,
            position: spec.position,
            radius: spec.radius,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Serializable view of one joint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointPose {
    pub name: String,
    pub position: [f32; 3],
    pub radius: f32,
    /// Quaternion as `[x, y, z, w]`.
    pub rotation: [f32; 4],
    pub euler_degrees: [f32; 3],
}

/// Serializable view of one bone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonePose {
    pub from: String,
    pub to: String,
    pub length: f32,
    pub midpoint: [f32; 3],
}

/// Snapshot of the whole rig, suitable for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub joints: Vec<JointPose>,
    pub bones: Vec<BonePose>,
}

/// A procedurally built humanoid skeleton.
///
/// The joint registry is created from a fixed layout and replaced wholesale
/// on [`reset_pose`](MotionSink::reset_pose).
#[derive(Debug, Clone)]
pub struct Skeleton {
    layout: &'static [JointSpec],
    bones: &'static [(&'static str, &'static str)],
    joints: HashMap<&'static str, RigJoint>,
}

impl Skeleton {
    /// Builds the default humanoid in its canonical pose.
    pub fn new() -> Self {
        Self::with_layout(CANONICAL_JOINTS, CANONICAL_BONES)
    }

    /// Builds a rig from a custom layout. Bones naming absent joints are
    /// left out of pose snapshots.
    pub fn with_layout(
        layout: &'static [JointSpec],
        bones: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            layout,
            bones,
            joints: build_registry(layout),
        }
    }

    pub fn joint(&self, name: &str) -> Option<&RigJoint> {
        self.joints.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.joints.contains_key(name)
    }

    /// Joint names in layout order.
    pub fn joint_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.layout.iter().map(|spec| spec.name)
    }

    /// Rotates a joint addressed by its wire name, including structural
    /// joints such as `neck` that have no [`JointId`].
    pub fn rotate_named(&mut self, name: &str, axis: Axis, degrees: f32) -> Result<(), RigError> {
        let joint = self
            .joints
            .get_mut(name)
            .ok_or_else(|| RigError::UnknownJoint(name.to_string()))?;
        joint.rotation = joint.rotation.rotate_local(axis, degrees);
        tracing::debug!(joint = name, axis = %axis, degrees, "rotated joint");
        Ok(())
    }

    /// True when no joint carries any rotation.
    pub fn is_canonical(&self) -> bool {
        self.joints
            .values()
            .all(|joint| joint.rotation == Quat::IDENTITY)
    }

    pub fn pose(&self) -> Pose {
        let joints = self
            .layout
            .iter()
            .filter_map(|spec| self.joints.get(spec.name))
            .map(|joint| JointPose {
                name: joint.name.to_string(),
                position: joint.position.to_array(),
                radius: joint.radius,
                rotation: joint.rotation.to_array(),
                euler_degrees: joint.rotation.to_euler_degrees(),
            })
            .collect();

        let bones = self
            .bones
            .iter()
            .filter_map(|(from, to)| {
                let a = self.joints.get(from)?;
                let b = self.joints.get(to)?;
                Some(BonePose {
                    from: from.to_string(),
                    to: to.to_string(),
                    length: (b.position - a.position).length(),
                    midpoint: a.position.midpoint(b.position).to_array(),
                })
            })
            .collect();

        Pose { joints, bones }
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionSink for Skeleton {
    fn rotate_joint(&mut self, joint: JointId, axis: Axis, degrees: f32) -> Result<(), RigError> {
        self.rotate_named(joint.as_str(), axis, degrees)
    }

    fn reset_pose(&mut self) {
        self.joints = build_registry(self.layout);
        tracing::debug!(joints = self.joints.len(), "skeleton reset to canonical pose");
    }
}

fn build_registry(layout: &'static [JointSpec]) -> HashMap<&'static str, RigJoint> {
    layout
        .iter()
        .map(|spec| (spec.name, RigJoint::from_spec(spec)))
        .collect()
}
