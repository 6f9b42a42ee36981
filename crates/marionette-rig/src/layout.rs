//! Canonical joint positions and bone connections.
//!
//! The same layout is used every time the rig is built or reset.

use crate::math::Vec3;

/// Static description of one rig joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSpec {
    pub name: &'static str,
    pub position: Vec3,
    pub radius: f32,
}

const fn joint(name: &'static str, x: f32, y: f32, z: f32) -> JointSpec {
    JointSpec {
        name,
        position: Vec3::new(x, y, z),
        radius: 0.1,
    }
}

/// Joints of the default humanoid, in build order.
///
/// `neck` is structural: it anchors bones but has no voice phrases.
pub const CANONICAL_JOINTS: &[JointSpec] = &[
    JointSpec {
        name: "head",
        position: Vec3::new(0.0, 1.7, 0.0),
        radius: 0.15,
    },
    joint("neck", 0.0, 1.5, 0.0),
    joint("spine", 0.0, 1.0, 0.0),
    joint("hips", 0.0, 0.8, 0.0),
    joint("leftShoulder", -0.3, 1.4, 0.0),
    joint("leftElbow", -0.7, 1.2, 0.0),
    joint("leftWrist", -1.0, 1.0, 0.0),
    joint("rightShoulder", 0.3, 1.4, 0.0),
    joint("rightElbow", 0.7, 1.2, 0.0),
    joint("rightWrist", 1.0, 1.0, 0.0),
    joint("leftHip", -0.2, 0.7, 0.0),
    joint("leftKnee", -0.3, 0.4, 0.0),
    joint("leftAnkle", -0.35, 0.1, 0.0),
    joint("rightHip", 0.2, 0.7, 0.0),
    joint("rightKnee", 0.3, 0.4, 0.0),
    joint("rightAnkle", 0.35, 0.1, 0.0),
];

/// Bones as `(from, to)` joint names.
pub const CANONICAL_BONES: &[(&str, &str)] = &[
    ("head", "neck"),
    ("neck", "spine"),
    ("spine", "hips"),
    ("neck", "leftShoulder"),
    ("leftShoulder", "leftElbow"),
    ("leftElbow", "leftWrist"),
    ("neck", "rightShoulder"),
    ("rightShoulder", "rightElbow"),
    ("rightElbow", "rightWrist"),
    ("hips", "leftHip"),
    ("leftHip", "leftKnee"),
    ("leftKnee", "leftAnkle"),
    ("hips", "rightHip"),
    ("rightHip", "rightKnee"),
    ("rightKnee", "rightAnkle"),
];
