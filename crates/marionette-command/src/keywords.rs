//! Static keyword tables.
//!
//! Tables are ordered association lists rather than maps: the scan order is
//! the tie-break order, so it has to be stable and explicit.

use marionette_types::{Axis, JointId};

/// Rotation applied when a direction is recognized but no magnitude word is.
pub const DEFAULT_MAGNITUDE_DEGREES: f32 = 30.0;

/// Phrases that trigger a full reset of the rig.
pub const RESET_PHRASES: &[&str] = &["reset", "start over", "initial position"];

/// A direction word and the signed axis it selects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionKeyword {
    pub word: &'static str,
    pub axis: Axis,
    /// `1.0` or `-1.0`.
    pub sign: f32,
}

const fn dir(word: &'static str, axis: Axis, sign: f32) -> DirectionKeyword {
    DirectionKeyword { word, axis, sign }
}

const JOINT_PHRASES: &[(JointId, &[&str])] = &[
    (JointId::Head, &["head", "neck", "face"]),
    (JointId::LeftShoulder, &["left shoulder", "left arm"]),
    (JointId::RightShoulder, &["right shoulder", "right arm"]),
    (JointId::LeftElbow, &["left elbow", "left forearm"]),
    (JointId::RightElbow, &["right elbow", "right forearm"]),
    (JointId::LeftWrist, &["left wrist", "left hand"]),
    (JointId::RightWrist, &["right wrist", "right hand"]),
    (JointId::LeftHip, &["left hip"]),
    (JointId::RightHip, &["right hip"]),
    (JointId::LeftKnee, &["left knee", "left leg"]),
    (JointId::RightKnee, &["right knee", "right leg"]),
    (JointId::LeftAnkle, &["left ankle", "left foot"]),
    (JointId::RightAnkle, &["right ankle", "right foot"]),
    (JointId::Spine, &["back", "spine", "torso", "body"]),
    (JointId::Hips, &["hips", "waist", "pelvis"]),
];

const DIRECTIONS: &[DirectionKeyword] = &[
    dir("up", Axis::Y, 1.0),
    dir("down", Axis::Y, -1.0),
    dir("left", Axis::X, -1.0),
    dir("right", Axis::X, 1.0),
    dir("forward", Axis::Z, -1.0),
    dir("backward", Axis::Z, 1.0),
    dir("clockwise", Axis::Y, -1.0),
    dir("counterclockwise", Axis::Y, 1.0),
    dir("bend", Axis::X, 1.0),
    dir("straighten", Axis::X, -1.0),
    dir("rotate", Axis::Y, 1.0),
    dir("twist", Axis::Z, 1.0),
];

const MAGNITUDES: &[(&str, f32)] = &[
    ("slightly", 15.0),
    ("little", 20.0),
    ("bit", 20.0),
    ("somewhat", 30.0),
    ("partially", 45.0),
    ("halfway", 45.0),
    ("moderately", 60.0),
    ("significantly", 75.0),
    ("fully", 90.0),
    ("completely", 90.0),
    ("all", 90.0),
    ("maximum", 90.0),
];

/// The immutable vocabulary used by the interpreter.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTables {
    pub joints: &'static [(JointId, &'static [&'static str])],
    pub directions: &'static [DirectionKeyword],
    pub magnitudes: &'static [(&'static str, f32)],
    pub reset_phrases: &'static [&'static str],
}

impl KeywordTables {
    /// The built-in English vocabulary.
    pub const STANDARD: KeywordTables = KeywordTables {
        joints: JOINT_PHRASES,
        directions: DIRECTIONS,
        magnitudes: MAGNITUDES,
        reset_phrases: RESET_PHRASES,
    };

    /// Iterates every joint trigger phrase across all joints.
    pub fn all_joint_phrases(&self) -> impl Iterator<Item = &'static str> {
        self.joints.iter().flat_map(|(_, phrases)| phrases.iter().copied())
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_joint_has_phrases_in_enumeration_order() {
        let tables = KeywordTables::STANDARD;
        let order: Vec<JointId> = tables.joints.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, JointId::ALL.to_vec());
        for (joint, phrases) in tables.joints {
            assert!(!phrases.is_empty(), "{joint} has no phrases");
        }
    }

    #[test]
    fn phrases_are_lowercase() {
        let tables = KeywordTables::STANDARD;
        let words = tables
            .all_joint_phrases()
            .chain(tables.directions.iter().map(|d| d.word))
            .chain(tables.magnitudes.iter().map(|(w, _)| *w))
            .chain(tables.reset_phrases.iter().copied());
        for word in words {
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn magnitudes_within_quarter_turn() {
        for (word, degrees) in KeywordTables::STANDARD.magnitudes {
            assert!(
                *degrees > 0.0 && *degrees <= 90.0,
                "{word} out of range: {degrees}"
            );
        }
    }

    #[test]
    fn direction_signs_are_unit() {
        for direction in KeywordTables::STANDARD.directions {
            assert_eq!(direction.sign.abs(), 1.0, "{}", direction.word);
        }
    }
}
