//! Voice command interpretation for the Marionette skeleton.
//!
//! Turns free-form transcript text into an ordered list of
//! [`MovementInstruction`]s by scanning for joint phrases, direction words
//! and magnitude modifiers. This is deliberately keyword scanning, not
//! language understanding: no tokenization, no grammar, first match wins.
//!
//! # Rules
//!
//! | Step | Behaviour |
//! |------|-----------|
//! | reset | "reset", "start over" or "initial position" yields `[Reset]` and nothing else |
//! | per joint | for each joint mentioned, in [`JointId::ALL`] order, the first direction word picks axis and sign; no direction, no instruction |
//! | magnitude | default 30 degrees, replaced by the first magnitude word keeping the sign |
//! | composites | wave left, wave right, nod, shake head, appended in that order |
//!
//! [`JointId::ALL`]: marionette_types::JointId::ALL

pub mod interpreter;
pub mod keywords;

pub use interpreter::{parse_command, parse_optional, CommandInterpreter};
pub use keywords::{DirectionKeyword, KeywordTables, DEFAULT_MAGNITUDE_DEGREES};
pub use marionette_types::MovementInstruction;
