//! Keyword-scanning command interpreter.

use crate::keywords::{DirectionKeyword, KeywordTables, DEFAULT_MAGNITUDE_DEGREES};
use marionette_types::{Axis, JointId, MovementInstruction};

/// Byte range `[start, end)` of a joint phrase occurrence in normalized text.
type Span = (usize, usize);

/// Maps transcript text to movement instructions.
///
/// The interpreter is a pure function of its keyword tables and the input:
/// the same text always yields the same instructions in the same order.
#[derive(Debug, Clone, Copy)]
pub struct CommandInterpreter {
    tables: KeywordTables,
}

impl CommandInterpreter {
    pub const fn new() -> Self {
        Self {
            tables: KeywordTables::STANDARD,
        }
    }

    /// Parses a transcript into an ordered list of instructions.
    ///
    /// Never fails: text with no recognized phrase yields an empty list.
    pub fn parse_command(&self, text: &str) -> Vec<MovementInstruction> {
        let text = text.to_lowercase();

        if self
            .tables
            .reset_phrases
            .iter()
            .any(|phrase| text.contains(phrase))
        {
            tracing::debug!(transcript = %text, "reset phrase recognized");
            return vec![MovementInstruction::Reset];
        }

        let spans = self.joint_phrase_spans(&text);
        // Direction and magnitude lookups depend only on the text, so every
        // mentioned joint shares the same modifier.
        let modifier = self.modifier(&text, &spans);

        let mut movements = Vec::new();
        for (joint, phrases) in self.tables.joints {
            if !phrases.iter().any(|phrase| text.contains(phrase)) {
                continue;
            }
            match modifier {
                Some((axis, degrees)) => {
                    movements.push(MovementInstruction::rotate(*joint, axis, degrees));
                }
                None => {
                    tracing::debug!(joint = %joint, "joint mentioned without a direction, dropped");
                }
            }
        }

        push_composites(&text, &mut movements);

        tracing::debug!(
            transcript = %text,
            count = movements.len(),
            "parsed command"
        );
        movements
    }

    /// Like [`parse_command`](Self::parse_command), treating absent text as empty.
    pub fn parse_optional(&self, text: Option<&str>) -> Vec<MovementInstruction> {
        text.map(|t| self.parse_command(t)).unwrap_or_default()
    }

    /// Resolves the axis and signed degrees for a joint mention, if any
    /// direction word is present.
    fn modifier(&self, text: &str, spans: &[Span]) -> Option<(Axis, f32)> {
        let direction: &DirectionKeyword = self
            .tables
            .directions
            .iter()
            .find(|d| occurs_outside(text, d.word, spans))?;

        let mut degrees = DEFAULT_MAGNITUDE_DEGREES * direction.sign;
        if let Some((_, value)) = self
            .tables
            .magnitudes
            .iter()
            .find(|(word, _)| occurs_outside(text, word, spans))
        {
            degrees = value * if degrees < 0.0 { -1.0 } else { 1.0 };
        }

        Some((direction.axis, degrees))
    }

    fn joint_phrase_spans(&self, text: &str) -> Vec<Span> {
        self.tables
            .all_joint_phrases()
            .flat_map(move |phrase| {
                text.match_indices(phrase)
                    .map(move |(start, _)| (start, start + phrase.len()))
            })
            .collect()
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// True when `word` occurs in `text` at least once outside every joint phrase
/// occurrence. "left" in "left arm" names a side, not a direction.
fn occurs_outside(text: &str, word: &str, spans: &[Span]) -> bool {
    text.match_indices(word).any(|(start, _)| {
        let end = start + word.len();
        !spans.iter().any(|&(a, b)| a <= start && end <= b)
    })
}

fn push_composites(text: &str, movements: &mut Vec<MovementInstruction>) {
    let waving = text.contains("wave");

    if waving && (text.contains("left hand") || text.contains("left arm")) {
        movements.push(MovementInstruction::rotate(JointId::LeftShoulder, Axis::Y, 45.0));
        movements.push(MovementInstruction::rotate(JointId::LeftElbow, Axis::Z, 45.0));
    }
    if waving && (text.contains("right hand") || text.contains("right arm")) {
        movements.push(MovementInstruction::rotate(JointId::RightShoulder, Axis::Y, -45.0));
        movements.push(MovementInstruction::rotate(JointId::RightElbow, Axis::Z, -45.0));
    }
    if text.contains("nod") {
        movements.push(MovementInstruction::rotate(JointId::Head, Axis::X, 20.0));
    }
    if text.contains("shake head") {
        movements.push(MovementInstruction::rotate(JointId::Head, Axis::Y, 20.0));
    }
}

static DEFAULT_INTERPRETER: CommandInterpreter = CommandInterpreter::new();

/// Parses `text` with the standard vocabulary.
pub fn parse_command(text: &str) -> Vec<MovementInstruction> {
    DEFAULT_INTERPRETER.parse_command(text)
}

/// Parses optional text with the standard vocabulary; `None` yields nothing.
pub fn parse_optional(text: Option<&str>) -> Vec<MovementInstruction> {
    DEFAULT_INTERPRETER.parse_optional(text)
}
