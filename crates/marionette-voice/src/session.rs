//! Session shell: from provider callbacks to rig motion.

use marionette_command::CommandInterpreter;
use marionette_rig::{apply_instructions, ApplyReport, MotionSink};
use marionette_types::MovementInstruction;
use serde::{Deserialize, Serialize};

/// Whether the agent is currently talking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakingMode {
    Speaking,
    #[default]
    Listening,
}

impl SpeakingMode {
    /// Interprets the provider's mode string. Anything but `"speaking"` is
    /// treated as listening.
    pub fn from_provider(mode: &str) -> Self {
        if mode == "speaking" {
            Self::Speaking
        } else {
            Self::Listening
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Speaking => "Agent Speaking",
            Self::Listening => "Agent Silent",
        }
    }
}

/// Callbacks delivered by the voice session client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum SessionEvent {
    Connected,
    Disconnected,
    ModeChanged { mode: String },
    Transcript { text: Option<String> },
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IgnoreReason {
    EmptyTranscript,
    DuplicateTranscript,
}

/// What handling one event changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SessionUpdate {
    Status { status: SessionStatus },
    Movements {
        transcript: String,
        movements: Vec<MovementInstruction>,
        report: ApplyReport,
    },
    Ignored { reason: IgnoreReason },
    Error { message: String },
}

impl SessionUpdate {
    /// True when the update changed the motion sink.
    pub fn moved_rig(&self) -> bool {
        match self {
            Self::Movements { report, .. } => report.applied > 0 || report.resets > 0,
            _ => false,
        }
    }
}

/// Snapshot of the session's user-visible state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub connected: bool,
    pub connection_label: &'static str,
    pub mode: SpeakingMode,
    pub speaking_label: &'static str,
    pub last_command: Option<String>,
    pub last_error: Option<String>,
    pub transcripts_processed: u64,
}

/// Owns the motion sink and the per-session state around it.
///
/// Transcripts are processed to completion, one at a time: the parsed
/// instructions are applied in order before the call returns.
#[derive(Debug)]
pub struct SessionShell<S> {
    interpreter: CommandInterpreter,
    sink: S,
    last_transcript: Option<String>,
    connected: bool,
    mode: SpeakingMode,
    last_error: Option<String>,
    transcripts_processed: u64,
}

impl<S: MotionSink> SessionShell<S> {
    pub fn new(sink: S) -> Self {
        Self {
            interpreter: CommandInterpreter::new(),
            sink,
            last_transcript: None,
            connected: false,
            mode: SpeakingMode::Listening,
            last_error: None,
            transcripts_processed: 0,
        }
    }

    pub fn handle_event(&mut self, event: SessionEvent) -> SessionUpdate {
        match event {
            SessionEvent::Connected => {
                tracing::info!("voice session connected");
                self.connected = true;
                self.last_error = None;
                SessionUpdate::Status {
                    status: self.status(),
                }
            }
            SessionEvent::Disconnected => {
                tracing::info!("voice session disconnected");
                self.connected = false;
                // A dropped session can never still be speaking.
                self.mode = SpeakingMode::Listening;
                SessionUpdate::Status {
                    status: self.status(),
                }
            }
            SessionEvent::ModeChanged { mode } => {
                self.mode = SpeakingMode::from_provider(&mode);
                tracing::debug!(mode = %mode, speaking = self.mode == SpeakingMode::Speaking, "mode changed");
                SessionUpdate::Status {
                    status: self.status(),
                }
            }
            SessionEvent::Transcript { text } => self.process_transcript(text.as_deref()),
            SessionEvent::Error { message } => {
                tracing::error!(error = %message, "voice session error");
                self.last_error = Some(message.clone());
                SessionUpdate::Error { message }
            }
        }
    }

    /// Parses a transcript and applies the result to the sink.
    ///
    /// Absent or empty text and exact repeats of the last processed
    /// transcript are ignored.
    pub fn process_transcript(&mut self, text: Option<&str>) -> SessionUpdate {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => {
                return SessionUpdate::Ignored {
                    reason: IgnoreReason::EmptyTranscript,
                }
            }
        };
        if self.last_transcript.as_deref() == Some(text) {
            tracing::debug!(transcript = text, "duplicate transcript ignored");
            return SessionUpdate::Ignored {
                reason: IgnoreReason::DuplicateTranscript,
            };
        }

        self.last_transcript = Some(text.to_string());
        self.transcripts_processed += 1;
        tracing::info!(transcript = text, "processing voice command");

        let movements = self.interpreter.parse_command(text);
        let report = apply_instructions(&mut self.sink, &movements);
        if !movements.is_empty() {
            tracing::info!(
                count = movements.len(),
                applied = report.applied,
                skipped = report.skipped,
                "applied movements"
            );
        }

        SessionUpdate::Movements {
            transcript: text.to_string(),
            movements,
            report,
        }
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            connected: self.connected,
            connection_label: if self.connected {
                "Connected"
            } else {
                "Disconnected"
            },
            mode: self.mode,
            speaking_label: self.mode.label(),
            last_command: self.last_transcript.clone(),
            last_error: self.last_error.clone(),
            transcripts_processed: self.transcripts_processed,
        }
    }

    pub fn last_transcript(&self) -> Option<&str> {
        self.last_transcript.as_deref()
    }

    /// Overrides the duplicate-suppression state.
    pub fn set_last_transcript(&mut self, text: Option<String>) {
        self.last_transcript = text;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
