//! Voice session plumbing for Marionette.
//!
//! Two halves live here:
//!
//! - [`ConvaiClient`] exchanges the server-held API key for a short-lived
//!   signed URL from the conversational voice provider, so the browser can
//!   open a session without ever seeing the key.
//! - [`SessionShell`] consumes the provider's session callbacks (connect,
//!   disconnect, mode change, transcript, error), suppresses duplicate
//!   transcripts, and drives the command interpreter into a
//!   [`MotionSink`](marionette_rig::MotionSink).

pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use client::ConvaiClient;
pub use config::{ConvaiConfig, DEFAULT_CONVAI_BASE_URL};
pub use error::VoiceError;
pub use session::{
    IgnoreReason, SessionEvent, SessionShell, SessionStatus, SessionUpdate, SpeakingMode,
};
