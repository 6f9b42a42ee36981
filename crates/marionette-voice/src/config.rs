use serde::{Deserialize, Serialize};
use std::fmt;

/// Production endpoint of the conversational voice API.
pub const DEFAULT_CONVAI_BASE_URL: &str = "https://api.elevenlabs.io";

fn default_base_url() -> String {
    DEFAULT_CONVAI_BASE_URL.to_string()
}

fn default_request_timeout_seconds() -> u64 {
    10
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ConvaiConfig {
    /// Conversational agent to open sessions with.
    #[serde(default)]
    pub agent_id: String,
    /// Provider API key. Never leaves the server.
    #[serde(default, skip_serializing)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout for signed URL requests. Default: 10 seconds.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl Default for ConvaiConfig {
    fn default() -> Self {
        Self {
            agent_id: String::new(),
            api_key: String::new(),
            base_url: default_base_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

impl fmt::Debug for ConvaiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvaiConfig")
            .field("agent_id", &self.agent_id)
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

impl ConvaiConfig {
    pub fn new(agent_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// True when both the agent id and the API key are present.
    pub fn is_complete(&self) -> bool {
        !self.agent_id.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}
