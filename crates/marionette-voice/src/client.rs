use crate::config::ConvaiConfig;
use crate::error::VoiceError;
use serde::Deserialize;
use std::time::Duration;

/// Maximum upstream error body kept for diagnostics.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Deserialize)]
struct SignedUrlBody {
    signed_url: String,
}

/// Client for the conversational voice provider's credential endpoint.
#[derive(Debug, Clone)]
pub struct ConvaiClient {
    config: ConvaiConfig,
    http: reqwest::Client,
}

impl ConvaiClient {
    pub fn new(config: ConvaiConfig) -> Result<Self, VoiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn agent_id(&self) -> &str {
        &self.config.agent_id
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_complete()
    }

    /// Fetches a short-lived signed session URL for the configured agent.
    ///
    /// # Errors
    ///
    /// - [`VoiceError::MissingConfig`] if the agent id or API key is unset.
    /// - [`VoiceError::Http`] on transport failure or timeout.
    /// - [`VoiceError::Upstream`] if the provider answers with a non-success status.
    /// - [`VoiceError::MalformedResponse`] if the body lacks `signed_url`.
    pub async fn get_signed_url(&self) -> Result<String, VoiceError> {
        if self.config.agent_id.trim().is_empty() {
            return Err(VoiceError::MissingConfig("agent_id".to_string()));
        }
        if self.config.api_key.trim().is_empty() {
            return Err(VoiceError::MissingConfig("api_key".to_string()));
        }

        let url = format!(
            "{}/v1/convai/conversation/get_signed_url",
            self.config.base_url.trim_end_matches('/')
        );

        tracing::debug!(agent_id = %self.config.agent_id, "requesting signed url");

        let response = self
            .http
            .get(&url)
            .query(&[("agent_id", self.config.agent_id.as_str())])
            .header("xi-api-key", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(VoiceError::Upstream {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let parsed: SignedUrlBody = serde_json::from_str(&body)
            .map_err(|e| VoiceError::MalformedResponse(e.to_string()))?;
        Ok(parsed.signed_url)
    }
}
