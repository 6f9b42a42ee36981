use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("voice provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
