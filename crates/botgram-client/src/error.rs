use botgram_types::ResponseParameters;
use thiserror::Error;

/// Top-level error type for the client.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or connection failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Malformed JSON in a response body.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed envelope with `ok: false`, carrying the
    /// server-supplied code and description.
    #[error("telegram error {code}: {description}")]
    Remote {
        code: i64,
        description: String,
        /// Flood-control and migration hints, passed through untouched.
        parameters: Option<ResponseParameters>,
    },

    /// An outbound payload failed validation; nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
