//! Advisor error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    /// No API key was provided via the environment or configuration.
    #[error("advisor API key not configured; set FIREDRILL_API_KEY")]
    MissingApiKey,

    /// The HTTP request failed after retries.
    #[error("advisor request failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The service answered with a body we could not interpret.
    #[error("unexpected advisor response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
