use thiserror::Error;

/// Failure taxonomy for everything the client does against the outside
/// world. Nothing here is fatal; every variant resolves to a recoverable UI
/// state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (network, timeout, DNS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an error status. `message` carries the
    /// backend-provided text when present, else a generic fallback, and is
    /// what gets surfaced to the user verbatim.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The attestation widget was unavailable or rejected the attempt. No
    /// backend call was made.
    #[error("reCAPTCHA verification failed")]
    Attestation(String),

    /// A required field was empty; handled locally, no network involved.
    #[error("{0}")]
    Validation(&'static str),
}
