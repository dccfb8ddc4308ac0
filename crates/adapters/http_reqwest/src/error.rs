//! reqwest adapter error types.

use jellyreboot_domain::error::SessionError;

/// Errors specific to the reqwest transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or no response arrived.
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),
}

impl From<TransportError> for SessionError {
    fn from(err: TransportError) -> Self {
        SessionError::transport(err)
    }
}
