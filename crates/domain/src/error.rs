//! Error kinds shared by every session operation.

/// Boxed error produced by a transport adapter.
pub type TransportSource = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by the session client and its ports.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A request was attempted while no credentials were set.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The server answered `401 Unauthorized`.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The server answered with a non-2xx status other than 401.
    #[error("HTTP error, status: {status}")]
    Http { status: u16 },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[source] TransportSource),

    /// The response body did not match the expected JSON shape.
    #[error("invalid response body")]
    Decode(#[from] serde_json::Error),
}

impl SessionError {
    /// Wrap an adapter-specific failure as [`SessionError::Transport`].
    pub fn transport(err: impl Into<TransportSource>) -> Self {
        Self::Transport(err.into())
    }

    /// Whether this error means the session is no longer authenticated.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::AuthenticationFailed)
    }
}
