//! Payloads returned by the container management API.

use serde::{Deserialize, Serialize};

/// Body of `GET /status`.
///
/// The server may attach extra diagnostic fields (such as `debug`); they are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerStatus {
    /// Container state as reported by the engine (`running`, `exited`, …).
    pub status: String,
    /// One-line `ps` summary of the container.
    pub ps: String,
}

/// Body of a successful `POST /restart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestartReply {
    pub message: String,
}
