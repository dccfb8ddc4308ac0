//! Transport configuration.

use serde::Deserialize;

/// Where the management API lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Origin of the API, e.g. `http://nas.local:8000`.
    pub base_url: String,
    /// Per-request timeout in seconds. `None` waits for the network stack.
    pub timeout_secs: Option<u64>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: None,
        }
    }
}
