//! # jellyreboot-adapter-http-reqwest
//!
//! Native implementation of the [`HttpTransport`] port on top of `reqwest`.
//!
//! Request paths produced by the session (`/status`, `/restart`) are resolved
//! against the configured base URL. Every status code, `401` included, is
//! handed back to the session untouched; only failures to get a response at
//! all become errors.

pub mod config;
pub mod error;

use std::time::Duration;

use jellyreboot_app::ports::{ApiRequest, ApiResponse, HttpTransport, Method};
use jellyreboot_domain::error::SessionError;

pub use config::TransportConfig;
pub use error::TransportError;

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport for the API at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(TransportError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, SessionError> {
        let url = self.url(&request.path);
        let mut builder = self.http.request(to_reqwest_method(request.method), &url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(TransportError::Body)?;
        tracing::trace!(%url, status, len = body.len(), "response read");

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}
