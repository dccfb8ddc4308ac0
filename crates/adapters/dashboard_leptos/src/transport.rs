//! Browser transport wrapping `gloo-net` for calls to the management API.

use gloo_net::http::{Method as FetchMethod, RequestBuilder};
use jellyreboot_app::ports::{ApiRequest, ApiResponse, HttpTransport, Method};
use jellyreboot_domain::error::SessionError;

/// Error raised by the browser fetch layer.
#[derive(Debug, Clone)]
pub struct FetchError {
    pub message: String,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FetchError {}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<FetchError> for SessionError {
    fn from(err: FetchError) -> Self {
        SessionError::transport(err)
    }
}

/// [`HttpTransport`] issuing `fetch` requests relative to the page origin.
#[derive(Debug, Clone, Default)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    /// Transport for an API served from `base_url` instead of the page
    /// origin.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

async fn fetch(url: &str, request: ApiRequest) -> Result<ApiResponse, FetchError> {
    let method = match request.method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
    };
    let mut builder = RequestBuilder::new(url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match request.body {
        Some(body) => builder.body(body)?,
        None => builder.build()?,
    };

    let resp = prepared.send().await?;
    let status = resp.status();
    let body = resp.binary().await?;
    Ok(ApiResponse::new(status, body))
}

impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, SessionError> {
        let url = format!("{}{}", self.base_url, request.path);
        Ok(fetch(&url, request).await?)
    }
}
