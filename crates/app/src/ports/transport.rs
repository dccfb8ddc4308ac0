//! Transport port — sends requests to the container management API.

use std::future::Future;

use jellyreboot_domain::error::SessionError;
use serde::de::DeserializeOwned;

/// HTTP method of an outbound request. Only the verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Caller-supplied part of a request: method, extra headers, optional body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post() -> Self {
        Self {
            method: Method::Post,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A fully built request, as handed to the transport.
///
/// `path` is relative to the API origin (e.g. `/status`); adapters resolve it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// First value of header `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The raw response: status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the `2xx` range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Pass the response through when `2xx`, otherwise fail with
    /// [`SessionError::Http`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Http`] carrying the status code.
    pub fn error_for_status(self) -> Result<Self, SessionError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SessionError::Http {
                status: self.status,
            })
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SessionError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Sends requests to the management API.
///
/// Futures are not required to be `Send`: browser fetch futures are not, and
/// the session runs on a single UI loop anyway.
pub trait HttpTransport {
    /// Send `request` and resolve with whatever status the server returned.
    ///
    /// Only failures to obtain a response at all are errors
    /// ([`SessionError::Transport`]); non-2xx statuses are not.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, SessionError>>;
}

impl<T: HttpTransport> HttpTransport for std::rc::Rc<T> {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, SessionError>> {
        (**self).send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jellyreboot_domain::status::ContainerStatus;

    #[test]
    fn should_build_post_with_headers() {
        let options = RequestOptions::post().header("Content-Type", "application/json");
        assert_eq!(options.method, Method::Post);
        assert_eq!(
            options.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        assert!(options.body.is_none());
    }

    #[test]
    fn should_find_header_case_insensitively() {
        let request = ApiRequest {
            method: Method::Get,
            path: "/status".to_string(),
            headers: vec![("Authorization".to_string(), "Basic abc".to_string())],
            body: None,
        };
        assert_eq!(request.header("authorization"), Some("Basic abc"));
        assert_eq!(request.header("content-type"), None);
    }

    #[test]
    fn should_treat_2xx_as_success() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(199, "").is_success());
        assert!(!ApiResponse::new(302, "").is_success());
        assert!(!ApiResponse::new(500, "").is_success());
    }

    #[test]
    fn should_map_non_success_to_http_error() {
        let result = ApiResponse::new(503, "").error_for_status();
        assert!(matches!(result, Err(SessionError::Http { status: 503 })));
    }

    #[test]
    fn should_decode_json_body() {
        let response = ApiResponse::new(200, r#"{"status":"running","ps":"jellyfin - Up"}"#);
        let status: ContainerStatus = response.json().unwrap();
        assert_eq!(status.status, "running");
    }

    #[test]
    fn should_report_decode_error_for_html_body() {
        let response = ApiResponse::new(200, "<html></html>");
        let result = response.json::<ContainerStatus>();
        assert!(matches!(result, Err(SessionError::Decode(_))));
    }
}
