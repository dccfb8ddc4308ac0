//! Session service — authentication, status polling and restart.
//!
//! A [`SessionClient`] is created once when the front-end starts and owns
//! all session state: the credentials, the visible view and the restart
//! guard. Front-ends translate user input into [`Command`]s and hand them
//! to [`SessionClient::handle`].

use std::cell::{Cell, RefCell};

use jellyreboot_domain::credentials::{Credentials, LoginForm};
use jellyreboot_domain::error::SessionError;
use jellyreboot_domain::guard::RestartGuard;
use jellyreboot_domain::status::{ContainerStatus, RestartReply};
use jellyreboot_domain::view::View;

use crate::ports::{ApiRequest, ApiResponse, HttpTransport, RequestOptions, Ui};

/// Container status endpoint.
pub const STATUS_PATH: &str = "/status";
/// Container restart endpoint.
pub const RESTART_PATH: &str = "/restart";
/// Placeholder written to the status element when a fetch fails.
pub const STATUS_ERROR_TEXT: &str = "Error fetching status";

const AUTHORIZATION: &str = "Authorization";
const UNAUTHORIZED: u16 = 401;

/// User intent, as emitted by a front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Page load: reset to the login view.
    Initialize,
    /// Login form submitted.
    Login(LoginForm),
    /// Re-fetch the container status.
    RefreshStatus,
    /// Restart button clicked.
    Restart,
    /// Drop the session and return to the login view.
    Logout,
}

/// Result of [`SessionClient::restart_container`].
#[derive(Debug)]
pub enum RestartOutcome {
    /// Another restart was in flight; nothing happened.
    AlreadyRunning,
    /// The server accepted the restart.
    Completed(RestartReply),
    /// The restart request failed.
    Failed(SessionError),
}

/// Session state and the use-cases that drive it.
pub struct SessionClient<T, U> {
    transport: T,
    ui: U,
    credentials: RefCell<Option<Credentials>>,
    view: Cell<View>,
    restart_guard: RestartGuard,
}

impl<T: HttpTransport, U: Ui> SessionClient<T, U> {
    /// Create a session with no credentials, showing the login view.
    pub fn new(transport: T, ui: U) -> Self {
        Self {
            transport,
            ui,
            credentials: RefCell::new(None),
            view: Cell::new(View::default()),
            restart_guard: RestartGuard::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Currently visible view.
    pub fn view(&self) -> View {
        self.view.get()
    }

    /// Whether credentials are currently held.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.borrow().is_some()
    }

    /// Whether a restart is in flight.
    pub fn is_restarting(&self) -> bool {
        self.restart_guard.is_held()
    }

    /// Dispatch a front-end command. Failures are reported through the
    /// [`Ui`] by the individual operations.
    pub async fn handle(&self, command: Command) {
        match command {
            Command::Initialize => self.initialize(),
            Command::Login(form) => {
                if let Err(err) = self.login(form).await {
                    tracing::debug!(error = %err, "login command failed");
                }
            }
            Command::RefreshStatus => {
                if let Err(err) = self.fetch_status().await {
                    tracing::debug!(error = %err, "refresh command failed");
                }
            }
            Command::Restart => {
                let outcome = self.restart_container().await;
                tracing::debug!(?outcome, "restart command finished");
            }
            Command::Logout => self.logout(),
        }
    }

    /// Force the login view visible and the content view hidden.
    ///
    /// Nothing is restored from earlier sessions.
    pub fn initialize(&self) {
        self.switch_view(View::Login);
    }

    /// Send `options` to `path` with the session's Basic auth header.
    ///
    /// The computed `Authorization` header replaces any supplied by the
    /// caller. A `401` ends the session and switches to the login view.
    /// Any other status is returned as-is for the caller to check.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NotAuthenticated`] when no credentials are held;
    ///   no request is sent in that case.
    /// - [`SessionError::AuthenticationFailed`] on a `401` response.
    /// - Transport errors propagated from the adapter.
    pub async fn authenticated_request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, SessionError> {
        let authorization = self
            .credentials
            .borrow()
            .as_ref()
            .map(Credentials::basic_auth_header)
            .ok_or(SessionError::NotAuthenticated)?;

        let mut headers: Vec<(String, String)> = options
            .headers
            .into_iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case(AUTHORIZATION))
            .collect();
        headers.push((AUTHORIZATION.to_string(), authorization));

        let request = ApiRequest {
            method: options.method,
            path: path.to_string(),
            headers,
            body: options.body,
        };

        tracing::debug!(method = request.method.as_str(), path, "sending request");
        let response = self.transport.send(request).await?;
        tracing::debug!(path, status = response.status, "received response");

        if response.status == UNAUTHORIZED {
            tracing::warn!(path, "server rejected credentials");
            self.end_session();
            return Err(SessionError::AuthenticationFailed);
        }
        Ok(response)
    }

    /// Store the submitted credentials and verify them with a status fetch.
    ///
    /// On success the content view is shown. On failure the credentials are
    /// cleared and the user is alerted; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns whatever made the verification fetch fail.
    pub async fn login(&self, form: LoginForm) -> Result<(), SessionError> {
        tracing::info!(username = %form.username, "logging in");
        self.credentials.replace(Some(form.into()));

        match self.fetch_status().await {
            Ok(_) => {
                tracing::info!("login verified");
                self.switch_view(View::Content);
                Ok(())
            }
            Err(err) => {
                self.ui.alert(&format!("Login failed: {err}"));
                self.credentials.replace(None);
                Err(err)
            }
        }
    }

    /// Fetch `/status` and write the result into the status and details
    /// elements.
    ///
    /// On failure the status element shows [`STATUS_ERROR_TEXT`] and the
    /// error is returned to the caller.
    ///
    /// # Errors
    ///
    /// Any [`SessionError`]: missing credentials, `401`, non-2xx status,
    /// transport failure or an undecodable body.
    pub async fn fetch_status(&self) -> Result<ContainerStatus, SessionError> {
        match self.request_status().await {
            Ok(status) => {
                self.ui.set_status_text(&status.status);
                self.ui.set_details_text(&status.ps);
                Ok(status)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch status");
                self.ui.set_status_text(STATUS_ERROR_TEXT);
                Err(err)
            }
        }
    }

    /// Ask the server to restart the container.
    ///
    /// A no-op returning [`RestartOutcome::AlreadyRunning`] while another
    /// restart is in flight. Otherwise the restart control is disabled for
    /// the duration of the request and the user is alerted with the result.
    /// Whatever the outcome, the control is re-enabled, the guard released
    /// and one status refresh is run afterwards.
    pub async fn restart_container(&self) -> RestartOutcome {
        let Some(permit) = self.restart_guard.try_acquire() else {
            tracing::debug!("restart already in flight, ignoring");
            return RestartOutcome::AlreadyRunning;
        };
        self.ui.set_restart_enabled(false);

        let result = self.request_restart().await;
        match &result {
            Ok(reply) => {
                tracing::info!(message = %reply.message, "container restarted");
                self.ui.alert(&reply.message);
            }
            Err(err) => {
                tracing::error!(error = %err, "restart failed");
                self.ui.alert(&format!("Error restarting container: {err}"));
            }
        }

        self.ui.set_restart_enabled(true);
        drop(permit);

        // fetch_status reports its own failures in the status element
        let _ = self.fetch_status().await;

        match result {
            Ok(reply) => RestartOutcome::Completed(reply),
            Err(err) => RestartOutcome::Failed(err),
        }
    }

    /// Drop the credentials and return to the login view.
    pub fn logout(&self) {
        tracing::info!("logging out");
        self.end_session();
    }

    async fn request_status(&self) -> Result<ContainerStatus, SessionError> {
        let response = self
            .authenticated_request(STATUS_PATH, RequestOptions::get())
            .await?
            .error_for_status()?;
        response.json()
    }

    async fn request_restart(&self) -> Result<RestartReply, SessionError> {
        let options = RequestOptions::post().header("Content-Type", "application/json");
        let response = self
            .authenticated_request(RESTART_PATH, options)
            .await?
            .error_for_status()?;
        response.json()
    }

    fn end_session(&self) {
        self.credentials.replace(None);
        self.switch_view(self.view.get().on_session_lost());
    }

    fn switch_view(&self, view: View) {
        self.view.set(view);
        self.ui.show(view);
    }
}
