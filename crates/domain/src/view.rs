//! View — which of the two mutually exclusive panels is visible.

/// The visible panel. Exactly one is shown at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Login form; the initial view.
    #[default]
    Login,
    /// Status panel with the restart control.
    Content,
}

impl View {
    /// View after a successful login verification.
    #[must_use]
    pub fn on_login_verified(self) -> Self {
        Self::Content
    }

    /// View after a `401` response or a logout, from any state.
    #[must_use]
    pub fn on_session_lost(self) -> Self {
        Self::Login
    }

    #[must_use]
    pub fn is_login(self) -> bool {
        self == Self::Login
    }

    #[must_use]
    pub fn is_content(self) -> bool {
        self == Self::Content
    }
}
