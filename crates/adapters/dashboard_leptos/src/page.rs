//! Reactive page state — the [`Ui`] port backed by Leptos signals.

use jellyreboot_app::ports::Ui;
use jellyreboot_domain::view::View;
use leptos::prelude::*;

/// Signals rendered by [`crate::App`]. Copying is cheap; all copies share
/// the same signals.
#[derive(Debug, Clone, Copy)]
pub struct PageUi {
    pub view: RwSignal<View>,
    pub status: RwSignal<String>,
    pub details: RwSignal<String>,
    pub restart_enabled: RwSignal<bool>,
}

impl PageUi {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(View::Login),
            status: RwSignal::new(String::new()),
            details: RwSignal::new(String::new()),
            restart_enabled: RwSignal::new(true),
        }
    }
}

impl Default for PageUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for PageUi {
    fn show(&self, view: View) {
        self.view.set(view);
    }

    fn set_status_text(&self, text: &str) {
        self.status.set(text.to_string());
    }

    fn set_details_text(&self, text: &str) {
        self.details.set(text.to_string());
    }

    fn set_restart_enabled(&self, enabled: bool) {
        self.restart_enabled.set(enabled);
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    leptos::logging::warn!("alert suppressed: {message}");
                }
            }
            None => leptos::logging::warn!("no window to alert: {message}"),
        }
    }
}
