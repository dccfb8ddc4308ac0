//! Terminal implementation of the UI port.

use std::cell::{Cell, RefCell};
use std::io::Write;

use jellyreboot_app::ports::Ui;
use jellyreboot_domain::view::View;

/// Writes status lines and alerts to a terminal (or any writer).
///
/// Views have no visual counterpart here; losing the session is reported
/// once when the view falls back to login.
pub struct TerminalUi<W> {
    out: RefCell<W>,
    view: Cell<View>,
}

impl TerminalUi<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalUi<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            view: Cell::new(View::Login),
        }
    }

    fn line(&self, text: std::fmt::Arguments<'_>) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Ui for TerminalUi<W> {
    fn show(&self, view: View) {
        let previous = self.view.replace(view);
        tracing::debug!(?previous, ?view, "view changed");
        if previous.is_content() && view.is_login() {
            self.line(format_args!("session ended, credentials rejected"));
        }
    }

    fn set_status_text(&self, text: &str) {
        self.line(format_args!("status:  {text}"));
    }

    fn set_details_text(&self, text: &str) {
        self.line(format_args!("details: {text}"));
    }

    fn set_restart_enabled(&self, enabled: bool) {
        if !enabled {
            self.line(format_args!("restarting container..."));
        }
    }

    fn alert(&self, message: &str) {
        self.line(format_args!("{message}"));
    }
}
