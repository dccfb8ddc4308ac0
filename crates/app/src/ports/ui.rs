//! UI port — the handful of page elements the session drives.

use jellyreboot_domain::view::View;

/// Rendering surface for the session: two panels, two text fields, one
/// button and a way to alert the user.
///
/// Implementations must make exactly one panel visible after [`Ui::show`].
pub trait Ui {
    /// Make `view` the visible panel and hide the other one.
    fn show(&self, view: View);

    /// Write the container state line.
    fn set_status_text(&self, text: &str);

    /// Write the `ps` details line.
    fn set_details_text(&self, text: &str);

    /// Enable or disable the restart control.
    fn set_restart_enabled(&self, enabled: bool);

    /// Show a blocking or transient message to the user.
    fn alert(&self, message: &str);
}

impl<T: Ui> Ui for std::rc::Rc<T> {
    fn show(&self, view: View) {
        (**self).show(view);
    }

    fn set_status_text(&self, text: &str) {
        (**self).set_status_text(text);
    }

    fn set_details_text(&self, text: &str) {
        (**self).set_details_text(text);
    }

    fn set_restart_enabled(&self, enabled: bool) {
        (**self).set_restart_enabled(enabled);
    }

    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}
