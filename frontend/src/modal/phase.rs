//! Visibility state of a modal dialog.
//!
//! The widget reports `shown` / `hidden` through DOM events; the component
//! asks for a close with `request_close`. Only a hide that completes a close
//! we requested carries the exit hook (restoring the page body), so a user
//! dismissing the dialog through the widget's own controls leaves the body
//! alone.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Closing,
}

impl ModalPhase {
    pub fn shown(&mut self) {
        *self = ModalPhase::Open;
    }

    /// Marks a programmatic close as started.
    ///
    /// Returns `false` when the dialog is already closed or closing and the
    /// widget must not be asked; a hide on a hidden dialog emits no
    /// `hidden` event that could complete the close.
    pub fn request_close(&mut self) -> bool {
        if *self != ModalPhase::Open {
            return false;
        }
        *self = ModalPhase::Closing;
        true
    }

    /// Abandons a requested close, e.g. when the dialog is not in the page.
    pub fn abandon_close(&mut self) {
        if *self == ModalPhase::Closing {
            *self = ModalPhase::Closed;
        }
    }

    /// Handles the widget's "fully hidden" notification.
    ///
    /// Returns `true` when the exit hook must run.
    pub fn hidden(&mut self) -> bool {
        let run_exit_hook = *self == ModalPhase::Closing;
        *self = ModalPhase::Closed;
        run_exit_hook
    }
}
