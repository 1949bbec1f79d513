//! Lifecycle of create/edit/delete dialogs.
//!
//! DESIGN
//! ======
//! A dialog is `Closed`, `Open`, or `Submitting`. Only `Open -> Submitting`
//! hands out the mode to act on, so each confirmation click produces at most
//! one mutation and a second click during flight is ignored.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// What an open dialog is doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit { id: String },
    Delete { id: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open(DialogMode),
    Submitting(DialogMode),
}

impl DialogState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    #[must_use]
    pub fn mode(&self) -> Option<&DialogMode> {
        match self {
            Self::Closed => None,
            Self::Open(mode) | Self::Submitting(mode) => Some(mode),
        }
    }

    /// Open in `mode`. Ignored while a submission is in flight.
    pub fn open(&mut self, mode: DialogMode) {
        if !self.is_submitting() {
            *self = Self::Open(mode);
        }
    }

    /// Close the dialog. Ignored while a submission is in flight.
    pub fn close(&mut self) {
        if !self.is_submitting() {
            *self = Self::Closed;
        }
    }

    /// Move `Open -> Submitting` and return the mode to submit.
    ///
    /// Returns `None` when closed or already submitting.
    pub fn begin_submit(&mut self) -> Option<DialogMode> {
        let Self::Open(mode) = self else {
            return None;
        };
        let mode = mode.clone();
        *self = Self::Submitting(mode.clone());
        Some(mode)
    }

    /// Settle a submission: success closes, failure reopens for correction.
    pub fn finish(&mut self, succeeded: bool) {
        let Self::Submitting(mode) = self else {
            return;
        };
        *self = if succeeded { Self::Closed } else { Self::Open(mode.clone()) };
    }
}

/// Whether a form dialog's save control is enabled.
///
/// Edits of forms that require dirtiness stay disabled until the current
/// values differ from the ones the dialog opened with.
#[must_use]
pub fn save_enabled<F: PartialEq>(state: &DialogState, require_dirty_edit: bool, initial: &F, current: &F) -> bool {
    match state {
        DialogState::Open(DialogMode::Edit { .. }) => !require_dirty_edit || initial != current,
        DialogState::Open(_) => true,
        DialogState::Closed | DialogState::Submitting(_) => false,
    }
}
