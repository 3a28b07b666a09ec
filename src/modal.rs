//! Preview Modal State
//!
//! Selection plus presence (enter/exit) state for the lightbox.

use std::time::Duration;

/// How long a closed lightbox stays mounted for its fade-out
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Currently previewed item, if any
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState<T> {
    selected: Option<T>,
}

impl<T> ModalState<T> {
    /// Replaces any current selection (last open wins)
    pub fn open(&mut self, item: T) {
        self.selected = Some(item);
    }

    /// Idempotent
    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

/// Render phase of the lightbox
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Hidden,
    Shown,
    /// Closed but still mounted while the exit transition runs
    Leaving,
}

impl Presence {
    /// Next phase when the selection becomes `open`
    pub fn on_selection(self, open: bool) -> Presence {
        match (self, open) {
            (_, true) => Presence::Shown,
            (Presence::Shown, false) => Presence::Leaving,
            (other, false) => other,
        }
    }

    /// Next phase when the exit timer fires
    pub fn on_exit_elapsed(self) -> Presence {
        match self {
            Presence::Leaving => Presence::Hidden,
            other => other,
        }
    }

    pub fn is_mounted(self) -> bool {
        !matches!(self, Presence::Hidden)
    }
}
