use super::app_state::{Action, Selection, SelectorState};
use crate::candidate::Candidate;

/// Rows shown at once; the rest of the ranking is dropped.
pub const MAX_DISPLAY: usize = 20;

pub struct SelectorApp<'a> {
    pub(super) items: &'a [Candidate],
    pub(super) cursor: usize,
    pub(super) state: SelectorState,
}

impl<'a> SelectorApp<'a> {
    /// `candidates` must be non-empty and already ranked.
    pub fn new(candidates: &'a [Candidate]) -> Self {
        SelectorApp {
            items: &candidates[..candidates.len().min(MAX_DISPLAY)],
            cursor: 0,
            state: SelectorState::Browsing,
        }
    }

    pub fn is_browsing(&self) -> bool {
        self.state == SelectorState::Browsing
    }

    /// Applies one action. Returns true when the list must be redrawn.
    pub fn apply(&mut self, action: Action) -> bool {
        if !self.is_browsing() || self.items.is_empty() {
            return false;
        }
        let n = self.items.len();
        match action {
            Action::Cancel => {
                self.state = SelectorState::Cancelled;
                false
            }
            Action::Confirm => {
                self.state = SelectorState::Confirmed(self.items[self.cursor].path.clone());
                false
            }
            Action::Up => {
                self.cursor = (self.cursor + n - 1) % n;
                true
            }
            Action::Down => {
                self.cursor = (self.cursor + 1) % n;
                true
            }
            Action::First => {
                self.cursor = 0;
                true
            }
            Action::Last => {
                self.cursor = n - 1;
                true
            }
        }
    }

    pub fn into_selection(self) -> Selection {
        match self.state {
            SelectorState::Confirmed(path) => Selection::Chosen(path),
            SelectorState::Browsing | SelectorState::Cancelled => Selection::Cancelled,
        }
    }
}
