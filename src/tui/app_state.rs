use std::path::PathBuf;

/// Selector lifecycle. `Confirmed` and `Cancelled` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorState {
    Browsing,
    Confirmed(PathBuf),
    Cancelled,
}

/// Outcome handed back to the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(PathBuf),
    Cancelled,
}

/// A decoded keypress the selector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Cancel,
    Confirm,
    Up,
    Down,
    First,
    Last,
}
