//! User actions understood by the navigation controller.

/// A discrete input event, already decoded from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the previous entry, wrapping to the last one
    MoveUp,
    /// Select the next entry, wrapping to the first one
    MoveDown,
    /// Enter the selected directory (or the parent for `..`)
    Activate,
    /// Go to the parent directory whatever is selected
    Ascend,
    /// Re-read the current directory
    Refresh,
    /// Leave the browser
    Quit,
}

/// What the event loop should do after an action was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Quit,
}
