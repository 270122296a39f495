//! Input interpretation and command execution.
//!
//! Keys become [`Action`]s through the mode-aware [`translate_key`]; [`dispatch`] applies an
//! action to the [`Editor`] and reports whether a redraw or exit is needed. Command lines typed
//! after `:` go through the [`CommandExecutor`]: numeric input jumps to a line, a registered verb
//! runs its handler, anything else is searched for literally.

pub mod dispatcher;
pub mod editor;
pub mod executor;
pub mod io_ops;
mod key_translator;
pub mod search;

pub use dispatcher::{DispatchResult, dispatch};
pub use editor::Editor;
pub use executor::{
    CommandContext, CommandError, CommandExecutor, CommandHandler, CommandResult,
};
pub use key_translator::translate_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    WordForward,
    WordBackward,
    PageUp,
    PageDown,
    /// Command-mode Tab.
    TabForward,
    /// Command-mode Backspace/Delete: one column without leaving the line.
    StepLeft,
    StepRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    /// Insert `tab_width` spaces.
    InsertTab,
    SplitLine,
    DeleteBackward,
    DeleteForward,
    /// New indented line below the caret, then Insert.
    OpenLineBelow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnterInsert,
    LeaveInsert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneOp {
    FocusNext,
    FocusPrevious,
    Grow,
    Shrink,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOp {
    CutLine,
    CopyLine,
    PasteBelow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    ModeChange(ModeChange),
    CommandStart,
    CommandChar(char),
    CommandBackspace,
    CommandCancel,
    /// Run the pending command text.
    CommandExecute,
    CommandHistoryOlder,
    CommandHistoryNewer,
    RepeatSearch,
    Save,
    Pane(PaneOp),
    Clipboard(ClipboardOp),
}
