//! Editor commands: key translation and dispatch.
//!
//! A key symbol becomes an [`Action`] through [`translate_key`]; [`dispatch`]
//! applies the action to the model. Handlers are split by concern under
//! `dispatcher` (motion, edit, search) with file IO in [`io_ops`].

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use key_translator::translate_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    LineStart,
    LineEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertByte(u8),
    InsertNewline,
    /// Insert `tab_width` spaces.
    InsertTab,
    /// Delete the byte under the cursor (joins lines on a newline).
    DeleteUnder,
    Backspace,
}

/// Input while the find prompt owns the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Char(u8),
    Backspace,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Save,
    Find,
    FindNext,
    Prompt(PromptAction),
    Quit,
}
