//! Editor state: the text store plus the session metadata edit handlers touch.
//!
//! Viewport and cursor live in `core-model::View`; this crate stays store-centric.
//!
//! Flags:
//! - `dirty` requests a full repaint of the text rows. Any handler that mutates the
//!   store or scrolls sets it; the runtime clears it after painting.
//! - `modified` tracks unsaved changes for the status line and the quit check. Only
//!   a successful save clears it.
//!
//! The status message is replaced by each handler that has something to report and
//! cleared at the start of the next dispatched action.

use core_text::TextStore;
use std::path::PathBuf;

pub mod search;
pub use search::SearchCursor;

/// Tunables consumed by edit and paging handlers (filled from configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSettings {
    /// Spaces inserted for a Tab key.
    pub tab_width: usize,
    /// Lines scrolled by PageUp/PageDown.
    pub page_rows: usize,
    /// Write `<path>.bak` before overwriting an existing file.
    pub backup: bool,
}

impl EditSettings {
    pub const DEFAULT_TAB_WIDTH: usize = 4;
    pub const DEFAULT_PAGE_ROWS: usize = 20;
}

impl Default for EditSettings {
    fn default() -> Self {
        Self {
            tab_width: Self::DEFAULT_TAB_WIDTH,
            page_rows: Self::DEFAULT_PAGE_ROWS,
            backup: true,
        }
    }
}

/// Single-line input prompt shown on the status row (used by Find).
#[derive(Debug, Default, Clone)]
pub struct PromptState {
    active: bool,
    buf: Vec<u8>,
}

impl PromptState {
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }
    /// Open an empty prompt, discarding any previous input.
    pub fn begin(&mut self) {
        self.active = true;
        self.buf.clear();
    }
    pub fn push(&mut self, byte: u8) {
        if self.active {
            self.buf.push(byte);
        }
    }
    pub fn backspace(&mut self) {
        self.buf.pop();
    }
    /// Close the prompt and hand back what was typed.
    pub fn finish(&mut self) -> Vec<u8> {
        self.active = false;
        std::mem::take(&mut self.buf)
    }
    pub fn cancel(&mut self) {
        self.active = false;
        self.buf.clear();
    }
}

pub struct EditorState {
    pub store: TextStore,
    pub file_name: Option<PathBuf>,
    pub dirty: bool,
    pub modified: bool,
    pub status: Option<String>,
    pub prompt: PromptState,
    pub search: SearchCursor,
    pub settings: EditSettings,
    /// Set after a Quit was refused because of unsaved changes; a second
    /// consecutive Quit then exits.
    pub quit_armed: bool,
}

impl EditorState {
    pub fn new(store: TextStore) -> Self {
        Self {
            store,
            file_name: None,
            dirty: true,
            modified: false,
            status: None,
            prompt: PromptState::default(),
            search: SearchCursor::new(),
            settings: EditSettings::default(),
            quit_armed: false,
        }
    }

    pub fn with_file(store: TextStore, path: impl Into<PathBuf>) -> Self {
        let mut state = Self::new(store);
        state.file_name = Some(path.into());
        state
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Record a mutation of the store.
    pub fn note_edit(&mut self) {
        self.dirty = true;
        self.modified = true;
    }

    /// Return and clear the repaint flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Base file name for display, `[No Name]` for an unnamed buffer.
    pub fn display_name(&self) -> String {
        self.file_name
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[No Name]".to_string())
    }
}
