//! Editor model: the editor state paired with its single viewport.
//!
//! `EditorState` owns the text and session flags; `View` owns scroll offsets and
//! the on-screen cursor. Handlers that need both take them through
//! [`EditorModel::split_mut`] so the borrows stay disjoint.
//!
//! Invariants (hold after every public call):
//! * the view's logical line is a navigable line of the store.
//! * the view's logical column is at most that line's length.
//! * any change of scroll offsets sets `state.dirty`.

use core_state::EditorState;

pub mod view;
pub use view::View;

pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState, rows: usize, cols: usize) -> Self {
        Self {
            state,
            view: View::new(rows, cols),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
    pub fn view(&self) -> &View {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn split_mut(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }

    /// Byte offset of the cursor within the store.
    pub fn cursor_offset(&self) -> usize {
        self.view.cursor_offset(&self.state.store)
    }

    /// Apply new terminal geometry. Always requests a full repaint.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.view.resize(rows, cols);
        self.state.dirty = true;
        tracing::debug!(target: "model.view", rows, cols, "resize");
    }

    /// Advance the search cursor and move the view onto the match.
    /// Returns the match offset, or `None` if the query occurs nowhere.
    pub fn find_next(&mut self) -> Option<usize> {
        let found = self.state.search.find_next(&self.state.store)?;
        let line = self.state.store.line_of(found);
        let col = found - self.state.store.offset_of_line(line);
        let before = self.view.scroll();
        self.view.reveal(line, col);
        if self.view.scroll() != before {
            self.state.dirty = true;
        }
        tracing::trace!(target: "model.view", offset = found, line, col, "reveal match");
        Some(found)
    }
}
