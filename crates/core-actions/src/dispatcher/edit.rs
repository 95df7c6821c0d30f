//! Text edit handling (insert, newline, tab, delete, backspace).
//!
//! Edits address the store at the cursor's logical offset
//! (`offset_of_line(line) + column`). After each mutation the view is restored
//! (line clamp, then column snap) so the cursor never points past the text.

use super::DispatchResult;
use crate::EditKind;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let (line, col) = (view.line(), view.column());
    let changed = match kind {
        EditKind::InsertByte(b) => {
            insert_byte(state, view, b);
            true
        }
        EditKind::InsertTab => {
            for _ in 0..state.settings.tab_width {
                insert_byte(state, view, b' ');
            }
            true
        }
        EditKind::InsertNewline => {
            let at = view.cursor_offset(&state.store);
            state.store.insert_at(at, b'\n');
            view.next_line_start();
            true
        }
        EditKind::DeleteUnder => {
            let at = view.cursor_offset(&state.store);
            state.store.delete_at(at).is_some()
        }
        EditKind::Backspace => backspace(state, view),
    };
    if !changed {
        return DispatchResult::clean();
    }
    state.note_edit();
    view.restore(&state.store);
    tracing::trace!(
        target: "actions.dispatch",
        op = "edit",
        ?kind,
        line,
        col,
        to_line = view.line(),
        to_col = view.column(),
        len = state.store.len(),
        "edit"
    );
    DispatchResult::dirty()
}

fn insert_byte(state: &mut EditorState, view: &mut View, byte: u8) {
    let at = view.cursor_offset(&state.store);
    state.store.insert_at(at, byte);
    view.advance_column();
}

/// Delete the byte before the cursor. At column 0 this removes the newline that
/// ends the previous line and moves to that line's former end (scrolling up
/// one row when the cursor is on the top row). No-op at the start of the file.
fn backspace(state: &mut EditorState, view: &mut View) -> bool {
    let at = view.cursor_offset(&state.store);
    if at == 0 {
        return false;
    }
    if view.column() > 0 {
        state.store.delete_at(at - 1);
        view.move_left();
        return true;
    }
    let prev_len = state.store.line_len(view.line() - 1);
    state.store.delete_at(at - 1);
    view.step_up();
    view.place_column(prev_len);
    true
}
