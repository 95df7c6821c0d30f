//! Motion sub-dispatch (cursor movement).
//!
//! Every motion goes through `View`, which snaps the column after vertical moves.
//! Scroll changes are detected by the caller, so motions always report clean.

use super::DispatchResult;
use crate::MotionKind;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let store = &state.store;
    let (line, col) = (view.line(), view.column());
    match kind {
        MotionKind::Left => view.move_left(),
        MotionKind::Right => view.move_right(store),
        MotionKind::Up => view.move_up(store),
        MotionKind::Down => view.move_down(store),
        MotionKind::PageUp => view.page_up(store, state.settings.page_rows),
        MotionKind::PageDown => view.page_down(store, state.settings.page_rows),
        MotionKind::LineStart => view.home(),
        MotionKind::LineEnd => view.end(store),
    }
    tracing::trace!(
        target: "actions.dispatch",
        op = "motion",
        ?kind,
        line,
        col,
        to_line = view.line(),
        to_col = view.column(),
        "motion"
    );
    DispatchResult::clean()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::TextStore;

    #[test]
    fn page_motions_use_configured_step() {
        let mut state = EditorState::new(TextStore::from_bytes("x\n".repeat(100)));
        state.settings.page_rows = 7;
        let mut view = View::new(11, 80);
        handle_motion(MotionKind::PageDown, &mut state, &mut view);
        assert_eq!(view.scroll_row(), 7);
        handle_motion(MotionKind::PageDown, &mut state, &mut view);
        assert_eq!(view.scroll_row(), 14);
        handle_motion(MotionKind::PageUp, &mut state, &mut view);
        assert_eq!(view.scroll_row(), 7);
    }

    #[test]
    fn motions_never_mark_modified() {
        let mut state = EditorState::new(TextStore::from_bytes("abc\ndef\n"));
        let mut view = View::new(10, 80);
        for kind in [
            MotionKind::Right,
            MotionKind::Down,
            MotionKind::LineEnd,
            MotionKind::LineStart,
            MotionKind::Up,
            MotionKind::Left,
        ] {
            let r = handle_motion(kind, &mut state, &mut view);
            assert!(!r.dirty);
        }
        assert!(!state.modified);
    }
}
