//! Dispatcher applying `Action` to the editor model.
//!
//! Sub-modules:
//! * `motion` - cursor movement
//! * `edit`   - text mutation (insert/delete/backspace/newline/tab)
//! * `search` - find prompt and find-next
//!
//! Save lives in `io_ops`; Quit is handled inline.
//!
//! Every dispatch first clears the previous status message. Any change of the
//! view's scroll offsets marks the state dirty so the runtime repaints the text
//! rows; otherwise only the status line is redrawn.

use crate::{Action, io_ops};
use core_model::EditorModel;
use core_state::EditorState;

mod edit;
mod motion;
mod search;

pub const MSG_UNSAVED_QUIT: &str = "Unsaved changes. Press Ctrl-Q again to quit";

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: false,
            quit: true,
        }
    }
}

/// Apply an action to the model. `dirty` in the result mirrors the state's
/// repaint flag after the action ran.
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    let before = model.view().scroll();
    {
        let state = model.state_mut();
        state.clear_status();
        if action != Action::Quit {
            state.quit_armed = false;
        }
    }

    let mut result = match action {
        Action::Motion(kind) => {
            let (state, view) = model.split_mut();
            motion::handle_motion(kind, state, view)
        }
        Action::Edit(kind) => {
            let (state, view) = model.split_mut();
            edit::handle_edit(kind, state, view)
        }
        Action::Find => search::begin_find(model),
        Action::FindNext => search::find_next(model),
        Action::Prompt(p) => search::handle_prompt(p, model),
        Action::Save => {
            io_ops::save_buffer(model.state_mut());
            DispatchResult::clean()
        }
        Action::Quit => handle_quit(model.state_mut()),
    };

    if model.view().scroll() != before {
        model.state_mut().dirty = true;
    }
    result.dirty |= model.state().dirty;
    tracing::trace!(
        target: "actions.dispatch",
        ?action,
        dirty = result.dirty,
        quit = result.quit,
        "dispatched"
    );
    result
}

fn handle_quit(state: &mut EditorState) -> DispatchResult {
    if state.modified && !state.quit_armed {
        // the prompt owns the status row; close it so the warning is visible
        if state.prompt.is_active() {
            state.prompt.cancel();
        }
        state.quit_armed = true;
        state.set_status(MSG_UNSAVED_QUIT);
        tracing::info!(target: "actions.dispatch", op = "quit", "refused: unsaved changes");
        return DispatchResult::clean();
    }
    DispatchResult::quit()
}
