//! Find prompt and repeatable search.
//!
//! Find opens the prompt; Confirm installs the query (restarting from the top of
//! the store) and jumps to the first match. FindNext repeats the active query
//! from just past the previous match, wrapping once.

use super::DispatchResult;
use crate::PromptAction;
use core_model::EditorModel;

pub(crate) const MSG_NO_ACTIVE: &str = "No active search";
pub(crate) const MSG_CANCELLED: &str = "Search cancelled";

pub(crate) fn begin_find(model: &mut EditorModel) -> DispatchResult {
    model.state_mut().prompt.begin();
    tracing::trace!(target: "actions.dispatch", op = "find_prompt", "open");
    DispatchResult::clean()
}

pub(crate) fn handle_prompt(action: PromptAction, model: &mut EditorModel) -> DispatchResult {
    let state = model.state_mut();
    match action {
        PromptAction::Char(b) => state.prompt.push(b),
        PromptAction::Backspace => state.prompt.backspace(),
        PromptAction::Cancel => {
            state.prompt.cancel();
            state.set_status(MSG_CANCELLED);
        }
        PromptAction::Confirm => {
            let query = state.prompt.finish();
            if query.is_empty() {
                state.set_status(MSG_CANCELLED);
            } else {
                state.search.set_query(query);
                return find_next(model);
            }
        }
    }
    DispatchResult::clean()
}

pub(crate) fn find_next(model: &mut EditorModel) -> DispatchResult {
    if !model.state().search.is_active() {
        model.state_mut().set_status(MSG_NO_ACTIVE);
        return DispatchResult::clean();
    }
    match model.find_next() {
        Some(offset) => {
            tracing::debug!(target: "search", offset, "found");
        }
        None => {
            let state = model.state_mut();
            let query = String::from_utf8_lossy(state.search.query()).into_owned();
            tracing::debug!(target: "search", %query, "not found");
            state.set_status(format!("Not found: {query}"));
        }
    }
    DispatchResult::clean()
}
