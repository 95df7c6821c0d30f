#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, dispatch, translate_key};
use core_events::{Key, ScriptedKeys};
use core_model::EditorModel;
use core_state::EditorState;
use core_text::TextStore;

pub fn model(text: &str, rows: usize, cols: usize) -> EditorModel {
    let mut m = EditorModel::new(EditorState::new(TextStore::from_bytes(text)), rows, cols);
    m.state_mut().take_dirty();
    m
}

/// Translate and dispatch one key the way the runtime does.
pub fn press(model: &mut EditorModel, key: Key) -> DispatchResult {
    match translate_key(model.state().prompt.is_active(), key) {
        Some(action) => dispatch(action, model),
        None => DispatchResult::clean(),
    }
}

pub fn press_all(model: &mut EditorModel, keys: &[Key]) {
    for &k in keys {
        press(model, k);
    }
}

pub fn type_text(model: &mut EditorModel, text: &str) {
    press_all(model, &ScriptedKeys::typed(text));
}

/// `(line, column)` of the cursor.
pub fn pos(model: &EditorModel) -> (usize, usize) {
    (model.view().line(), model.view().column())
}

pub fn text(model: &EditorModel) -> String {
    String::from_utf8_lossy(model.state().store.as_bytes()).into_owned()
}
