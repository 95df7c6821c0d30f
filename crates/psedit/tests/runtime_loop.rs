use core_actions::io_ops;
use core_config::Config;
use core_events::{InputEvent, Key, ScriptedKeys};
use core_model::EditorModel;
use core_render::MemorySurface;
use core_state::EditorState;
use core_text::TextStore;
use pretty_assertions::assert_eq;
use psedit::{EditorRuntime, ShutdownReason};

fn runtime(
    state: EditorState,
    rows: usize,
    cols: usize,
    events: ScriptedKeys,
) -> EditorRuntime<ScriptedKeys, MemorySurface> {
    let model = EditorModel::new(state, rows, cols);
    EditorRuntime::new(model, Config::default(), events, MemorySurface::new(rows, cols))
}

fn unnamed(text: &str) -> EditorState {
    EditorState::new(TextStore::from_bytes(text))
}

#[test]
fn initial_frame_then_input_exhaustion() {
    let mut rt = runtime(unnamed("hello\n"), 4, 30, ScriptedKeys::default());
    assert_eq!(rt.run().unwrap(), ShutdownReason::InputClosed);
    assert_eq!(
        rt.surface().lines(),
        vec!["hello", "~", "~", "[No Name] | Ln 1, Col 1"]
    );
    assert_eq!(rt.renderer().stats().full_frames, 1);
}

#[test]
fn typing_repaints_and_quit_needs_confirmation() {
    let mut keys = ScriptedKeys::typed("hi");
    keys.extend([Key::Quit, Key::Quit]);
    let mut rt = runtime(unnamed(""), 4, 40, ScriptedKeys::keys(keys));
    assert_eq!(rt.run().unwrap(), ShutdownReason::Quit);
    assert_eq!(rt.surface().row_text(0), "hi");
    assert_eq!(
        rt.surface().row_text(3),
        "[No Name]* | Ln 1, Col 3 | Unsaved chang"
    );
    assert_eq!(rt.surface().cursor(), (0, 2));
}

#[test]
fn cursor_motion_repaints_status_only() {
    let keys = ScriptedKeys::keys([Key::Right, Key::Right, Key::Down]);
    let mut rt = runtime(unnamed("abc\ndef\n"), 5, 40, keys);
    rt.run().unwrap();
    let stats = rt.renderer().stats();
    assert_eq!(stats.full_frames, 1);
    assert_eq!(stats.status_frames, 3);
    assert_eq!(rt.surface().row_text(4), "[No Name] | Ln 2, Col 3");
    assert_eq!(rt.surface().cursor(), (1, 2));
}

#[test]
fn resize_repaints_at_new_geometry() {
    let mut keys = ScriptedKeys::keys([Key::End]);
    keys.push(InputEvent::Resize { cols: 4, rows: 3 });
    let mut rt = runtime(unnamed("abcdefgh\n"), 5, 40, keys);
    rt.run().unwrap();
    assert_eq!(rt.model().view().cols(), 4);
    assert_eq!(rt.surface().lines(), vec!["fgh", "~", "[No"]);
    assert_eq!(rt.surface().cursor(), (0, 3));
    assert_eq!(rt.model().state().settings.page_rows, 2);
}

#[test]
fn search_through_prompt() {
    let mut keys = vec![Key::Find];
    keys.extend(ScriptedKeys::typed("def"));
    let keys_before_enter = keys.clone();
    keys.push(Key::Enter);
    let mut rt = runtime(unnamed("abc\ndef\n"), 5, 40, ScriptedKeys::keys(keys_before_enter));
    rt.run().unwrap();
    assert_eq!(rt.surface().row_text(4), "Find: def");
    assert_eq!(rt.surface().cursor(), (4, 9));

    let mut rt = runtime(unnamed("abc\ndef\n"), 5, 40, ScriptedKeys::keys(keys));
    rt.run().unwrap();
    assert_eq!(rt.surface().cursor(), (1, 0));
    assert_eq!(rt.surface().row_text(4), "[No Name] | Ln 2, Col 1");
}

#[test]
fn save_from_the_loop_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");
    let state = io_ops::load_state(&path).unwrap();
    let mut keys = ScriptedKeys::typed("abc");
    keys.extend([Key::Save, Key::Quit]);
    let mut rt = runtime(state, 4, 40, ScriptedKeys::keys(keys));
    assert_eq!(rt.run().unwrap(), ShutdownReason::Quit);
    assert_eq!(std::fs::read(&path).unwrap(), b"abc\n");
    assert!(!core_text::backup_path(&path).exists());
}

#[test]
fn new_file_status_is_shown_on_first_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.txt");
    let state = io_ops::load_state(&path).unwrap();
    let mut rt = runtime(state, 3, 40, ScriptedKeys::default());
    rt.run().unwrap();
    assert_eq!(rt.surface().row_text(2), "fresh.txt | Ln 1, Col 1 | New file");
}

#[test]
fn unsaved_quit_warning_replaces_find_prompt() {
    let mut keys = ScriptedKeys::typed("x");
    keys.extend([Key::Find, Key::Quit]);
    let mut rt = runtime(unnamed(""), 4, 80, ScriptedKeys::keys(keys));
    assert_eq!(rt.run().unwrap(), ShutdownReason::InputClosed);
    assert_eq!(
        rt.surface().row_text(3),
        "[No Name]* | Ln 1, Col 2 | Unsaved changes. Press Ctrl-Q again to quit"
    );
    assert!(rt.model().state().quit_armed);
    assert!(!rt.model().state().prompt.is_active());
}
