use core_model::EditorModel;
use core_render::{MemorySurface, PaintSurface, RenderScope, Renderer};
use core_state::EditorState;
use core_text::TextStore;
use pretty_assertions::assert_eq;

fn setup(text: &str, rows: usize, cols: usize) -> (EditorModel, MemorySurface, Renderer) {
    let mut state = EditorState::with_file(TextStore::from_bytes(text), "notes.txt");
    state.take_dirty();
    (
        EditorModel::new(state, rows, cols),
        MemorySurface::new(rows, cols),
        Renderer::new(),
    )
}

#[test]
fn full_frame_paints_text_filler_and_status() {
    let (model, mut surface, mut renderer) = setup("alpha\nbeta\n", 5, 30);
    renderer.render(&model, &mut surface, RenderScope::Full).unwrap();
    assert_eq!(
        surface.lines(),
        vec!["alpha", "beta", "~", "~", "notes.txt | Ln 1, Col 1"]
    );
    assert_eq!(surface.cursor(), (0, 0));
    assert_eq!(surface.refresh_count(), 1);
}

#[test]
fn unterminated_last_line_is_shown() {
    let (model, mut surface, mut renderer) = setup("one\ntwo", 4, 20);
    renderer.render(&model, &mut surface, RenderScope::Full).unwrap();
    assert_eq!(surface.lines()[..3].to_vec(), vec!["one", "two", "~"]);
}

#[test]
fn empty_buffer_shows_one_blank_line() {
    let (model, mut surface, mut renderer) = setup("", 4, 20);
    renderer.render(&model, &mut surface, RenderScope::Full).unwrap();
    assert_eq!(surface.lines()[..3].to_vec(), vec!["", "~", "~"]);
}

#[test]
fn horizontal_scroll_slices_lines() {
    let (mut model, mut surface, mut renderer) = setup("0123456789\nab\n", 4, 4);
    let (state, view) = model.split_mut();
    view.end(&state.store);
    renderer.render(&model, &mut surface, RenderScope::Full).unwrap();
    // scroll_col = 10 - 4 + 1 = 7
    assert_eq!(model.view().scroll_col(), 7);
    assert_eq!(surface.row_text(0), "789");
    assert_eq!(surface.row_text(1), "");
    assert_eq!(surface.cursor(), (0, 3));
}

#[test]
fn control_bytes_render_as_question_marks() {
    let (model, mut surface, mut renderer) = setup("a\tb\x01\u{e9}\n", 3, 20);
    renderer.render(&model, &mut surface, RenderScope::Full).unwrap();
    // é is two bytes in UTF-8
    assert_eq!(surface.row_text(0), "a?b???");
}

#[test]
fn status_is_truncated_to_width() {
    let (model, mut surface, mut renderer) = setup("x\n", 3, 8);
    renderer.render(&model, &mut surface, RenderScope::Full).unwrap();
    assert_eq!(surface.row_text(2), "notes.tx");
}

#[test]
fn status_scope_leaves_text_rows() {
    let (mut model, mut surface, mut renderer) = setup("abc\n", 3, 40);
    renderer.render(&model, &mut surface, RenderScope::Full).unwrap();
    // scribble on a text row; a status-only frame must not repaint it
    surface.paint_char(1, 5, b'#');
    model.state_mut().set_status("hello");
    model.state_mut().modified = true;
    renderer.render(&model, &mut surface, RenderScope::StatusLine).unwrap();
    assert_eq!(surface.row_text(1), "~    #");
    assert_eq!(surface.row_text(2), "notes.txt* | Ln 1, Col 1 | hello");
    assert_eq!(renderer.stats().full_frames, 1);
    assert_eq!(renderer.stats().status_frames, 1);
}

#[test]
fn prompt_takes_over_status_row_and_cursor() {
    let (mut model, mut surface, mut renderer) = setup("abc\n", 3, 20);
    model.state_mut().prompt.begin();
    model.state_mut().prompt.push(b'b');
    model.state_mut().prompt.push(b'c');
    renderer.render(&model, &mut surface, RenderScope::Full).unwrap();
    assert_eq!(surface.row_text(2), "Find: bc");
    assert_eq!(surface.cursor(), (2, 8));
}

#[test]
fn shorter_line_clears_leftovers() {
    let (mut model, mut surface, mut renderer) = setup("abcdef\n", 3, 20);
    renderer.render(&model, &mut surface, RenderScope::Full).unwrap();
    model.state_mut().store = TextStore::from_bytes("ab\n");
    renderer.render(&model, &mut surface, RenderScope::Full).unwrap();
    assert_eq!(surface.row_text(0), "ab");
}

#[test]
fn scope_follows_dirty_flag() {
    assert_eq!(RenderScope::for_dirty(true), RenderScope::Full);
    assert_eq!(RenderScope::for_dirty(false), RenderScope::StatusLine);
}

#[test]
fn status_row_is_reverse_video_and_maps_characters() {
    let mut state = EditorState::with_file(TextStore::from_bytes("x\n"), "café.txt");
    state.take_dirty();
    let model = EditorModel::new(state, 3, 30);
    let mut surface = MemorySurface::new(3, 30);
    Renderer::new()
        .render(&model, &mut surface, RenderScope::Full)
        .unwrap();
    // one substitute per character, not per UTF-8 byte
    assert_eq!(surface.row_text(2), "caf?.txt | Ln 1, Col 1");
    assert!(surface.row_is_reversed(2));
    assert!(!surface.row_is_reversed(0));
}
