//! Screen rendering.
//!
//! The renderer walks the model once per frame and paints through a
//! [`PaintSurface`]. Two scopes exist:
//! * `Full`: every text row plus the status row. Chosen when the state's dirty
//!   flag is set (edits, scrolling, resize, first frame).
//! * `StatusLine`: only the status row. Pure cursor moves inside the viewport
//!   leave the text rows untouched.
//!
//! In both scopes the hardware cursor is repositioned and the surface refreshed.
//!
//! Text rows show the horizontal slice `[scroll_col, scroll_col + cols)` of each
//! line. Bytes outside printable ASCII paint as `?`. Rows below the last line
//! show `~` in column 0. The status row is painted in reverse video across the
//! full width.

use anyhow::Result;
use core_model::EditorModel;
use core_state::EditorState;

pub mod status;
pub mod surface;
pub mod writer;

pub use status::{StatusContext, build_status};
pub use surface::{MemorySurface, PaintSurface};
pub use writer::TerminalSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderScope {
    Full,
    StatusLine,
}

impl RenderScope {
    pub fn for_dirty(dirty: bool) -> Self {
        if dirty { Self::Full } else { Self::StatusLine }
    }
}

/// Frame counters, mostly useful in tests and debug logs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub full_frames: u64,
    pub status_frames: u64,
}

#[derive(Debug, Default)]
pub struct Renderer {
    stats: RenderStats,
}

const FILLER: u8 = b'~';
const SUBSTITUTE: u8 = b'?';

fn displayable(byte: u8) -> u8 {
    if (0x20..=0x7e).contains(&byte) {
        byte
    } else {
        SUBSTITUTE
    }
}

/// One cell per character of `status`, padded with blanks to `cols`.
/// Characters outside printable ASCII show as a single `?`.
fn status_cells(status: &str, cols: usize) -> Vec<u8> {
    let mut cells: Vec<u8> = status
        .chars()
        .take(cols)
        .map(|c| u8::try_from(c).map_or(SUBSTITUTE, displayable))
        .collect();
    cells.resize(cols, b' ');
    cells
}

/// Status line text for the current model state.
pub fn status_line(model: &EditorModel) -> String {
    let state: &EditorState = model.state();
    let view = model.view();
    let name = state.display_name();
    let ctx = StatusContext {
        name: &name,
        modified: state.modified,
        line: view.line(),
        col: view.column(),
        message: state.status.as_deref(),
        prompt: state.prompt.is_active().then(|| state.prompt.buffer()),
    };
    build_status(&ctx)
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Paint one frame. The caller clears the dirty flag afterwards.
    pub fn render<S: PaintSurface + ?Sized>(
        &mut self,
        model: &EditorModel,
        surface: &mut S,
        scope: RenderScope,
    ) -> Result<()> {
        if scope == RenderScope::Full {
            self.paint_text_rows(model, surface);
            self.stats.full_frames += 1;
        } else {
            self.stats.status_frames += 1;
        }
        let status = status_line(model);
        self.paint_status(model, surface, &status);
        self.place_cursor(model, surface, &status);
        surface.refresh()?;
        tracing::trace!(target: "render", ?scope, "frame");
        Ok(())
    }

    fn paint_text_rows<S: PaintSurface + ?Sized>(&self, model: &EditorModel, surface: &mut S) {
        let store = &model.state().store;
        let view = model.view();
        let total = store.line_total();
        let cols = view.cols();
        for row in 0..view.text_rows() {
            let line = view.scroll_row() + row;
            if line >= total {
                surface.paint_char(row, 0, FILLER);
                surface.clear_row(row, 1);
                continue;
            }
            let bytes = store.line_bytes(line);
            let start = view.scroll_col().min(bytes.len());
            let end = (start + cols).min(bytes.len());
            let slice = &bytes[start..end];
            for (col, &b) in slice.iter().enumerate() {
                surface.paint_char(row, col, displayable(b));
            }
            surface.clear_row(row, slice.len());
        }
    }

    fn paint_status<S: PaintSurface + ?Sized>(
        &self,
        model: &EditorModel,
        surface: &mut S,
        status: &str,
    ) {
        let view = model.view();
        let row = view.text_rows();
        let cells = status_cells(status, view.cols());
        surface.set_reverse(true);
        for (col, b) in cells.into_iter().enumerate() {
            surface.paint_char(row, col, b);
        }
        surface.set_reverse(false);
    }

    fn place_cursor<S: PaintSurface + ?Sized>(
        &self,
        model: &EditorModel,
        surface: &mut S,
        status: &str,
    ) {
        let view = model.view();
        if model.state().prompt.is_active() {
            let col = status.chars().count().min(view.cols() - 1);
            surface.move_cursor(view.text_rows(), col);
        } else {
            let (row, col) = view.screen_cursor();
            surface.move_cursor(row, col);
        }
    }
}
