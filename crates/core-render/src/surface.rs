//! Paint surface abstraction.
//!
//! The renderer only knows how to put single bytes at `(row, col)`, clear the
//! tail of a row and park the hardware cursor. [`crate::TerminalSurface`] turns
//! those calls into crossterm commands; [`MemorySurface`] keeps a byte grid for
//! tests and headless runs.

use anyhow::Result;

pub trait PaintSurface {
    fn paint_char(&mut self, row: usize, col: usize, byte: u8);
    /// Blank `row` from `from_col` to the right edge.
    fn clear_row(&mut self, row: usize, from_col: usize);
    fn move_cursor(&mut self, row: usize, col: usize);
    /// Push everything painted since the last refresh to the screen.
    fn refresh(&mut self) -> Result<()>;
    /// Geometry as `(rows, cols)`.
    fn size(&self) -> (usize, usize);
    /// Adopt new geometry after the terminal was resized.
    fn resize(&mut self, rows: usize, cols: usize);
    /// Paint subsequent cells in reverse video until switched off.
    fn set_reverse(&mut self, on: bool);
}

/// In-memory grid of bytes. Cells never painted hold a space.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
    cursor: (usize, usize),
    refreshes: usize,
    reverse: bool,
    /// Per-cell reverse-video flag.
    reversed: Vec<bool>,
}

impl MemorySurface {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![b' '; rows * cols],
            cursor: (0, 0),
            refreshes: 0,
            reverse: false,
            reversed: vec![false; rows * cols],
        }
    }

    /// Row contents with trailing blanks removed.
    pub fn row_text(&self, row: usize) -> String {
        let start = row * self.cols;
        let cells = &self.cells[start..start + self.cols];
        String::from_utf8_lossy(cells).trim_end().to_string()
    }

    /// All rows, trailing blanks removed.
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows).map(|r| self.row_text(r)).collect()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    /// True when every cell of `row` was last painted in reverse video.
    pub fn row_is_reversed(&self, row: usize) -> bool {
        let start = row * self.cols;
        self.reversed[start..start + self.cols].iter().all(|&r| r)
    }
}

impl PaintSurface for MemorySurface {
    fn paint_char(&mut self, row: usize, col: usize, byte: u8) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = byte;
            self.reversed[row * self.cols + col] = self.reverse;
        }
    }

    fn clear_row(&mut self, row: usize, from_col: usize) {
        if row < self.rows && from_col < self.cols {
            let start = row * self.cols;
            self.cells[start + from_col..start + self.cols].fill(b' ');
            self.reversed[start + from_col..start + self.cols].fill(self.reverse);
        }
    }

    fn move_cursor(&mut self, row: usize, col: usize) {
        self.cursor = (row, col);
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        Ok(())
    }

    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Contents are blanked as a terminal would after a resize.
    fn resize(&mut self, rows: usize, cols: usize) {
        *self = Self {
            refreshes: self.refreshes,
            ..Self::new(rows, cols)
        };
    }

    fn set_reverse(&mut self, on: bool) {
        self.reverse = on;
    }
}
