//! Viewport + cursor scroll state machine.
//!
//! State is four integers plus geometry:
//! * `scroll_row` / `scroll_col`: logical line and column shown at screen (0, 0).
//! * `cursor_row` / `cursor_col`: cursor relative to the viewport.
//!
//! The bottom screen row is reserved for the status line, so text occupies
//! `rows - 1` rows and `cursor_row` ranges over `[0, rows - 2]`.
//!
//! Invariants after every public call that takes the store:
//! * logical line `scroll_row + cursor_row` is a navigable line of the store.
//! * logical column `scroll_col + cursor_col` is at most that line's length
//!   (equality means "after the last byte").
//! * `cursor_col <= cols - 1`.
//!
//! Column placement shares one rule (`place_column`): a column narrower than the
//! screen resets horizontal scroll to 0; a wider one scrolls so the column sits in
//! the last screen column. Vertical moves, End, edits and search all go through it
//! via `snap`.

use core_text::TextStore;

/// Minimum geometry: one text row plus the status row, one column.
pub const MIN_ROWS: usize = 2;
pub const MIN_COLS: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    rows: usize,
    cols: usize,
    scroll_row: usize,
    scroll_col: usize,
    cursor_row: usize,
    cursor_col: usize,
}

impl View {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(MIN_ROWS),
            cols: cols.max(MIN_COLS),
            scroll_row: 0,
            scroll_col: 0,
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// Screen rows available for text (status row excluded).
    pub fn text_rows(&self) -> usize {
        self.rows - 1
    }
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }
    pub fn scroll_col(&self) -> usize {
        self.scroll_col
    }
    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }
    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    /// `(scroll_row, scroll_col)`; callers compare before/after a command to decide
    /// whether the text area needs repainting.
    pub fn scroll(&self) -> (usize, usize) {
        (self.scroll_row, self.scroll_col)
    }

    /// Logical line under the cursor.
    pub fn line(&self) -> usize {
        self.scroll_row + self.cursor_row
    }

    /// Logical column under the cursor.
    pub fn column(&self) -> usize {
        self.scroll_col + self.cursor_col
    }

    /// Hardware cursor position `(row, col)`.
    pub fn screen_cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Byte offset of the cursor within the store.
    pub fn cursor_offset(&self, store: &TextStore) -> usize {
        store.offset_of_line(self.line()) + self.column()
    }

    fn max_cursor_row(&self) -> usize {
        self.text_rows() - 1
    }

    fn max_scroll_row(&self, store: &TextStore) -> usize {
        store.line_total().saturating_sub(self.text_rows())
    }

    /// Put the logical column at `col`, choosing horizontal scroll by the shared rule.
    pub fn place_column(&mut self, col: usize) {
        if col < self.cols {
            self.scroll_col = 0;
            self.cursor_col = col;
        } else {
            self.scroll_col = col - self.cols + 1;
            self.cursor_col = self.cols - 1;
        }
    }

    /// Pull the cursor back to end-of-line when it sits past the current line.
    pub fn snap(&mut self, store: &TextStore) {
        let len = store.line_len(self.line());
        if self.column() > len {
            self.place_column(len);
        }
    }

    /// Move onto the last navigable line when the current one no longer exists.
    pub fn clamp_line(&mut self, store: &TextStore) {
        let last = store.line_total() - 1;
        if self.line() <= last {
            return;
        }
        if last < self.scroll_row {
            self.scroll_row = last.saturating_sub(self.max_cursor_row());
        }
        self.cursor_row = last - self.scroll_row;
    }

    /// Re-establish the invariants after the store changed underneath the view.
    pub fn restore(&mut self, store: &TextStore) {
        self.clamp_line(store);
        self.snap(store);
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.scroll_col > 0 {
            self.scroll_col -= 1;
        }
    }

    pub fn move_right(&mut self, store: &TextStore) {
        if self.column() < store.line_len(self.line()) {
            self.advance_column();
        }
    }

    /// One column right without consulting the line length (after an insert).
    pub fn advance_column(&mut self) {
        if self.cursor_col < self.cols - 1 {
            self.cursor_col += 1;
        } else {
            self.scroll_col += 1;
        }
    }

    /// One line up (scrolling at the top edge) without snapping.
    pub fn step_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
        } else if self.scroll_row > 0 {
            self.scroll_row -= 1;
        }
    }

    pub fn move_up(&mut self, store: &TextStore) {
        self.step_up();
        self.snap(store);
    }

    pub fn move_down(&mut self, store: &TextStore) {
        if self.line() + 1 < store.line_total() {
            if self.cursor_row < self.max_cursor_row() {
                self.cursor_row += 1;
            } else {
                self.scroll_row += 1;
            }
        }
        self.snap(store);
    }

    /// Column 0 of the next screen row, scrolling when on the last text row.
    pub fn next_line_start(&mut self) {
        self.place_column(0);
        if self.cursor_row < self.max_cursor_row() {
            self.cursor_row += 1;
        } else {
            self.scroll_row += 1;
        }
    }

    pub fn page_up(&mut self, store: &TextStore, page: usize) {
        self.scroll_row = self.scroll_row.saturating_sub(page);
        self.snap(store);
    }

    pub fn page_down(&mut self, store: &TextStore, page: usize) {
        let max = self.max_scroll_row(store);
        if self.scroll_row < max {
            self.scroll_row = (self.scroll_row + page).min(max);
        }
        self.restore(store);
    }

    pub fn home(&mut self) {
        self.place_column(0);
    }

    pub fn end(&mut self, store: &TextStore) {
        self.place_column(store.line_len(self.line()));
    }

    /// Scroll just enough to show logical `(line, col)` and put the cursor there.
    pub fn reveal(&mut self, line: usize, col: usize) {
        let height = self.text_rows();
        if line < self.scroll_row {
            self.scroll_row = line;
        } else if line >= self.scroll_row + height {
            self.scroll_row = line + 1 - height;
        }
        self.cursor_row = line - self.scroll_row;
        self.place_column(col);
    }

    /// Apply new screen geometry, keeping the cursor on the same logical position.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(MIN_ROWS);
        self.cols = cols.max(MIN_COLS);
        let max_row = self.max_cursor_row();
        if self.cursor_row > max_row {
            self.scroll_row += self.cursor_row - max_row;
            self.cursor_row = max_row;
        }
        if self.cursor_col > self.cols - 1 {
            self.scroll_col += self.cursor_col - (self.cols - 1);
            self.cursor_col = self.cols - 1;
        }
    }
}
