//! Terminal writer: batches paint calls into crossterm commands.
//!
//! Invariants:
//! * Commands preserve ordering; nothing is written before `flush`.
//! * Positions are absolute with a (0,0) origin; callers ensure bounds.
//! * Adjacent `paint_char` calls on one row coalesce into a single `Print`.

use crate::surface::PaintSurface;
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{Stdout, Write, stdout};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    /// Clear from the current position to the end of the line.
    ClearToEnd,
    Print(String),
    /// Switch reverse video on or off.
    Reverse(bool),
}

#[derive(Default)]
pub struct Writer {
    cmds: Vec<Command>,
    /// Position the next printed byte would land on without a MoveTo.
    pen: Option<(u16, u16)>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
        self.pen = Some((x, y));
    }

    pub fn clear_to_end(&mut self) {
        self.cmds.push(Command::ClearToEnd);
    }

    pub fn reverse(&mut self, on: bool) {
        self.cmds.push(Command::Reverse(on));
    }

    /// Print one byte at `(x, y)`, extending the previous `Print` when contiguous.
    pub fn put(&mut self, x: u16, y: u16, byte: u8) {
        if self.pen != Some((x, y)) {
            self.move_to(x, y);
        }
        let ch = byte as char;
        match self.cmds.last_mut() {
            Some(Command::Print(s)) => s.push(ch),
            _ => self.cmds.push(Command::Print(ch.to_string())),
        }
        self.pen = Some((x.saturating_add(1), y));
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Emit all queued commands to `out` and flush it.
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let count = self.cmds.len();
        for c in self.cmds.drain(..) {
            match c {
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::ClearToEnd => queue!(out, Clear(ClearType::UntilNewLine))?,
                Command::Print(s) => queue!(out, Print(s))?,
                Command::Reverse(true) => queue!(out, SetAttribute(Attribute::Reverse))?,
                Command::Reverse(false) => queue!(out, SetAttribute(Attribute::NoReverse))?,
            }
        }
        self.pen = None;
        out.flush()?;
        tracing::trace!(target: "render", commands = count, "writer flush");
        Ok(())
    }
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// `PaintSurface` over a terminal output stream (stdout by default).
pub struct TerminalSurface<W: Write = Stdout> {
    out: W,
    writer: Writer,
    rows: usize,
    cols: usize,
}

impl TerminalSurface<Stdout> {
    pub fn stdout(rows: usize, cols: usize) -> Self {
        Self::new(stdout(), rows, cols)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, rows: usize, cols: usize) -> Self {
        Self {
            out,
            writer: Writer::new(),
            rows,
            cols,
        }
    }

    pub fn writer(&self) -> &Writer {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PaintSurface for TerminalSurface<W> {
    fn paint_char(&mut self, row: usize, col: usize, byte: u8) {
        self.writer.put(to_u16(col), to_u16(row), byte);
    }

    fn clear_row(&mut self, row: usize, from_col: usize) {
        if from_col < self.cols {
            self.writer.move_to(to_u16(from_col), to_u16(row));
            self.writer.clear_to_end();
        }
    }

    fn move_cursor(&mut self, row: usize, col: usize) {
        self.writer.move_to(to_u16(col), to_u16(row));
    }

    fn refresh(&mut self) -> Result<()> {
        self.writer.flush_to(&mut self.out)
    }

    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    fn set_reverse(&mut self, on: bool) {
        self.writer.reverse(on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_bytes_coalesce() {
        let mut w = Writer::new();
        w.put(0, 0, b'a');
        w.put(1, 0, b'b');
        w.put(5, 0, b'c');
        assert_eq!(
            w.commands(),
            &[
                Command::MoveTo(0, 0),
                Command::Print("ab".into()),
                Command::MoveTo(5, 0),
                Command::Print("c".into()),
            ]
        );
    }

    #[test]
    fn clear_breaks_coalescing() {
        let mut s = TerminalSurface::new(Vec::new(), 3, 10);
        s.paint_char(0, 0, b'x');
        s.clear_row(0, 1);
        s.paint_char(0, 1, b'y');
        assert_eq!(
            s.writer().commands(),
            &[
                Command::MoveTo(0, 0),
                Command::Print("x".into()),
                Command::MoveTo(1, 0),
                Command::ClearToEnd,
                Command::Print("y".into()),
            ]
        );
    }

    #[test]
    fn refresh_writes_and_drains() {
        let mut s = TerminalSurface::new(Vec::new(), 3, 10);
        s.paint_char(1, 2, b'q');
        s.move_cursor(1, 3);
        s.refresh().unwrap();
        assert!(s.writer().is_empty());
        let bytes = s.into_inner();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains('q'));
        // CSI row;col H, 1-based
        assert!(text.contains("\x1b[2;3H"));
        assert!(text.contains("\x1b[2;4H"));
    }

    #[test]
    fn reverse_video_wraps_printed_run() {
        let mut s = TerminalSurface::new(Vec::new(), 2, 10);
        s.set_reverse(true);
        s.paint_char(1, 0, b'a');
        s.paint_char(1, 1, b'b');
        s.set_reverse(false);
        assert_eq!(
            s.writer().commands(),
            &[
                Command::Reverse(true),
                Command::MoveTo(0, 1),
                Command::Print("ab".into()),
                Command::Reverse(false),
            ]
        );
        s.refresh().unwrap();
        let text = String::from_utf8_lossy(&s.into_inner()).into_owned();
        // SGR 7 on, SGR 27 off
        assert!(text.contains("\x1b[7m"));
        assert!(text.contains("\x1b[27m"));
    }
}
