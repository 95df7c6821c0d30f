//! Flat byte store backing the editor.
//!
//! The whole file lives in one `Vec<u8>`. Positions are plain byte offsets; line
//! structure is derived on demand by the scans in [`lines`]. The store operates on
//! single-byte code units and never interprets encodings.
//!
//! Invariants:
//! * `len()` always equals the number of logical bytes; no terminator is stored.
//! * Once any byte has been inserted the store holds at least one newline
//!   (line-bootstrap rule, see [`TextStore::insert_at`]).

pub mod io;
pub mod lines;

pub use io::{DiskStorage, IoError, SaveReport, Storage, backup_path};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStore {
    bytes: Vec<u8>,
}

impl TextStore {
    /// Empty store (a new, unnamed buffer).
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Insert `byte` at `offset` (clamped to `len()`).
    ///
    /// Line-bootstrap: when the store holds no newline yet, a `\n` is appended first
    /// so the single existing line becomes terminated. Typing into an empty store
    /// therefore produces `"h\n"`, `"hi\n"`, ... with the typed text on line 0.
    /// The newline always goes at the end, also for a non-empty unterminated
    /// store: inserting `x` at 1 in `"abc"` gives `"axbc\n"`, keeping the whole
    /// line intact rather than splitting it at the insertion point.
    pub fn insert_at(&mut self, offset: usize, byte: u8) {
        if self.line_count() == 0 {
            tracing::trace!(target: "text", len = self.bytes.len(), "line_bootstrap");
            self.bytes.push(b'\n');
        }
        let at = offset.min(self.bytes.len());
        self.bytes.insert(at, byte);
    }

    /// Remove the byte at `offset`; no-op when `offset >= len()`.
    pub fn delete_at(&mut self, offset: usize) -> Option<u8> {
        if offset >= self.bytes.len() {
            return None;
        }
        Some(self.bytes.remove(offset))
    }

    pub fn line_of(&self, offset: usize) -> usize {
        lines::line_of(&self.bytes, offset)
    }

    pub fn offset_of_line(&self, line: usize) -> usize {
        lines::offset_of_line(&self.bytes, line)
    }

    /// Number of newline bytes in the store.
    pub fn line_count(&self) -> usize {
        lines::line_count(&self.bytes)
    }

    /// Number of lines the cursor may occupy (never zero).
    pub fn line_total(&self) -> usize {
        lines::line_total(&self.bytes)
    }

    pub fn line_len(&self, line: usize) -> usize {
        lines::line_len(&self.bytes, line)
    }

    /// Content of `line` without its newline; empty past end.
    pub fn line_bytes(&self, line: usize) -> &[u8] {
        &self.bytes[lines::line_range(&self.bytes, line)]
    }

    /// First occurrence of `query` starting at or after `from`.
    pub fn find(&self, query: &[u8], from: usize) -> Option<usize> {
        if query.is_empty() || from >= self.bytes.len() {
            return None;
        }
        self.bytes[from..]
            .windows(query.len())
            .position(|w| w == query)
            .map(|i| from + i)
    }
}
