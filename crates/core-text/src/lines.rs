//! Line addressing over a flat byte slice.
//!
//! Every query is a linear scan; nothing is cached. Callers recompute after each
//! mutation, which keeps the store the single source of truth at the cost of
//! O(length) per call. A maintained array of line-start offsets would remove the
//! scans for large files but is not needed for interactive editing.
//!
//! Numbering:
//! * Line of an offset = number of `\n` bytes strictly before it (zero-based).
//! * Offset of line N = one past the Nth `\n`, `0` for N = 0, or the slice length
//!   when the slice holds fewer than N newlines ("past end").
//! * `line_count` counts newline bytes; `line_total` counts lines the cursor may
//!   visit (a final unterminated or empty line included).

/// Line number containing `offset`.
pub fn line_of(bytes: &[u8], offset: usize) -> usize {
    let end = offset.min(bytes.len());
    bytes[..end].iter().filter(|b| **b == b'\n').count()
}

/// Byte offset of the first byte of line `line`; `bytes.len()` when past end.
pub fn offset_of_line(bytes: &[u8], line: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut seen = 0usize;
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'\n' {
            seen += 1;
            if seen == line {
                return i + 1;
            }
        }
    }
    bytes.len()
}

/// Number of newline bytes.
pub fn line_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|b| **b == b'\n').count()
}

/// Number of lines a cursor may occupy.
///
/// An empty slice, or one whose last byte is not a newline, has one more line than
/// it has newlines. A slice ending in `\n` does not expose the empty line after it.
pub fn line_total(bytes: &[u8]) -> usize {
    let newlines = line_count(bytes);
    match bytes.last() {
        Some(b'\n') => newlines,
        _ => newlines + 1,
    }
}

/// Content range of `line`, excluding its terminating newline.
pub fn line_range(bytes: &[u8], line: usize) -> std::ops::Range<usize> {
    let start = offset_of_line(bytes, line);
    let mut end = offset_of_line(bytes, line + 1);
    if end > start && bytes[end - 1] == b'\n' {
        end -= 1;
    }
    start..end
}

/// Length of `line` in bytes, excluding its newline. Zero past end.
pub fn line_len(bytes: &[u8], line: usize) -> usize {
    line_range(bytes, line).len()
}
