//! Repeatable forward search with wraparound.
//!
//! The cursor remembers the active query and the offset just past the previous
//! match. Each `find_next` scans forward from there; if the scan reaches the end
//! without a hit it retries once from offset 0. The resume offset resets to 0 when
//! it reaches or exceeds the store length.

use core_text::TextStore;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchCursor {
    query: Vec<u8>,
    resume_offset: usize,
}

impl SearchCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &[u8] {
        &self.query
    }

    /// True when a non-empty query is set.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn resume_offset(&self) -> usize {
        self.resume_offset
    }

    /// Replace the query and restart scanning from the top of the store.
    pub fn set_query(&mut self, query: impl Into<Vec<u8>>) {
        self.query = query.into();
        self.resume_offset = 0;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.resume_offset = 0;
    }

    /// Offset of the next match, or `None` when the query occurs nowhere.
    /// A miss leaves the resume offset unchanged.
    pub fn find_next(&mut self, store: &TextStore) -> Option<usize> {
        if self.query.is_empty() {
            return None;
        }
        if self.resume_offset >= store.len() {
            self.resume_offset = 0;
        }
        let start = self.resume_offset;
        let found = store.find(&self.query, start).or_else(|| {
            if start > 0 {
                tracing::trace!(target: "search", start, "wraparound");
                store.find(&self.query, 0)
            } else {
                None
            }
        })?;
        self.resume_offset = found + self.query.len();
        tracing::trace!(target: "search", offset = found, resume = self.resume_offset, "match");
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_find_advances_then_wraps() {
        let store = TextStore::from_bytes("xx foo yy foo zz");
        let mut s = SearchCursor::new();
        s.set_query("foo");
        assert_eq!(s.find_next(&store), Some(3));
        assert_eq!(s.resume_offset(), 6);
        assert_eq!(s.find_next(&store), Some(10));
        assert_eq!(s.find_next(&store), Some(3));
    }

    #[test]
    fn miss_reports_none_and_keeps_offset() {
        let store = TextStore::from_bytes("abc abc");
        let mut s = SearchCursor::new();
        s.set_query("zzz");
        assert_eq!(s.find_next(&store), None);
        assert_eq!(s.resume_offset(), 0);
    }

    #[test]
    fn empty_query_never_matches() {
        let store = TextStore::from_bytes("abc");
        let mut s = SearchCursor::new();
        assert!(!s.is_active());
        assert_eq!(s.find_next(&store), None);
    }

    #[test]
    fn resume_past_end_resets_to_start() {
        let store = TextStore::from_bytes("foo");
        let mut s = SearchCursor::new();
        s.set_query("foo");
        assert_eq!(s.find_next(&store), Some(0));
        assert_eq!(s.resume_offset(), 3);
        assert_eq!(s.find_next(&store), Some(0));
    }

    #[test]
    fn new_query_restarts_from_top() {
        let store = TextStore::from_bytes("ab ab ab");
        let mut s = SearchCursor::new();
        s.set_query("ab");
        s.find_next(&store);
        s.find_next(&store);
        s.set_query("ab");
        assert_eq!(s.find_next(&store), Some(0));
    }
}
