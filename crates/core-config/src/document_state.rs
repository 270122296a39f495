//! Per-document memory of caret and scroll position.
//!
//! Keyed by document identity: the file path for editor panes, a synthetic id such as
//! `terminal_process_<pid>` for stream panes. The in-memory store lives for the session; a
//! persistent backend can implement the same trait.

use std::collections::HashMap;

/// Scroll state remembered for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMemo {
    pub scroll_offset: usize,
    pub previous_scroll_offset: isize,
    pub last_x: usize,
}

pub trait DocumentStateStore {
    /// Last caret `(column, row)`.
    fn caret(&self, document: &str) -> Option<(usize, usize)>;
    fn set_caret(&mut self, document: &str, caret: (usize, usize));
    fn scroll(&self, document: &str) -> Option<ScrollMemo>;
    fn set_scroll(&mut self, document: &str, scroll: ScrollMemo);
}

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    carets: HashMap<String, (usize, usize)>,
    scrolls: HashMap<String, ScrollMemo>,
}

impl DocumentStateStore for MemoryDocumentStore {
    fn caret(&self, document: &str) -> Option<(usize, usize)> {
        self.carets.get(document).copied()
    }

    fn set_caret(&mut self, document: &str, caret: (usize, usize)) {
        // Called every tick; skip the allocation when nothing changed.
        if self.carets.get(document) != Some(&caret) {
            self.carets.insert(document.to_string(), caret);
        }
    }

    fn scroll(&self, document: &str) -> Option<ScrollMemo> {
        self.scrolls.get(document).copied()
    }

    fn set_scroll(&mut self, document: &str, scroll: ScrollMemo) {
        if self.scrolls.get(document) != Some(&scroll) {
            self.scrolls.insert(document.to_string(), scroll);
        }
    }
}
