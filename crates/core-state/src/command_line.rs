//! Pending command text and bounded history for `CommandEntry` mode.
//!
//! History browsing uses an index counted from the most recent entry: 0 means "not browsing",
//! N shows the N-th most recent submission. The text typed before browsing started is saved on
//! the first step back and restored when browsing returns to 0.

use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct CommandLine {
    pending: String,
    history: VecDeque<String>,
    capacity: usize,
    browse: usize,
    saved: String,
}

impl Default for CommandLine {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl CommandLine {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: String::new(),
            history: VecDeque::new(),
            capacity: capacity.max(1),
            browse: 0,
            saved: String::new(),
        }
    }

    /// Start a fresh entry (`:` pressed).
    pub fn begin(&mut self) {
        self.pending.clear();
        self.browse = 0;
        self.saved.clear();
    }

    /// Abandon the entry (Escape).
    pub fn cancel(&mut self) {
        self.begin();
    }

    pub fn text(&self) -> &str {
        &self.pending
    }

    pub fn push_char(&mut self, ch: char) {
        self.pending.push(ch);
    }

    pub fn backspace(&mut self) {
        self.pending.pop();
    }

    /// Take the pending text for execution and record it in history. Empty text is returned
    /// but not recorded.
    pub fn submit(&mut self) -> String {
        let text = std::mem::take(&mut self.pending);
        if !text.is_empty() {
            if self.history.len() == self.capacity {
                self.history.pop_front();
            }
            self.history.push_back(text.clone());
        }
        self.browse = 0;
        self.saved.clear();
        text
    }

    /// Up: show the next older entry. No-op past the oldest.
    pub fn browse_older(&mut self) {
        if self.browse >= self.history.len() {
            return;
        }
        if self.browse == 0 {
            self.saved = self.pending.clone();
        }
        self.browse += 1;
        self.pending = self.history[self.history.len() - self.browse].clone();
    }

    /// Down: show the next newer entry, or the saved text when leaving history.
    pub fn browse_newer(&mut self) {
        if self.browse == 0 {
            return;
        }
        self.browse -= 1;
        self.pending = if self.browse == 0 {
            std::mem::take(&mut self.saved)
        } else {
            self.history[self.history.len() - self.browse].clone()
        };
    }

    pub fn browse_index(&self) -> usize {
        self.browse
    }

    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(line: &mut CommandLine, text: &str) {
        for c in text.chars() {
            line.push_char(c);
        }
    }

    #[test]
    fn submit_records_history_and_clears() {
        let mut line = CommandLine::default();
        line.begin();
        typed(&mut line, "save");
        assert_eq!(line.submit(), "save");
        assert_eq!(line.text(), "");
        assert_eq!(line.history().back().map(String::as_str), Some("save"));
        line.begin();
        assert_eq!(line.submit(), "");
        assert_eq!(line.history().len(), 1);
    }

    #[test]
    fn browse_saves_and_restores_in_progress_text() {
        let mut line = CommandLine::default();
        for cmd in ["one", "two"] {
            line.begin();
            typed(&mut line, cmd);
            line.submit();
        }
        line.begin();
        typed(&mut line, "dr");
        line.browse_older();
        assert_eq!(line.text(), "two");
        line.browse_older();
        assert_eq!(line.text(), "one");
        line.browse_older();
        assert_eq!(line.text(), "one", "stays at oldest");
        assert_eq!(line.browse_index(), 2);
        line.browse_newer();
        assert_eq!(line.text(), "two");
        line.browse_newer();
        assert_eq!(line.text(), "dr");
        assert_eq!(line.browse_index(), 0);
        line.browse_newer();
        assert_eq!(line.text(), "dr");
    }

    #[test]
    fn history_is_bounded() {
        let mut line = CommandLine::with_capacity(2);
        for cmd in ["a", "b", "c"] {
            line.begin();
            typed(&mut line, cmd);
            line.submit();
        }
        let h: Vec<&str> = line.history().iter().map(String::as_str).collect();
        assert_eq!(h, vec!["b", "c"]);
    }

    #[test]
    fn backspace_and_cancel() {
        let mut line = CommandLine::default();
        typed(&mut line, "ab");
        line.backspace();
        assert_eq!(line.text(), "a");
        line.backspace();
        line.backspace();
        assert_eq!(line.text(), "");
        typed(&mut line, "zz");
        line.cancel();
        assert_eq!(line.text(), "");
        assert!(line.history().is_empty());
    }
}
