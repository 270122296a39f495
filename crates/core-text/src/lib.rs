//! Line-oriented text buffer and caret model.
//!
//! The buffer is an ordered list of lines without terminators. It is never empty: a fresh or
//! cleared buffer holds a single empty line. Columns count `char`s, not bytes, so a caret column
//! is always a valid insertion point regardless of the line's UTF-8 layout.
//!
//! Invariants:
//! * `line_count() >= 1` at all times.
//! * Every mutation returns a caret that satisfies `row < line_count()` and
//!   `column <= line_len(row)`.
//! * Out-of-range requests are clamped, never reported as errors.

pub mod line_ending;
pub mod motion;
pub mod width;

pub use line_ending::{LineEnding, NormalizedText, normalize_line_endings};

/// Caret position plus the remembered horizontal target used by vertical moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caret {
    pub column: usize,
    pub row: usize,
    /// Updated by horizontal moves only.
    pub last_x: usize,
}

impl Caret {
    pub fn new(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            last_x: column,
        }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    /// `(column, row)` pair, handy for comparisons in tests and search.
    pub fn cell(&self) -> (usize, usize) {
        (self.column, self.row)
    }
}

/// Ordered list of text lines owned by a single pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build from pre-split lines. An empty vector yields a single empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buf = Self::new();
        buf.replace_all(lines.into_iter().map(Into::into).collect());
        buf
    }

    /// Split LF-normalized text on `\n`. A trailing newline produces a trailing empty line so
    /// that joining with `\n` reproduces the input.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.split('\n'))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line at `row`, clamped to the last line.
    pub fn line(&self, row: usize) -> &str {
        &self.lines[self.clamp_row(row)]
    }

    /// Length of the line at `row` in chars (clamped row).
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).chars().count()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines with `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the whole content (file load / reload). Keeps the non-empty invariant.
    pub fn replace_all(&mut self, lines: Vec<String>) {
        self.lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
    }

    pub fn clamp_row(&self, row: usize) -> usize {
        row.min(self.lines.len() - 1)
    }

    /// Clamp a caret into buffer bounds. `last_x` is left untouched.
    pub fn clamp(&self, caret: Caret) -> Caret {
        let row = self.clamp_row(caret.row);
        let column = caret.column.min(self.line_len(row));
        Caret {
            column,
            row,
            last_x: caret.last_x,
        }
    }

    /// Leading run of space characters on `row`.
    pub fn indent_of(&self, row: usize) -> String {
        self.line(row).chars().take_while(|c| *c == ' ').collect()
    }

    pub fn insert_char(&mut self, caret: Caret, ch: char) -> Caret {
        let mut tmp = [0u8; 4];
        self.insert_text(caret, ch.encode_utf8(&mut tmp))
    }

    /// Insert `text` at the caret. Every `\n` splits the current line and continues on the new
    /// one at column 0. Returns the caret positioned after the inserted text.
    pub fn insert_text(&mut self, caret: Caret, text: &str) -> Caret {
        let mut at = self.clamp(caret);
        let mut segments = text.split('\n');
        if let Some(first) = segments.next() {
            at.column = self.insert_in_line(at.row, at.column, first);
        }
        for segment in segments {
            at = self.break_line(at, "");
            at.column = self.insert_in_line(at.row, 0, segment);
        }
        at.last_x = at.column;
        at
    }

    /// Delete the char under the caret, or join the next line onto this one at end of line.
    pub fn delete_forward(&mut self, caret: Caret) -> Caret {
        let at = self.clamp(caret);
        if at.column == self.line_len(at.row) {
            self.join_with_next(at.row);
        } else {
            let line = &mut self.lines[at.row];
            let start = byte_index(line, at.column);
            let end = byte_index(line, at.column + 1);
            line.replace_range(start..end, "");
        }
        at
    }

    /// Delete the char before the caret, or join this line onto the previous one at column 0.
    pub fn delete_backward(&mut self, caret: Caret) -> Caret {
        let mut at = self.clamp(caret);
        if at.column > 0 {
            let line = &mut self.lines[at.row];
            let start = byte_index(line, at.column - 1);
            let end = byte_index(line, at.column);
            line.replace_range(start..end, "");
            at.column -= 1;
        } else if at.row > 0 {
            let prev = at.row - 1;
            at.column = self.line_len(prev);
            at.row = prev;
            self.join_with_next(prev);
        }
        at.last_x = at.column;
        at
    }

    /// Enter in insert mode: cut the line at the caret and open a new line below holding
    /// `indent + rest`. The caret lands just after the indent.
    pub fn split_at_caret(&mut self, caret: Caret, indent_preserving: bool) -> Caret {
        let at = self.clamp(caret);
        let indent = if indent_preserving {
            self.indent_of(at.row)
        } else {
            String::new()
        };
        let mut next = self.break_line(at, &indent);
        next.last_x = next.column;
        next
    }

    /// Append line `row + 1` onto `row`. Returns false when `row` is the last line.
    pub fn join_with_next(&mut self, row: usize) -> bool {
        if row + 1 >= self.lines.len() {
            return false;
        }
        let tail = self.lines.remove(row + 1);
        self.lines[row].push_str(&tail);
        true
    }

    /// Insert a whole line before `row` (`row == line_count()` appends).
    pub fn insert_line(&mut self, row: usize, text: impl Into<String>) {
        let row = row.min(self.lines.len());
        self.lines.insert(row, text.into());
    }

    /// Remove a whole line. The last remaining line is cleared instead of removed.
    pub fn remove_line(&mut self, row: usize) -> String {
        let row = self.clamp_row(row);
        if self.lines.len() == 1 {
            return std::mem::take(&mut self.lines[0]);
        }
        self.lines.remove(row)
    }

    fn insert_in_line(&mut self, row: usize, column: usize, text: &str) -> usize {
        let line = &mut self.lines[row];
        let idx = byte_index(line, column);
        line.insert_str(idx, text);
        column + text.chars().count()
    }

    fn break_line(&mut self, at: Caret, prefix: &str) -> Caret {
        let line = &mut self.lines[at.row];
        let idx = byte_index(line, at.column);
        let rest = line.split_off(idx);
        let mut new_line = String::with_capacity(prefix.len() + rest.len());
        new_line.push_str(prefix);
        new_line.push_str(&rest);
        self.lines.insert(at.row + 1, new_line);
        Caret {
            column: prefix.chars().count(),
            row: at.row + 1,
            last_x: at.last_x,
        }
    }
}

/// Byte offset of char column `column` in `line` (end of line when past the end).
pub fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
