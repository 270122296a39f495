//! Character cursor over a line snapshot.
//!
//! The cursor walks the flattened line sequence while keeping an explicit `(column, row)`
//! position. Consuming the last char of a line moves the cursor straight onto the next line, so
//! the cursor only ever rests on a line boundary for empty lines.

/// Result of one [`ScanCursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Char consumed, `None` when stepping over an empty line.
    pub ch: Option<char>,
    /// This step finished a source line.
    pub new_line: bool,
    /// No input remains after this step.
    pub at_end: bool,
}

pub struct ScanCursor {
    lines: Vec<Vec<char>>,
    column: usize,
    row: usize,
    /// Position before the most recent `advance`, restored by `step_back`.
    prev: Option<(usize, usize)>,
}

impl ScanCursor {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.as_ref().chars().collect()).collect(),
            column: 0,
            row: 0,
            prev: None,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn is_at_end(&self) -> bool {
        self.row >= self.lines.len()
    }

    /// Current char without consuming it. `None` on an empty line or past the end.
    pub fn peek(&self) -> Option<char> {
        self.lines
            .get(self.row)
            .and_then(|line| line.get(self.column))
            .copied()
    }

    /// Consume the current char and move forward, crossing to the next line after the last
    /// char of a line.
    pub fn advance(&mut self) -> Advance {
        let Some(line) = self.lines.get(self.row) else {
            return Advance {
                ch: None,
                new_line: false,
                at_end: true,
            };
        };
        self.prev = Some((self.column, self.row));
        let ch = line.get(self.column).copied();
        if ch.is_some() {
            self.column += 1;
        }
        let mut new_line = false;
        if self.column >= line.len() {
            self.row += 1;
            self.column = 0;
            new_line = true;
        }
        Advance {
            ch,
            new_line,
            at_end: self.is_at_end(),
        }
    }

    /// Undo the most recent `advance` so its char is scanned again. Only one step of history is
    /// kept; a second call without an intervening `advance` does nothing.
    pub fn step_back(&mut self) {
        if let Some((column, row)) = self.prev.take() {
            self.column = column;
            self.row = row;
        }
    }
}
