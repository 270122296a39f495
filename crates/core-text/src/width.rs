//! Display-width helpers for the renderer read-state.
//!
//! Columns in the buffer count chars; a renderer needs terminal cells. Wide characters (CJK,
//! most emoji) occupy two cells and control characters none.

use unicode_width::UnicodeWidthChar;

/// Cell width of a single char (control chars count as zero).
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Number of display cells occupied by the first `column` chars of `line`.
pub fn display_column(line: &str, column: usize) -> usize {
    line.chars().take(column).map(char_width).sum()
}
