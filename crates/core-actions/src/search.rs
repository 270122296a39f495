//! Literal forward search with wraparound.
//!
//! The scan starts just after the caret on the caret's line, continues to the end of the
//! document, then wraps to the top and stops at the caret. A match sitting exactly at the caret
//! is never returned, so repeated searches advance. Columns are chars.

use core_model::Pane;
use core_state::EditorSession;
use core_text::{Caret, LineBuffer, byte_index};

use crate::executor::CommandError;

/// Next match of `pattern` after `from`, wrapping once around the document.
pub fn find_next(buf: &LineBuffer, from: Caret, pattern: &str) -> Option<Caret> {
    if pattern.is_empty() {
        return None;
    }
    let from = buf.clamp(from);
    let line = buf.line(from.row);
    let tail = byte_index(line, from.column + 1);
    if let Some(at) = line[tail..].find(pattern) {
        return Some(caret_at(line, tail + at, from.row));
    }
    for row in from.row + 1..buf.line_count() {
        if let Some(at) = buf.line(row).find(pattern) {
            return Some(caret_at(buf.line(row), at, row));
        }
    }
    for row in 0..=from.row {
        if let Some(at) = buf.line(row).find(pattern) {
            let hit = caret_at(buf.line(row), at, row);
            if row == from.row && hit.column >= from.column {
                break;
            }
            return Some(hit);
        }
    }
    None
}

fn caret_at(line: &str, byte: usize, row: usize) -> Caret {
    Caret::new(line[..byte].chars().count(), row)
}

/// Search in `pane` and record the outcome in the session: a hit moves the caret, centers the
/// viewport and remembers the pattern; a miss leaves the pane alone and forgets it.
pub fn search(
    pane: &mut Pane,
    session: &mut EditorSession,
    pattern: &str,
) -> Result<(), CommandError> {
    match find_next(pane.buffer(), pane.caret(), pattern) {
        Some(hit) => {
            tracing::debug!(target: "search", pattern, row = hit.row, column = hit.column, "search_hit");
            pane.set_caret(hit);
            pane.center_on_caret();
            session.last_search = Some(pattern.to_string());
            Ok(())
        }
        None => {
            tracing::debug!(target: "search", pattern, "search_miss");
            session.last_search = None;
            Err(CommandError::NotFound(pattern.to_string()))
        }
    }
}

/// Repeat the last successful search. Does nothing when there is none.
pub fn repeat_last_search(
    pane: &mut Pane,
    session: &mut EditorSession,
) -> Result<(), CommandError> {
    match session.last_search.clone() {
        Some(pattern) => search(pane, session, &pattern),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(lines: &[&str]) -> LineBuffer {
        LineBuffer::from_lines(lines.iter().copied())
    }

    #[test]
    fn finds_later_match_on_same_line() {
        let b = buf(&["foo bar foo"]);
        let hit = find_next(&b, Caret::new(0, 0), "foo").unwrap();
        assert_eq!(hit.cell(), (8, 0));
    }

    #[test]
    fn wraps_to_earliest_match_above() {
        let b = buf(&["needle", "x", "needle", "caret here"]);
        let hit = find_next(&b, Caret::new(2, 3), "needle").unwrap();
        assert_eq!(hit.cell(), (0, 0));
    }

    #[test]
    fn match_at_caret_is_skipped() {
        let b = buf(&["ab", "ab"]);
        let hit = find_next(&b, Caret::new(0, 0), "ab").unwrap();
        assert_eq!(hit.cell(), (0, 1));
        let again = find_next(&b, hit, "ab").unwrap();
        assert_eq!(again.cell(), (0, 0));
        let lone = buf(&["ab"]);
        assert_eq!(find_next(&lone, Caret::new(0, 0), "ab"), None);
    }

    #[test]
    fn earlier_match_on_caret_line_found_after_wrap() {
        let b = buf(&["x foo y", "z"]);
        let hit = find_next(&b, Caret::new(6, 0), "foo").unwrap();
        assert_eq!(hit.cell(), (2, 0));
    }

    #[test]
    fn columns_are_chars() {
        let b = buf(&["éé target"]);
        let hit = find_next(&b, Caret::new(0, 0), "target").unwrap();
        assert_eq!(hit.column, 3);
    }

    #[test]
    fn absent_pattern_and_empty_pattern() {
        let b = buf(&["abc"]);
        assert_eq!(find_next(&b, Caret::origin(), "zzz"), None);
        assert_eq!(find_next(&b, Caret::origin(), ""), None);
    }
}
