use crate::cursor::ScanCursor;
use crate::scan::{Scanned, is_word_start, scan_line_comment, scan_single, scan_word};
use crate::token::palette;

use super::Language;

/// Punctuation highlighted on its own: list bullets, image bangs, link brackets.
const MARKERS: &[char] = &['-', '!', '[', ']'];

/// Markdown: headings are colored as a whole line, markers as keywords.
pub struct Markdown;

impl Language for Markdown {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn scan_next_token(&self, cursor: &mut ScanCursor) -> Scanned {
        match cursor.peek() {
            Some('#') if cursor.column() == 0 => scan_line_comment(cursor, ""),
            // Words keep inner markers so `foo-bar` and `[x]` stay whole.
            Some(c) if is_word_start(c) => scan_word(cursor, MARKERS),
            Some(c) if MARKERS.contains(&c) => scan_single(cursor, palette::KEYWORD0),
            _ => scan_single(cursor, palette::BASE),
        }
    }
}
