use crate::cursor::ScanCursor;
use crate::scan::{Scanned, classify_words, is_word_start, scan_number, scan_single, scan_string, scan_word};
use crate::token::palette;

use super::Language;

const KEYWORDS: &[&str] = &["true", "false", "null"];

/// JSON documents: strings, numbers and the three literal keywords.
pub struct Json;

impl Language for Json {
    fn name(&self) -> &'static str {
        "json"
    }

    fn scan_next_token(&self, cursor: &mut ScanCursor) -> Scanned {
        match cursor.peek() {
            Some(q @ ('"' | '\'')) => scan_string(cursor, q),
            Some(c) if is_word_start(c) => {
                let (mut tokens, at_end) = scan_word(cursor, &[]);
                classify_words(&mut tokens, KEYWORDS, &[], None);
                (tokens, at_end)
            }
            Some(c) if c.is_ascii_digit() => scan_number(cursor),
            _ => scan_single(cursor, palette::BASE),
        }
    }
}
