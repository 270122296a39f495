use crate::cursor::ScanCursor;
use crate::scan::{Scanned, is_word_start, scan_single, scan_word};
use crate::token::palette;

use super::Language;

/// Uncolored text. Words are still grouped so word navigation works in plain files.
pub struct Plain;

impl Language for Plain {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn scan_next_token(&self, cursor: &mut ScanCursor) -> Scanned {
        match cursor.peek() {
            Some(c) if is_word_start(c) || c.is_ascii_digit() => scan_word(cursor, &[]),
            _ => scan_single(cursor, palette::BASE),
        }
    }
}
