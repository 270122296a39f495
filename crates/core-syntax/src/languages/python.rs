use crate::cursor::ScanCursor;
use crate::scan::{
    Scanned, classify_words, is_word_start, scan_line_comment, scan_number, scan_single,
    scan_string, scan_word,
};
use crate::token::palette;

use super::Language;

const KEYWORDS: &[&str] = &[
    "if", "elif", "else", "for", "while", "import", "from", "class", "def", "self", "or", "and",
    "not", "in", "lambda", "match", "case", "break", "continue", "return", "True", "False", "None",
    "pass", "with", "as", "is",
];

const RESERVED: &[&str] = &["print", "__init__", "str", "int", "float", "bool", "input"];

/// Python-like sources: `#` comments, `@` decorators.
pub struct Python;

impl Language for Python {
    fn name(&self) -> &'static str {
        "python"
    }

    fn scan_next_token(&self, cursor: &mut ScanCursor) -> Scanned {
        match cursor.peek() {
            Some(q @ ('"' | '\'')) => scan_string(cursor, q),
            Some(c) if is_word_start(c) || c == '@' => {
                let (mut tokens, at_end) = scan_word(cursor, &['@']);
                classify_words(&mut tokens, KEYWORDS, RESERVED, Some('@'));
                (tokens, at_end)
            }
            Some(c) if c.is_ascii_digit() => scan_number(cursor),
            Some('#') => scan_line_comment(cursor, ""),
            _ => scan_single(cursor, palette::BASE),
        }
    }
}
