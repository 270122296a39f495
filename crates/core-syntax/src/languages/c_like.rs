use crate::cursor::ScanCursor;
use crate::scan::{
    Scanned, classify_words, is_word_start, scan_line_comment, scan_number, scan_single,
    scan_string, scan_word,
};
use crate::token::{Token, palette};

use super::Language;

const KEYWORDS: &[&str] = &[
    "int", "char", "const", "void", "short", "struct", "return", "if", "else", "while", "for",
    "do", "goto", "double", "float", "long", "break", "continue", "switch", "case", "size_t",
    "uint8_t", "uint16_t", "uint32_t", "uint64_t", "int8_t", "int16_t", "int32_t", "int64_t",
    "unsigned", "static", "extern",
];

const RESERVED: &[&str] = &["NULL", "true", "false"];

/// C and C++ sources and headers. `#` words are preprocessor directives.
pub struct CLike;

impl Language for CLike {
    fn name(&self) -> &'static str {
        "c"
    }

    fn scan_next_token(&self, cursor: &mut ScanCursor) -> Scanned {
        match cursor.peek() {
            Some(q @ ('"' | '\'')) => scan_string(cursor, q),
            Some(c) if is_word_start(c) || c == '#' => {
                let (mut tokens, at_end) = scan_word(cursor, &['#']);
                classify_words(&mut tokens, KEYWORDS, RESERVED, Some('#'));
                (tokens, at_end)
            }
            Some(c) if c.is_ascii_digit() => scan_number(cursor),
            Some('/') => {
                let step = cursor.advance();
                if !step.new_line && !step.at_end && cursor.peek() == Some('/') {
                    return scan_line_comment(cursor, "/");
                }
                (
                    vec![Token::new("/", palette::BASE, step.new_line)],
                    step.at_end,
                )
            }
            _ => scan_single(cursor, palette::BASE),
        }
    }
}
