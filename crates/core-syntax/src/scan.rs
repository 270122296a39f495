//! Scanning primitives shared by every language.
//!
//! All scans obey two rules:
//! * A token never spans a line boundary. When a scan consumes the last char of a line, the
//!   text collected so far is emitted as its own token with `ends_line` set; scans that may
//!   span lines (string literals) then keep going on the next line with a fresh token.
//! * Terminators are found by consuming one char of lookahead. A terminator that does not belong
//!   to the literal is pushed back with `ScanCursor::step_back` so the next scan starts on it.

use crate::cursor::ScanCursor;
use crate::token::{Color, Token, palette};

/// How the terminating char of a literal is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// The terminator closes the literal and is part of it (quotes).
    Include,
    /// The terminator starts the next token (words, numbers).
    Exclude,
}

/// Scanned tokens plus whether the input is exhausted.
pub type Scanned = (Vec<Token>, bool);

/// Scan a literal starting at the cursor. The first char is always consumed; scanning stops at
/// the first following char for which `stops` holds, at the end of the line unless
/// `spans_lines`, or at the end of input.
pub fn scan_literal(
    cursor: &mut ScanCursor,
    color: Color,
    stops: impl Fn(char) -> bool,
    terminator: Terminator,
    spans_lines: bool,
) -> Scanned {
    let mut tokens = Vec::new();
    let mut text = String::new();

    let first = cursor.advance();
    text.extend(first.ch);
    if first.new_line {
        tokens.push(Token::new(std::mem::take(&mut text), color, true));
        if !spans_lines {
            return (tokens, first.at_end);
        }
    }

    while !cursor.is_at_end() {
        let step = cursor.advance();
        match step.ch {
            Some(c) if stops(c) => {
                match terminator {
                    Terminator::Include => {
                        text.push(c);
                        if step.new_line {
                            tokens.push(Token::new(std::mem::take(&mut text), color, true));
                        }
                    }
                    Terminator::Exclude => cursor.step_back(),
                }
                break;
            }
            _ => {}
        }
        text.extend(step.ch);
        if step.new_line {
            tokens.push(Token::new(std::mem::take(&mut text), color, true));
            if !spans_lines {
                break;
            }
        }
    }

    if !text.is_empty() {
        tokens.push(Token::new(text, color, false));
    }
    (tokens, cursor.is_at_end())
}

/// Word scan: identifier chars (plus any `extra` chars) with the terminator pushed back.
pub fn scan_word(cursor: &mut ScanCursor, extra: &[char]) -> Scanned {
    scan_literal(
        cursor,
        palette::BASE,
        |c| !(is_word_char(c) || extra.contains(&c)),
        Terminator::Exclude,
        false,
    )
}

/// Run of ASCII digits.
pub fn scan_number(cursor: &mut ScanCursor) -> Scanned {
    scan_literal(
        cursor,
        palette::NUMBER,
        |c| !c.is_ascii_digit(),
        Terminator::Exclude,
        false,
    )
}

/// Quoted string closed by the same quote char. May continue over following lines.
pub fn scan_string(cursor: &mut ScanCursor, quote: char) -> Scanned {
    scan_literal(
        cursor,
        palette::STRING,
        |c| c == quote,
        Terminator::Include,
        true,
    )
}

/// Comment running to the end of the current line. `prefix` holds comment chars the caller
/// already consumed.
pub fn scan_line_comment(cursor: &mut ScanCursor, prefix: &str) -> Scanned {
    let mut text = String::from(prefix);
    loop {
        let step = cursor.advance();
        text.extend(step.ch);
        if step.new_line || step.at_end {
            let ends_line = step.new_line;
            return (
                vec![Token::new(text, palette::COMMENT, ends_line)],
                step.at_end,
            );
        }
    }
}

/// One char as its own token. On an empty line this yields the empty line terminator.
pub fn scan_single(cursor: &mut ScanCursor, color: Color) -> Scanned {
    let step = cursor.advance();
    let text: String = step.ch.into_iter().collect();
    (vec![Token::new(text, color, step.new_line)], step.at_end)
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Re-color word tokens against keyword and reserved-name tables.
pub fn classify_words(
    tokens: &mut [Token],
    keywords: &[&str],
    reserved: &[&str],
    directive_prefix: Option<char>,
) {
    for token in tokens {
        let word = token.text.as_str();
        if keywords.contains(&word) {
            token.fg = palette::KEYWORD0;
        } else if reserved.contains(&word)
            || directive_prefix.is_some_and(|p| word.starts_with(p))
        {
            token.fg = palette::KEYWORD1;
        }
    }
}
