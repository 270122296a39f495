//! Lexical syntax highlighting.
//!
//! A [`Language`] turns a line snapshot into colored tokens one scan at a time; [`tokenize`]
//! drives it over the whole document and regroups the flat token stream into one list per line
//! using `Token::ends_line`.
//!
//! Invariants:
//! * `tokenize` returns exactly one token list per input line.
//! * Concatenating a line's token texts reproduces the line exactly.
//! * Empty lines yield a single empty token with `ends_line` set.
//!
//! Highlighting is full-document on every call. Incremental re-scanning is a possible later
//! optimization; documents here are editor-sized.

pub mod cursor;
pub mod languages;
pub mod registry;
pub mod scan;
pub mod token;

pub use cursor::ScanCursor;
pub use languages::Language;
pub use registry::{FileKind, LanguageKind, detect};
pub use token::{Color, Token, palette};

/// Tokenize `lines` with `language`, one token list per line.
pub fn tokenize<S: AsRef<str>>(language: &dyn Language, lines: &[S]) -> Vec<Vec<Token>> {
    let mut cursor = ScanCursor::new(lines);
    let mut out: Vec<Vec<Token>> = Vec::with_capacity(lines.len());
    let mut current = Vec::new();
    while !cursor.is_at_end() {
        let (tokens, at_end) = language.scan_next_token(&mut cursor);
        for token in tokens {
            let ends_line = token.ends_line;
            current.push(token);
            if ends_line {
                out.push(std::mem::take(&mut current));
            }
        }
        if at_end {
            break;
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    debug_assert_eq!(out.len(), lines.len());
    tracing::trace!(target: "syntax", language = language.name(), lines = out.len(), "tokenized");
    out
}
