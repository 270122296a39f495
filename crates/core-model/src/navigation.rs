//! Word jumps over a line's highlight tokens.
//!
//! Forward lands on the end of the next token that is not a lone space; backward lands on the
//! start of the previous one. At a line edge the caret first snaps to the edge, then crosses to
//! the adjacent line. The buffer ends are hard stops.

use core_syntax::Token;
use core_text::{Caret, LineBuffer};

pub fn word_forward(buf: &LineBuffer, tokens: &[Vec<Token>], caret: &mut Caret) {
    *caret = buf.clamp(*caret);
    let mut offset = 0;
    for token in line_tokens(tokens, caret.row) {
        offset += token.char_len();
        if offset > caret.column && !token.is_space() {
            set_column(caret, offset);
            return;
        }
    }
    let len = buf.line_len(caret.row);
    if caret.column < len {
        set_column(caret, len);
    } else if caret.row + 1 < buf.line_count() {
        caret.row += 1;
        set_column(caret, 0);
    }
}

pub fn word_backward(buf: &LineBuffer, tokens: &[Vec<Token>], caret: &mut Caret) {
    *caret = buf.clamp(*caret);
    let mut offset = buf.line_len(caret.row);
    for token in line_tokens(tokens, caret.row).iter().rev() {
        offset = offset.saturating_sub(token.char_len());
        if offset < caret.column && !token.is_space() {
            set_column(caret, offset);
            return;
        }
    }
    if caret.column > 0 {
        set_column(caret, 0);
    } else if caret.row > 0 {
        caret.row -= 1;
        set_column(caret, buf.line_len(caret.row));
    }
}

fn line_tokens(tokens: &[Vec<Token>], row: usize) -> &[Token] {
    tokens.get(row).map(Vec::as_slice).unwrap_or_default()
}

fn set_column(caret: &mut Caret, column: usize) {
    caret.column = column;
    caret.last_x = column;
}
