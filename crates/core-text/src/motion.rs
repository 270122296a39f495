//! Caret motion helpers.
//!
//! These operate purely on a `LineBuffer` + `Caret` pair and are free of mode or pane state.
//! Horizontal moves refresh `last_x`; vertical moves read it, so a run of vertical moves across
//! short lines returns to the original column once a long enough line is reached.

use crate::{Caret, LineBuffer};

/// Move left one column, wrapping to the end of the previous line.
pub fn left(buf: &LineBuffer, caret: &mut Caret) {
    *caret = buf.clamp(*caret);
    if caret.column > 0 {
        caret.column -= 1;
    } else if caret.row > 0 {
        caret.row -= 1;
        caret.column = buf.line_len(caret.row);
    }
    caret.last_x = caret.column;
}

/// Move right one column, wrapping to the start of the next line. No-op at buffer end.
pub fn right(buf: &LineBuffer, caret: &mut Caret) {
    *caret = buf.clamp(*caret);
    if caret.column < buf.line_len(caret.row) {
        caret.column += 1;
    } else if caret.row + 1 < buf.line_count() {
        caret.row += 1;
        caret.column = 0;
    }
    caret.last_x = caret.column;
}

pub fn up(buf: &LineBuffer, caret: &mut Caret) {
    vertical(buf, caret, -1);
}

pub fn down(buf: &LineBuffer, caret: &mut Caret) {
    vertical(buf, caret, 1);
}

/// Move `delta` rows (clamped), column = `min(last_x, target line length)`.
pub fn vertical(buf: &LineBuffer, caret: &mut Caret, delta: isize) {
    let row = caret.row.saturating_add_signed(delta);
    caret.row = buf.clamp_row(row);
    caret.column = caret.last_x.min(buf.line_len(caret.row));
}

pub fn line_start(_buf: &LineBuffer, caret: &mut Caret) {
    caret.column = 0;
    caret.last_x = 0;
}

pub fn line_end(buf: &LineBuffer, caret: &mut Caret) {
    caret.row = buf.clamp_row(caret.row);
    caret.column = buf.line_len(caret.row);
    caret.last_x = caret.column;
}

/// Command-mode Tab: advance `width` columns. Past the line end the caret moves to the start of
/// the next line; on the last line it stays put.
pub fn tab_forward(buf: &LineBuffer, caret: &mut Caret, width: usize) {
    *caret = buf.clamp(*caret);
    let target = caret.column + width;
    if target <= buf.line_len(caret.row) {
        caret.column = target;
    } else if caret.row + 1 < buf.line_count() {
        caret.row += 1;
        caret.column = 0;
    }
    caret.last_x = caret.column;
}

/// Step one column inside the current line without wrapping (command-mode Backspace/Delete).
pub fn step_in_line(buf: &LineBuffer, caret: &mut Caret, forward: bool) {
    *caret = buf.clamp(*caret);
    caret.column = if forward {
        (caret.column + 1).min(buf.line_len(caret.row))
    } else {
        caret.column.saturating_sub(1)
    };
    caret.last_x = caret.column;
}

/// Place the caret at the end of 1-based line `line`, clamped to `[1, line_count]`.
pub fn jump_to_line(buf: &LineBuffer, caret: &mut Caret, line: usize) {
    let row = line.clamp(1, buf.line_count()) - 1;
    caret.row = row;
    caret.column = buf.line_len(row);
    caret.last_x = caret.column;
}
