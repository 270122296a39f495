//! Buffer mutations: typing, line splits and joins, and the whole-line clipboard.
//!
//! Typing edits require Insert mode. Stream panes are append-only from the process side, so
//! every mutation here is refused for them; copying a line out of one is still allowed.

use super::DispatchResult;
use crate::editor::Editor;
use crate::{ClipboardOp, EditKind};
use core_state::Mode;
use core_text::Caret;

pub(crate) fn handle_edit(kind: EditKind, editor: &mut Editor) -> DispatchResult {
    let edit = editor.config.file.edit.clone();
    let pane = editor.panes.focused_mut();
    if pane.is_stream() {
        tracing::debug!(target: "actions.dispatch", ?kind, "edit_refused_stream_pane");
        return DispatchResult::clean();
    }
    let in_insert = pane.mode == Mode::Insert;
    match kind {
        EditKind::OpenLineBelow => {
            pane.edit(|buf, c| {
                let indent = buf.indent_of(c.row);
                let column = indent.chars().count();
                buf.insert_line(c.row + 1, indent);
                Caret::new(column, c.row + 1)
            });
            pane.mode = Mode::Insert;
        }
        _ if !in_insert => return DispatchResult::clean(),
        EditKind::InsertChar(ch) => pane.edit(|buf, c| buf.insert_char(c, ch)),
        EditKind::InsertTab => {
            let spaces = " ".repeat(edit.tab_width);
            pane.edit(|buf, c| buf.insert_text(c, &spaces));
        }
        EditKind::SplitLine => {
            pane.edit(|buf, c| buf.split_at_caret(c, edit.indent_preserving));
        }
        EditKind::DeleteBackward => pane.edit(|buf, c| buf.delete_backward(c)),
        EditKind::DeleteForward => pane.edit(|buf, c| buf.delete_forward(c)),
    }
    tracing::trace!(
        target: "actions.dispatch",
        ?kind,
        caret = ?pane.caret().cell(),
        lines = pane.buffer().line_count(),
        "edit"
    );
    DispatchResult::dirty()
}

pub(crate) fn handle_clipboard(op: ClipboardOp, editor: &mut Editor) -> DispatchResult {
    let pane = editor.panes.focused_mut();
    let row = pane.caret().row;
    match op {
        ClipboardOp::CopyLine => {
            editor.session.clipboard = Some(vec![pane.buffer().line(row).to_string()]);
            tracing::debug!(target: "actions.dispatch", row, "line_copied");
            return DispatchResult::clean();
        }
        _ if pane.is_stream() => return DispatchResult::clean(),
        ClipboardOp::CutLine => {
            let mut cut = String::new();
            pane.edit(|buf, c| {
                cut = buf.remove_line(c.row);
                Caret::new(0, c.row)
            });
            editor.session.clipboard = Some(vec![cut]);
            tracing::debug!(target: "actions.dispatch", row, "line_cut");
        }
        ClipboardOp::PasteBelow => {
            let Some(lines) = editor.session.clipboard.as_ref() else {
                return DispatchResult::clean();
            };
            pane.edit(|buf, c| {
                for (i, line) in lines.iter().enumerate() {
                    buf.insert_line(c.row + 1 + i, line.as_str());
                }
                Caret::new(0, c.row + 1)
            });
            tracing::debug!(target: "actions.dispatch", row, count = lines.len(), "lines_pasted");
        }
    }
    DispatchResult::dirty()
}
