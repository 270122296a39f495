//! Caret movement.
//!
//! Horizontal moves go through `core_text::motion` and refresh `last_x`; vertical moves keep it.
//! Word jumps walk the pane's highlight tokens. Paging moves by the pane's visible height.

use super::DispatchResult;
use crate::MotionKind;
use crate::editor::Editor;
use core_text::motion;

pub(crate) fn handle_motion(kind: MotionKind, editor: &mut Editor) -> DispatchResult {
    let tab_width = editor.config.file.edit.tab_width;
    let pane = editor.panes.focused_mut();
    let before = pane.caret();
    let page = pane.viewport().visible.max(1) as isize;
    match kind {
        MotionKind::Left => pane.move_caret(motion::left),
        MotionKind::Right => pane.move_caret(motion::right),
        MotionKind::Up => pane.move_caret(motion::up),
        MotionKind::Down => pane.move_caret(motion::down),
        MotionKind::LineStart => pane.move_caret(motion::line_start),
        MotionKind::LineEnd => pane.move_caret(motion::line_end),
        MotionKind::WordForward => pane.word_forward(),
        MotionKind::WordBackward => pane.word_backward(),
        MotionKind::PageUp => pane.move_caret(|b, c| motion::vertical(b, c, -page)),
        MotionKind::PageDown => pane.move_caret(|b, c| motion::vertical(b, c, page)),
        MotionKind::TabForward => pane.move_caret(|b, c| motion::tab_forward(b, c, tab_width)),
        MotionKind::StepLeft => pane.move_caret(|b, c| motion::step_in_line(b, c, false)),
        MotionKind::StepRight => pane.move_caret(|b, c| motion::step_in_line(b, c, true)),
    }
    let after = pane.caret();
    tracing::trace!(
        target: "actions.dispatch",
        ?kind,
        from = ?before.cell(),
        to = ?after.cell(),
        "motion"
    );
    if after == before {
        DispatchResult::clean()
    } else {
        DispatchResult::dirty()
    }
}
