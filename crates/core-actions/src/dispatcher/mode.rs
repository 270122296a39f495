//! Command <-> Insert transitions. CommandEntry is entered and left through the command line
//! actions in `command`.

use super::DispatchResult;
use crate::ModeChange;
use crate::editor::Editor;
use core_state::Mode;

pub(crate) fn handle_mode_change(mc: ModeChange, editor: &mut Editor) -> DispatchResult {
    let pane = editor.panes.focused_mut();
    let next = match mc {
        ModeChange::EnterInsert => Mode::Insert,
        ModeChange::LeaveInsert => Mode::Command,
    };
    if pane.mode == next {
        return DispatchResult::clean();
    }
    tracing::debug!(target: "actions.dispatch", from = ?pane.mode, to = ?next, "mode_change");
    pane.mode = next;
    DispatchResult::dirty()
}
