//! Command line editing and execution.
//!
//! `:` switches the focused pane to CommandEntry and starts a fresh line. Enter hands the text to
//! the executor and always returns to Command mode; the outcome, success text or error, lands
//! on the status line.

use super::DispatchResult;
use crate::Action;
use crate::editor::Editor;
use crate::search;
use core_state::Mode;

pub(crate) fn handle_command_action(action: Action, editor: &mut Editor) -> DispatchResult {
    let line = &mut editor.session.command_line;
    match action {
        Action::CommandStart => {
            line.begin();
            editor.panes.focused_mut().mode = Mode::CommandEntry;
        }
        Action::CommandChar(ch) => line.push_char(ch),
        Action::CommandBackspace => line.backspace(),
        Action::CommandHistoryOlder => line.browse_older(),
        Action::CommandHistoryNewer => line.browse_newer(),
        Action::CommandCancel => {
            line.cancel();
            editor.panes.focused_mut().mode = Mode::Command;
        }
        Action::CommandExecute => return execute_pending(editor),
        Action::RepeatSearch => {
            let result = search::repeat_last_search(editor.panes.focused_mut(), &mut editor.session);
            editor.report(result.map(|_| None));
        }
        Action::Save => {
            let result = editor.run_verb("save", &[]);
            editor.report(result);
        }
        _ => {
            tracing::error!(target: "actions.dispatch", ?action, "non_command_action_routed");
            return DispatchResult::clean();
        }
    }
    DispatchResult::dirty()
}

/// Identity of what the focused pane shows, to detect structural replacement.
fn snapshot(editor: &Editor) -> (usize, Option<String>, usize) {
    let pane = editor.panes.focused();
    (pane.id().0, pane.document_id(), editor.panes.len())
}

fn execute_pending(editor: &mut Editor) -> DispatchResult {
    editor.panes.focused_mut().mode = Mode::Command;
    let line = editor.session.command_line.submit();
    let before = snapshot(editor);
    let result = editor.execute_command(&line);
    editor.report(result);
    if editor.should_quit() {
        tracing::info!(target: "command", "quit_requested");
        return DispatchResult::quit();
    }
    if snapshot(editor) != before {
        DispatchResult::buffer_replaced()
    } else {
        DispatchResult::dirty()
    }
}
