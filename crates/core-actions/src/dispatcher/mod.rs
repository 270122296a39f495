//! Dispatcher applying an [`Action`] to the [`Editor`].
//!
//! Sub-modules by concern:
//! * `motion`  - caret movement
//! * `mode`    - Command <-> Insert transitions
//! * `command` - command line editing, execution, save and search repeat
//! * `edit`    - text mutation and the line clipboard
//!
//! Pane focus, resize and close are small enough to live here.

use crate::editor::Editor;
use crate::executor::CommandError;
use crate::{Action, PaneOp};

mod command;
pub(crate) mod command_parser;
mod edit;
mod mode;
mod motion;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
    /// The focused pane now shows a different document (or a different pane has focus), so
    /// any per-pane render caches are stale.
    pub buffer_replaced: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
            buffer_replaced: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
            buffer_replaced: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
            buffer_replaced: false,
        }
    }
    pub fn buffer_replaced() -> Self {
        Self {
            dirty: true,
            quit: false,
            buffer_replaced: true,
        }
    }
}

/// Apply an action to the editor. The caller refreshes the focused viewport afterwards.
pub fn dispatch(action: Action, editor: &mut Editor) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", ?action, "dispatch");
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, editor),
        Action::Edit(kind) => edit::handle_edit(kind, editor),
        Action::Clipboard(op) => edit::handle_clipboard(op, editor),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, editor),
        Action::CommandStart
        | Action::CommandChar(_)
        | Action::CommandBackspace
        | Action::CommandCancel
        | Action::CommandExecute
        | Action::CommandHistoryOlder
        | Action::CommandHistoryNewer
        | Action::RepeatSearch
        | Action::Save => command::handle_command_action(action, editor),
        Action::Pane(op) => handle_pane_op(op, editor),
    }
}

fn handle_pane_op(op: PaneOp, editor: &mut Editor) -> DispatchResult {
    let panes = &mut editor.panes;
    match op {
        PaneOp::FocusNext => panes.focus_next(),
        PaneOp::FocusPrevious => panes.focus_previous(),
        PaneOp::Grow => panes.grow_focused(),
        PaneOp::Shrink => panes.shrink_focused(),
        PaneOp::Close => {
            if panes.len() == 1 {
                return DispatchResult::clean();
            }
            let pane = panes.focused();
            if !pane.is_stream() && pane.is_dirty() {
                editor.report(Err(CommandError::Unsaved {
                    usage: "close !".to_string(),
                }));
                return DispatchResult::dirty();
            }
            panes.remove_focused();
        }
    }
    let visible = editor.panes.focused().viewport().visible;
    editor.config.apply_context(visible);
    DispatchResult::buffer_replaced()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate_key;
    use core_events::{KeyCode, KeyEvent};
    use core_state::Mode;
    use core_text::{Caret, LineEnding};
    use std::path::PathBuf;

    fn editor(lines: &[&str]) -> Editor {
        let mut ed = Editor::default();
        ed.panes.focused_mut().load_document(
            PathBuf::from("d.txt"),
            lines.iter().map(|s| s.to_string()).collect(),
            LineEnding::Lf,
        );
        ed.resize(80, 12);
        ed
    }

    fn press(ed: &mut Editor, key: KeyEvent) -> DispatchResult {
        let mode = ed.panes.focused().mode;
        match translate_key(mode, &key) {
            Some(action) => dispatch(action, ed),
            None => DispatchResult::clean(),
        }
    }

    #[test]
    fn motion_left_right_dirty() {
        let mut ed = editor(&["ab", "cd"]);
        assert!(press(&mut ed, KeyEvent::plain(KeyCode::Right)).dirty);
        assert!(press(&mut ed, KeyEvent::plain(KeyCode::Left)).dirty);
        assert!(!press(&mut ed, KeyEvent::plain(KeyCode::Left)).dirty);
    }

    #[test]
    fn colon_enters_command_entry_and_enter_returns() {
        let mut ed = editor(&["one", "two"]);
        press(&mut ed, KeyEvent::char(':'));
        assert_eq!(ed.panes.focused().mode, Mode::CommandEntry);
        press(&mut ed, KeyEvent::char('2'));
        assert_eq!(ed.status().text, ":2");
        press(&mut ed, KeyEvent::plain(KeyCode::Enter));
        assert_eq!(ed.panes.focused().mode, Mode::Command);
        assert_eq!(ed.panes.focused().caret().cell(), (3, 1));
        assert_eq!(ed.session.history().back().map(String::as_str), Some("2"));
    }

    #[test]
    fn escape_discards_pending_text() {
        let mut ed = editor(&["x"]);
        press(&mut ed, KeyEvent::char(':'));
        press(&mut ed, KeyEvent::char('q'));
        press(&mut ed, KeyEvent::plain(KeyCode::Esc));
        assert_eq!(ed.panes.focused().mode, Mode::Command);
        assert_eq!(ed.session.command_line.text(), "");
        assert!(ed.session.history().is_empty());
    }

    #[test]
    fn quit_command_sets_quit() {
        let mut ed = editor(&["x"]);
        press(&mut ed, KeyEvent::char(':'));
        for c in "quit".chars() {
            press(&mut ed, KeyEvent::char(c));
        }
        let r = press(&mut ed, KeyEvent::plain(KeyCode::Enter));
        assert!(r.quit);
        assert!(ed.should_quit());
    }

    #[test]
    fn close_key_ignored_on_last_pane() {
        let mut ed = editor(&["x"]);
        assert!(!press(&mut ed, KeyEvent::char('x')).dirty);
        assert_eq!(ed.panes.len(), 1);
        assert!(!ed.should_quit());
    }

    #[test]
    fn close_key_guards_unsaved_pane() {
        let mut ed = editor(&["x"]);
        ed.run_verb("split", &[]).unwrap();
        ed.panes.focused_mut().mode = Mode::Insert;
        press(&mut ed, KeyEvent::char('a'));
        press(&mut ed, KeyEvent::plain(KeyCode::Esc));
        press(&mut ed, KeyEvent::char('x'));
        assert_eq!(ed.panes.len(), 2);
        assert_eq!(
            ed.status().text,
            "Current file is unsaved. Save it or type 'close !'"
        );
    }

    #[test]
    fn focus_cycles_and_grow_changes_heights() {
        let mut ed = editor(&["x"]);
        ed.run_verb("split", &[]).unwrap();
        assert_eq!(ed.panes.focused_index(), 1);
        press(&mut ed, KeyEvent::char('n'));
        assert_eq!(ed.panes.focused_index(), 0);
        press(&mut ed, KeyEvent::ctrl(KeyCode::Up));
        assert_eq!(ed.panes.focused_index(), 1);
        let before = ed.panes.focused().viewport().visible;
        press(&mut ed, KeyEvent::shift(KeyCode::Up));
        assert!(ed.panes.focused().viewport().visible > before);
    }

    #[test]
    fn repeat_search_advances() {
        let mut ed = editor(&["foo", "bar", "foo"]);
        ed.execute_command("foo").unwrap();
        assert_eq!(ed.panes.focused().caret().cell(), (0, 2));
        press(&mut ed, KeyEvent::char('r'));
        assert_eq!(ed.panes.focused().caret().cell(), (0, 0));
    }

    #[test]
    fn insert_edits_then_escape() {
        let mut ed = editor(&["abc"]);
        ed.panes.focused_mut().set_caret(Caret::new(3, 0));
        press(&mut ed, KeyEvent::char('i'));
        press(&mut ed, KeyEvent::char('d'));
        press(&mut ed, KeyEvent::plain(KeyCode::Esc));
        press(&mut ed, KeyEvent::char('d'));
        assert_eq!(ed.panes.focused().buffer().line_count(), 1);
        assert_eq!(ed.panes.focused().buffer().line(0), "");
        assert_eq!(ed.session.clipboard, Some(vec!["abcd".to_string()]));
    }
}
