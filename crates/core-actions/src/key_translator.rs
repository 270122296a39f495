//! Key -> `Action` translation.
//!
//! Translation is a pure function of the pane mode and the key. Each mode has its own table;
//! a few chords (Ctrl+arrows for focus and word jumps, Ctrl+S) are shared by Command and
//! Insert. Keys with no meaning in the current mode translate to `None` and are dropped.

use crate::{Action, ClipboardOp, EditKind, ModeChange, MotionKind, PaneOp};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;

pub fn translate_key(mode: Mode, key: &KeyEvent) -> Option<Action> {
    tracing::trace!(target: "actions.translate", ?mode, key = ?key.code, mods = ?key.mods, "translate_key");
    match mode {
        Mode::Command => shared_chord(key).or_else(|| command_map(key)),
        Mode::Insert => shared_chord(key).or_else(|| insert_map(key)),
        Mode::CommandEntry => command_entry_map(key),
        // Declared but not wired.
        Mode::Visual => None,
    }
}

fn shared_chord(key: &KeyEvent) -> Option<Action> {
    if !key.mods.contains(KeyModifiers::CTRL) {
        return None;
    }
    match key.code {
        KeyCode::Down => Some(Action::Pane(PaneOp::FocusNext)),
        KeyCode::Up => Some(Action::Pane(PaneOp::FocusPrevious)),
        KeyCode::Right => Some(Action::Motion(MotionKind::WordForward)),
        KeyCode::Left => Some(Action::Motion(MotionKind::WordBackward)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Save),
        _ => None,
    }
}

/// Arrows, Home/End and paging behave the same in Command and Insert.
fn navigation(code: KeyCode) -> Option<MotionKind> {
    Some(match code {
        KeyCode::Left => MotionKind::Left,
        KeyCode::Right => MotionKind::Right,
        KeyCode::Up => MotionKind::Up,
        KeyCode::Down => MotionKind::Down,
        KeyCode::Home => MotionKind::LineStart,
        KeyCode::End => MotionKind::LineEnd,
        KeyCode::PageUp => MotionKind::PageUp,
        KeyCode::PageDown => MotionKind::PageDown,
        _ => return None,
    })
}

fn command_map(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::SHIFT) {
        match key.code {
            KeyCode::Up => return Some(Action::Pane(PaneOp::Grow)),
            KeyCode::Down => return Some(Action::Pane(PaneOp::Shrink)),
            _ => {}
        }
    }
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return None;
    }
    if let Some(m) = navigation(key.code) {
        return Some(Action::Motion(m));
    }
    match key.code {
        KeyCode::Insert | KeyCode::Char('i') => Some(Action::ModeChange(ModeChange::EnterInsert)),
        KeyCode::Char(':') => Some(Action::CommandStart),
        KeyCode::Char('r') => Some(Action::RepeatSearch),
        KeyCode::Char('n') => Some(Action::Pane(PaneOp::FocusNext)),
        KeyCode::Char('p') => Some(Action::Pane(PaneOp::FocusPrevious)),
        KeyCode::Char('x') => Some(Action::Pane(PaneOp::Close)),
        KeyCode::Char('w') => Some(Action::Motion(MotionKind::WordForward)),
        KeyCode::Char('b') => Some(Action::Motion(MotionKind::WordBackward)),
        KeyCode::Char('o') => Some(Action::Edit(EditKind::OpenLineBelow)),
        KeyCode::Char('s') => Some(Action::Save),
        KeyCode::Char('d') => Some(Action::Clipboard(ClipboardOp::CutLine)),
        KeyCode::Char('y') => Some(Action::Clipboard(ClipboardOp::CopyLine)),
        KeyCode::Char('v') => Some(Action::Clipboard(ClipboardOp::PasteBelow)),
        KeyCode::Tab => Some(Action::Motion(MotionKind::TabForward)),
        KeyCode::Enter => Some(Action::Motion(MotionKind::Down)),
        KeyCode::Backspace => Some(Action::Motion(MotionKind::StepLeft)),
        KeyCode::Delete => Some(Action::Motion(MotionKind::StepRight)),
        _ => None,
    }
}

fn insert_map(key: &KeyEvent) -> Option<Action> {
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return None;
    }
    if let Some(m) = navigation(key.code) {
        return Some(Action::Motion(m));
    }
    match key.code {
        KeyCode::Esc => Some(Action::ModeChange(ModeChange::LeaveInsert)),
        KeyCode::Enter => Some(Action::Edit(EditKind::SplitLine)),
        KeyCode::Backspace => Some(Action::Edit(EditKind::DeleteBackward)),
        KeyCode::Delete => Some(Action::Edit(EditKind::DeleteForward)),
        KeyCode::Tab => Some(Action::Edit(EditKind::InsertTab)),
        KeyCode::Char(c) if !c.is_control() => Some(Action::Edit(EditKind::InsertChar(c))),
        _ => None,
    }
}

fn command_entry_map(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CommandCancel),
        KeyCode::Enter => Some(Action::CommandExecute),
        KeyCode::Backspace => Some(Action::CommandBackspace),
        KeyCode::Up => Some(Action::CommandHistoryOlder),
        KeyCode::Down => Some(Action::CommandHistoryNewer),
        KeyCode::Char(c)
            if !c.is_control() && !key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) =>
        {
            Some(Action::CommandChar(c))
        }
        _ => None,
    }
}
