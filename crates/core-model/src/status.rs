//! Status line composition.
//!
//! Two stages, as for any status bar that may later grow segments:
//! 1. `compose_status` produces ordered `StatusSegment`s from the focused pane and session.
//! 2. `format_status` renders them into the displayed text.
//!
//! Formats:
//! * editor pane: `{name} ({file type}); {line} line at {column}`
//! * stream pane: `{line} line at {column}`
//! * command entry: `:{pending}`
//!
//! A live transient message replaces the text (command entry still wins). The mode sign is
//! reported separately so the renderer can draw it in its own cell.

use core_state::{Mode, Severity, StatusMessage};

use crate::pane::Pane;

pub struct StatusContext<'a> {
    pub pane: &'a Pane,
    pub command_text: &'a str,
    pub message: Option<&'a StatusMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Command(&'a str),
    Message(&'a str),
    Document { name: String, file_type: &'static str },
    /// 1-based line, 0-based column.
    Position { line_1: usize, column: usize },
}

/// Rendered status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub sign: char,
    pub text: String,
    /// Set when a transient message is showing.
    pub severity: Option<Severity>,
}

pub fn compose_status<'a>(ctx: &'a StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    if ctx.pane.mode == Mode::CommandEntry {
        return vec![StatusSegment::Command(ctx.command_text)];
    }
    if let Some(message) = ctx.message {
        return vec![StatusSegment::Message(&message.text)];
    }
    let mut out = Vec::with_capacity(2);
    if !ctx.pane.is_stream() {
        out.push(StatusSegment::Document {
            name: ctx.pane.display_name(),
            file_type: ctx.pane.file_kind().label,
        });
    }
    let caret = ctx.pane.caret();
    out.push(StatusSegment::Position {
        line_1: caret.row + 1,
        column: caret.column,
    });
    out
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    use std::fmt::Write as _;
    let mut s = String::with_capacity(48);
    for seg in segments {
        match seg {
            StatusSegment::Command(text) => {
                s.push(':');
                s.push_str(text);
            }
            StatusSegment::Message(text) => s.push_str(text),
            StatusSegment::Document { name, file_type } => {
                let _ = write!(s, "{name} ({file_type}); ");
            }
            StatusSegment::Position { line_1, column } => {
                let _ = write!(s, "{line_1} line at {column}");
            }
        }
    }
    s
}

pub fn build_status(ctx: &StatusContext<'_>) -> StatusView {
    let severity = match ctx.pane.mode {
        Mode::CommandEntry => None,
        _ => ctx.message.map(|m| m.severity),
    };
    StatusView {
        sign: ctx.pane.mode.sign(),
        text: format_status(&compose_status(ctx)),
        severity,
    }
}
