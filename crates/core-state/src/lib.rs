//! Editor mode machine state and application-wide session data.
//!
//! Per-pane state (buffer, caret, viewport) lives in `core-model`. This crate holds what the
//! whole application shares across panes:
//! - the command line being typed in `CommandEntry` mode, with its bounded history,
//! - the last successful search pattern,
//! - the line clipboard used by cut/copy/paste shortcuts,
//! - the transient status message.
//!
//! Everything here is mutated from the single UI thread only.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub mod command_line;
pub use command_line::CommandLine;

/// Modal input state. Exactly one is active per pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and single-key shortcuts (initial state).
    #[default]
    Command,
    /// Literal text entry.
    Insert,
    /// Typing a command line after `:`.
    CommandEntry,
    /// Reserved. No transition leads here yet.
    Visual,
}

impl Mode {
    /// Single-letter sign shown next to the status line.
    pub fn sign(self) -> char {
        match self {
            Mode::Command => 'C',
            Mode::Insert => 'I',
            Mode::CommandEntry => 'X',
            Mode::Visual => 'V',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Transient status message.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Status message slot with a fixed time-to-live.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: Option<StatusMessage>,
    ttl: Duration,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_TTL)
    }
}

pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(4);

impl StatusLine {
    pub fn new(ttl: Duration) -> Self {
        Self { message: None, ttl }
    }

    pub fn set_ttl(&mut self, ttl: Duration) {
        self.ttl = ttl;
    }

    pub fn info<S: Into<String>>(&mut self, text: S) {
        self.set(text.into(), Severity::Info);
    }

    pub fn error<S: Into<String>>(&mut self, text: S) {
        self.set(text.into(), Severity::Error);
    }

    fn set(&mut self, text: String, severity: Severity) {
        tracing::debug!(target: "state.status", ?severity, %text, "status_message");
        self.message = Some(StatusMessage {
            text,
            severity,
            expires_at: Instant::now() + self.ttl,
        });
    }

    /// Drop the message once expired; returns true if it was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(m) = &self.message
            && now >= m.expires_at
        {
            self.message = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }
}

/// Application-lifetime state shared by every pane.
#[derive(Debug, Default)]
pub struct EditorSession {
    pub command_line: CommandLine,
    /// Pattern of the last successful search, for "repeat last search".
    pub last_search: Option<String>,
    /// Whole lines captured by cut/copy.
    pub clipboard: Option<Vec<String>>,
    pub status: StatusLine,
    pub quit_requested: bool,
}

impl EditorSession {
    pub fn new(history_capacity: usize, message_ttl: Duration) -> Self {
        Self {
            command_line: CommandLine::with_capacity(history_capacity),
            status: StatusLine::new(message_ttl),
            ..Self::default()
        }
    }

    /// Command history, most recent last.
    pub fn history(&self) -> &VecDeque<String> {
        self.command_line.history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_signs() {
        assert_eq!(Mode::default(), Mode::Command);
        assert_eq!(Mode::Command.sign(), 'C');
        assert_eq!(Mode::Insert.sign(), 'I');
        assert_eq!(Mode::CommandEntry.sign(), 'X');
    }

    #[test]
    fn status_message_expires() {
        let mut status = StatusLine::new(Duration::from_millis(10));
        status.error("boom");
        let m = status.current().unwrap();
        assert_eq!(m.severity, Severity::Error);
        assert!(!status.tick(Instant::now()));
        assert!(status.tick(Instant::now() + Duration::from_secs(1)));
        assert!(status.current().is_none());
    }

    #[test]
    fn session_defaults() {
        let s = EditorSession::new(3, Duration::from_secs(1));
        assert!(s.last_search.is_none());
        assert!(s.history().is_empty());
        assert!(!s.quit_requested);
    }
}
