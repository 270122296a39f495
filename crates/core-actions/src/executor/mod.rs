//! Command execution.
//!
//! The executor owns an alias table mapping verb names to handler capabilities; several aliases
//! may share one handler instance. A submitted line is classified by the parser: a number jumps
//! to that line, a known verb runs its handler with the remaining arguments, anything else is a
//! literal search for the whole line.
//!
//! Handlers report user-visible outcomes as `Ok(Some(message))` or a [`CommandError`]; the
//! dispatcher turns both into status-line messages. No handler error is fatal.

use std::collections::HashMap;
use std::sync::Arc;

use core_config::{Config, DocumentStateStore, SettingError, Settings};
use core_model::PaneStack;
use core_state::EditorSession;
use thiserror::Error;

use crate::dispatcher::command_parser::{CommandParser, ParsedCommand};
use crate::search;

pub mod handlers;

/// `Ok(Some(text))` shows `text` as an info message.
pub type CommandResult = Result<Option<String>, CommandError>;

/// Recoverable command failures. `Display` is the status-line text.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid command")]
    Empty,
    #[error("Invalid line! Available range: 1...{max}")]
    LineOutOfRange { max: usize },
    #[error("Unable to find '{0}'")]
    NotFound(String),
    #[error("Provide file name 'open FILENAME'")]
    MissingFileName,
    #[error("Provide file name 'save FILENAME'")]
    NoSaveTarget,
    #[error("File '{0}' doesn't exist")]
    FileMissing(String),
    #[error("Current file is unsaved. Save it or type '{usage}'")]
    Unsaved { usage: String },
    #[error("Command must be called from with editor viewport being focused")]
    NotEditorPane,
    #[error("Unable to {action} '{path}': {reason}")]
    Io {
        action: &'static str,
        path: String,
        reason: String,
    },
    #[error("Provide command 'shell COMMAND'")]
    MissingShellCommand,
    #[error("Unable to spawn '{command}': {reason}")]
    Spawn { command: String, reason: String },
    #[error("Unable to reload: {0}")]
    Reload(String),
    #[error("Command accepts exactly 4 arguments: '{}'", handlers::CONFIG_EXAMPLE)]
    ConfigArity,
    #[error("Key/param value must be separated with a dot: '{}'", handlers::CONFIG_EXAMPLE)]
    ConfigKey,
    #[error(transparent)]
    Setting(#[from] SettingError),
}

/// Mutable editor state a handler may touch.
pub struct CommandContext<'a> {
    pub panes: &'a mut PaneStack,
    pub session: &'a mut EditorSession,
    pub config: &'a mut Config,
    pub settings: &'a mut Settings,
    pub store: &'a mut dyn DocumentStateStore,
}

/// One handler call.
pub struct Invocation<'a> {
    /// Alias the user typed.
    pub verb: &'a str,
    pub args: &'a [String],
    pub executor: &'a CommandExecutor,
}

pub trait CommandHandler: Send + Sync {
    fn description(&self) -> &'static str {
        "No description"
    }

    fn usage(&self) -> &'static [&'static str] {
        &["No usage info is defined"]
    }

    fn execute(&self, call: Invocation<'_>, ctx: &mut CommandContext<'_>) -> CommandResult;
}

#[derive(Default)]
pub struct CommandExecutor {
    by_alias: HashMap<String, Arc<dyn CommandHandler>>,
    /// Registration order, for the usage listing.
    entries: Vec<(Vec<&'static str>, Arc<dyn CommandHandler>)>,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor with every built-in verb registered.
    pub fn with_builtins() -> Self {
        let mut ex = Self::new();
        handlers::register_builtins(&mut ex);
        ex
    }

    pub fn register(&mut self, aliases: &[&'static str], handler: Arc<dyn CommandHandler>) {
        for alias in aliases {
            self.by_alias.insert((*alias).to_string(), Arc::clone(&handler));
        }
        self.entries.push((aliases.to_vec(), handler));
    }

    pub fn lookup(&self, verb: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.by_alias.get(verb)
    }

    /// Usage listing of every registered verb.
    pub fn usage_listing(&self) -> String {
        let mut out = String::new();
        for (aliases, handler) in &self.entries {
            out.push_str("Usage of ");
            out.push_str(&aliases.join(", "));
            out.push('\n');
            out.push_str(&format!("  Description: {}\n\n", handler.description()));
            out.push_str("  ");
            out.push_str(&handler.usage().join("\n  "));
            out.push('\n');
        }
        out
    }

    /// Run a submitted command line against the focused pane.
    pub fn execute(&self, line: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        tracing::info!(target: "command", line, "command_execute");
        match CommandParser::parse(line) {
            ParsedCommand::Empty => Err(CommandError::Empty),
            ParsedCommand::LineJump(n) => {
                let pane = ctx.panes.focused_mut();
                let max = pane.buffer().line_count();
                if n == 0 || n > max {
                    return Err(CommandError::LineOutOfRange { max });
                }
                pane.set_caret_line(n);
                Ok(None)
            }
            ParsedCommand::Invocation { verb, args, raw } => match self.lookup(&verb) {
                Some(handler) => handler.execute(
                    Invocation {
                        verb: &verb,
                        args: &args,
                        executor: self,
                    },
                    ctx,
                ),
                None => search::search(ctx.panes.focused_mut(), ctx.session, &raw).map(|_| None),
            },
            ParsedCommand::Search(raw) => {
                search::search(ctx.panes.focused_mut(), ctx.session, &raw).map(|_| None)
            }
        }
    }

    /// Run a verb directly, bypassing parsing (key shortcuts, initial open).
    pub fn run_verb(
        &self,
        verb: &str,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> CommandResult {
        match self.lookup(verb) {
            Some(handler) => handler.execute(
                Invocation {
                    verb,
                    args,
                    executor: self,
                },
                ctx,
            ),
            None => Err(CommandError::Empty),
        }
    }
}
