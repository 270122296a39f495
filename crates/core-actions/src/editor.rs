//! Application facade tying panes, session, configuration and the command executor together.
//!
//! A frontend drives an [`Editor`] with three calls: [`Editor::handle_key`] for every key,
//! [`Editor::tick`] once per frame, and [`Editor::resize`] when the screen changes. Everything it
//! draws comes back out of [`Editor::render_state`] and [`Editor::status`].

use std::path::Path;
use std::time::Instant;

use core_config::{Config, DocumentStateStore, MemoryDocumentStore, Settings};
use core_events::KeyEvent;
use core_model::{PaneStack, RenderState, StatusContext, StatusView, build_status};
use core_state::EditorSession;

use crate::dispatcher::{DispatchResult, dispatch};
use crate::executor::{CommandContext, CommandExecutor, CommandResult};
use crate::translate_key;

pub struct Editor {
    pub panes: PaneStack,
    pub session: EditorSession,
    pub config: Config,
    pub settings: Settings,
    pub store: MemoryDocumentStore,
    executor: CommandExecutor,
}

impl Editor {
    pub fn new(config: Config) -> Self {
        let session = EditorSession::new(
            config.file.command.history_capacity,
            config.message_ttl(),
        );
        let settings = Settings::from_file(&config.file);
        let mut config = config;
        config.effective_margin = config.file.scroll.margin;
        Self {
            panes: PaneStack::default(),
            session,
            config,
            settings,
            store: MemoryDocumentStore::default(),
            executor: CommandExecutor::with_builtins(),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.panes.resize(width, height);
        let visible = self.panes.focused().viewport().visible;
        self.config.apply_context(visible);
    }

    /// Open `path` in the focused pane through the `open` verb, reporting any failure on the
    /// status line.
    pub fn open(&mut self, path: &Path) -> bool {
        let args = [path.display().to_string()];
        let result = self.run_verb("open", &args);
        let ok = result.is_ok();
        self.report(result);
        ok
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> DispatchResult {
        let mode = self.panes.focused().mode;
        let Some(action) = translate_key(mode, key) else {
            tracing::trace!(target: "actions.dispatch", key = ?key.code, ?mode, "key_ignored");
            return DispatchResult::clean();
        };
        let result = dispatch(action, self);
        let margin = self.config.effective_margin;
        self.panes.focused_mut().update_viewport(margin);
        result
    }

    /// Parse and run a full command line.
    pub fn execute_command(&mut self, line: &str) -> CommandResult {
        let (executor, mut ctx) = self.command_parts();
        executor.execute(line, &mut ctx)
    }

    pub fn run_verb(&mut self, verb: &str, args: &[String]) -> CommandResult {
        let (executor, mut ctx) = self.command_parts();
        executor.run_verb(verb, args, &mut ctx)
    }

    fn command_parts(&mut self) -> (&CommandExecutor, CommandContext<'_>) {
        let Self {
            panes,
            session,
            config,
            settings,
            store,
            executor,
        } = self;
        (
            executor,
            CommandContext {
                panes,
                session,
                config,
                settings,
                store,
            },
        )
    }

    /// Show a command outcome on the status line.
    pub fn report(&mut self, result: CommandResult) {
        match result {
            Ok(Some(text)) => self.session.status.info(text),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(target: "command", error = %e, "command_failed");
                self.session.status.error(e.to_string());
            }
        }
    }

    /// Per-frame update: expire the status message, drain process output, scroll every pane and
    /// remember the focused document's position. Returns true when anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.session.status.tick(now);
        let margin = self.config.effective_margin;
        for pane in self.panes.panes_mut() {
            changed |= pane.tick_stream();
            changed |= pane.update_viewport(margin);
        }
        let pane = self.panes.focused();
        if let Some(id) = pane.document_id() {
            let caret = pane.caret();
            self.store.set_caret(&id, (caret.column, caret.row));
            self.store.set_scroll(&id, pane.viewport().memo(caret.last_x));
        }
        changed
    }

    pub fn status(&self) -> StatusView {
        build_status(&StatusContext {
            pane: self.panes.focused(),
            command_text: self.session.command_line.text(),
            message: self.session.status.current(),
        })
    }

    pub fn render_state(&self) -> RenderState<'_> {
        self.panes.focused().render_state()
    }

    pub fn should_quit(&self) -> bool {
        self.session.quit_requested
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
