//! Built-in verbs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use core_config::{DocumentStateStore, SettingType, SettingValue, Settings, settings::split_key};
use core_model::{Pane, PaneStack};
use core_stream::ProcessStream;
use core_text::{Caret, LineEnding};

use super::{CommandContext, CommandError, CommandExecutor, CommandHandler, CommandResult, Invocation};
use crate::io_ops;

pub const CONFIG_EXAMPLE: &str = "config key.param = value type[int/bool/float/str]";

const DEFAULT_NEW_FILE: &str = "unnamed.txt";

pub fn register_builtins(ex: &mut CommandExecutor) {
    ex.register(&["open"], Arc::new(OpenCommand));
    ex.register(&["save"], Arc::new(SaveCommand));
    ex.register(&["exit", "quit", "restart", "close"], Arc::new(CloseRestartCommand));
    ex.register(&["reload"], Arc::new(ReloadCommand));
    ex.register(&["new"], Arc::new(NewCommand));
    ex.register(&["shell"], Arc::new(ShellCommand));
    ex.register(&["config"], Arc::new(ConfigCommand));
    ex.register(&["split"], Arc::new(SplitCommand));
    ex.register(&["help", "info"], Arc::new(HelpCommand));
}

/// Split a trailing `!` override off the arguments.
fn split_force(args: &[String]) -> (&[String], bool) {
    match args.split_last() {
        Some((last, rest)) if last == "!" => (rest, true),
        _ => (args, false),
    }
}

/// The focused pane if it is an editor; otherwise a fresh editor pane added to the stack.
fn editor_pane(panes: &mut PaneStack) -> &mut Pane {
    if panes.focused().is_stream() {
        panes.add(Pane::editor());
    }
    panes.focused_mut()
}

/// Load `path` into `pane` and restore the caret and scroll remembered for it.
pub fn open_into(
    pane: &mut Pane,
    path: &Path,
    store: &dyn DocumentStateStore,
) -> Result<(), CommandError> {
    let loaded = io_ops::load_file(path).map_err(|e| CommandError::Io {
        action: "open",
        path: path.display().to_string(),
        reason: format!("{e:#}"),
    })?;
    pane.load_document(path.to_path_buf(), loaded.lines, loaded.line_ending);
    restore_document_state(pane, store);
    Ok(())
}

fn restore_document_state(pane: &mut Pane, store: &dyn DocumentStateStore) {
    let Some(id) = pane.document_id() else {
        return;
    };
    let caret = store.caret(&id);
    let scroll = store.scroll(&id);
    if let Some((column, row)) = caret {
        let last_x = scroll.map(|s| s.last_x).unwrap_or(column);
        pane.set_caret(Caret {
            column,
            row,
            last_x,
        });
    }
    match scroll {
        Some(memo) => pane.viewport_mut().restore(memo),
        None => pane.center_on_caret(),
    }
    tracing::debug!(target: "command", document = %id, restored = caret.is_some(), "document_state_restored");
}

struct OpenCommand;

impl CommandHandler for OpenCommand {
    fn description(&self) -> &'static str {
        "Opens file"
    }

    fn usage(&self) -> &'static [&'static str] {
        &[
            "To open a file: open FILENAME",
            "To forcefully open a file (without saving current): open FILENAME !",
        ]
    }

    fn execute(&self, call: Invocation<'_>, ctx: &mut CommandContext<'_>) -> CommandResult {
        let (args, force) = split_force(call.args);
        let Some(name) = args.first() else {
            return Err(CommandError::MissingFileName);
        };
        let path = PathBuf::from(name);
        if !path.is_file() {
            return Err(CommandError::FileMissing(name.clone()));
        }
        let store: &dyn DocumentStateStore = &*ctx.store;
        let pane = editor_pane(ctx.panes);
        if pane.is_dirty() && !force {
            return Err(CommandError::Unsaved {
                usage: "open FILENAME !".to_string(),
            });
        }
        open_into(pane, &path, store)?;
        Ok(None)
    }
}

struct SaveCommand;

impl CommandHandler for SaveCommand {
    fn description(&self) -> &'static str {
        "Saves the focused file, optionally under a new name"
    }

    fn usage(&self) -> &'static [&'static str] {
        &["To save a file: save", "To save under another name: save FILENAME"]
    }

    fn execute(&self, call: Invocation<'_>, ctx: &mut CommandContext<'_>) -> CommandResult {
        let pane = ctx.panes.focused_mut();
        if pane.is_stream() {
            return Err(CommandError::NotEditorPane);
        }
        let path = match call.args.first() {
            Some(name) => PathBuf::from(name),
            None => pane
                .path()
                .map(Path::to_path_buf)
                .ok_or(CommandError::NoSaveTarget)?,
        };
        io_ops::save_file(&path, pane.buffer().lines(), pane.line_ending()).map_err(|e| {
            CommandError::Io {
                action: "save",
                path: path.display().to_string(),
                reason: format!("{e:#}"),
            }
        })?;
        let shown = path.display().to_string();
        pane.mark_saved(path);
        Ok(Some(format!("Saved file as '{shown}'")))
    }
}

struct CloseRestartCommand;

impl CommandHandler for CloseRestartCommand {
    fn description(&self) -> &'static str {
        "Closes the focused pane, quits, or reloads the focused file from disk"
    }

    fn usage(&self) -> &'static [&'static str] {
        &[
            "To close the focused pane (quits on the last one): exit/close",
            "To quit the editor: quit",
            "To reload the focused file from disk: restart",
            "To skip the unsaved check: VERB !",
        ]
    }

    fn execute(&self, call: Invocation<'_>, ctx: &mut CommandContext<'_>) -> CommandResult {
        let (_, force) = split_force(call.args);
        let pane = ctx.panes.focused();
        if !pane.is_stream() && pane.is_dirty() && !force {
            return Err(CommandError::Unsaved {
                usage: format!("{} !", call.verb),
            });
        }
        match call.verb {
            "quit" => ctx.session.quit_requested = true,
            "restart" => {
                let pane = ctx.panes.focused_mut();
                if let Some(path) = pane.path().map(Path::to_path_buf) {
                    let caret = pane.caret();
                    let memo = pane.viewport().memo(caret.last_x);
                    let loaded = io_ops::load_file(&path).map_err(|e| CommandError::Io {
                        action: "reload",
                        path: path.display().to_string(),
                        reason: format!("{e:#}"),
                    })?;
                    pane.load_document(path, loaded.lines, loaded.line_ending);
                    pane.set_caret(caret);
                    pane.viewport_mut().restore(memo);
                }
            }
            _ => {
                if ctx.panes.remove_focused().is_none() {
                    ctx.session.quit_requested = true;
                }
            }
        }
        Ok(None)
    }
}

struct ReloadCommand;

impl CommandHandler for ReloadCommand {
    fn description(&self) -> &'static str {
        "Reloads configuration from its file"
    }

    fn usage(&self) -> &'static [&'static str] {
        &["To reload configuration: reload"]
    }

    fn execute(&self, _call: Invocation<'_>, ctx: &mut CommandContext<'_>) -> CommandResult {
        let fresh = ctx
            .config
            .reload()
            .map_err(|e| CommandError::Reload(format!("{e:#}")))?;
        *ctx.config = fresh;
        let visible = ctx.panes.focused().viewport().visible;
        ctx.config.apply_context(visible);
        *ctx.settings = Settings::from_file(&ctx.config.file);
        ctx.session.status.set_ttl(ctx.config.message_ttl());
        Ok(Some("Successfully reloaded".to_string()))
    }
}

struct NewCommand;

impl CommandHandler for NewCommand {
    fn description(&self) -> &'static str {
        "Opens a file, starting an empty one when it does not exist"
    }

    fn usage(&self) -> &'static [&'static str] {
        &[
            "To start an unnamed file: new",
            "To open or start a named file: new FILENAME",
            "To discard unsaved changes: new FILENAME !",
        ]
    }

    fn execute(&self, call: Invocation<'_>, ctx: &mut CommandContext<'_>) -> CommandResult {
        let (args, force) = split_force(call.args);
        let path = PathBuf::from(args.first().map(String::as_str).unwrap_or(DEFAULT_NEW_FILE));
        let store: &dyn DocumentStateStore = &*ctx.store;
        let pane = editor_pane(ctx.panes);
        if pane.is_dirty() && !force {
            return Err(CommandError::Unsaved {
                usage: "new FILENAME !".to_string(),
            });
        }
        if path.is_file() {
            open_into(pane, &path, store)?;
        } else {
            pane.load_document(path, Vec::new(), LineEnding::default());
        }
        Ok(None)
    }
}

struct ShellCommand;

impl CommandHandler for ShellCommand {
    fn description(&self) -> &'static str {
        "Runs a command in a new output pane"
    }

    fn usage(&self) -> &'static [&'static str] {
        &["To run a command: shell COMMAND [ARGS...]"]
    }

    fn execute(&self, call: Invocation<'_>, ctx: &mut CommandContext<'_>) -> CommandResult {
        if call.args.is_empty() {
            return Err(CommandError::MissingShellCommand);
        }
        let command = call.args.join(" ");
        let stream = ProcessStream::spawn(call.args).map_err(|e| CommandError::Spawn {
            command: command.clone(),
            reason: format!("{e:#}"),
        })?;
        ctx.panes.add(Pane::stream(stream));
        Ok(Some(format!("Terminal spawned for command: {command}")))
    }
}

struct ConfigCommand;

impl CommandHandler for ConfigCommand {
    fn description(&self) -> &'static str {
        "Updates a configuration value for this session"
    }

    fn usage(&self) -> &'static [&'static str] {
        &[CONFIG_EXAMPLE]
    }

    fn execute(&self, call: Invocation<'_>, ctx: &mut CommandContext<'_>) -> CommandResult {
        let [key, eq, literal, ty] = call.args else {
            return Err(CommandError::ConfigArity);
        };
        if eq != "=" {
            return Err(CommandError::ConfigArity);
        }
        let Ok(ty) = ty.parse::<SettingType>() else {
            return Err(CommandError::ConfigArity);
        };
        let (section, param) = split_key(key).map_err(|_| CommandError::ConfigKey)?;
        let value = SettingValue::parse(literal, ty)?;
        apply_live(ctx, section, param, &value);
        let previous = ctx
            .settings
            .set(section, param, value.clone())
            .map(|v| v.to_string())
            .unwrap_or_else(|| "None".to_string());
        Ok(Some(format!(
            "Updated value for {key}; previous: '{previous}', new: '{value}'"
        )))
    }
}

/// Push well-known keys into the running configuration.
fn apply_live(ctx: &mut CommandContext<'_>, section: &str, param: &str, value: &SettingValue) {
    let file = &mut ctx.config.file;
    match (section, param) {
        ("scroll", "margin") => {
            if let Some(n) = value.as_usize() {
                file.scroll.margin = n;
                let visible = ctx.panes.focused().viewport().visible;
                ctx.config.apply_context(visible);
            }
        }
        ("edit", "indent_preserving") => {
            if let Some(b) = value.as_bool() {
                file.edit.indent_preserving = b;
            }
        }
        ("edit", "tab_width") => {
            if let Some(n) = value.as_usize() {
                file.edit.tab_width = n;
            }
        }
        ("status", "message_timeout_ms") => {
            if let Some(n) = value.as_usize() {
                file.status.message_timeout_ms = n as u64;
                ctx.session.status.set_ttl(ctx.config.message_ttl());
            }
        }
        _ => {}
    }
}

struct SplitCommand;

impl CommandHandler for SplitCommand {
    fn description(&self) -> &'static str {
        "Adds an empty editor pane below the others"
    }

    fn usage(&self) -> &'static [&'static str] {
        &["To split: split"]
    }

    fn execute(&self, _call: Invocation<'_>, ctx: &mut CommandContext<'_>) -> CommandResult {
        ctx.panes.add(Pane::editor());
        Ok(None)
    }
}

struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn description(&self) -> &'static str {
        "Prints this message"
    }

    fn usage(&self) -> &'static [&'static str] {
        &["To display help message: help/info"]
    }

    fn execute(&self, call: Invocation<'_>, _ctx: &mut CommandContext<'_>) -> CommandResult {
        let listing = call.executor.usage_listing();
        tracing::info!(target: "command", "\n{listing}");
        Ok(Some(listing))
    }
}
