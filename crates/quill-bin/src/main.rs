//! Quill entrypoint.
//!
//! Runs the editor core headlessly: a key script is replayed against the editor as if typed,
//! with one frame tick after every key, and `--dump` prints the focused pane and status line
//! afterwards. Logs go to `quill.log` in the working directory.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::Editor;
use core_config::load_from;
use core_events::parse_key_script;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Instant;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

const STATUS_ROWS: u16 = 1;
const LOG_FILE: &str = "quill.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Quill modal editor core")]
struct Args {
    /// File to open at startup. A missing file starts an empty buffer under that name.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `quill.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Keys to replay, e.g. `ihello<Esc>:save<CR>`.
    #[arg(long = "keys")]
    pub keys: Option<String>,
    /// Read the key script from a file instead.
    #[arg(long = "keys-file", conflicts_with = "keys")]
    pub keys_file: Option<PathBuf>,
    #[arg(long, default_value_t = 80)]
    pub width: u16,
    /// Screen height including the status row.
    #[arg(long, default_value_t = 24)]
    pub height: u16,
    /// Print the focused buffer and the status line when done.
    #[arg(long)]
    pub dump: bool,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    fn build_editor(args: &Args) -> Result<Editor> {
        let config = load_from(args.config.clone())?;
        let mut editor = Editor::new(config);
        editor.resize(args.width, args.height.saturating_sub(STATUS_ROWS).max(1));
        if let Some(path) = &args.path {
            if path.exists() {
                editor.open(path);
            } else {
                let result = editor.run_verb("new", &[path.display().to_string()]);
                editor.report(result);
            }
        }
        info!(
            target: "runtime.startup",
            path = args.path.as_ref().map(|p| p.display().to_string()).as_deref(),
            config_override = args.config.is_some(),
            effective_margin = editor.config.effective_margin,
            "bootstrap_complete"
        );
        Ok(editor)
    }
}

fn load_script(args: &Args) -> Result<String> {
    if let Some(path) = &args.keys_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading key script {}", path.display()));
    }
    Ok(args.keys.clone().unwrap_or_default())
}

/// Replay keys with a tick after each. Stops early when the editor asks to quit.
fn replay(editor: &mut Editor, script: &str) -> Result<usize> {
    let keys = parse_key_script(script).context("parsing key script")?;
    let mut handled = 0;
    for key in &keys {
        let result = editor.handle_key(key);
        editor.tick(Instant::now());
        handled += 1;
        if result.quit {
            info!(target: "runtime", handled, "quit");
            break;
        }
    }
    if handled < keys.len() {
        warn!(target: "runtime", skipped = keys.len() - handled, "keys_after_quit_ignored");
    }
    Ok(handled)
}

fn dump(editor: &Editor, out: &mut impl Write) -> Result<()> {
    for line in editor.panes.focused().buffer().lines() {
        writeln!(out, "{line}")?;
    }
    let status = editor.status();
    writeln!(out, "-- [{}] {}", status.sign, status.text)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let mut editor = AppStartup::build_editor(&args)?;
    let script = load_script(&args)?;
    replay(&mut editor, &script)?;

    if args.dump {
        let stdout = std::io::stdout();
        dump(&editor, &mut stdout.lock())?;
    }
    info!(target: "runtime", quit = editor.should_quit(), "shutdown");
    drop(startup.log_guard.take());
    Ok(())
}
