#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use core_actions::{DispatchResult, Editor};
use core_events::parse_key_script;
use core_text::{Caret, LineEnding};
use tracing_subscriber::fmt::MakeWriter;

pub const HEIGHT: u16 = 20;

/// Editor with one pane holding `lines`, sized 80x`HEIGHT`.
pub fn editor_with(lines: &[&str]) -> Editor {
    editor_sized(lines, HEIGHT)
}

pub fn editor_sized(lines: &[&str], height: u16) -> Editor {
    let mut ed = Editor::default();
    ed.panes.focused_mut().load_document(
        PathBuf::from("scratch.txt"),
        lines.iter().map(|s| s.to_string()).collect(),
        LineEnding::Lf,
    );
    ed.resize(80, height);
    ed
}

pub fn numbered_lines(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("line {i}")).collect()
}

pub fn set_caret(ed: &mut Editor, column: usize, row: usize) {
    ed.panes.focused_mut().set_caret(Caret::new(column, row));
}

/// Feed a key script, ticking after each key like a frame loop would. Returns the last result.
pub fn play(ed: &mut Editor, script: &str) -> DispatchResult {
    let keys = parse_key_script(script).expect("valid key script");
    let mut last = DispatchResult::clean();
    for key in &keys {
        last = ed.handle_key(key);
        ed.tick(Instant::now());
    }
    last
}

pub fn lines(ed: &Editor) -> Vec<String> {
    ed.panes.focused().buffer().lines().to_vec()
}

pub fn caret(ed: &Editor) -> (usize, usize) {
    ed.panes.focused().caret().cell()
}

#[derive(Clone)]
pub struct BufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl BufferWriter {
    pub fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        (Self { inner: buf.clone() }, buf)
    }
}

pub struct LockedWriter<'a> {
    guard: MutexGuard<'a, Vec<u8>>,
}

impl Write for LockedWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = LockedWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedWriter {
            guard: self.inner.lock().expect("log buffer poisoned"),
        }
    }
}

/// Run `f` with a subscriber capturing events at `level` and above; returns the log text.
pub fn capture_logs<F: FnOnce()>(level: tracing::Level, f: F) -> String {
    let (writer, buf) = BufferWriter::new();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.lock().expect("log buffer poisoned").clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
