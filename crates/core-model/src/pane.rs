//! One editing surface.
//!
//! A pane owns its buffer, caret, mode and viewport; they are created and dropped together.
//! Highlight tokens are derived from the buffer and recomputed after every mutation that goes
//! through [`Pane::edit`], [`Pane::load_document`] or the stream drain, so readers never see
//! stale tokens.

use std::path::{Path, PathBuf};

use core_state::Mode;
use core_stream::ProcessStream;
use core_syntax::{FileKind, Token, detect, tokenize};
use core_text::width::display_column;
use core_text::{Caret, LineBuffer, LineEnding, motion};

use crate::navigation;
use crate::viewport::ViewportState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneId(pub usize);

pub const DEFAULT_WEIGHT: u16 = 4;
pub const MAX_WEIGHT: u16 = 16;

/// What the external renderer reads each frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    pub visible_lines: &'a [Vec<Token>],
    pub scroll_offset: usize,
    /// `(display column, row relative to scroll_offset)`.
    pub caret_cell: (usize, usize),
    pub mode: Mode,
}

pub struct Pane {
    id: PaneId,
    buffer: LineBuffer,
    caret: Caret,
    pub mode: Mode,
    viewport: ViewportState,
    tokens: Vec<Vec<Token>>,
    file_kind: FileKind,
    path: Option<PathBuf>,
    line_ending: LineEnding,
    dirty: bool,
    stream: Option<ProcessStream>,
    stream_id: Option<String>,
    weight: u16,
}

impl std::fmt::Debug for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pane")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("caret", &self.caret)
            .field("lines", &self.buffer.line_count())
            .field("path", &self.path)
            .field("stream", &self.stream_id)
            .finish()
    }
}

impl Pane {
    /// Empty editor pane with no backing file.
    pub fn editor() -> Self {
        let mut pane = Self {
            id: PaneId(0),
            buffer: LineBuffer::new(),
            caret: Caret::origin(),
            mode: Mode::Command,
            viewport: ViewportState::new(0),
            tokens: Vec::new(),
            file_kind: FileKind::default(),
            path: None,
            line_ending: LineEnding::default(),
            dirty: false,
            stream: None,
            stream_id: None,
            weight: DEFAULT_WEIGHT,
        };
        pane.retokenize();
        pane
    }

    /// Pane fed by a running process. Starts in Insert so the caret follows the output.
    pub fn stream(stream: ProcessStream) -> Self {
        let mut pane = Self::editor();
        pane.stream_id = Some(stream.document_id());
        pane.stream = Some(stream);
        pane.mode = Mode::Insert;
        pane
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: PaneId) {
        self.id = id;
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    pub fn tokens(&self) -> &[Vec<Token>] {
        &self.tokens
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    pub fn file_kind(&self) -> FileKind {
        self.file_kind
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_stream(&self) -> bool {
        self.stream_id.is_some()
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: u16) {
        self.weight = weight.clamp(1, MAX_WEIGHT);
    }

    /// Key used for persisted caret/scroll state: the file path, or the synthetic stream id.
    pub fn document_id(&self) -> Option<String> {
        self.stream_id
            .clone()
            .or_else(|| self.path.as_ref().map(|p| p.display().to_string()))
    }

    /// Base file name, or `[No Name]` when the pane has no file.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[No Name]".to_string())
    }

    /// Replace the whole document (open / reload). Caret returns to the origin.
    pub fn load_document(&mut self, path: PathBuf, lines: Vec<String>, line_ending: LineEnding) {
        self.file_kind = kind_for(&path);
        self.path = Some(path);
        self.line_ending = line_ending;
        self.buffer.replace_all(lines);
        self.caret = Caret::origin();
        self.viewport.scroll_offset = 0;
        self.viewport.previous_scroll_offset = 0;
        self.dirty = false;
        self.retokenize();
        tracing::debug!(
            target: "model.panes",
            pane = self.id.0,
            lines = self.buffer.line_count(),
            file_type = self.file_kind.label,
            "document_loaded"
        );
    }

    /// Record a successful save, possibly under a new name.
    pub fn mark_saved(&mut self, path: PathBuf) {
        let kind = kind_for(&path);
        if kind != self.file_kind {
            self.file_kind = kind;
            self.retokenize();
        }
        self.path = Some(path);
        self.dirty = false;
    }

    /// Apply a buffer mutation. The returned caret is clamped and the tokens refreshed.
    pub fn edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut LineBuffer, Caret) -> Caret,
    {
        let next = f(&mut self.buffer, self.caret);
        self.caret = self.buffer.clamp(next);
        self.dirty = true;
        self.retokenize();
    }

    /// Apply a caret motion from `core_text::motion` or a closure of the same shape.
    pub fn move_caret<F>(&mut self, f: F)
    where
        F: FnOnce(&LineBuffer, &mut Caret),
    {
        f(&self.buffer, &mut self.caret);
        self.caret = self.buffer.clamp(self.caret);
    }

    pub fn set_caret(&mut self, caret: Caret) {
        self.caret = self.buffer.clamp(caret);
    }

    pub fn word_forward(&mut self) {
        navigation::word_forward(&self.buffer, &self.tokens, &mut self.caret);
    }

    pub fn word_backward(&mut self) {
        navigation::word_backward(&self.buffer, &self.tokens, &mut self.caret);
    }

    /// Caret to the end of 1-based line `line` (clamped), then center.
    pub fn set_caret_line(&mut self, line: usize) {
        motion::jump_to_line(&self.buffer, &mut self.caret, line);
        self.center_on_caret();
    }

    pub fn center_on_caret(&mut self) {
        self.viewport.center_on(self.caret.row);
    }

    /// Per-frame scroll update. The margin is clamped to fit the pane.
    pub fn update_viewport(&mut self, margin: usize) -> bool {
        let margin = margin.min(self.viewport.visible.saturating_sub(1) / 2);
        self.viewport
            .update(self.caret.row, self.buffer.line_count(), margin)
    }

    pub fn retokenize(&mut self) {
        self.tokens = tokenize(self.file_kind.language.language(), self.buffer.lines());
    }

    /// Pull pending process output into the buffer. Returns true when the buffer changed.
    pub fn tick_stream(&mut self) -> bool {
        let Some(stream) = self.stream.as_mut() else {
            return false;
        };
        let mut text = stream.drain();
        if let Some(code) = stream.poll_exit() {
            text.push_str(&format!("\n\nProcess finished with exit code {code}"));
        }
        if text.is_empty() {
            return false;
        }
        let end_row = self.buffer.line_count() - 1;
        let end = Caret::new(self.buffer.line_len(end_row), end_row);
        let after = self.buffer.insert_text(end, &text);
        if self.mode == Mode::Insert {
            self.caret = after;
        }
        self.caret = self.buffer.clamp(self.caret);
        self.retokenize();
        true
    }

    /// Kill the attached process, if any. Queued output is discarded.
    pub fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.terminate();
        }
    }

    /// Caret cell in display columns, row relative to the window start.
    pub fn caret_cell(&self) -> (usize, usize) {
        let line = self.buffer.line(self.caret.row);
        (
            display_column(line, self.caret.column),
            self.caret.row.saturating_sub(self.viewport.scroll_offset),
        )
    }

    pub fn render_state(&self) -> RenderState<'_> {
        let range = self.viewport.visible_range(self.tokens.len());
        RenderState {
            visible_lines: &self.tokens[range],
            scroll_offset: self.viewport.scroll_offset,
            caret_cell: self.caret_cell(),
            mode: self.mode,
        }
    }
}

fn kind_for(path: &Path) -> FileKind {
    path.file_name()
        .map(|n| detect(&n.to_string_lossy()))
        .unwrap_or_default()
}
