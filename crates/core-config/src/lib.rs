//! Configuration loading and parsing.
//!
//! Parses `quill.toml` (or an override path provided by the binary). Every field has a default
//! so a missing file, a missing table or an unparsable file all yield a usable configuration;
//! unknown fields are ignored.
//!
//! ```toml
//! [scroll]
//! margin = 5
//! [edit]
//! indent_preserving = true
//! tab_width = 4
//! [command]
//! history_capacity = 100
//! [status]
//! message_timeout_ms = 4000
//! ```
//!
//! The scroll margin is clamped against the pane height by `Config::apply_context`; the raw
//! parsed value is kept so a resize can re-clamp.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{info, warn};

pub mod document_state;
pub mod settings;

pub use document_state::{DocumentStateStore, MemoryDocumentStore, ScrollMemo};
pub use settings::{SettingError, SettingType, SettingValue, Settings};

pub const CONFIG_FILE_NAME: &str = "quill.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScrollConfig {
    #[serde(default = "ScrollConfig::default_margin")]
    pub margin: usize,
}

impl ScrollConfig {
    const fn default_margin() -> usize {
        5
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            margin: Self::default_margin(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EditConfig {
    #[serde(default = "EditConfig::default_indent_preserving")]
    pub indent_preserving: bool,
    #[serde(default = "EditConfig::default_tab_width")]
    pub tab_width: usize,
}

impl EditConfig {
    const fn default_indent_preserving() -> bool {
        true
    }
    const fn default_tab_width() -> usize {
        4
    }
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            indent_preserving: Self::default_indent_preserving(),
            tab_width: Self::default_tab_width(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommandConfig {
    #[serde(default = "CommandConfig::default_history_capacity")]
    pub history_capacity: usize,
}

impl CommandConfig {
    const fn default_history_capacity() -> usize {
        100
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            history_capacity: Self::default_history_capacity(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::default_message_timeout_ms")]
    pub message_timeout_ms: u64,
}

impl StatusConfig {
    const fn default_message_timeout_ms() -> u64 {
        4000
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            message_timeout_ms: Self::default_message_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub edit: EditConfig,
    #[serde(default)]
    pub command: CommandConfig,
    #[serde(default)]
    pub status: StatusConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>,
    pub file: ConfigFile,
    /// Path the configuration was read from (or would be read from); used by reload.
    pub source: Option<PathBuf>,
    /// Scroll margin clamped to the current pane height.
    pub effective_margin: usize,
}

/// Best-effort config path: local `quill.toml` first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("quill").join(CONFIG_FILE_NAME);
    }
    local
}

/// Load configuration from `path` (or the discovered path). Missing and malformed files fall
/// back to defaults; only an unreadable existing file is an error.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if !path.exists() {
        info!(target: "config", path = %path.display(), "config_missing_using_defaults");
        return Ok(Config::with_source(ConfigFile::default(), None, path));
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let file = match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => file,
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            ConfigFile::default()
        }
    };
    info!(target: "config", path = %path.display(), "config_loaded");
    Ok(Config::with_source(file, Some(content), path))
}

impl Config {
    fn with_source(file: ConfigFile, raw: Option<String>, source: PathBuf) -> Self {
        let effective_margin = file.scroll.margin;
        Self {
            raw,
            file,
            source: Some(source),
            effective_margin,
        }
    }

    /// Re-read from the original source path.
    pub fn reload(&self) -> Result<Config> {
        load_from(self.source.clone())
    }

    /// Clamp the scroll margin so both margin bands fit in `visible_lines` with at least one
    /// free row between them. Returns the effective value.
    pub fn apply_context(&mut self, visible_lines: usize) -> usize {
        let raw = self.file.scroll.margin;
        let max = visible_lines.saturating_sub(1) / 2;
        let clamped = raw.min(max);
        if clamped != raw {
            info!(
                target: "config",
                raw,
                clamped,
                max,
                visible_lines,
                "scroll_margin_clamped"
            );
        }
        self.effective_margin = clamped;
        clamped
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.file.status.message_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
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

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), body).unwrap();
        tmp
    }

    #[test]
    fn defaults_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert_eq!(cfg.file, ConfigFile::default());
        assert_eq!(cfg.file.scroll.margin, 5);
        assert!(cfg.file.edit.indent_preserving);
        assert_eq!(cfg.file.edit.tab_width, 4);
        assert_eq!(cfg.file.command.history_capacity, 100);
        assert_eq!(cfg.message_ttl(), Duration::from_secs(4));
    }

    #[test]
    fn parses_partial_tables() {
        let tmp = write_config("[scroll]\nmargin = 3\n[edit]\ntab_width = 2\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.scroll.margin, 3);
        assert_eq!(cfg.file.edit.tab_width, 2);
        assert!(cfg.file.edit.indent_preserving, "unset field keeps default");
        assert!(cfg.raw.is_some());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let tmp = write_config("[scroll\nmargin = ");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file, ConfigFile::default());
    }

    #[test]
    fn clamps_margin_to_pane_height() {
        let mut cfg = Config::default();
        cfg.file.scroll.margin = 50;
        assert_eq!(cfg.apply_context(21), 10);
        assert_eq!(cfg.apply_context(2), 0);
        cfg.file.scroll.margin = 5;
        assert_eq!(cfg.apply_context(40), 5);
    }

    #[test]
    fn reload_reads_source_again() {
        let tmp = write_config("[scroll]\nmargin = 2\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        std::fs::write(tmp.path(), "[scroll]\nmargin = 7\n").unwrap();
        let again = cfg.reload().unwrap();
        assert_eq!(again.file.scroll.margin, 7);
    }

    #[test]
    fn clamp_logging_uses_config_target() {
        let mut cfg = Config::default();
        cfg.file.scroll.margin = 8;
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        with_default(subscriber, || {
            cfg.apply_context(6);
        });

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("INFO config:"));
        assert!(log_output.contains("scroll_margin_clamped"));
        assert_eq!(cfg.effective_margin, 2);
    }
}
