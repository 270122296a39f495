//! File load/save.
//!
//! Synchronous and minimal. Load normalizes line endings to LF and reports the dominant
//! original style; save joins lines with that style again. Failures carry the path as context
//! and are logged under the `io` target before being returned.

use std::path::Path;

use anyhow::{Context, Result};
use core_text::{LineEnding, normalize_line_endings};

/// A file split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub lines: Vec<String>,
    pub line_ending: LineEnding,
    pub mixed_line_endings: bool,
}

pub fn load_file(path: &Path) -> Result<LoadedFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))
        .inspect_err(|e| tracing::error!(target: "io", error = %e, "file_open_error"))?;
    let norm = normalize_line_endings(&content);
    if norm.mixed {
        tracing::warn!(target: "io", path = %path.display(), "mixed_line_endings_detected");
    }
    let lines: Vec<String> = norm.normalized.split('\n').map(str::to_string).collect();
    tracing::info!(target: "io", path = %path.display(), lines = lines.len(), "file_loaded");
    Ok(LoadedFile {
        lines,
        line_ending: norm.original,
        mixed_line_endings: norm.mixed,
    })
}

pub fn save_file(path: &Path, lines: &[String], line_ending: LineEnding) -> Result<()> {
    let content = lines.join(line_ending.as_str());
    std::fs::write(path, content.as_bytes())
        .with_context(|| format!("writing {}", path.display()))
        .inspect_err(|e| tracing::error!(target: "io", error = %e, "file_write_error"))?;
    tracing::info!(target: "io", path = %path.display(), lines = lines.len(), "file_saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_normalizes_and_reports_style() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        std::fs::write(&path, "line1\r\nline2\nline3\r\n").unwrap();
        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded.lines, vec!["line1", "line2", "line3", ""]);
        assert_eq!(loaded.line_ending, LineEnding::Crlf);
        assert!(loaded.mixed_line_endings);
    }

    #[test]
    fn save_restores_line_ending_style() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let lines = vec!["a".to_string(), "b".to_string(), String::new()];
        save_file(&path, &lines, LineEnding::Crlf).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\r\nb\r\n");
    }

    #[test]
    fn missing_file_is_an_error_with_path_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }
}
