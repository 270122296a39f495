//! Filename to language lookup.

use crate::languages::{CLike, Json, Language, Markdown, Plain, Python};

/// Supported highlight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageKind {
    #[default]
    Plain,
    CLike,
    Python,
    Json,
    Markdown,
}

impl LanguageKind {
    pub fn language(self) -> &'static dyn Language {
        match self {
            LanguageKind::Plain => &Plain,
            LanguageKind::CLike => &CLike,
            LanguageKind::Python => &Python,
            LanguageKind::Json => &Json,
            LanguageKind::Markdown => &Markdown,
        }
    }
}

/// Language plus the human-readable file type shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileKind {
    pub language: LanguageKind,
    pub label: &'static str,
}

impl Default for FileKind {
    fn default() -> Self {
        Self {
            language: LanguageKind::Plain,
            label: "text file",
        }
    }
}

/// Pick a language by file extension. Unknown extensions fall back to plain text.
pub fn detect(filename: &str) -> FileKind {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or_default();
    let (language, label) = match ext {
        "py" => (LanguageKind::Python, "Python file"),
        "json" => (LanguageKind::Json, "JSON file"),
        "md" => (LanguageKind::Markdown, "Markdown file"),
        "c" | "cc" | "cpp" => (LanguageKind::CLike, "C/C++ file"),
        "h" | "hpp" => (LanguageKind::CLike, "C/C++ Header file"),
        _ => return FileKind::default(),
    };
    tracing::debug!(target: "syntax", filename, label, "language_detected");
    FileKind { language, label }
}
