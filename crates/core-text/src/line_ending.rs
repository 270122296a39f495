//! Line-ending detection and normalization.
//!
//! Files are held internally with LF separators only. The dominant style seen on load is kept
//! so that save can write the same style back.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Cr,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// LF-only text plus the style it was converted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub normalized: String,
    /// Most frequent style; ties resolve CRLF > LF > CR.
    pub original: LineEnding,
    /// More than one style was present.
    pub mixed: bool,
}

/// Rewrite CRLF and lone CR to LF in a single pass, counting each style on the way.
pub fn normalize_line_endings(input: &str) -> NormalizedText {
    let (mut crlf, mut lf, mut cr) = (0usize, 0usize, 0usize);
    let mut normalized = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                crlf += 1;
                normalized.push('\n');
            }
            '\r' => {
                cr += 1;
                normalized.push('\n');
            }
            '\n' => {
                lf += 1;
                normalized.push('\n');
            }
            other => normalized.push(other),
        }
    }
    let mut original = LineEnding::Lf;
    let mut best = 0usize;
    for (style, count) in [
        (LineEnding::Crlf, crlf),
        (LineEnding::Lf, lf),
        (LineEnding::Cr, cr),
    ] {
        if count > best {
            best = count;
            original = style;
        }
    }
    let mixed = [crlf, lf, cr].iter().filter(|n| **n > 0).count() > 1;
    NormalizedText {
        normalized,
        original,
        mixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_detected_and_normalized() {
        let n = normalize_line_endings("a\r\nb\r\n");
        assert_eq!(n.normalized, "a\nb\n");
        assert_eq!(n.original, LineEnding::Crlf);
        assert!(!n.mixed);
    }

    #[test]
    fn lone_cr_detected() {
        let n = normalize_line_endings("a\rb");
        assert_eq!(n.normalized, "a\nb");
        assert_eq!(n.original, LineEnding::Cr);
    }

    #[test]
    fn mixed_prefers_majority() {
        let n = normalize_line_endings("a\r\nb\nc\r\n");
        assert_eq!(n.original, LineEnding::Crlf);
        assert!(n.mixed);
    }

    #[test]
    fn plain_text_defaults_to_lf() {
        let n = normalize_line_endings("no breaks");
        assert_eq!(n.original, LineEnding::Lf);
        assert_eq!(n.normalized, "no breaks");
    }
}
