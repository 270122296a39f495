//! Colored token spans and the highlight palette.

/// RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

pub mod palette {
    use super::Color;

    pub const BASE: Color = Color(255, 255, 255);
    pub const STRING: Color = Color(190, 140, 100);
    /// Language keywords.
    pub const KEYWORD0: Color = Color(110, 110, 150);
    /// Reserved names, directives and decorators.
    pub const KEYWORD1: Color = Color(190, 190, 100);
    pub const NUMBER: Color = Color(100, 190, 150);
    pub const COMMENT: Color = Color(130, 190, 100);
    pub const BACKGROUND: Color = Color(0, 0, 0);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub fg: Color,
    pub bg: Color,
    /// Last token of its source line.
    pub ends_line: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, fg: Color, ends_line: bool) -> Self {
        Self {
            text: text.into(),
            fg,
            bg: palette::BACKGROUND,
            ends_line,
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// A lone space; word navigation skips these.
    pub fn is_space(&self) -> bool {
        self.text == " "
    }
}
