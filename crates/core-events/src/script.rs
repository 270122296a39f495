//! Key-script notation.
//!
//! A script is a flat sequence of keys. Plain characters stand for themselves; named keys and
//! chords use angle brackets: `<Esc>`, `<CR>`, `<BS>`, `<Del>`, `<Tab>`, `<Up>`, `<C-Down>`,
//! `<S-Up>`, `<A-x>`, `<lt>` (a literal `<`). Raw line breaks are layout only and are skipped,
//! so a script file can hold one logical step per line.

use thiserror::Error;

use crate::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("unterminated key notation starting at offset {0}")]
    Unterminated(usize),
    #[error("unknown key name '{0}'")]
    UnknownKey(String),
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
}

/// Parse a key script into key events.
pub fn parse_key_script(script: &str) -> Result<Vec<KeyEvent>, KeyParseError> {
    let mut out = Vec::new();
    let mut rest = script.char_indices().peekable();
    while let Some((offset, c)) = rest.next() {
        match c {
            '\n' | '\r' => continue,
            '<' => {
                let mut inner = String::new();
                let mut closed = false;
                for (_, n) in rest.by_ref() {
                    if n == '>' {
                        closed = true;
                        break;
                    }
                    inner.push(n);
                }
                if !closed {
                    return Err(KeyParseError::Unterminated(offset));
                }
                out.push(parse_bracketed(&inner)?);
            }
            other => out.push(KeyEvent::char(other)),
        }
    }
    Ok(out)
}

fn parse_bracketed(inner: &str) -> Result<KeyEvent, KeyParseError> {
    let mut mods = KeyModifiers::empty();
    let mut name = inner;
    // Modifier prefixes look like `C-`; a bare `-` key is not a prefix.
    while name.len() > 2 && name.as_bytes()[1] == b'-' {
        let flag = match &name[..1] {
            "C" | "c" => KeyModifiers::CTRL,
            "S" | "s" => KeyModifiers::SHIFT,
            "A" | "a" | "M" | "m" => KeyModifiers::ALT,
            other => return Err(KeyParseError::UnknownModifier(other.to_string())),
        };
        mods |= flag;
        name = &name[2..];
    }
    let code = named_key(name)?;
    Ok(KeyEvent::new(code, mods))
}

fn named_key(name: &str) -> Result<KeyCode, KeyParseError> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }
    let code = match name.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "cr" | "enter" | "return" => KeyCode::Enter,
        "bs" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "ins" | "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        "lt" => KeyCode::Char('<'),
        "gt" => KeyCode::Char('>'),
        _ => return Err(KeyParseError::UnknownKey(name.to_string())),
    };
    Ok(code)
}
