//! Command line parsing.
//!
//! Converts the text typed after `:` into a [`ParsedCommand`]. Tokenization is shell-style
//! (POSIX rules): whitespace separates arguments, single quotes are literal, double quotes
//! allow `\"` and `\\`, and a backslash outside quotes escapes the next char. Adjacent quoted
//! and unquoted pieces join into one argument.
//!
//! No side-effects here; pure classification. Whether a verb exists is decided by the
//! executor, which falls back to searching for the raw text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("no closing quotation for {0}")]
    UnterminatedQuote(char),
    #[error("no escaped character")]
    DanglingEscape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Nothing but whitespace.
    Empty,
    /// 1-based target as typed; range is checked by the executor.
    LineJump(usize),
    Invocation {
        verb: String,
        args: Vec<String>,
        raw: String,
    },
    /// Text that does not tokenize; only usable as a search pattern.
    Search(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        if raw.is_empty() {
            return ParsedCommand::Empty;
        }
        let tokens = match tokenize(raw) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::debug!(target: "command", error = %e, "tokenize_failed_fallback_search");
                return ParsedCommand::Search(raw.to_string());
            }
        };
        let mut tokens = tokens.into_iter();
        let Some(verb) = tokens.next() else {
            return ParsedCommand::Empty;
        };
        if !verb.is_empty() && verb.bytes().all(|b| b.is_ascii_digit()) {
            return ParsedCommand::LineJump(verb.parse().unwrap_or(usize::MAX));
        }
        ParsedCommand::Invocation {
            verb,
            args: tokens.collect(),
            raw: raw.to_string(),
        }
    }
}

/// Split `line` into arguments.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut out = Vec::new();
    // `Some` once a token has started, so `""` still yields an (empty) argument.
    let mut current: Option<String> = None;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if let Some(token) = current.take() {
                    out.push(token);
                }
            }
            '\'' => {
                let token = current.get_or_insert_with(String::new);
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => token.push(ch),
                        None => return Err(TokenizeError::UnterminatedQuote('\'')),
                    }
                }
            }
            '"' => {
                let token = current.get_or_insert_with(String::new);
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => token.push(ch),
                            Some(ch) => {
                                token.push('\\');
                                token.push(ch);
                            }
                            None => return Err(TokenizeError::UnterminatedQuote('"')),
                        },
                        Some(ch) => token.push(ch),
                        None => return Err(TokenizeError::UnterminatedQuote('"')),
                    }
                }
            }
            '\\' => match chars.next() {
                Some(ch) => current.get_or_insert_with(String::new).push(ch),
                None => return Err(TokenizeError::DanglingEscape),
            },
            other => current.get_or_insert_with(String::new).push(other),
        }
    }
    if let Some(token) = current {
        out.push(token);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        tokenize(line).unwrap()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(words("  open   a.txt  !"), vec!["open", "a.txt", "!"]);
    }

    #[test]
    fn quotes_keep_spaces_and_join_neighbours() {
        assert_eq!(words("open 'my file.txt'"), vec!["open", "my file.txt"]);
        assert_eq!(words(r#"shell echo "a \"b\" c""#), vec!["shell", "echo", r#"a "b" c"#]);
        assert_eq!(words(r#"x"y z"w"#), vec!["xy zw"]);
        assert_eq!(words(r"a\ b"), vec!["a b"]);
        assert_eq!(words("''"), vec![""]);
    }

    #[test]
    fn tokenize_errors() {
        assert_eq!(tokenize("open 'x"), Err(TokenizeError::UnterminatedQuote('\'')));
        assert_eq!(tokenize("say \"hi"), Err(TokenizeError::UnterminatedQuote('"')));
        assert_eq!(tokenize("trail\\"), Err(TokenizeError::DanglingEscape));
    }

    #[test]
    fn classify() {
        assert_eq!(CommandParser::parse(""), ParsedCommand::Empty);
        assert_eq!(CommandParser::parse("   "), ParsedCommand::Empty);
        assert_eq!(CommandParser::parse("42"), ParsedCommand::LineJump(42));
        assert_eq!(
            CommandParser::parse("99999999999999999999999"),
            ParsedCommand::LineJump(usize::MAX)
        );
        assert_eq!(
            CommandParser::parse("don't"),
            ParsedCommand::Search("don't".into())
        );
        match CommandParser::parse("save out.txt") {
            ParsedCommand::Invocation { verb, args, raw } => {
                assert_eq!(verb, "save");
                assert_eq!(args, vec!["out.txt"]);
                assert_eq!(raw, "save out.txt");
            }
            other => panic!("expected Invocation, got {:?}", other),
        }
    }
}
