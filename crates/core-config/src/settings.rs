//! Typed runtime settings mutated by the `config` command.
//!
//! Keys are `section.param` pairs. The store is seeded from the loaded file so that the
//! "previous value" reported on update reflects what is actually in effect.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::ConfigFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingType {
    Int,
    Bool,
    Float,
    Str,
}

impl FromStr for SettingType {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(SettingType::Int),
            "bool" => Ok(SettingType::Bool),
            "float" => Ok(SettingType::Float),
            "str" => Ok(SettingType::Str),
            other => Err(SettingError::UnknownType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Int(i64),
    Bool(bool),
    Float(f64),
    Str(String),
}

impl SettingValue {
    /// Parse `literal` as `ty`. Bools accept `true`/`false` in any case.
    pub fn parse(literal: &str, ty: SettingType) -> Result<Self, SettingError> {
        let invalid = || SettingError::InvalidLiteral {
            literal: literal.to_string(),
            ty,
        };
        match ty {
            SettingType::Int => literal.parse().map(SettingValue::Int).map_err(|_| invalid()),
            SettingType::Float => literal
                .parse()
                .map(SettingValue::Float)
                .map_err(|_| invalid()),
            SettingType::Bool => match literal.to_ascii_lowercase().as_str() {
                "true" => Ok(SettingValue::Bool(true)),
                "false" => Ok(SettingValue::Bool(false)),
                _ => Err(invalid()),
            },
            SettingType::Str => Ok(SettingValue::Str(literal.to_string())),
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            SettingValue::Int(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Int(n) => write!(f, "{n}"),
            SettingValue::Bool(b) => write!(f, "{b}"),
            SettingValue::Float(x) => write!(f, "{x}"),
            SettingValue::Str(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingError {
    #[error("unknown value type '{0}'")]
    UnknownType(String),
    #[error("'{literal}' is not a valid {ty:?} value")]
    InvalidLiteral { literal: String, ty: SettingType },
    #[error("key '{0}' must be written as section.param")]
    MalformedKey(String),
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: BTreeMap<(String, String), SettingValue>,
}

/// Split `section.param`; exactly one dot with non-empty halves.
pub fn split_key(key: &str) -> Result<(&str, &str), SettingError> {
    let mut parts = key.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(section), Some(param), None) if !section.is_empty() && !param.is_empty() => {
            Ok((section, param))
        }
        _ => Err(SettingError::MalformedKey(key.to_string())),
    }
}

impl Settings {
    /// Seed with the values of a loaded configuration file.
    pub fn from_file(file: &ConfigFile) -> Self {
        let mut s = Self::default();
        let int = |n: usize| SettingValue::Int(i64::try_from(n).unwrap_or(i64::MAX));
        s.insert("scroll", "margin", int(file.scroll.margin));
        s.insert(
            "edit",
            "indent_preserving",
            SettingValue::Bool(file.edit.indent_preserving),
        );
        s.insert("edit", "tab_width", int(file.edit.tab_width));
        s.insert(
            "command",
            "history_capacity",
            int(file.command.history_capacity),
        );
        s.insert(
            "status",
            "message_timeout_ms",
            SettingValue::Int(i64::try_from(file.status.message_timeout_ms).unwrap_or(i64::MAX)),
        );
        s
    }

    fn insert(&mut self, section: &str, param: &str, value: SettingValue) {
        self.values
            .insert((section.to_string(), param.to_string()), value);
    }

    pub fn get(&self, section: &str, param: &str) -> Option<&SettingValue> {
        self.values.get(&(section.to_string(), param.to_string()))
    }

    /// Store a value, returning the previous one.
    pub fn set(&mut self, section: &str, param: &str, value: SettingValue) -> Option<SettingValue> {
        tracing::info!(target: "config", section, param, %value, "setting_updated");
        self.values
            .insert((section.to_string(), param.to_string()), value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
