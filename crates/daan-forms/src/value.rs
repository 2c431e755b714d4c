// File: src/value.rs
// Purpose: Field value types collected by form inputs

use daan_validation::FileMeta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a single input holds
///
/// Text inputs, secrets and selects hold `Text`, checkboxes hold `Flag`, file
/// pickers hold `File` (absent until something is picked). In JSON a value is
/// a bare string, a bare bool, or `null`/a file object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    File(Option<FileMeta>),
}

impl FieldValue {
    pub fn empty_text() -> Self {
        FieldValue::Text(String::new())
    }

    /// Raw presence: any characters typed, a picked file, a checked box
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Flag(b) => *b,
            FieldValue::File(f) => f.is_some(),
        }
    }

    /// Required-field emptiness: whitespace-only text counts as empty
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(b) => !b,
            FieldValue::File(f) => f.is_none(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileMeta> {
        match self {
            FieldValue::File(f) => f.as_ref(),
            _ => None,
        }
    }

    /// Name of the variant, used in type mismatch errors
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Flag(_) => "flag",
            FieldValue::Text(_) => "text",
            FieldValue::File(_) => "file",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::File(Some(file)) => write!(f, "{} ({} bytes)", file.name, file.size),
            FieldValue::File(None) => Ok(()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<FileMeta> for FieldValue {
    fn from(file: FileMeta) -> Self {
        FieldValue::File(Some(file))
    }
}

impl From<Option<FileMeta>> for FieldValue {
    fn from(file: Option<FileMeta>) -> Self {
        FieldValue::File(file)
    }
}
