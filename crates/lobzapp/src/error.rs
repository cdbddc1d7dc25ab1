use std::fmt;
use thiserror::Error;

/// Record fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Level,
    Verb,
    Condition,
    Task,
    Degree,
    OutcomeIds,
}

impl Field {
    /// The field name as it appears on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Level => "level",
            Field::Verb => "verb",
            Field::Condition => "condition",
            Field::Task => "task",
            Field::Degree => "degree",
            Field::OutcomeIds => "ABET_ids",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// The kind of catalog entry a code refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    Level,
    Verb,
    Outcome,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefKind::Level => f.write_str("learning level"),
            RefKind::Verb => f.write_str("verb"),
            RefKind::Outcome => f.write_str("outcome"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LobzError {
    #[error("Invalid {field} {value:?}: {reason}")]
    Validation {
        field: Field,
        value: String,
        reason: &'static str,
    },

    #[error("No {kind} matches id {id:?}")]
    NotFound { kind: RefKind, id: String },

    #[error("Index {index} is out of range for {len} records")]
    IndexOutOfRange { index: String, len: usize },

    #[error("Expected {expected}, found {found}")]
    Type {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid display order: {0}")]
    InvalidOrder(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LobzError {
    pub(crate) fn validation(field: Field, value: impl Into<String>, reason: &'static str) -> Self {
        LobzError::Validation {
            field,
            value: value.into(),
            reason,
        }
    }

    pub(crate) fn not_found(kind: RefKind, id: impl Into<String>) -> Self {
        LobzError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub(crate) fn out_of_range(index: impl fmt::Display, len: usize) -> Self {
        LobzError::IndexOutOfRange {
            index: index.to_string(),
            len,
        }
    }
}

pub type Result<T> = std::result::Result<T, LobzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_field_and_value() {
        let err = LobzError::validation(Field::Level, "abc", "must be an integer string");
        assert_eq!(
            err.to_string(),
            "Invalid level \"abc\": must be an integer string"
        );
    }

    #[test]
    fn outcome_field_uses_wire_name() {
        assert_eq!(Field::OutcomeIds.to_string(), "ABET_ids");
    }

    #[test]
    fn not_found_message() {
        let err = LobzError::not_found(RefKind::Verb, "9");
        assert_eq!(err.to_string(), "No verb matches id \"9\"");
    }
}
