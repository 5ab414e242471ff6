//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Covers malformed identifiers and values that fall outside one of the closed
/// enumerations. Validation of proposed writes is reported separately as a list
/// of messages, not through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A value is not a member of its enumeration.
    #[error("invalid {kind}: '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    /// An unknown collection (list key) was named.
    #[error("unknown collection: '{0}'")]
    UnknownCollection(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}
