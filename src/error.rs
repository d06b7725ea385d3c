//! Domain-level errors.
//!
//! These errors represent business rule violations for user records.
//! They are independent of infrastructure concerns and carry the field
//! they refer to, so callers can report which rule failed.

use thiserror::Error;

/// Errors produced when raw input fails to become (or update) a valid record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input carried a field the record kind does not declare
    #[error("Unknown field `{field}` for {kind}")]
    Schema { kind: &'static str, field: String },

    /// A declared field's value failed its validation rule
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },
}

impl DomainError {
    /// Create a schema error for an undeclared field
    pub fn schema(kind: &'static str, field: impl Into<String>) -> Self {
        let field = field.into();
        tracing::debug!(kind, field = %field, "undeclared field rejected");
        DomainError::Schema { kind, field }
    }

    /// Create a validation error for a declared field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(field, message = %message, "field validation failed");
        DomainError::Validation { field, message }
    }

    /// Field the error refers to
    pub fn field(&self) -> &str {
        match self {
            DomainError::Schema { field, .. } => field,
            DomainError::Validation { field, .. } => field,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
