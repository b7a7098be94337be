//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::MemberId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A write rejected by a schema constraint (missing or oversized column)
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use: {0}")]
    UsernameAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Password encoding failed: {0}")]
    PasswordEncoding(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::UsernameAlreadyExists(_) => "USERNAME_ALREADY_EXISTS",
            Self::PasswordEncoding(_) => "PASSWORD_ENCODING_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::ConstraintViolation(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists(_))
    }
}
