//! Error handling utilities for repositories

use notice_core::error::DomainError;
use notice_core::value_objects::MemberId;
use sqlx::error::ErrorKind;
use sqlx::Error as SqlxError;

/// SQLSTATE for a value longer than its column allows
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a failed write: unique violations go through `on_unique`, rejected
/// column values become `ConstraintViolation`, everything else a database error
pub fn map_write_error<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        match db_err.kind() {
            ErrorKind::UniqueViolation => return on_unique(),
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                return DomainError::ConstraintViolation(db_err.message().to_string());
            }
            _ if db_err.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION) => {
                return DomainError::ConstraintViolation(db_err.message().to_string());
            }
            _ => {}
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "member not found" error
pub fn member_not_found(id: MemberId) -> DomainError {
    DomainError::MemberNotFound(id)
}
