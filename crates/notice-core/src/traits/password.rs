//! Password encoder port

use crate::error::DomainError;

/// One-way password hashing used by member registration and password changes
pub trait PasswordEncoder: Send + Sync {
    /// Hash a raw password
    fn encode(&self, raw: &str) -> Result<String, DomainError>;

    /// Check a raw password against a previously encoded one
    fn matches(&self, raw: &str, encoded: &str) -> bool;
}
