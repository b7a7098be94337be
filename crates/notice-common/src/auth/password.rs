//! Password hashing and verification
//!
//! Uses Argon2id for secure password hashing (OWASP recommended).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use notice_core::{DomainError, PasswordEncoder};

use crate::config::PasswordPolicy;
use crate::error::AppError;

/// Argon2id implementation of the `PasswordEncoder` port
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordEncoder {
    argon2: Argon2<'static>,
}

impl Argon2PasswordEncoder {
    /// Create an encoder with the default Argon2id parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, raw: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(raw.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::PasswordEncoding(e.to_string()))
    }

    fn matches(&self, raw: &str, encoded: &str) -> bool {
        // A malformed stored hash never matches
        PasswordHash::new(encoded)
            .is_ok_and(|parsed| self.argon2.verify_password(raw.as_bytes(), &parsed).is_ok())
    }
}

/// Validate a raw password against the configured policy:
/// - At least `policy.min_length` characters
/// - At most `policy.max_length` characters
/// - Contains at least one letter and one digit
///
/// # Errors
/// Returns a validation error if the password doesn't meet requirements
pub fn validate_password_strength(password: &str, policy: &PasswordPolicy) -> Result<(), AppError> {
    let length = password.chars().count();

    if length < policy.min_length {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters long",
            policy.min_length
        )));
    }

    if length > policy.max_length {
        return Err(AppError::Validation(format!(
            "Password must be at most {} characters long",
            policy.max_length
        )));
    }

    if !password.chars().any(char::is_alphabetic) {
        return Err(AppError::Validation(
            "Password must contain at least one letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Password must contain at least one digit".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let encoder = Argon2PasswordEncoder::new();
        let hash = encoder.encode("1234567890").unwrap();

        // Hash should start with argon2 identifier
        assert!(hash.starts_with("$argon2id"));
        // Hash should be different each time (different salt)
        let hash2 = encoder.encode("1234567890").unwrap();
        assert_ne!(hash, hash2);
    }

    #[test]
    fn test_matches_success() {
        let encoder = Argon2PasswordEncoder::new();
        let hash = encoder.encode("SecurePassword123!").unwrap();

        assert!(encoder.matches("SecurePassword123!", &hash));
    }

    #[test]
    fn test_matches_failure() {
        let encoder = Argon2PasswordEncoder::new();
        let hash = encoder.encode("SecurePassword123!").unwrap();

        assert!(!encoder.matches("WrongPassword123!", &hash));
    }

    #[test]
    fn test_matches_rejects_malformed_hash() {
        let encoder = Argon2PasswordEncoder::new();
        assert!(!encoder.matches("1234567890", "1234567890"));
        assert!(!encoder.matches("", ""));
    }

    #[test]
    fn test_non_ascii_password() {
        let encoder = Argon2PasswordEncoder::new();
        let hash = encoder.encode("패스워드가 수정 되었습니다.").unwrap();
        assert!(encoder.matches("패스워드가 수정 되었습니다.", &hash));
    }

    #[test]
    fn test_validate_password_strength_valid() {
        let policy = PasswordPolicy::default();
        assert!(validate_password_strength("password1", &policy).is_ok());
        assert!(validate_password_strength("Abcdefg1", &policy).is_ok());
    }

    #[test]
    fn test_validate_password_strength_too_short() {
        let policy = PasswordPolicy::default();
        let result = validate_password_strength("abc1", &policy);
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("at least 8")));
    }

    #[test]
    fn test_validate_password_strength_too_long() {
        let policy = PasswordPolicy {
            min_length: 8,
            max_length: 10,
        };
        let result = validate_password_strength("abcdefghij1", &policy);
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("at most 10")));
    }

    #[test]
    fn test_validate_password_strength_no_letter() {
        let policy = PasswordPolicy::default();
        let result = validate_password_strength("1234567890", &policy);
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("letter")));
    }

    #[test]
    fn test_validate_password_strength_no_digit() {
        let policy = PasswordPolicy::default();
        let result = validate_password_strength("NoDigitsHere", &policy);
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("digit")));
    }
}
