//! Request DTOs for member use cases
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Length limits mirror the member table columns.

use serde::Deserialize;
use validator::Validate;

/// Member registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterMemberRequest {
    #[validate(length(min = 1, max = 30, message = "Username must be 1-30 characters"))]
    pub username: String,

    /// Raw password, checked against the configured password policy
    pub password: String,

    #[validate(length(min = 1, max = 30, message = "Name must be 1-30 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 30, message = "Nickname must be 1-30 characters"))]
    pub nickname: String,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i32,
}

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, max = 30, message = "Name must be 1-30 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 30, message = "Nickname must be 1-30 characters"))]
    pub nickname: Option<String>,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i32>,
}

impl UpdateMemberRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.nickname.is_none() && self.age.is_none()
    }
}

/// Password change request
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Account withdrawal, confirmed with the current password
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawRequest {
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterMemberRequest {
        RegisterMemberRequest {
            username: "username".to_string(),
            password: "password1".to_string(),
            name: "Member1".to_string(),
            nickname: "NickName1".to_string(),
            age: 22,
        }
    }

    #[test]
    fn test_valid_register_request() {
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn test_register_request_limits() {
        let mut request = register_request();
        request.username = "u".repeat(31);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));

        let mut request = register_request();
        request.nickname = String::new();
        request.age = -1;
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("nickname"));
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn test_length_counts_characters() {
        let mut request = register_request();
        request.name = "이름이 수정 되었습니다.".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request() {
        assert!(UpdateMemberRequest::default().is_empty());

        let request = UpdateMemberRequest {
            age: Some(200),
            ..Default::default()
        };
        assert!(!request.is_empty());
        assert!(request.validate().is_err());
    }
}
