//! Password hashing

mod password;

pub use password::{validate_password_strength, Argon2PasswordEncoder};
