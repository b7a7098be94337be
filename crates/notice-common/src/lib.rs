//! # notice-common
//!
//! Shared utilities including configuration, error handling, password hashing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{validate_password_strength, Argon2PasswordEncoder};
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, PasswordPolicy,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
