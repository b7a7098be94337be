//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub password: PasswordPolicy,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidValue("APP_ENV", s.to_string())),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

/// Rules applied to raw passwords at registration and password change
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordPolicy {
    #[serde(default = "default_password_min_length")]
    pub min_length: usize,
    #[serde(default = "default_password_max_length")]
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: default_password_min_length(),
            max_length: default_password_max_length(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "notice".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_acquire_timeout_secs() -> u64 {
    10
}

fn default_password_min_length() -> usize {
    8
}

fn default_password_max_length() -> usize {
    64
}

/// Read an optional variable, failing if it is set but unparsable
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `DATABASE_URL` is missing or a variable has an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let password = PasswordPolicy {
            min_length: parse_var("PASSWORD_MIN_LENGTH")?
                .unwrap_or_else(default_password_min_length),
            max_length: parse_var("PASSWORD_MAX_LENGTH")?
                .unwrap_or_else(default_password_max_length),
        };
        if password.min_length > password.max_length {
            return Err(ConfigError::InvalidValue(
                "PASSWORD_MIN_LENGTH",
                format!("{} exceeds PASSWORD_MAX_LENGTH {}", password.min_length, password.max_length),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: parse_var("APP_ENV")?.unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                acquire_timeout_secs: parse_var("DATABASE_ACQUIRE_TIMEOUT_SECS")?
                    .unwrap_or_else(default_acquire_timeout_secs),
            },
            password,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("PRODUCTION".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("staging".parse::<Environment>().unwrap(), Environment::Staging);
        assert!(matches!(
            "qa".parse::<Environment>(),
            Err(ConfigError::InvalidValue("APP_ENV", _))
        ));
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "notice");
        assert_eq!(default_max_connections(), 10);
        assert_eq!(default_min_connections(), 1);
        assert_eq!(default_acquire_timeout_secs(), 10);

        let policy = PasswordPolicy::default();
        assert_eq!(policy.min_length, 8);
        assert_eq!(policy.max_length, 64);
    }

    #[test]
    fn test_parse_var_unset() {
        let value: Option<u32> = parse_var("NOTICE_TEST_SURELY_UNSET_VARIABLE").unwrap();
        assert!(value.is_none());
    }
}
