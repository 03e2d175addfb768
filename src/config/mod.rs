//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MEMBER_CHECK` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use member_check::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Active semester: {}", config.membership.active_semester());
//! ```

mod error;
mod membership;
mod server;

pub use error::{ConfigError, ValidationError};
pub use membership::MembershipConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Unprefixed variable accepted as a low-priority default for
/// `membership.active_semester`.
pub const ACTIVE_SEMESTER_ENV: &str = "ACTIVE_SEMESTER";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Membership check configuration (active semester, roster file)
    #[serde(default)]
    pub membership: MembershipConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Uses `ACTIVE_SEMESTER`, if set, as the default active semester
    /// 3. Reads environment variables with `MEMBER_CHECK` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MEMBER_CHECK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MEMBER_CHECK__MEMBERSHIP__ACTIVE_SEMESTER="Fall 2025"` -> `membership.active_semester`
    /// - `MEMBER_CHECK__MEMBERSHIP__ROSTER_PATH=data/members.json` -> `membership.roster_path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(semester) = std::env::var(ACTIVE_SEMESTER_ENV) {
            builder = builder.set_default("membership.active_semester", semester)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("MEMBER_CHECK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.membership.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::DEFAULT_ACTIVE_SEMESTER;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var(ACTIVE_SEMESTER_ENV);
        env::remove_var("MEMBER_CHECK__MEMBERSHIP__ACTIVE_SEMESTER");
        env::remove_var("MEMBER_CHECK__MEMBERSHIP__ROSTER_PATH");
        env::remove_var("MEMBER_CHECK__SERVER__PORT");
        env::remove_var("MEMBER_CHECK__SERVER__ENVIRONMENT");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.membership.roster_path, PathBuf::from("data/members.json"));
        assert_eq!(
            config.membership.active_semester().as_str(),
            DEFAULT_ACTIVE_SEMESTER
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_membership_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MEMBER_CHECK__MEMBERSHIP__ACTIVE_SEMESTER", "Spring 2026");
        env::set_var("MEMBER_CHECK__MEMBERSHIP__ROSTER_PATH", "/srv/members.yaml");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.membership.active_semester().as_str(), "Spring 2026");
        assert_eq!(
            config.membership.roster_path,
            PathBuf::from("/srv/members.yaml")
        );
    }

    #[test]
    fn test_unprefixed_active_semester_is_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(ACTIVE_SEMESTER_ENV, "Summer 2026");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.membership.active_semester().as_str(), "Summer 2026");
    }

    #[test]
    fn test_prefixed_active_semester_wins() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(ACTIVE_SEMESTER_ENV, "Summer 2026");
        env::set_var("MEMBER_CHECK__MEMBERSHIP__ACTIVE_SEMESTER", "Fall 2026");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.membership.active_semester().as_str(), "Fall 2026");
    }

    #[test]
    fn test_environment_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MEMBER_CHECK__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.environment, Environment::Production);
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MEMBER_CHECK__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
