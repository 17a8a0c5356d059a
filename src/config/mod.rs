//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PARTY_ROSTER` prefix and nested values use double underscores as separators.
//! An optional `party-roster.{yaml,toml,json}` file in the working directory is
//! read first; environment variables override it.
//!
//! # Example
//!
//! ```no_run
//! use party_roster::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod roster;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use roster::{CustomTemplateConfig, RosterConfig};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// in-memory server. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Repository backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Seat policy and custom template
    #[serde(default)]
    pub roster: RosterConfig,
}

impl AppConfig {
    /// Load configuration from the optional file and environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `PARTY_ROSTER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PARTY_ROSTER__STORAGE__BACKEND=file` -> `storage.backend = file`
    /// - `PARTY_ROSTER__ROSTER__SEAT_POLICY=reject` -> `roster.seat_policy = reject`
    /// - `PARTY_ROSTER__ROSTER__CUSTOM_TEMPLATE__SLOTS=Caller,Runner`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("party-roster").required(false))
            .add_source(
                config::Environment::default()
                    .prefix("PARTY_ROSTER")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("roster.custom_template.slots")
                    .try_parsing(true),
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
        self.storage.validate()?;
        self.roster.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roster::SeatPolicy;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const KEYS: &[&str] = &[
        "PARTY_ROSTER__SERVER__PORT",
        "PARTY_ROSTER__SERVER__ENVIRONMENT",
        "PARTY_ROSTER__STORAGE__BACKEND",
        "PARTY_ROSTER__STORAGE__DATA_DIR",
        "PARTY_ROSTER__ROSTER__SEAT_POLICY",
        "PARTY_ROSTER__ROSTER__CUSTOM_TEMPLATE__SLOTS",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.roster.seat_policy, SeatPolicy::Overwrite);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PARTY_ROSTER__SERVER__PORT", "3000");
        env::set_var("PARTY_ROSTER__STORAGE__BACKEND", "file");
        env::set_var("PARTY_ROSTER__STORAGE__DATA_DIR", "/tmp/rosters");
        env::set_var("PARTY_ROSTER__ROSTER__SEAT_POLICY", "reject");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.data_dir.to_str(), Some("/tmp/rosters"));
        assert_eq!(config.roster.seat_policy, SeatPolicy::Reject);
    }

    #[test]
    fn test_custom_slots_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(
            "PARTY_ROSTER__ROSTER__CUSTOM_TEMPLATE__SLOTS",
            "Caller,Runner1,Runner2",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let custom = config.roster.custom_template.unwrap();
        assert_eq!(custom.slots, vec!["Caller", "Runner1", "Runner2"]);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PARTY_ROSTER__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }
}
