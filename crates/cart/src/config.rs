//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GOMARKETPLACE_STORAGE_PATH` - Path of the JSON file backing the
//!   storage medium (default: `gomarketplace-storage.json`)
//! - `GOMARKETPLACE_PERSISTENCE` - `session` or `persistent`
//!   (default: `session`)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set to a value that does not parse.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Whether the persisted cart survives a restart.
///
/// `SessionOnly` reproduces the shipped mobile-app behavior: the storage
/// medium is wiped right before the startup load, so every session starts
/// from an empty cart. `Persistent` skips the wipe and restores whatever the
/// previous session persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistenceMode {
    /// Wipe the medium on startup; carts last one session.
    #[default]
    SessionOnly,
    /// Skip the startup wipe; carts survive restarts.
    Persistent,
}

impl FromStr for PersistenceMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "session" => Ok(Self::SessionOnly),
            "persistent" => Ok(Self::Persistent),
            other => Err(ConfigError::InvalidEnvVar(
                "GOMARKETPLACE_PERSISTENCE".to_string(),
                format!("expected `session` or `persistent`, got `{other}`"),
            )),
        }
    }
}

/// Cart subsystem configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the JSON file backing the storage medium.
    pub storage_path: PathBuf,
    /// Startup persistence behavior.
    pub persistence: PersistenceMode,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a default, so loading only fails on a malformed value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `GOMARKETPLACE_PERSISTENCE` is set to an
    /// unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_path = PathBuf::from(get_env_or_default(
            "GOMARKETPLACE_STORAGE_PATH",
            "gomarketplace-storage.json",
        ));
        let persistence = get_env_or_default("GOMARKETPLACE_PERSISTENCE", "session").parse()?;

        Ok(Self {
            storage_path,
            persistence,
        })
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("gomarketplace-storage.json"),
            persistence: PersistenceMode::SessionOnly,
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_mode_parses() {
        assert_eq!(
            "session".parse::<PersistenceMode>().unwrap(),
            PersistenceMode::SessionOnly
        );
        assert_eq!(
            "persistent".parse::<PersistenceMode>().unwrap(),
            PersistenceMode::Persistent
        );
    }

    #[test]
    fn test_persistence_mode_rejects_unknown() {
        let err = "forever".parse::<PersistenceMode>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
        assert!(err.to_string().contains("forever"));
    }

    #[test]
    fn test_default_is_session_only() {
        let config = CartConfig::default();
        assert_eq!(config.persistence, PersistenceMode::SessionOnly);
        assert_eq!(
            config.storage_path,
            PathBuf::from("gomarketplace-storage.json")
        );
    }
}
