//! # exo-config
//!
//! Layered configuration loading for Exoscope using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EXOSCOPE_*` prefix, `__` as separator)
//! 2. Project-level `.exoscope/config.toml`
//! 3. User-level `~/.config/exoscope/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `EXOSCOPE_CACHE__TTL_SECS` -> `cache.ttl_secs`,
//! `EXOSCOPE_ARCHIVE__BASE_URL` -> `archive.base_url`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use exo_config::ExoConfig;
//!
//! let config = ExoConfig::load_with_dotenv().expect("config");
//! println!("cache window: {}s", config.cache.ttl_secs);
//! ```

mod archive;
mod cache;
mod error;
mod general;

pub use archive::ArchiveConfig;
pub use cache::CacheConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExoConfig {
    #[serde(default)]
    pub archive: ArchiveConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ExoConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file, if one exists.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on extraction failure and
    /// [`ConfigError::InvalidValue`] on validation failure.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain with the user-level file from the
    /// platform config directory.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_global(Self::global_config_path().as_deref())
    }

    /// Build the figment provider chain with an explicit user-level file
    /// (`None` skips that layer).
    #[must_use]
    pub fn figment_with_global(global_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = global_path.filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".exoscope/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("EXOSCOPE_").split("__"))
    }

    /// Reject values the archive client or cache cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.archive.base_url.trim().is_empty() {
            return Err(invalid("archive.base_url", "must not be empty"));
        }
        if self.archive.timeout_secs == 0 {
            return Err(invalid("archive.timeout_secs", "must be at least 1"));
        }
        if self.cache.ttl_secs == 0 {
            return Err(invalid("cache.ttl_secs", "must be at least 1"));
        }
        if i64::try_from(self.cache.ttl_secs).is_err() {
            return Err(invalid("cache.ttl_secs", "is out of range"));
        }
        if self.general.default_limit == 0 {
            return Err(invalid("general.default_limit", "must be at least 1"));
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("exoscope").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
