//! Back-office configuration.
//!
//! Loaded from TOML; every key is optional and falls back to its default.
//! `GALLEY_PAGE_SIZE` overrides `page_size` after the file is read.

use chrono::FixedOffset;
use galley_core::{DEFAULT_PAGE_SIZE, IN_FILTER_LIMIT};
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error as ThisError;
use tracing::{info, warn};

/// Environment variable overriding `page_size`.
pub const PAGE_SIZE_ENV: &str = "GALLEY_PAGE_SIZE";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            reason: reason.into(),
        }
    }
}

///
/// GalleyConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GalleyConfig {
    /// Rows per table page.
    pub page_size: u32,

    /// Maximum ids one joined search may inject into an `in` filter.
    pub in_filter_limit: usize,

    /// `tracing` env-filter directive installed by the CLI.
    pub log_filter: String,

    /// Offset applied when rendering timestamps in tables.
    pub utc_offset_hours: i32,
}

impl Default for GalleyConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            in_filter_limit: IN_FILTER_LIMIT,
            log_filter: "info".to_string(),
            utc_offset_hours: 9,
        }
    }
}

impl GalleyConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    /// Read `path`, then apply the environment override.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");

        Self::from_toml(&text)?.with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let raw = std::env::var(PAGE_SIZE_ENV).ok();

        self.with_page_size_override(raw.as_deref())
    }

    /// Apply a raw `page_size` override, as read from the environment.
    pub fn with_page_size_override(mut self, raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw else {
            return Ok(self);
        };

        let page_size: u32 = raw.trim().parse().map_err(|err| {
            warn!("Invalid {PAGE_SIZE_ENV} value: {err}");
            ConfigError::invalid("page_size", format!("'{raw}' is not a page size"))
        })?;
        info!("{PAGE_SIZE_ENV} set, using page size {page_size}");
        self.page_size = page_size;
        self.validate()?;

        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::invalid("page_size", "must be at least 1"));
        }
        if self.in_filter_limit == 0 {
            return Err(ConfigError::invalid("in_filter_limit", "must be at least 1"));
        }
        if self.display_offset().is_none() {
            return Err(ConfigError::invalid(
                "utc_offset_hours",
                "must be between -23 and 23",
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn display_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
    }
}

///
/// TESTS
///
