//! Core runtime configuration.
//!
//! # Responsibility
//! - Hold the tunables the view layer may override (capacity, asset base,
//!   group-set name, logging).
//! - Parse JSON overrides on top of built-in defaults.
//!
//! # Invariants
//! - A validated config has capacity >= 1 and non-blank names.

use crate::logging::{default_log_level, parse_level};
use crate::model::image::DEFAULT_IMAGE_BASE_URI;
use crate::projection::DEFAULT_TOP_ITEMS_CAPACITY;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Only supported group-set name for `Catalog::groups`.
pub const DEFAULT_GROUP_SET_NAME: &str = "AllGroups";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub top_items_capacity: usize,
    pub image_base_uri: String,
    pub group_set_name: String,
    pub log_level: String,
    /// Absolute directory for rolling log files; logging stays off when unset.
    pub log_dir: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            top_items_capacity: DEFAULT_TOP_ITEMS_CAPACITY,
            image_base_uri: DEFAULT_IMAGE_BASE_URI.to_string(),
            group_set_name: DEFAULT_GROUP_SET_NAME.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Parses JSON overrides; missing keys keep their defaults.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or unknown keys.
    /// - Validation errors from [`CoreConfig::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_items_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.image_base_uri.trim().is_empty() {
            return Err(ConfigError::BlankField("image_base_uri"));
        }
        if self.group_set_name.trim().is_empty() {
            return Err(ConfigError::BlankField("group_set_name"));
        }
        if parse_level(&self.log_level).is_err() {
            return Err(ConfigError::UnsupportedLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    ZeroCapacity,
    BlankField(&'static str),
    UnsupportedLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid core config: {message}"),
            Self::ZeroCapacity => write!(f, "top_items_capacity must be at least 1"),
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::UnsupportedLogLevel(level) => write!(
                f,
                "log_level `{level}` is unsupported; expected trace|debug|info|warn|error"
            ),
        }
    }
}

impl Error for ConfigError {}
