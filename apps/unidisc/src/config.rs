//! # Configuration
//!
//! Runtime limits for the application, layered in this order:
//! 1. Built-in defaults (from `unidisc_core::primitives`)
//! 2. Optional TOML file (`--config`)
//! 3. Environment variables
//! 4. Command-line flags (applied by the CLI)
//!
//! ## Environment Variables
//!
//! - `UNIDISC_ORDER_LIMIT`: maximum orders listed (default: 200)
//! - `UNIDISC_SUGGESTION_LIMIT`: maximum recommendations (default: 10)
//! - `UNIDISC_OVERLOAD_THRESHOLD`: enrollments above which a student is flagged (default: 6)

use serde::{Deserialize, Serialize};
use std::path::Path;
use unidisc_core::UnidiscError;
use unidisc_core::primitives::{
    DEFAULT_ORDER_LIMIT, DEFAULT_OVERLOAD_THRESHOLD, DEFAULT_SUGGESTION_LIMIT,
};

/// Application limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Maximum number of orderings listed by one enumeration.
    pub order_limit: usize,
    /// Maximum number of course recommendations.
    pub suggestion_limit: usize,
    /// Enrollment count above which a student is reported as overloaded.
    pub overload_threshold: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            order_limit: DEFAULT_ORDER_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            overload_threshold: DEFAULT_OVERLOAD_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, UnidiscError> {
        toml::from_str(text).map_err(|e| UnidiscError::ConfigError(e.to_string()))
    }

    /// Read a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, UnidiscError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            UnidiscError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Defaults, then the optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, UnidiscError> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a key lookup (the environment in production).
    ///
    /// Values that do not parse as unsigned integers are ignored.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).and_then(|v| v.trim().parse::<usize>().ok());

        if let Some(v) = read("UNIDISC_ORDER_LIMIT") {
            self.order_limit = v;
        }
        if let Some(v) = read("UNIDISC_SUGGESTION_LIMIT") {
            self.suggestion_limit = v;
        }
        if let Some(v) = read("UNIDISC_OVERLOAD_THRESHOLD") {
            self.overload_threshold = v;
        }
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
