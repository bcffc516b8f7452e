//! Environment-driven configuration for a scan process (specification §11).
//!
//! [`DetectorConfig`](vcp_core::DetectorConfig) stays pure data with no
//! environment coupling; [`ScanConfig`] holds the knobs that only make sense
//! for a running process: where to read the universe from, how much
//! concurrency to allow, where detected signals land. A missing variable
//! falls back to a documented default; a present but unparseable one is a
//! [`ScanError::Config`], never a panic.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Result, ScanError};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub universe_path: Option<PathBuf>,
    pub max_concurrency: usize,
    pub output_path: PathBuf,
    pub log_level: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            universe_path: None,
            max_concurrency: 8,
            output_path: PathBuf::from("signals.jsonl"),
            log_level: "info".to_string(),
        }
    }
}

impl ScanConfig {
    /// Loads a `.env` file if present (real process environment variables
    /// still take precedence), then layers `VCP_*`-prefixed environment
    /// variables over the defaults.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("universe_path", None::<String>)
            .map_err(|e| ScanError::Config(e.to_string()))?
            .set_default("max_concurrency", defaults.max_concurrency as i64)
            .map_err(|e| ScanError::Config(e.to_string()))?
            .set_default("output_path", defaults.output_path.to_string_lossy().to_string())
            .map_err(|e| ScanError::Config(e.to_string()))?
            .set_default("log_level", defaults.log_level.clone())
            .map_err(|e| ScanError::Config(e.to_string()))?
            .add_source(config::Environment::with_prefix("VCP").try_parsing(true))
            .build()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| ScanError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = ScanConfig::default();
        assert_eq!(config.max_concurrency, 8);
        assert_eq!(config.output_path, PathBuf::from("signals.jsonl"));
        assert_eq!(config.log_level, "info");
        assert!(config.universe_path.is_none());
    }
}
