//! Configuration for the Recordex CLI.
//!
//! Provides the [`RecordexConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `RECORDEX_CONFIG` environment variable
//! 3. XDG default: `~/.config/recordex/config.toml`
//! 4. Built-in defaults

use confyg::{Confygery, env};
use recordex_core::{Error, Result};
use recordex_index::{DEFAULT_TOP_K, EmbedderConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Recordex CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordexConfig {
    /// Embedding provider configuration.
    pub embedding: EmbedderConfig,

    /// Output artifact configuration.
    pub output: OutputConfig,

    /// Query defaults.
    pub query: QueryConfig,
}

/// Output artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path for the extracted records JSON file.
    pub path: String,
}

/// Query defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Number of results returned when `--top-k` is not given.
    pub default_top_k: usize,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for RecordexConfig {
    fn default() -> Self {
        Self {
            embedding: EmbedderConfig::default(),
            output: OutputConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "extracted_information.json".to_string(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_top_k: DEFAULT_TOP_K,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl RecordexConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("RECORDEX");
        env_opts.add_section("embedding");
        env_opts.add_section("output");
        env_opts.add_section("query");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("RECORDEX_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("recordex").join("config.toml"))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RecordexConfig::default();
        assert_eq!(config.embedding.provider, "hash");
        assert_eq!(config.embedding.dimension, 384);
        assert_eq!(config.output.path, "extracted_information.json");
        assert_eq!(config.query.default_top_k, 3);
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                [embedding]
                provider = "hash"
                dimension = 64

                [output]
                path = "records.json"

                [query]
                default_top_k = 5
            "#,
        )
        .unwrap();

        let config = RecordexConfig::load(path.to_str()).unwrap();
        assert_eq!(config.embedding.dimension, 64);
        assert_eq!(config.output.path, "records.json");
        assert_eq!(config.query.default_top_k, 5);
    }

    #[test]
    fn test_config_load_missing_file_uses_defaults() {
        let config = RecordexConfig::load(Some("/nonexistent/recordex.toml")).unwrap();
        assert_eq!(config.embedding.provider, "hash");
        assert_eq!(config.query.default_top_k, 3);
    }

    #[test]
    fn test_resolve_config_path_explicit_wins() {
        let path = RecordexConfig::resolve_config_path(Some("/tmp/explicit.toml"));
        assert_eq!(path, Some(PathBuf::from("/tmp/explicit.toml")));
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = RecordexConfig::default_config_path() {
            assert!(path.ends_with("recordex/config.toml"));
        }
    }
}
