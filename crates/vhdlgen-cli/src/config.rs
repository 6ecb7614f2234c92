//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config FILE`, or the default location if it exists)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use vhdlgen_core::domain::ImplementationKeyword;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default identity values for generated units.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Entity name used when `--entity` is not given.
    pub entity: Option<String>,
    /// Architecture name used when `--arch` is not given.
    pub architecture: Option<String>,
    /// Combinational body style: `process` or `function`.
    pub implementation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// A path given via `--config` must exist and parse; the default location
    /// is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(explicit) => explicit.clone(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.vhdlgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "vhdlgen", "vhdlgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".vhdlgen.toml"))
    }

    /// The configured default implementation keyword.  Anything other than
    /// `function` (including absence and typos) means `process`.
    pub fn default_keyword(&self) -> ImplementationKeyword {
        match self.defaults.implementation.as_deref() {
            Some("function") => ImplementationKeyword::Function,
            _ => ImplementationKeyword::Process,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.entity.is_none());
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.default_keyword(), ImplementationKeyword::Process);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        // The default config location is unlikely to exist in CI; if it
        // does, loading it must still succeed.
        assert!(AppConfig::load(None).is_ok());
    }

    #[test]
    fn parses_partial_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [defaults]
            entity = "top"
            implementation = "function"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.defaults.entity.as_deref(), Some("top"));
        assert!(cfg.defaults.architecture.is_none());
        assert_eq!(cfg.default_keyword(), ImplementationKeyword::Function);
    }

    #[test]
    fn unknown_implementation_falls_back_to_process() {
        let cfg: AppConfig = toml::from_str("[defaults]\nimplementation = \"procedure\"").unwrap();
        assert_eq!(cfg.default_keyword(), ImplementationKeyword::Process);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/vhdlgen-config.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nno_color = true").unwrap();
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
