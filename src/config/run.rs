//! Run configuration: which formatters to create and where relative output
//! paths live.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigurationError;

/// Serialization format of a run configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Parse a format from a name or file extension.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(ConfigFormat::from_str)
    }
}

/// Formatter configuration for one test run.
///
/// ```yaml
/// formatters:
///   - pretty
///   - json:reports/run.json
/// base_dir: target/cucumber
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Raw `type[:destination]` specs, created in order
    #[serde(default)]
    pub formatters: Vec<String>,
    /// Directory relative destinations are resolved against
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

impl RunConfig {
    /// Create an empty run configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a formatter spec.
    pub fn add_formatter(mut self, spec: impl Into<String>) -> Self {
        self.formatters.push(spec.into());
        self
    }

    /// Set the base directory for relative destinations.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Parse a configuration from text in the given format.
    pub fn from_str_as(text: &str, format: ConfigFormat) -> Result<Self, ConfigurationError> {
        match format {
            #[cfg(feature = "json")]
            ConfigFormat::Json => {
                serde_json::from_str(text).map_err(|e| ConfigurationError::InvalidConfig(Box::new(e)))
            }

            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| ConfigurationError::InvalidConfig(Box::new(e)))
            }

            #[cfg(feature = "toml")]
            ConfigFormat::Toml => {
                toml::from_str(text).map_err(|e| ConfigurationError::InvalidConfig(Box::new(e)))
            }

            #[allow(unreachable_patterns)]
            other => {
                let _ = text;
                Err(ConfigurationError::InvalidConfig(
                    format!("{other:?} configuration support is not enabled").into(),
                ))
            }
        }
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            ConfigurationError::InvalidConfig(
                format!("cannot infer configuration format of {}", path.display()).into(),
            )
        })?;
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigurationError::InvalidConfig(Box::new(e)))?;
        Self::from_str_as(&text, format)
    }
}
