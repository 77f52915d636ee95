//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::export::TemplateDescriptor;

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # Directory structure
///
/// ```text
/// config/default/
/// └── engine.yaml   # night window and export templates
/// ```
///
/// # Example
///
/// ```no_run
/// use dienstplan_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let template = loader.template("invoice").unwrap();
/// assert!(template.anonymize);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from `engine.yaml` in the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing
    /// and [`EngineError::ConfigParseError`] when it cannot be read or
    /// parsed.
    pub fn load(dir: impl AsRef<Path>) -> EngineResult<Self> {
        let path = dir.as_ref().join("engine.yaml");
        if !path.exists() {
            return Err(EngineError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader around the shipped defaults, without touching the
    /// filesystem.
    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves a named export template.
    pub fn template(&self, name: &str) -> EngineResult<TemplateDescriptor> {
        self.config.template(name)
    }
}
