//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading Workforce
//! Support tables from YAML files, plus a builtin copy of the published
//! tables embedded in the binary so the engine works with no filesystem
//! access.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{DegreesConfig, PolicyConfig, SchemeMetadata, WfsConfig};

const BUILTIN_SCHEME: &str = include_str!("../../config/wfs/scheme.yaml");
const BUILTIN_DEGREES: &str = include_str!("../../config/wfs/degrees.yaml");
const BUILTIN_POLICY: &str = include_str!("../../config/wfs/policy.yaml");

/// Loads and provides access to Workforce Support configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/wfs/
/// ├── scheme.yaml   # Scheme metadata
/// ├── degrees.yaml  # Degree tier allowance profiles
/// └── policy.yaml   # Deduction and allowance policy
/// ```
///
/// # Example
///
/// ```
/// use wfs_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::builtin().unwrap();
/// assert_eq!(config.metadata().currency, "KWD");
/// assert!(config.degree("high_school_only").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/wfs")
    ///
    /// # Returns
    ///
    /// Returns a [`WfsConfig`] on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<WfsConfig> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<SchemeMetadata>(&path.join("scheme.yaml"))?;
        let degrees = Self::load_yaml::<DegreesConfig>(&path.join("degrees.yaml"))?;
        let policy = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;

        debug!(
            scheme = %metadata.name,
            degrees = degrees.degrees.len(),
            "loaded WFS configuration"
        );

        Ok(WfsConfig::new(metadata, degrees.degrees, policy))
    }

    /// Returns the builtin copy of the published tables.
    ///
    /// The YAML files shipped with the crate are embedded at compile time
    /// and parsed on each call; an error indicates the embedded tables are
    /// malformed.
    pub fn builtin() -> EngineResult<WfsConfig> {
        let metadata = Self::parse_yaml::<SchemeMetadata>("builtin:scheme.yaml", BUILTIN_SCHEME)?;
        let degrees = Self::parse_yaml::<DegreesConfig>("builtin:degrees.yaml", BUILTIN_DEGREES)?;
        let policy = Self::parse_yaml::<PolicyConfig>("builtin:policy.yaml", BUILTIN_POLICY)?;

        Ok(WfsConfig::new(metadata, degrees.degrees, policy))
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&path_str, &content)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(path: &str, content: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
