//! Conversion settings.
//!
//! Every field has a default, so an empty YAML file (or no file at all)
//! reproduces the stock StatsBomb → CDF conversion.
//!
//! ```rust
//! use cdf_core::config::CdfConfig;
//!
//! let cfg = CdfConfig::from_yaml_str("normalize:\n  keep_meta_events: true\n").unwrap();
//! assert!(cfg.normalize.keep_meta_events);
//! assert_eq!(cfg.graph.prefix, "core");
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NAMESPACE: &str = "https://w3id.org/football-cdf/core#";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CdfConfig {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Normalizer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Keep starting-XI / half-start / half-end rows in the flat event list
    pub keep_meta_events: bool,
    /// Opening window (minutes of the first half) sampled for play direction
    pub direction_window_minutes: u32,
    /// Along-pitch midline; a lower mean x means the home side plays left→right
    pub direction_midline_x: f64,
    /// Vendor name stamped into the summary and context metadata
    pub vendor: String,
    /// Version tag for event/meta/cdf blocks
    pub format_version: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            keep_meta_events: false,
            direction_window_minutes: 5,
            direction_midline_x: 60.0,
            vendor: "StatsBomb".to_string(),
            format_version: "1.0".to_string(),
        }
    }
}

/// Graph builder / exporter settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    /// Vocabulary base for every predicate, type and node address
    pub namespace: String,
    /// Prefix bound to `namespace` in the JSON-LD context
    pub prefix: String,
    pub meta_version: String,
    pub vendor: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            prefix: "core".to_string(),
            meta_version: "0.1.0".to_string(),
            vendor: "StatsBomb".to_string(),
        }
    }
}

impl CdfConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a YAML file; a missing path yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = CdfConfig::default();
        assert!(!cfg.normalize.keep_meta_events);
        assert_eq!(cfg.normalize.direction_window_minutes, 5);
        assert!((cfg.normalize.direction_midline_x - 60.0).abs() < f64::EPSILON);
        assert_eq!(cfg.graph.namespace, DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let cfg = CdfConfig::from_yaml_str("graph:\n  prefix: fb\n").unwrap();
        assert_eq!(cfg.graph.prefix, "fb");
        assert_eq!(cfg.graph.namespace, DEFAULT_NAMESPACE);
        assert_eq!(cfg.normalize, NormalizeConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(CdfConfig::from_yaml_str("  \n").unwrap(), CdfConfig::default());
    }

    #[test]
    fn test_bad_yaml_is_error() {
        let err = CdfConfig::from_yaml_str("normalize: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(CdfConfig::load(None).unwrap(), CdfConfig::default());
    }
}
