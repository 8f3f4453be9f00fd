//! Generator settings loaded from YAML.
//!
//! Every key is optional; omitted keys take the documented defaults:
//!
//! ```yaml
//! seed: 0
//! use_field_name_for_string: true
//! recursive: true
//! recurse_limit: 5
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default depth of nested compound-field fabrication.
pub const DEFAULT_RECURSE_LIMIT: u32 = 5;

/// Error type for settings loading.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Error reading settings file
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Tunables for the generator registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Base value injected into the built-in generators
    pub seed: i64,

    /// Fill text fields with their own field name
    pub use_field_name_for_string: bool,

    /// Fabricate compound fields recursively
    pub recursive: bool,

    /// Maximum nesting depth for recursive fabrication
    pub recurse_limit: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            use_field_name_for_string: true,
            recursive: true,
            recurse_limit: DEFAULT_RECURSE_LIMIT,
        }
    }
}

impl GeneratorSettings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Settings identical to the defaults apart from the seed.
    pub fn with_seed(seed: i64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
