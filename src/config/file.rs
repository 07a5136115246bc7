//! Configuration and test definition files
//!
//! Handles finding, loading, and validating the tool configuration, plus
//! loading the ordered test definition files the benchmarkers consume.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::{GraphqlTestCase, RestTestCase};

use super::BenchSettings;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./api-bench.yaml",
    "./api-bench.yml",
    "./.api-bench.yaml",
    "~/.config/api-bench/config.yaml",
    "~/.api-bench.yaml",
];

/// Full configuration file structure
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Version of config file format
    #[serde(default = "default_version")]
    pub version: String,

    /// Benchmark settings
    #[serde(default)]
    pub bench: BenchSettings,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl ConfigFile {
    /// Find a configuration file in the standard locations
    pub fn find() -> Option<PathBuf> {
        for location in CONFIG_LOCATIONS {
            let path = expand_path(location);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Load from the first standard location, falling back to defaults
    pub fn load_default() -> Result<Self> {
        if let Some(path) = Self::find() {
            Self::load(&path)
        } else {
            Ok(Self {
                version: default_version(),
                bench: BenchSettings::default(),
            })
        }
    }

    /// Load configuration from a file (YAML or JSON by extension)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml_file(path) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            anyhow::bail!("Unsupported config version: {}", self.version);
        }
        if self.bench.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Generate an example configuration
    pub fn example() -> Self {
        Self {
            version: default_version(),
            bench: BenchSettings::default(),
        }
    }
}

/// Load REST test definitions from a JSON or YAML file.
///
/// The file must contain an ordered array of test case objects; order is
/// preserved through execution and into the results.
pub fn load_rest_tests(path: impl AsRef<Path>) -> Result<Vec<RestTestCase>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read REST tests: {}", path.display()))?;

    let tests: Vec<RestTestCase> = if is_yaml_file(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse REST tests: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse REST tests: {}", path.display()))?
    };

    Ok(tests)
}

/// Load GraphQL test definitions from a JSON or YAML file
pub fn load_graphql_tests(path: impl AsRef<Path>) -> Result<Vec<GraphqlTestCase>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read GraphQL tests: {}", path.display()))?;

    let tests: Vec<GraphqlTestCase> = if is_yaml_file(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse GraphQL tests: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse GraphQL tests: {}", path.display()))?
    };

    Ok(tests)
}

/// Expand ~ to home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
