//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lineage/lineage.toml`
//! 3. Local config: `<dir>/.lineage.toml`
//! 4. Environment variables: `LINEAGE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// How a built tree is printed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawing tree
    #[default]
    Tree,
    /// Nested TOML tables
    Toml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Toml => write!(f, "toml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(OutputFormat::Tree),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(ApplicationError::Config {
                message: format!("unknown output format: {other}"),
            }),
        }
    }
}

/// Unified configuration for lineage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Parent id whose subtree is built (default: records without a parent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Output format for built trees
    pub format: OutputFormat,
    /// Abort on duplicate ids, dangling parents or self-parents
    pub strict: bool,
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub root: Option<String>,
    pub format: Option<OutputFormat>,
    pub strict: Option<bool>,
}

/// Get the XDG config directory for lineage.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lineage").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("lineage.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".lineage.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            root: overlay.root.clone().or_else(|| self.root.clone()),
            format: overlay.format.unwrap_or(self.format),
            strict: overlay.strict.unwrap_or(self.strict),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.lineage.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply LINEAGE_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("LINEAGE").separator("__"))
            .build()
            .map_err(config_err)?;
        Self::apply_overrides(settings, &config)
    }

    fn apply_overrides(mut settings: Self, config: &Config) -> Result<Self, ApplicationError> {
        if let Ok(val) = config.get_string("root") {
            settings.root = Some(val);
        }
        if let Ok(val) = config.get_string("format") {
            settings.format = val.parse()?;
        }
        if let Ok(val) = config.get_bool("strict") {
            settings.strict = val;
        }
        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# lineage configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/lineage/lineage.toml
#   Local:  <dir>/.lineage.toml
#   Env:    LINEAGE_* environment variables (explicit overrides)

# Parent id whose subtree is built; omit to start at records without a parent
# root = "a"

# Output format for built trees: "tree" or "toml"
# format = "tree"

# Abort on duplicate ids, dangling parents or self-parents
# strict = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
