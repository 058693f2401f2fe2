//! Top-level normtree configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BatchConfig, DebugConfig, TreeConfig};
use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_cli_overrides`)
/// 2. Environment variables (`NORMTREE_*`)
/// 3. Project config (`normtree.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormtreeConfig {
    pub tree: TreeConfig,
    pub batch: BatchConfig,
    pub debug: DebugConfig,
}

/// Override arguments applied on top of every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Tree flags by option name, e.g. `("compress_tree", true)`.
    pub tree_flags: Vec<(String, bool)>,
    pub batch_size: Option<usize>,
    pub threads: Option<usize>,
    pub print_trees: Option<bool>,
}

impl NormtreeConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILE_NAME);
        let mut config = if project_config_path.exists() {
            tracing::debug!(path = %project_config_path.display(), "loading project config");
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Read a config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate numeric settings. Run once at load time; builds assume a valid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch.batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "batch.batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.batch.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "batch.threads".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Tree flags use `NORMTREE_TREE_<FLAG>` (e.g. `NORMTREE_TREE_COMPRESS_TREE=true`);
    /// batch settings use `NORMTREE_BATCH_SIZE` and `NORMTREE_BATCH_THREADS`;
    /// `NORMTREE_PRINT_TREES` toggles tree printing.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in TreeConfig::FLAG_NAMES {
            let key = format!("{ENV_PREFIX}TREE_{}", name.to_ascii_uppercase());
            if let Some(val) = lookup(&key) {
                let value = parse_env::<bool>(&key, &val)?;
                if let Some(flag) = self.tree.flag_mut(name) {
                    *flag = value;
                }
            }
        }

        let key = format!("{ENV_PREFIX}BATCH_SIZE");
        if let Some(val) = lookup(&key) {
            self.batch.batch_size = parse_env(&key, &val)?;
        }
        let key = format!("{ENV_PREFIX}BATCH_THREADS");
        if let Some(val) = lookup(&key) {
            self.batch.threads = Some(parse_env(&key, &val)?);
        }
        let key = format!("{ENV_PREFIX}PRINT_TREES");
        if let Some(val) = lookup(&key) {
            self.debug.print_trees = parse_env(&key, &val)?;
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        for (name, value) in &cli.tree_flags {
            let flag = self
                .tree
                .flag_mut(name)
                .ok_or_else(|| ConfigError::InvalidValue {
                    field: name.clone(),
                    message: "unknown tree option".to_string(),
                })?;
            *flag = *value;
        }
        if let Some(v) = cli.batch_size {
            self.batch.batch_size = v;
        }
        if let Some(v) = cli.threads {
            self.batch.threads = Some(v);
        }
        if let Some(v) = cli.print_trees {
            self.debug.print_trees = v;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, val: &str) -> Result<T, ConfigError> {
    val.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        field: key.to_string(),
        message: format!("cannot parse {val:?}"),
    })
}
