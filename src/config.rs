use crate::describe::MAX_SUITABLE_TAG_CANDIDATES;
use crate::error::{GitverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "gitver.toml";

/// Represents the complete configuration for gitver.
///
/// Contains the fallback version and the tag search options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version")]
    pub default_version: String,

    #[serde(default)]
    pub describe: DescribeOptions,
}

/// Returns the version used when no tag qualifies.
fn default_version() -> String {
    "0.0.0".to_string()
}

fn default_max_candidates() -> usize {
    MAX_SUITABLE_TAG_CANDIDATES
}

/// Options for the tag candidate search.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DescribeOptions {
    /// Upper bound on annotated tag candidates considered
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        DescribeOptions {
            max_candidates: default_max_candidates(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_version: default_version(),
            describe: DescribeOptions::default(),
        }
    }
}

/// Path of the configuration file in the user config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gitver").join(CONFIG_FILE_NAME))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitver.toml` in current directory
/// 3. `<config dir>/gitver/gitver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => {
            let local = Path::new(".").join(CONFIG_FILE_NAME);
            if local.exists() {
                local
            } else {
                match user_config_path() {
                    Some(path) if path.exists() => path,
                    _ => {
                        debug!("no configuration file found, using defaults");
                        return Ok(Config::default());
                    }
                }
            }
        }
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        GitverError::config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let config = parse_config(&config_str)
        .map_err(|e| GitverError::config(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Parse configuration from TOML text.
pub fn parse_config(config_str: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}
