use crate::error::{MakeUtilsError, Result};
use crate::version::VERSION_HEADER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "make-utils.toml";

/// Represents the complete configuration for make-utils.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    /// Repository-relative submodule directories handled by `--all`
    #[serde(default)]
    pub submodules: Vec<PathBuf>,
}

fn default_git_command() -> String {
    "git".to_string()
}

fn default_version_header() -> PathBuf {
    PathBuf::from(VERSION_HEADER)
}

/// Which git executable to run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_git_command")]
    pub command: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            command: default_git_command(),
        }
    }
}

/// Source tree locations.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    /// Version header, relative to the source root unless absolute
    #[serde(default = "default_version_header")]
    pub version_header: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            version_header: default_version_header(),
        }
    }
}

impl PathsConfig {
    /// Version header location for the given source root
    pub fn version_header_in(&self, source_root: &Path) -> PathBuf {
        source_root.join(&self.version_header)
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| MakeUtilsError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `make-utils.toml` in current directory
/// 3. `make-utils.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
