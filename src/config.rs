use crate::error::{HarborTagError, Result};
use crate::registry::harbor::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "harbortag.toml";

/// Represents the complete configuration for harbor-tag.
///
/// Every value is optional; command-line flags and `HARBOR_*` environment
/// variables take precedence over the file.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Returns the default number of artifacts requested from Harbor.
fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Harbor coordinates and credentials.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RegistryConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub project: Option<String>,

    #[serde(default)]
    pub repository: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            url: None,
            project: None,
            repository: None,
            username: None,
            password: None,
            page_size: default_page_size(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `harbortag.toml` in current directory
/// 3. `harbortag.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(Path::new(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return read_config(&local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(CONFIG_FILE_NAME);
        if user.exists() {
            return read_config(&user);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        HarborTagError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| HarborTagError::config(format!("Invalid '{}': {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}
