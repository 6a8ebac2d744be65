use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::RwLock;

/// Display configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Symbol printed in front of every amount
    pub currency_symbol: String,
}

/// Global application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Application version
    pub version: String,
    /// Display configuration
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Simple Banking Application".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            display: DisplayConfig {
                currency_symbol: "$".to_string(),
            },
        }
    }
}

// Global configuration instance
lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

/// Load configuration from file
///
/// A missing file keeps the defaults and nothing is written to disk.
pub fn load_config(path: &str) -> Result<()> {
    let config = if Path::new(path).exists() {
        read_config(path)?
    } else {
        debug!("No configuration file at {}, using defaults", path);
        Config::default()
    };

    update_config(config)
}

/// Parse a configuration file, TOML or JSON by extension
pub fn read_config(path: &str) -> Result<Config> {
    let mut file = File::open(path).context(format!("Failed to open config file: {}", path))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).context("Failed to read config file")?;

    let config: Config = match path.ends_with(".toml") {
        true => toml::from_str(&contents).context("Failed to parse TOML config")?,
        false => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    Ok(config)
}

/// Get a copy of the current config
pub fn get_config() -> Config {
    CONFIG
        .read()
        .map(|config| config.clone())
        .unwrap_or_default()
}

/// Update the current config
pub fn update_config(config: Config) -> Result<()> {
    *CONFIG
        .write()
        .map_err(|_| anyhow!("Configuration lock poisoned"))? = config;
    Ok(())
}
