//! Configuration loading and resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Tiers 1 and 2 are both parsed by the binaries' clap definitions and arrive
//! here merged as [`ConfigOverrides`].

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default server host
pub const DEFAULT_HOST: &str = "localhost";

/// Default server port
pub const DEFAULT_PORT: u16 = 3000;

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
}

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// Merge overrides over the config file over compiled defaults
    pub fn resolve(overrides: ConfigOverrides, file: Option<TomlConfig>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            host: overrides
                .host
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            database_path: overrides
                .database_path
                .or(file.database_path)
                .unwrap_or_else(default_database_path),
        }
    }

    /// `host:port` string for binding the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load the TOML config file
///
/// An explicitly named file must exist and parse. The default file is
/// optional: when it is missing or unreadable the defaults apply and startup
/// continues.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<Option<TomlConfig>> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        return parse_toml_config(&content, path).map(Some);
    }

    let Some(path) = default_config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(None);
    }

    match std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Cannot read config file {}: {}", path.display(), e)))
        .and_then(|content| parse_toml_config(&content, &path))
    {
        Ok(config) => {
            info!("Loaded config file {}", path.display());
            Ok(Some(config))
        }
        Err(e) => {
            warn!("Ignoring config file: {}", e);
            Ok(None)
        }
    }
}

fn parse_toml_config(content: &str, path: &Path) -> Result<TomlConfig> {
    toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}

/// Platform config file location (`~/.config/registrar/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("registrar").join("config.toml"))
}

/// OS-dependent default database file
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("registrar"))
        .unwrap_or_else(|| PathBuf::from("./registrar_data"))
        .join("registrar.db")
}
