//! Configuration loading and resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! The database connection string is the exception: it only comes from
//! `DATABASE_URL` and is required.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable holding the PostgreSQL connection string
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable overriding the server port
pub const PORT_VAR: &str = "ADVOCATES_PORT";
/// Environment variable overriding the records endpoint used by the client
pub const ENDPOINT_VAR: &str = "ADVOCATES_ENDPOINT";

/// Compiled fallback values
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub port: u16,
    pub endpoint: String,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            port: 5730,
            endpoint: "http://127.0.0.1:5730/api/advocates".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// `[logging]` table of the config file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: CompiledDefaults::default().log_level,
        }
    }
}

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub endpoint: Option<String>,
    pub logging: LoggingConfig,
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    /// Read `DATABASE_URL` from the process environment.
    ///
    /// Missing or blank is a fatal configuration error.
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(DATABASE_URL_VAR).ok())
    }

    fn from_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(url) if !url.trim().is_empty() => Ok(Self { url }),
            _ => Err(Error::Config(format!(
                "{} is not set. Please configure your environment variables.",
                DATABASE_URL_VAR
            ))),
        }
    }
}

/// Load the TOML config file.
///
/// An explicit path wins over the platform search paths. Finding no file in
/// the search paths is not an error and yields defaults; an unreadable or
/// malformed file is returned as an error so the caller can warn once logging
/// is up and carry on with [`TomlConfig::default`].
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config_file() {
            Ok(path) => path,
            Err(_) => return Ok(TomlConfig::default()),
        },
    };

    read_toml_config(&path)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Parse a config file, surfacing I/O and syntax errors
pub fn read_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
}

/// Locate the config file for the platform
fn find_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // ~/.config/advocates/config.toml first, then /etc/advocates/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("advocates").join("config.toml"));
        let system_config = PathBuf::from("/etc/advocates/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let path = dirs::config_dir()
        .map(|d| d.join("advocates").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

/// Resolve the server port: CLI, `ADVOCATES_PORT`, config file, default
pub fn resolve_port(cli_arg: Option<u16>, config: &TomlConfig) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }

    if let Ok(value) = std::env::var(PORT_VAR) {
        match value.parse() {
            Ok(port) => return port,
            Err(_) => warn!("Ignoring {}={:?}: not a port number", PORT_VAR, value),
        }
    }

    config.port.unwrap_or_else(|| CompiledDefaults::default().port)
}

/// Resolve the records endpoint: CLI, `ADVOCATES_ENDPOINT`, config file, default
pub fn resolve_endpoint(cli_arg: Option<&str>, config: &TomlConfig) -> String {
    if let Some(endpoint) = cli_arg {
        return endpoint.to_string();
    }

    if let Ok(endpoint) = std::env::var(ENDPOINT_VAR) {
        if !endpoint.trim().is_empty() {
            return endpoint;
        }
    }

    config
        .endpoint
        .clone()
        .unwrap_or_else(|| CompiledDefaults::default().endpoint)
}
