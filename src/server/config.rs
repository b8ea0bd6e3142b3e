// src/server/config.rs
//! Configuration file parsing for the kuchnia server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [storage] - SQLite database path

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct KuchniaConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageSection,
}

/// [server] section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Bind address (default: 0.0.0.0:8000)
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

/// [storage] section
#[derive(Debug, Deserialize)]
pub struct StorageSection {
    /// SQLite database path (default: ./db.sqlite)
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./db.sqlite")
}

impl KuchniaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: KuchniaConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address: {}", self.server.bind))?;
        Ok(())
    }

    /// Convert to runtime [`ServerConfig`]
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.server.bind))?;
        Ok(ServerConfig {
            bind_addr,
            db_path: self.storage.db_path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KuchniaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind, "0.0.0.0:8000");
        assert_eq!(config.storage.db_path, PathBuf::from("./db.sqlite"));
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[server]
bind = "127.0.0.1:9000"

[storage]
db_path = "/var/lib/kuchnia/recipes.db"
"#;
        let config: KuchniaConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        let server_config = config.to_server_config().unwrap();
        assert_eq!(server_config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(
            server_config.db_path,
            PathBuf::from("/var/lib/kuchnia/recipes.db")
        );
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let toml_str = r#"
[server]
bind = "127.0.0.1:9000"
"#;
        let config: KuchniaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.db_path, PathBuf::from("./db.sqlite"));
    }

    #[test]
    fn test_invalid_bind_address() {
        let toml_str = r#"
[server]
bind = "not-an-address"
"#;
        let config: KuchniaConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(KuchniaConfig::load(Path::new("/nonexistent/kuchnia.toml")).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kuchnia.toml");
        std::fs::write(&path, "[server]\nbind = \"0.0.0.0:8000\"\n").unwrap();
        let config = KuchniaConfig::load(&path).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8000");
    }
}
