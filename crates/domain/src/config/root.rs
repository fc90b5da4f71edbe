use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::authority::AuthorityConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::dns_record::check_domain_name;

const LOCAL_CONFIG_PATH: &str = "chicken-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/chicken-dns/config.toml";

/// Main configuration structure for Chicken DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Zone data served by the responder
    #[serde(default)]
    pub authority: AuthorityConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. chicken-dns.toml in current directory
    /// 3. /etc/chicken-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(domain) = overrides.domain_name {
            self.authority.domain_name = domain;
        }
        if let Some(address) = overrides.address {
            self.authority.address = Some(address);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.authority.domain_name.trim_end_matches('.').is_empty() {
            return Err(ConfigError::Validation(
                "Domain name cannot be empty".to_string(),
            ));
        }

        check_domain_name(&self.authority.domain_name)
            .map_err(|e| ConfigError::Validation(format!("domain_name: {}", e)))?;
        check_domain_name(&self.authority.name_server)
            .map_err(|e| ConfigError::Validation(format!("name_server: {}", e)))?;

        if !self.authority.domain_name.is_ascii() {
            return Err(ConfigError::Validation(
                "Domain name must be ASCII".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub domain_name: Option<String>,
    pub address: Option<Ipv4Addr>,
    pub log_level: Option<String>,
}
