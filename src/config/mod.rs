//! Configuration management for SkyQuote
//!
//! Settings come from an optional YAML file (`~/.skyquote/config.yaml` by
//! default) and are then overridden by environment variables or command-line
//! flags through [`ConfigOverrides`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Amadeus self-service API host (test environment)
pub const DEFAULT_AMADEUS_HOST: &str = "https://test.api.amadeus.com";

/// Logo lookup API host
pub const DEFAULT_LOGO_HOST: &str = "https://api.logo.dev";

/// Port the proxy listens on when nothing else is configured
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Travel-data API credentials
    #[serde(default)]
    pub amadeus: AmadeusConfig,

    /// Logo lookup API settings
    #[serde(default)]
    pub logo: LogoConfig,

    /// Listening settings for `skyquote serve`
    #[serde(default)]
    pub server: ServerConfig,
}

/// Travel-data API section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmadeusConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Override for the API host (used by tests and the production environment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
}

/// Logo lookup section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoConfig {
    /// Server-held key; never sent to browsers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
}

/// Server section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// Client id/secret pair for the client-credentials grant
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Values supplied through flags or environment variables.
///
/// Anything set here wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub amadeus_host: Option<String>,
    pub logo_key: Option<String>,
    pub logo_host: Option<String>,
    pub port: Option<u16>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".skyquote").join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, treating a missing file as an empty config
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Apply flag/environment overrides on top of the file values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(id) = &overrides.client_id {
            self.amadeus.client_id = Some(id.clone());
        }
        if let Some(secret) = &overrides.client_secret {
            self.amadeus.client_secret = Some(secret.clone());
        }
        if let Some(host) = &overrides.amadeus_host {
            self.amadeus.api_host = Some(host.clone());
        }
        if let Some(key) = &overrides.logo_key {
            self.logo.api_key = Some(key.clone());
        }
        if let Some(host) = &overrides.logo_host {
            self.logo.api_host = Some(host.clone());
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
    }

    /// Resolved travel API host
    pub fn amadeus_host(&self) -> &str {
        self.amadeus
            .api_host
            .as_deref()
            .unwrap_or(DEFAULT_AMADEUS_HOST)
    }

    /// Resolved logo API host
    pub fn logo_host(&self) -> &str {
        self.logo.api_host.as_deref().unwrap_or(DEFAULT_LOGO_HOST)
    }

    /// Validate that the upstream client credentials are present
    pub fn client_credentials(&self) -> Result<ClientCredentials> {
        match (&self.amadeus.client_id, &self.amadeus.client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Ok(ClientCredentials {
                    client_id: id.clone(),
                    client_secret: secret.clone(),
                })
            }
            _ => Err(ConfigError::MissingClientCredentials.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.amadeus.client_id.is_none());
        assert!(config.logo.api_key.is_none());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.amadeus_host(), DEFAULT_AMADEUS_HOST);
        assert_eq!(config.logo_host(), DEFAULT_LOGO_HOST);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");

        let config = Config::load_at(path.to_str()).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_load_from_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "amadeus:\n  client_id: id-1\n  client_secret: s3cret\nlogo:\n  api_key: pk_abc\nserver:\n  port: 8080\n",
        )
        .unwrap();

        let config = Config::load_at(path.to_str()).unwrap();
        assert_eq!(config.amadeus.client_id.as_deref(), Some("id-1"));
        assert_eq!(config.logo.api_key.as_deref(), Some("pk_abc"));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut config = Config::default();
        config.amadeus.client_id = Some("from-file".to_string());

        config.apply_overrides(&ConfigOverrides {
            client_id: Some("from-env".to_string()),
            port: Some(4000),
            ..Default::default()
        });

        assert_eq!(config.amadeus.client_id.as_deref(), Some("from-env"));
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_client_credentials_required() {
        let mut config = Config::default();
        assert!(config.client_credentials().is_err());

        config.amadeus.client_id = Some("id".to_string());
        config.amadeus.client_secret = Some(String::new());
        assert!(config.client_credentials().is_err());

        config.amadeus.client_secret = Some("secret".to_string());
        let creds = config.client_credentials().unwrap();
        assert_eq!(creds.client_id, "id");
        assert_eq!(creds.client_secret, "secret");
    }
}
