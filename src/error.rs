//! Error types for SkyQuote

use thiserror::Error;

/// Result type alias for SkyQuote operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// Upstream and proxy API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication with the travel API failed: {0}")]
    Authentication(String),

    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Logo lookup is not configured")]
    LogoKeyMissing,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(
        "Amadeus client credentials not configured. Set AMADEUS_CLIENT_ID and AMADEUS_CLIENT_SECRET."
    )]
    MissingClientCredentials,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Client-local storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not determine a data directory for local storage")]
    NoHome,

    #[error("Local storage I/O error: {0}")]
    Io(String),

    #[error("Local storage database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Stored value for '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_upstream_message() {
        let err = ApiError::Upstream {
            status: 400,
            body: "INVALID FORMAT".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("INVALID FORMAT"));
    }

    #[test]
    fn test_api_error_authentication() {
        let err = ApiError::Authentication("invalid_client".to_string());
        assert!(err.to_string().contains("invalid_client"));
    }

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_config_error_missing_credentials() {
        let err = ConfigError::MissingClientCredentials;
        assert!(err.to_string().contains("AMADEUS_CLIENT_ID"));
    }

    #[test]
    fn test_store_error_corrupt() {
        let err = StoreError::Corrupt {
            key: "companyProfile".to_string(),
            reason: "expected value".to_string(),
        };
        assert!(err.to_string().contains("companyProfile"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::LogoKeyMissing.into();

        match err {
            Error::Api(ApiError::LogoKeyMissing) => (),
            _ => panic!("Expected Error::Api(ApiError::LogoKeyMissing)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
