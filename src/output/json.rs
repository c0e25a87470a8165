//! JSON output envelope
//!
//! Every `--format json` result is wrapped as `{data, meta}` so scripts can
//! tell which build produced it and when.

use chrono::Utc;
use serde::Serialize;

/// `{data, meta}` wrapper
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 time the output was produced
    pub timestamp: String,

    /// CLI version
    pub version: &'static str,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Offer, SearchResponse};

    #[test]
    fn test_envelope_metadata() {
        let output = JsonOutput::new(vec!["GRU", "LIS"]);

        assert_eq!(output.data, vec!["GRU", "LIS"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_offers() {
        let response = SearchResponse::offers(vec![Offer {
            price: "812.40".to_string(),
            currency: "USD".to_string(),
            duration: "PT13H35M".to_string(),
            stops: 0,
            flights: vec![],
        }]);

        let json: serde_json::Value =
            serde_json::from_str(&format_json(&response).unwrap()).unwrap();

        assert_eq!(json["data"]["offers"][0]["price"], "812.40");
        assert!(json["data"].get("error").is_none());
        assert!(json["meta"]["timestamp"].is_string());
    }

    #[test]
    fn test_format_empty_list() {
        let items: Vec<String> = vec![];
        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\": []"));
    }
}
