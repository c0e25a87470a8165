//! Airline reference directory
//!
//! One table maps carrier codes to display names and logo domains. It is
//! embedded from `static/airlines.json`, parsed once, and served verbatim at
//! `GET /airlines.json` so the browser page renders from the same data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Raw JSON document shipped with the binary
pub const AIRLINES_JSON: &str = include_str!("../static/airlines.json");

/// Display data for one carrier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineInfo {
    pub name: String,

    /// Company domain used for logo lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Carrier code → name/domain lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirlineDirectory {
    entries: BTreeMap<String, AirlineInfo>,
}

impl AirlineDirectory {
    /// Parse the embedded directory
    pub fn embedded() -> Result<Self> {
        Self::from_json(AIRLINES_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }

    pub fn get(&self, code: &str) -> Option<&AirlineInfo> {
        self.entries.get(code)
    }

    /// Display name, falling back to the code itself
    pub fn name_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).map(|a| a.name.as_str()).unwrap_or(code)
    }

    pub fn domain_for(&self, code: &str) -> Option<&str> {
        self.get(code).and_then(|a| a.domain.as_deref())
    }

    /// Proxy-relative logo URL, when the carrier's domain is known
    pub fn logo_path(&self, code: &str) -> Option<String> {
        self.domain_for(code).map(|d| format!("/logo/{}", d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
