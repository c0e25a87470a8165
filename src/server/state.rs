//! Shared application state for request handlers

use std::sync::Arc;

use crate::airlines::AirlineDirectory;
use crate::client::{AmadeusClient, LogoApi, LogoDevClient, TravelApi};
use crate::config::Config;
use crate::error::Result;

/// Handles injected into every handler.
///
/// The travel client owns the token cache, so the bearer credential is shared
/// across requests without any ambient global.
#[derive(Clone)]
pub struct AppState {
    pub travel: Arc<dyn TravelApi>,
    pub logos: Arc<dyn LogoApi>,
    pub airlines: Arc<AirlineDirectory>,
}

impl AppState {
    pub fn new(
        travel: Arc<dyn TravelApi>,
        logos: Arc<dyn LogoApi>,
        airlines: Arc<AirlineDirectory>,
    ) -> Self {
        Self {
            travel,
            logos,
            airlines,
        }
    }

    /// Build real upstream clients from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let credentials = config.client_credentials()?;
        let travel = AmadeusClient::with_host(credentials, Some(config.amadeus_host().to_string()))?;

        let logos = LogoDevClient::new(
            config.logo.api_key.clone(),
            Some(config.logo_host().to_string()),
        )?;
        if !logos.has_key() {
            log::warn!("LOGO_DEV_KEY not configured, /logo requests will return 404");
        }

        Ok(Self::new(
            Arc::new(travel),
            Arc::new(logos),
            Arc::new(AirlineDirectory::embedded()?),
        ))
    }
}
