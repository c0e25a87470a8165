//! Upstream API clients
//!
//! [`AmadeusClient`] talks to the travel-data API behind a [`TokenCache`];
//! [`LogoDevClient`] fetches airline logos with a server-held key.

pub mod amadeus;
pub mod api;
pub mod logo;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod token;

pub use amadeus::{AmadeusClient, ClientCredentialsGrant};
pub use api::{CredentialExchange, LogoApi, TravelApi};
pub use logo::LogoDevClient;
#[cfg(test)]
pub use mock::{MockLogoClient, MockTravelClient};
pub use token::{Credential, TokenCache};
