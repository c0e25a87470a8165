//! SkyQuote - flight offer search proxy and quote builder
//!
//! The proxy (`server`) keeps travel-API and logo-API credentials on the
//! server and reshapes upstream offers; the `frontend` controllers model the
//! search, selection and profile pages on top of it.

pub mod airlines;
pub mod client;
pub mod config;
pub mod error;
pub mod frontend;
pub mod models;
pub mod output;
pub mod server;
