//! Shared CLI argument types
//!
//! Reusable argument structs flattened into commands with
//! `#[command(flatten)]`.

mod common;
mod global;

pub use common::{OutputFormat, ProxyArgs};
pub use global::GlobalOptions;
