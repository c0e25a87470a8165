//! Client-side controllers
//!
//! Typed counterparts of the browser pages: the search controller renders
//! results and owns the last offer list, the selection controller turns
//! checked options into a quote, and the profile editor keeps the company
//! letterhead in local storage. The CLI drives them against a running proxy.

pub mod backend;
pub mod html;
#[cfg(test)]
pub mod mock;
pub mod profile;
pub mod search;
pub mod selection;
pub mod state;
pub mod storage;

pub use backend::{DEFAULT_PROXY_URL, ProxyBackend, SearchBackend};
pub use profile::{CompanyProfile, LogoUpload, PROFILE_KEY, ProfileEditor};
pub use search::{OfferCard, ResultsView, SearchController, SearchForm, Suggestion};
pub use selection::{
    Clipboard, DialogClick, FileClipboard, MemoryClipboard, SelectionController,
    SelectionDialog, SelectionSummary,
};
pub use state::{LastOffers, Selection};
pub use storage::{LocalStore, MemoryStore, SqliteStore};
