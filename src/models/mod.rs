//! Domain models shared by the proxy, the frontend controllers and the CLI

mod offer;
mod search;

pub use offer::{Offer, SearchResponse, Segment, reshape_offers};
pub use search::{ADULTS, CURRENCY_CODE, MAX_RESULTS, SearchRequest};
