mod client;
mod fetch;
mod fetch_error;

pub use client::StuffClient;
pub use fetch::{apply_enrichment, parse_search_page, InventoryFetcher};
pub use fetch_error::FetchError;
