pub mod listing;
pub mod search;

pub use listing::{Listing, Thing};
pub use search::{Category, Region, Search};
