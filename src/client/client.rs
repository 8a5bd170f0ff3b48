use crate::client::InventoryFetcher;
use crate::config::ProxyConfig;
use crate::db::connection::Database;
use crate::db::listings::{save_listings, select_listings};
use crate::db::init_store;
use crate::domain::{Listing, Region, Search};
use crate::errors::AppError;

/// Handle binding an inventory store to one (region, category) search
/// plus the process-wide egress policy. Construction does no I/O, so
/// building one per request is cheap; handles with the same store path
/// and policy are interchangeable but share no connection.
pub struct StuffClient {
    db: Database,
    search: Search,
    proxies: Option<ProxyConfig>,
}

impl StuffClient {
    pub fn new(db: Database, search: Search, proxies: Option<ProxyConfig>) -> Self {
        Self {
            db,
            search,
            proxies,
        }
    }

    /// Create the store structures if absent. Idempotent; normally run
    /// once at startup rather than per request.
    pub fn setup(&self) -> Result<(), AppError> {
        init_store(&self.db)
    }

    /// Fetch the current upstream inventory for this handle's search
    /// and merge it into the store (upsert by url). With `enrich`,
    /// each listing's page is also fetched for images, neighborhood,
    /// and coordinates. Runs on every request by design; upstream
    /// failure is surfaced, never papered over with stale data.
    pub fn populate(&self, enrich: bool) -> Result<(), AppError> {
        let fetcher = InventoryFetcher::new(self.proxies.as_ref())?;
        let mut listings = fetcher.fetch_inventory(&self.search)?;

        if enrich {
            for listing in &mut listings {
                fetcher.enrich(listing)?;
            }
        }

        save_listings(&self.db, self.search.region, &listings)
    }

    /// At most `quantity` listings for `location`, newest first.
    pub fn select(&self, location: Region, quantity: i64) -> Result<Vec<Listing>, AppError> {
        select_listings(&self.db, location, quantity)
    }
}
