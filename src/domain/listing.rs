/// A single scraped free listing, as stored in the inventory store.
/// Identity key is `url`; everything else may be refreshed on upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub url: String,
    pub title: String,
    /// Posting time as scraped, "YYYY-MM-DD HH:MM". Parsed only at
    /// projection time so a malformed value fails there, loudly.
    pub posted_at: String,
    pub neighborhood: Option<String>,
    /// Resolved during enrichment. Listings without coordinates still
    /// appear in the legend; they just get no map marker.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_urls: Vec<String>,
}

/// The flat record the view layer consumes, one per selected listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thing {
    pub url: String,
    pub image: String,
    pub place: String,
    pub title: String,
    pub time: String,
}
