use std::fmt;

/// Supported craigslist locations. A finite enum instead of raw path
/// strings, so an unknown location is rejected at the routing edge and
/// display names come from one table instead of scattered comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    NewYork,
    WashingtonDc,
    SanFrancisco,
    Boston,
    Chicago,
    Seattle,
    LosAngeles,
    Philadelphia,
    Portland,
    Austin,
    Denver,
    Atlanta,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Region::NewYork,
        Region::WashingtonDc,
        Region::SanFrancisco,
        Region::Boston,
        Region::Chicago,
        Region::Seattle,
        Region::LosAngeles,
        Region::Philadelphia,
        Region::Portland,
        Region::Austin,
        Region::Denver,
        Region::Atlanta,
    ];

    /// The URL-valid location segment, also the value stored in the
    /// `region` column and baked into the artifact filename.
    pub fn slug(self) -> &'static str {
        match self {
            Region::NewYork => "newyork",
            Region::WashingtonDc => "washingtondc",
            Region::SanFrancisco => "sanfrancisco",
            Region::Boston => "boston",
            Region::Chicago => "chicago",
            Region::Seattle => "seattle",
            Region::LosAngeles => "losangeles",
            Region::Philadelphia => "philadelphia",
            Region::Portland => "portland",
            Region::Austin => "austin",
            Region::Denver => "denver",
            Region::Atlanta => "atlanta",
        }
    }

    /// User-friendly city name for the legend and page titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Region::NewYork => "New York",
            Region::WashingtonDc => "Washington D.C.",
            Region::SanFrancisco => "San Francisco",
            Region::Boston => "Boston",
            Region::Chicago => "Chicago",
            Region::Seattle => "Seattle",
            Region::LosAngeles => "Los Angeles",
            Region::Philadelphia => "Philadelphia",
            Region::Portland => "Portland",
            Region::Austin => "Austin",
            Region::Denver => "Denver",
            Region::Atlanta => "Atlanta",
        }
    }

    /// Craigslist site subdomain. Mostly the slug, but not always
    /// (the bay area site covers San Francisco).
    pub fn site(self) -> &'static str {
        match self {
            Region::SanFrancisco => "sfbay",
            other => other.slug(),
        }
    }

    /// Canonical city centroid the map centers on when no address
    /// override is supplied.
    pub fn centroid(self) -> (f64, f64) {
        match self {
            Region::NewYork => (40.7128, -74.0060),
            Region::WashingtonDc => (38.9072, -77.0369),
            Region::SanFrancisco => (37.7749, -122.4194),
            Region::Boston => (42.3601, -71.0589),
            Region::Chicago => (41.8781, -87.6298),
            Region::Seattle => (47.6062, -122.3321),
            Region::LosAngeles => (34.0522, -118.2437),
            Region::Philadelphia => (39.9526, -75.1652),
            Region::Portland => (45.5152, -122.6784),
            Region::Austin => (30.2672, -97.7431),
            Region::Denver => (39.7392, -104.9903),
            Region::Atlanta => (33.7490, -84.3880),
        }
    }

    pub fn from_slug(s: &str) -> Option<Region> {
        Region::ALL.iter().copied().find(|r| r.slug() == s)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Listing category. The acquisition pipeline only ever uses `Free`,
/// but the search URL scheme is category-generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Free,
}

impl Category {
    /// Craigslist search path code.
    pub fn code(self) -> &'static str {
        match self {
            Category::Free => "zip",
        }
    }
}

/// Immutable (region, category) pair selecting which slice of the
/// upstream inventory gets materialized into the local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Search {
    pub region: Region,
    pub category: Category,
}

impl Search {
    pub fn new(region: Region, category: Category) -> Self {
        Self { region, category }
    }

    pub fn url(&self) -> String {
        format!(
            "https://{}.craigslist.org/search/{}",
            self.region.site(),
            self.category.code()
        )
    }
}
