use crate::client::FetchError;
use crate::config::ProxyConfig;
use crate::domain::{Listing, Search};
use rand::Rng;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

// Listing pages are fetched back to back during enrichment; keep a
// polite gap so the site doesn't rate-limit the whole populate.
const ENRICH_DELAY_MS: u64 = 250;

/// Blocking HTTP fetcher for the upstream listing site. Retries live
/// here, inside the client layer; the acquisition pipeline above never
/// retries anything.
pub struct InventoryFetcher {
    client: Client,
}

impl InventoryFetcher {
    pub fn new(proxies: Option<&ProxyConfig>) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60));

        if let Some(cfg) = proxies {
            builder = builder
                .proxy(
                    reqwest::Proxy::http(&cfg.http)
                        .map_err(|e| FetchError::Network(e.to_string()))?,
                )
                .proxy(
                    reqwest::Proxy::https(&cfg.https)
                        .map_err(|e| FetchError::Network(e.to_string()))?,
                );
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch the search results page for a query and parse it into
    /// bare listings (url, title, posting time, rough neighborhood).
    pub fn fetch_inventory(&self, search: &Search) -> Result<Vec<Listing>, FetchError> {
        let base = Url::parse(&search.url())
            .map_err(|e| FetchError::Network(format!("bad search url: {e}")))?;
        eprintln!("Fetching inventory: {base}");

        let html = self.fetch_html(base.as_str())?;
        let listings = parse_search_page(&html, &base)?;

        eprintln!("Parsed {} listings from {base}", listings.len());
        Ok(listings)
    }

    /// Fetch the listing's own page and fill in image URLs,
    /// coordinates, and a more precise neighborhood when present.
    pub fn enrich(&self, listing: &mut Listing) -> Result<(), FetchError> {
        std::thread::sleep(Duration::from_millis(ENRICH_DELAY_MS));

        let html = self.fetch_html(&listing.url)?;
        apply_enrichment(listing, &html)?;
        Ok(())
    }

    /// GET with a small bounded retry. Backoff grows per attempt with
    /// a little jitter so concurrent populates don't sync up.
    pub fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        const MAX_ATTEMPTS: u64 = 3;
        const MAX_BACKOFF_SECS: u64 = 6;

        let mut last_err = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_fetch_html(url) {
                Ok(html) => return Ok(html),
                Err(e @ FetchError::Blocked(_)) => return Err(e),
                Err(e) => {
                    eprintln!("Fetch attempt {attempt} failed for {url}: {e}");
                    last_err = Some(e);

                    let base = std::cmp::min(2 * attempt, MAX_BACKOFF_SECS);
                    let jitter = rand::thread_rng().gen_range(0..=1);
                    std::thread::sleep(Duration::from_secs(base + jitter));
                }
            }
        }

        Err(last_err.unwrap_or_else(|| FetchError::Network("retry loop failed".into())))
    }

    fn try_fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if status.as_u16() == 403 || status.as_u16() == 429 {
            return Err(FetchError::Blocked(format!("HTTP {status} for {url}")));
        }
        if !status.is_success() {
            return Err(FetchError::Network(format!("HTTP {status} for {url}")));
        }

        resp.text().map_err(|e| FetchError::Network(e.to_string()))
    }
}

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::HtmlParse(e.to_string()))
}

/// Parse the result rows of a search page. Listing links are resolved
/// against `base` (the site serves relative hrefs on some pages). Rows
/// missing a link or a posting time are skipped rather than failing
/// the whole page.
pub fn parse_search_page(html: &str, base: &Url) -> Result<Vec<Listing>, FetchError> {
    let document = Html::parse_document(html);

    let row_sel = selector("li.result-row")?;
    let title_sel = selector("a.result-title")?;
    let date_sel = selector("time.result-date")?;
    let hood_sel = selector("span.result-hood")?;

    let mut listings = Vec::new();

    for row in document.select(&row_sel) {
        let Some(anchor) = row.select(&title_sel).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(url) = base.join(href) else {
            continue;
        };
        let title = anchor.text().collect::<String>().trim().to_string();

        let Some(posted_at) = row
            .select(&date_sel)
            .next()
            .and_then(|t| t.value().attr("datetime"))
        else {
            continue;
        };

        let neighborhood = row
            .select(&hood_sel)
            .next()
            .map(|h| trim_hood(&h.text().collect::<String>()))
            .filter(|h| !h.is_empty());

        listings.push(Listing {
            url: url.into(),
            title,
            posted_at: posted_at.to_string(),
            neighborhood,
            latitude: None,
            longitude: None,
            image_urls: Vec::new(),
        });
    }

    if listings.is_empty() && document.select(&row_sel).next().is_none() {
        // A page with zero result rows usually means the markup moved
        // out from under us, not an empty inventory.
        return Err(FetchError::UnexpectedShape(
            "no result rows found on search page".into(),
        ));
    }

    Ok(listings)
}

/// Apply listing-page details onto an already-parsed listing.
pub fn apply_enrichment(listing: &mut Listing, html: &str) -> Result<(), FetchError> {
    let document = Html::parse_document(html);

    let map_sel = selector("#map")?;
    let thumb_sel = selector("a.thumb")?;
    let hood_sel = selector(".postingtitletext small")?;

    if let Some(map) = document.select(&map_sel).next() {
        let lat = map.value().attr("data-latitude").and_then(|v| v.parse().ok());
        let lon = map.value().attr("data-longitude").and_then(|v| v.parse().ok());
        if let (Some(lat), Some(lon)) = (lat, lon) {
            listing.latitude = Some(lat);
            listing.longitude = Some(lon);
        }
    }

    let images: Vec<String> = document
        .select(&thumb_sel)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect();
    if !images.is_empty() {
        listing.image_urls = images;
    }

    if let Some(hood) = document.select(&hood_sel).next() {
        let hood = trim_hood(&hood.text().collect::<String>());
        if !hood.is_empty() {
            listing.neighborhood = Some(hood);
        }
    }

    Ok(())
}

// " (Brooklyn)" -> "Brooklyn"
fn trim_hood(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .trim()
        .to_string()
}
