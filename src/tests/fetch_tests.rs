use crate::client::{apply_enrichment, parse_search_page, FetchError};
use crate::tests::utils::listing;
use url::Url;

fn search_base() -> Url {
    Url::parse("https://newyork.craigslist.org/search/zip").unwrap()
}

const SEARCH_PAGE: &str = r#"
<html><body>
<ul class="rows">
  <li class="result-row">
    <p class="result-info">
      <time class="result-date" datetime="2026-08-03 18:45">Aug 3</time>
      <a class="result-title" href="https://newyork.craigslist.org/zip/1.html">Free couch</a>
      <span class="result-hood"> (Brooklyn)</span>
    </p>
  </li>
  <li class="result-row">
    <p class="result-info">
      <time class="result-date" datetime="2026-08-02 10:15">Aug 2</time>
      <a class="result-title" href="/zip/2.html">Box of books</a>
    </p>
  </li>
  <li class="result-row">
    <p class="result-info">
      <a class="result-title" href="https://newyork.craigslist.org/zip/3.html">No date row</a>
    </p>
  </li>
</ul>
</body></html>
"#;

const LISTING_PAGE: &str = r#"
<html><body>
<section class="breadcrumbs"></section>
<h1 class="postingtitle">
  <span class="postingtitletext">Free couch <small> (Park Slope)</small></span>
</h1>
<div class="gallery">
  <a class="thumb" href="https://images.craigslist.org/a.jpg">1</a>
  <a class="thumb" href="https://images.craigslist.org/b.jpg">2</a>
</div>
<div id="map" data-latitude="40.6710" data-longitude="-73.9814"></div>
</body></html>
"#;

#[test]
fn search_page_parses_result_rows() {
    let listings = parse_search_page(SEARCH_PAGE, &search_base()).unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].url, "https://newyork.craigslist.org/zip/1.html");
    assert_eq!(listings[0].title, "Free couch");
    assert_eq!(listings[0].posted_at, "2026-08-03 18:45");
    assert_eq!(listings[0].neighborhood.as_deref(), Some("Brooklyn"));

    // Second row has no hood span and a relative href.
    assert_eq!(listings[1].url, "https://newyork.craigslist.org/zip/2.html");
    assert_eq!(listings[1].neighborhood, None);
}

#[test]
fn rows_without_posting_time_are_skipped() {
    let listings = parse_search_page(SEARCH_PAGE, &search_base()).unwrap();
    assert!(listings.iter().all(|l| !l.url.ends_with("/3.html")));
}

#[test]
fn page_without_result_rows_is_unexpected_shape() {
    let result = parse_search_page("<html><body><p>nope</p></body></html>", &search_base());
    assert!(matches!(result, Err(FetchError::UnexpectedShape(_))));
}

#[test]
fn enrichment_fills_images_coordinates_and_hood() {
    let mut item = listing(
        "https://newyork.craigslist.org/zip/1.html",
        "Free couch",
        "2026-08-03 18:45",
    );
    item.neighborhood = Some("Brooklyn".into());

    apply_enrichment(&mut item, LISTING_PAGE).unwrap();

    assert_eq!(
        item.image_urls,
        vec![
            "https://images.craigslist.org/a.jpg".to_string(),
            "https://images.craigslist.org/b.jpg".to_string(),
        ]
    );
    assert_eq!(item.latitude, Some(40.6710));
    assert_eq!(item.longitude, Some(-73.9814));
    // Listing page hood is more precise than the search row's.
    assert_eq!(item.neighborhood.as_deref(), Some("Park Slope"));
}

#[test]
fn enrichment_keeps_existing_fields_when_page_is_bare() {
    let mut item = listing(
        "https://newyork.craigslist.org/zip/2.html",
        "Box of books",
        "2026-08-02 10:15",
    );
    item.neighborhood = Some("Queens".into());

    apply_enrichment(&mut item, "<html><body><p>gone</p></body></html>").unwrap();

    assert!(item.image_urls.is_empty());
    assert_eq!(item.latitude, None);
    assert_eq!(item.neighborhood.as_deref(), Some("Queens"));
}
