use crate::client::StuffClient;
use crate::db::connection::Database;
use crate::db::init_store;
use crate::db::listings::{count_listings, save_listings, select_listings};
use crate::domain::{Category, Region, Search};
use crate::tests::utils::{listing, make_ctx};
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn setup_is_idempotent() {
    let ctx = make_ctx();

    // make_ctx already ran setup once; two more must be harmless.
    init_store(&ctx.db).expect("second setup failed");
    init_store(&ctx.db).expect("third setup failed");
}

#[test]
fn client_setup_creates_store_and_is_idempotent() {
    let path = std::env::temp_dir().join(format!(
        "treasure_client_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    let client = StuffClient::new(
        db.clone(),
        Search::new(Region::NewYork, Category::Free),
        None,
    );
    client.setup().expect("first setup failed");
    client.setup().expect("repeated setup failed");

    // The store is usable right after setup through the handle.
    let batch = vec![listing("https://x/1", "couch", "2026-08-01 10:00")];
    save_listings(&db, Region::NewYork, &batch).unwrap();
    assert_eq!(count_listings(&db, Region::NewYork).unwrap(), 1);
}

#[test]
fn populate_upserts_by_url() {
    let ctx = make_ctx();

    let first = vec![listing("https://x/1", "old couch", "2026-08-01 10:00")];
    save_listings(&ctx.db, Region::NewYork, &first).unwrap();

    // Same url again, refreshed title: still one row, new title wins.
    let second = vec![listing("https://x/1", "free couch", "2026-08-01 10:00")];
    save_listings(&ctx.db, Region::NewYork, &second).unwrap();

    assert_eq!(count_listings(&ctx.db, Region::NewYork).unwrap(), 1);

    let stored = select_listings(&ctx.db, Region::NewYork, 10).unwrap();
    assert_eq!(stored[0].title, "free couch");
}

#[test]
fn repeated_populate_leaves_store_identical() {
    let ctx = make_ctx();

    let batch = vec![
        listing("https://x/1", "couch", "2026-08-01 10:00"),
        listing("https://x/2", "books", "2026-08-02 11:30"),
    ];
    save_listings(&ctx.db, Region::NewYork, &batch).unwrap();
    let before = select_listings(&ctx.db, Region::NewYork, 10).unwrap();

    save_listings(&ctx.db, Region::NewYork, &batch).unwrap();
    let after = select_listings(&ctx.db, Region::NewYork, 10).unwrap();

    assert_eq!(before, after);
}

#[test]
fn select_orders_newest_first() {
    let ctx = make_ctx();

    let batch = vec![
        listing("https://x/old", "old", "2026-08-01 09:00"),
        listing("https://x/new", "new", "2026-08-03 18:45"),
        listing("https://x/mid", "mid", "2026-08-02 12:00"),
    ];
    save_listings(&ctx.db, Region::NewYork, &batch).unwrap();

    // Asks for 5, store holds 3: exactly 3 back, newest first.
    let got = select_listings(&ctx.db, Region::NewYork, 5).unwrap();
    let titles: Vec<_> = got.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["new", "mid", "old"]);
}

#[test]
fn select_zero_or_negative_quantity_is_empty() {
    let ctx = make_ctx();

    let batch = vec![listing("https://x/1", "couch", "2026-08-01 10:00")];
    save_listings(&ctx.db, Region::NewYork, &batch).unwrap();

    assert!(select_listings(&ctx.db, Region::NewYork, 0).unwrap().is_empty());
    assert!(select_listings(&ctx.db, Region::NewYork, -3).unwrap().is_empty());
}

#[test]
fn select_caps_at_quantity() {
    let ctx = make_ctx();

    let batch = vec![
        listing("https://x/1", "a", "2026-08-01 09:00"),
        listing("https://x/2", "b", "2026-08-02 09:00"),
        listing("https://x/3", "c", "2026-08-03 09:00"),
    ];
    save_listings(&ctx.db, Region::NewYork, &batch).unwrap();

    let got = select_listings(&ctx.db, Region::NewYork, 2).unwrap();
    assert_eq!(got.len(), 2);
    assert_eq!(got[0].title, "c");
}

#[test]
fn regions_do_not_leak_into_each_other() {
    let ctx = make_ctx();

    let ny = vec![listing("https://x/ny", "ny couch", "2026-08-01 10:00")];
    save_listings(&ctx.db, Region::NewYork, &ny).unwrap();

    assert!(select_listings(&ctx.db, Region::Boston, 10).unwrap().is_empty());
}

#[test]
fn image_urls_round_trip_through_store() {
    let ctx = make_ctx();

    let mut item = listing("https://x/1", "couch", "2026-08-01 10:00");
    item.image_urls = vec!["https://img/1.jpg".into(), "https://img/2.jpg".into()];
    item.neighborhood = Some("Brooklyn".into());
    item.latitude = Some(40.65);
    item.longitude = Some(-73.95);

    save_listings(&ctx.db, Region::NewYork, &[item.clone()]).unwrap();

    let got = select_listings(&ctx.db, Region::NewYork, 1).unwrap();
    assert_eq!(got[0], item);
}
