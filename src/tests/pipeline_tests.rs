use crate::config::expand_proxy;
use crate::domain::Region;
use crate::errors::AppError;
use crate::maps::{artifact_path, NO_IMAGE};
use crate::pipeline::{acquire, project, style_overrides_path, MAX_QUANTITY};
use crate::tests::utils::{listing, make_ctx};
use std::path::Path;

#[test]
fn projection_is_deterministic() {
    let mut item = listing("https://x/1", "free couch", "2026-08-03 18:45");
    item.neighborhood = Some("Brooklyn".into());
    item.image_urls = vec!["https://img/1.jpg".into()];

    let a = project(&item, Region::NewYork).unwrap();
    let b = project(&item, Region::NewYork).unwrap();
    assert_eq!(a, b);

    assert_eq!(a.url, "https://x/1");
    assert_eq!(a.image, "https://img/1.jpg");
    assert_eq!(a.place, "Brooklyn");
    assert_eq!(a.title, "free couch");
}

#[test]
fn projection_falls_back_to_placeholder_image() {
    let item = listing("https://x/1", "couch", "2026-08-03 18:45");

    let thing = project(&item, Region::NewYork).unwrap();
    assert_eq!(thing.image, NO_IMAGE);
}

#[test]
fn projection_place_falls_back_to_location() {
    let mut item = listing("https://x/1", "couch", "2026-08-03 18:45");

    let thing = project(&item, Region::SanFrancisco).unwrap();
    assert_eq!(thing.place, "San Francisco");

    // An empty neighborhood string counts as absent too.
    item.neighborhood = Some(String::new());
    let thing = project(&item, Region::SanFrancisco).unwrap();
    assert_eq!(thing.place, "San Francisco");
}

#[test]
fn projection_time_has_no_leading_zeros() {
    // 2026-03-07 is a Saturday.
    let item = listing("https://x/1", "couch", "2026-03-07 09:05");

    let thing = project(&item, Region::NewYork).unwrap();
    assert_eq!(thing.time, "9:5 Sat 07/03/2026");
}

#[test]
fn projection_rejects_malformed_timestamp() {
    let item = listing("https://x/1", "couch", "yesterday-ish");

    match project(&item, Region::NewYork) {
        Err(AppError::Projection(_)) => {}
        other => panic!("expected Projection error, got {other:?}"),
    }
}

#[test]
fn artifact_path_depends_only_on_location() {
    let dir = Path::new("/tmp/artifacts");

    // No quantity or address in sight: the path is fully determined
    // by the location slug.
    let path = artifact_path(dir, Region::SanFrancisco);
    assert_eq!(path, dir.join("raw_map_sanfrancisco.html"));
    assert_eq!(path, artifact_path(dir, Region::SanFrancisco));
}

#[test]
fn style_overrides_follow_configured_static_root() {
    let mut ctx = make_ctx();
    ctx.config.static_dir = Path::new("/srv/treasure/static").to_path_buf();

    // Resolved against the configured root, not the process cwd.
    assert_eq!(
        style_overrides_path(&ctx.config),
        Path::new("/srv/treasure/static/css/style.css")
    );
}

#[test]
fn proxy_host_expands_to_both_schemes() {
    let cfg = expand_proxy("proxy.local:8080");
    assert_eq!(cfg.http, "http://proxy.local:8080");
    assert_eq!(cfg.https, "https://proxy.local:8080");
}

#[test]
fn acquire_rejects_quantity_over_cap() {
    let ctx = make_ctx();

    // Validation happens before any fetch, so this must fail fast
    // without touching the network.
    match acquire(&ctx, Region::NewYork, MAX_QUANTITY + 1, None) {
        Err(AppError::BadRequest(_)) => {}
        other => panic!("expected BadRequest, got {other:?}"),
    }
}
