use crate::config::{AppConfig, Context};
use crate::db::init_store;
use crate::domain::Listing;
use std::time::{SystemTime, UNIX_EPOCH};

fn nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

/// Fresh context with a temp-file store (already set up) and a temp
/// artifact directory, unique per call so tests don't collide.
pub fn make_ctx() -> Context {
    let n = nanos();
    let db_path = std::env::temp_dir().join(format!("treasure_test_{n}.sqlite"));
    let artifact_dir = std::env::temp_dir().join(format!("treasure_artifacts_{n}"));

    let config = AppConfig {
        db_path: db_path.to_string_lossy().into_owned(),
        proxy: None,
        artifact_dir,
        // cargo test runs from the crate root, where the shipped
        // static assets live.
        static_dir: "static".into(),
        addr: "127.0.0.1:0".into(),
    };

    let ctx = Context::new(config);
    init_store(&ctx.db).expect("store setup failed");
    std::fs::create_dir_all(&ctx.config.artifact_dir).expect("artifact dir failed");
    ctx
}

/// Bare listing with the fields most tests care about.
pub fn listing(url: &str, title: &str, posted_at: &str) -> Listing {
    Listing {
        url: url.into(),
        title: title.into(),
        posted_at: posted_at.into(),
        neighborhood: None,
        latitude: None,
        longitude: None,
        image_urls: Vec::new(),
    }
}
