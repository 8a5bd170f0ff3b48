use crate::client::StuffClient;
use crate::config::{AppConfig, Context};
use crate::domain::{Category, Listing, Region, Search, Thing};
use crate::errors::AppError;
use crate::maps::{artifact_path, geocode, Charter, NO_IMAGE};
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Hard cap on the caller-supplied quantity. Callers asking for more
/// than this get a 400, not an unbounded store scan.
pub const MAX_QUANTITY: i64 = 100;

const MAP_ZOOM: u8 = 12;
const TIME_FORMAT_IN: &str = "%Y-%m-%d %H:%M";
// No leading zero on hour or minute, per the view's legend format.
const TIME_FORMAT_OUT: &str = "%-H:%-M %a %d/%m/%Y";

/// Stylesheet inlined into the map artifact, resolved against the
/// configured static root so acquisition works regardless of the
/// process working directory.
pub fn style_overrides_path(config: &AppConfig) -> PathBuf {
    config.static_dir.join("css").join("style.css")
}

/// Run the full listing-acquisition-and-map-caching pipeline for one
/// request: populate the store for the location, select a bounded
/// newest-first slice, render and persist the map artifact, and
/// project the slice into display records.
///
/// Populate runs on every call with no freshness check — the dominant
/// cost, and a known simplification rather than a bug. All-or-nothing:
/// any step failing aborts the call with no partial results.
pub fn acquire(
    ctx: &Context,
    location: Region,
    quantity: i64,
    address: Option<&str>,
) -> Result<Vec<Thing>, AppError> {
    if quantity > MAX_QUANTITY {
        return Err(AppError::BadRequest(format!(
            "quantity {quantity} exceeds maximum of {MAX_QUANTITY}"
        )));
    }

    let search = Search::new(location, Category::Free);
    let client = StuffClient::new(ctx.db.clone(), search, ctx.config.proxy.clone());

    client.populate(true)?;
    let stuffs = client.select(location, quantity)?;

    let center = match address {
        Some(addr) => Some(geocode(addr, ctx.config.proxy.as_ref())?),
        None => None,
    };

    let mut charter = Charter::new(&stuffs, location, MAP_ZOOM);
    if let Some(center) = center {
        charter = charter.with_center(center);
    }

    let path = artifact_path(&ctx.config.artifact_dir, location);
    let style = style_overrides_path(&ctx.config);
    charter.save(&path, &[("bootstrap", style.as_path())])?;

    stuffs.iter().map(|s| project(s, location)).collect()
}

/// Project one listing into its display record. Pure: same listing and
/// fallback location always give the same record.
pub fn project(stuff: &Listing, fallback_location: Region) -> Result<Thing, AppError> {
    let image = stuff
        .image_urls
        .first()
        .cloned()
        .unwrap_or_else(|| NO_IMAGE.to_string());

    let place = match stuff.neighborhood.as_deref() {
        Some(hood) if !hood.is_empty() => hood.to_string(),
        _ => fallback_location.display_name().to_string(),
    };

    let time = NaiveDateTime::parse_from_str(&stuff.posted_at, TIME_FORMAT_IN)
        .map_err(|e| {
            AppError::Projection(format!("bad timestamp '{}' for {}: {e}", stuff.posted_at, stuff.url))
        })?
        .format(TIME_FORMAT_OUT)
        .to_string();

    Ok(Thing {
        url: stuff.url.clone(),
        image,
        place,
        title: stuff.title.clone(),
        time,
    })
}
