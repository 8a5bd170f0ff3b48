use crate::config::ProxyConfig;
use crate::errors::AppError;
use serde::Deserialize;
use std::time::Duration;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const USER_AGENT: &str = "treasure_map/0.1 (free stuff map)";

#[derive(Debug, Deserialize)]
struct GeocodeHit {
    lat: String,
    lon: String,
}

/// Resolve a free-text address to coordinates via the Nominatim
/// search API, through the same egress policy as inventory fetches.
/// Any failure here aborts the artifact build, so everything maps to
/// ArtifactWrite.
pub fn geocode(address: &str, proxies: Option<&ProxyConfig>) -> Result<(f64, f64), AppError> {
    let mut builder = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30));

    if let Some(cfg) = proxies {
        builder = builder
            .proxy(
                reqwest::Proxy::http(&cfg.http)
                    .map_err(|e| AppError::ArtifactWrite(format!("geocoder proxy: {e}")))?,
            )
            .proxy(
                reqwest::Proxy::https(&cfg.https)
                    .map_err(|e| AppError::ArtifactWrite(format!("geocoder proxy: {e}")))?,
            );
    }

    let client = builder
        .build()
        .map_err(|e| AppError::ArtifactWrite(format!("geocoder client: {e}")))?;

    let hits: Vec<GeocodeHit> = client
        .get(NOMINATIM_URL)
        .query(&[("format", "json"), ("limit", "1"), ("q", address)])
        .send()
        .map_err(|e| AppError::ArtifactWrite(format!("geocode '{address}': {e}")))?
        .error_for_status()
        .map_err(|e| AppError::ArtifactWrite(format!("geocode '{address}': {e}")))?
        .json()
        .map_err(|e| AppError::ArtifactWrite(format!("geocode '{address}': {e}")))?;

    let hit = hits
        .first()
        .ok_or_else(|| AppError::ArtifactWrite(format!("no geocode match for '{address}'")))?;

    let lat = hit
        .lat
        .parse()
        .map_err(|e| AppError::ArtifactWrite(format!("geocode lat '{}': {e}", hit.lat)))?;
    let lon = hit
        .lon
        .parse()
        .map_err(|e| AppError::ArtifactWrite(format!("geocode lon '{}': {e}", hit.lon)))?;

    Ok((lat, lon))
}
