use crate::domain::{Listing, Region};
use crate::errors::AppError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder shown in the legend for listings with no photos.
pub const NO_IMAGE: &str = "https://www.craigslist.org/images/peace.jpg";

/// Well-known artifact location for a city. The raw slug is baked into
/// the filename, so the path is fully determined by the location —
/// quantity and address never change where the artifact lands.
pub fn artifact_path(artifact_dir: &Path, city: Region) -> PathBuf {
    artifact_dir.join(format!("raw_map_{}.html", city.slug()))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[derive(Serialize)]
struct Marker {
    lat: f64,
    lon: f64,
    title: String,
    url: String,
}

/// Renders the selected listings into a self-contained Leaflet page
/// and persists it. One marker per coordinate-bearing listing; the
/// view centers on the address override when one was geocoded, else on
/// the city's canonical centroid.
pub struct Charter<'a> {
    stuffs: &'a [Listing],
    city: Region,
    zoom: u8,
    center: Option<(f64, f64)>,
}

impl<'a> Charter<'a> {
    pub fn new(stuffs: &'a [Listing], city: Region, zoom: u8) -> Self {
        Self {
            stuffs,
            city,
            zoom,
            center: None,
        }
    }

    pub fn with_center(mut self, center: (f64, f64)) -> Self {
        self.center = Some(center);
        self
    }

    /// Render the artifact document without any style overrides.
    pub fn build(&self) -> Result<String, AppError> {
        self.render(&[])
    }

    /// Render and write the artifact in one step. `css_children` is a
    /// set of (logical name, css file path) pairs whose contents are
    /// inlined into the document head so the file on disk serves
    /// standalone. Overwrites whatever artifact was there before.
    pub fn save(&self, path: &Path, css_children: &[(&str, &Path)]) -> Result<(), AppError> {
        let mut styles = Vec::new();
        for (name, css_path) in css_children {
            let css = fs::read_to_string(css_path).map_err(|e| {
                AppError::ArtifactWrite(format!("read style '{name}' ({}): {e}", css_path.display()))
            })?;
            styles.push(format!(
                "<style data-name=\"{name}\">\n{css}\n</style>"
            ));
        }

        let html = self.render(&styles)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::ArtifactWrite(format!("create {}: {e}", parent.display()))
            })?;
        }
        fs::write(path, html)
            .map_err(|e| AppError::ArtifactWrite(format!("write {}: {e}", path.display())))
    }

    fn render(&self, styles: &[String]) -> Result<String, AppError> {
        let (lat, lon) = self.center.unwrap_or_else(|| self.city.centroid());

        // The popup splices title and url into HTML; JSON escaping
        // only protects the JS context, so escape for HTML here.
        let markers: Vec<Marker> = self
            .stuffs
            .iter()
            .filter_map(|s| match (s.latitude, s.longitude) {
                (Some(lat), Some(lon)) => Some(Marker {
                    lat,
                    lon,
                    title: escape_html(&s.title),
                    url: escape_html(&s.url),
                }),
                _ => None,
            })
            .collect();

        // JSON is also valid JS, and serde handles the escaping.
        let markers_json = serde_json::to_string(&markers)
            .map_err(|e| AppError::ArtifactWrite(format!("encode markers: {e}")))?;

        let style_blocks = styles.join("\n");
        let title = self.city.display_name();
        let zoom = self.zoom;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Free stuff around {title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
{style_blocks}
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat}, {lon}], {zoom});
L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
var markers = {markers_json};
markers.forEach(function (m) {{
    L.marker([m.lat, m.lon])
        .addTo(map)
        .bindPopup('<a href="' + m.url + '">' + m.title + '</a>');
}});
</script>
</body>
</html>
"#
        ))
    }
}
