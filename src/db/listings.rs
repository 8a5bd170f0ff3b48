use crate::db::connection::Database;
use crate::domain::{Listing, Region};
use crate::errors::AppError;
use chrono::Utc;
use rusqlite::params;

/// Upsert a batch of scraped listings, keyed by `url`. Re-running the
/// same batch leaves the store unchanged apart from `last_seen_at`, so
/// populate is safe on every request.
pub fn save_listings(db: &Database, region: Region, listings: &[Listing]) -> Result<(), AppError> {
    let now = Utc::now().naive_utc();

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| AppError::Db(e.to_string()))?;

        for listing in listings {
            if listing.url.is_empty() {
                eprintln!("Skipping record: missing url");
                continue;
            }

            let image_urls = serde_json::to_string(&listing.image_urls)
                .map_err(|e| AppError::Db(e.to_string()))?;

            tx.execute(
                r#"
                INSERT INTO listings (
                    url, region, title, posted_at, neighborhood,
                    latitude, longitude, image_urls,
                    first_seen_at, last_seen_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                ON CONFLICT(url) DO UPDATE SET
                    region = excluded.region,
                    title = excluded.title,
                    posted_at = excluded.posted_at,
                    neighborhood = excluded.neighborhood,
                    latitude = excluded.latitude,
                    longitude = excluded.longitude,
                    image_urls = excluded.image_urls,
                    last_seen_at = excluded.last_seen_at
                "#,
                params![
                    listing.url,
                    region.slug(),
                    listing.title,
                    listing.posted_at,
                    listing.neighborhood,
                    listing.latitude,
                    listing.longitude,
                    image_urls,
                    now,
                    now,
                ],
            )
            .map_err(|e| AppError::Db(e.to_string()))?;
        }

        tx.commit().map_err(|e| AppError::Db(e.to_string()))?;
        Ok(())
    })
}

/// At most `quantity` listings for a region, newest posting first.
/// The `url` tiebreak keeps the ordering stable across calls with the
/// same store state, so the map markers and the legend stay in sync.
pub fn select_listings(
    db: &Database,
    region: Region,
    quantity: i64,
) -> Result<Vec<Listing>, AppError> {
    if quantity <= 0 {
        return Ok(Vec::new());
    }

    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT
                    url,          -- 0
                    title,        -- 1
                    posted_at,    -- 2
                    neighborhood, -- 3
                    latitude,     -- 4
                    longitude,    -- 5
                    image_urls    -- 6
                FROM listings
                WHERE region = ?1
                ORDER BY posted_at DESC, url
                LIMIT ?2
                "#,
            )
            .map_err(|e| AppError::Db(e.to_string()))?;

        let rows = stmt
            .query_map(params![region.slug(), quantity], |row| {
                Ok((
                    Listing {
                        url: row.get(0)?,
                        title: row.get(1)?,
                        posted_at: row.get(2)?,
                        neighborhood: row.get(3)?,
                        latitude: row.get(4)?,
                        longitude: row.get(5)?,
                        image_urls: Vec::new(),
                    },
                    row.get::<_, String>(6)?,
                ))
            })
            .map_err(|e| AppError::Db(e.to_string()))?;

        let mut out = Vec::new();
        for row in rows {
            let (mut listing, image_urls) = row.map_err(|e| AppError::Db(e.to_string()))?;
            listing.image_urls = serde_json::from_str(&image_urls)
                .map_err(|e| AppError::Db(format!("bad image_urls for {}: {e}", listing.url)))?;
            out.push(listing);
        }
        Ok(out)
    })
}

pub fn count_listings(db: &Database, region: Region) -> Result<i64, AppError> {
    db.with_conn(|conn| {
        conn.query_row(
            "SELECT COUNT(*) FROM listings WHERE region = ?1",
            params![region.slug()],
            |row| row.get(0),
        )
        .map_err(|e| AppError::Db(e.to_string()))
    })
}
