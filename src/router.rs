use crate::config::Context;
use crate::domain::Region;
use crate::errors::AppError;
use crate::maps::artifact_path;
use crate::pipeline::acquire;
use crate::responses::{file_response, html_response, ResultResp};
use crate::templates::pages;
use astra::Request;
use std::collections::HashMap;
use std::fs;
use std::io::Read;

const DEFAULT_QUANTITY: i64 = 30;
const ADDRESS_QUANTITY: i64 = 50;

pub fn handle(req: Request, ctx: &Context) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => html_response(pages::home_page()),
        ("GET", ["cities"]) => html_response(pages::cities_page()),
        ("GET", ["favicon.ico"]) => serve_static(&["ico", "favicon.svg"], ctx),
        ("GET", ["static", rest @ ..]) => serve_static(rest, ctx),

        ("POST", ["address"]) => search_address(req, ctx),

        ("GET", [location]) => {
            let location = parse_location(location)?;
            let things = acquire(ctx, location, DEFAULT_QUANTITY, None)?;
            html_response(pages::view_page(location, &things))
        }
        ("GET", [location, "map"]) => {
            serve_map(ctx, parse_location(location)?, DEFAULT_QUANTITY, None)
        }
        ("GET", [location, "map", "raw"]) => serve_artifact(ctx, parse_location(location)?),
        ("GET", [location, "map", quantity]) => {
            let location = parse_location(location)?;
            let quantity = quantity
                .parse()
                .map_err(|_| AppError::BadRequest(format!("invalid quantity '{quantity}'")))?;
            serve_map(ctx, location, quantity, None)
        }

        _ => Err(AppError::NotFound),
    }
}

fn parse_location(slug: &str) -> Result<Region, AppError> {
    Region::from_slug(slug).ok_or(AppError::NotFound)
}

/// Run the pipeline and render the map page. The page embeds the
/// artifact the pipeline just persisted; it never re-renders the map.
fn serve_map(
    ctx: &Context,
    location: Region,
    quantity: i64,
    address: Option<&str>,
) -> ResultResp {
    let things = acquire(ctx, location, quantity, address)?;
    html_response(pages::map_page(location, &things))
}

/// Serve the persisted map artifact without regeneration. A location
/// that was never acquired has no artifact yet, which reads as 404.
fn serve_artifact(ctx: &Context, location: Region) -> ResultResp {
    let path = artifact_path(&ctx.config.artifact_dir, location);
    let bytes = fs::read(&path).map_err(|_| AppError::NotFound)?;
    file_response(bytes, "text/html; charset=utf-8")
}

fn search_address(mut req: Request, ctx: &Context) -> ResultResp {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| AppError::BadRequest(format!("unreadable body: {e}")))?;

    let form = parse_form(&body);
    let location = form
        .get("location")
        .map(String::as_str)
        .ok_or_else(|| AppError::BadRequest("missing 'location' field".into()))?;
    let address = form
        .get("address")
        .map(String::as_str)
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("missing 'address' field".into()))?;

    let location = parse_location(location)?;
    serve_map(ctx, location, ADDRESS_QUANTITY, Some(address))
}

fn serve_static(rest: &[&str], ctx: &Context) -> ResultResp {
    // No parent traversal out of the static root.
    if rest.is_empty() || rest.iter().any(|s| s.is_empty() || *s == "..") {
        return Err(AppError::NotFound);
    }

    let mut path = ctx.config.static_dir.clone();
    for seg in rest {
        path.push(seg);
    }

    let bytes = fs::read(&path).map_err(|_| AppError::NotFound)?;
    file_response(bytes, content_type_for(&path))
}

fn content_type_for(path: &std::path::Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("ico") => "image/x-icon",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("html") => "text/html; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Parse an application/x-www-form-urlencoded body.
pub fn parse_form(body: &[u8]) -> HashMap<String, String> {
    let mut map = HashMap::new();

    let body = String::from_utf8_lossy(body);
    for pair in body.split('&') {
        let mut parts = pair.splitn(2, '=');
        if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
            map.insert(form_decode(k), form_decode(v));
        }
    }

    map
}

fn form_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap_or("00");
                out.push(u8::from_str_radix(hex, 16).unwrap_or(b'%'));
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}
