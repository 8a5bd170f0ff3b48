use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}

/// Raw bytes with an explicit content type; used for the persisted
/// map artifact and files under static/.
pub fn file_response(bytes: Vec<u8>, content_type: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(Body::new(bytes))
        .unwrap();

    Ok(resp)
}
