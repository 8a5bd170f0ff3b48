use crate::errors::AppError;
use crate::templates::pages::not_found_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, AppError>;

/// Map an AppError onto a status. Every pipeline failure stays
/// distinguishable in the body; none collapse into an empty page.
pub fn error_to_response(err: AppError) -> Response {
    match err {
        AppError::NotFound => ResponseBuilder::new()
            .status(404)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(Body::from(not_found_page().into_string()))
            .unwrap(),
        AppError::BadRequest(msg) => html_error_response(400, &msg),
        AppError::Fetch(msg) => html_error_response(502, &msg),
        AppError::StoreInit(msg)
        | AppError::ArtifactWrite(msg)
        | AppError::Projection(msg)
        | AppError::Db(msg) => html_error_response(500, &msg),
    }
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let html = format!(
        "<!DOCTYPE html>
        <html lang=\"en\">
        <head><meta charset=\"utf-8\"><title>Error {status}</title></head>
        <body>
            <h1>Error {status}</h1>
            <p>{message}</p>
        </body>
        </html>"
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap()
}
