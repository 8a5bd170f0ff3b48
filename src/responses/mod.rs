pub mod errors;
pub mod html;

pub use errors::{error_to_response, ResultResp};
pub use html::{file_response, html_response};
