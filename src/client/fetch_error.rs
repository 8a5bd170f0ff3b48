use crate::errors::AppError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    Network(String),
    Blocked(String),
    HtmlParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Blocked(msg) => write!(f, "Blocked by site: {msg}"),
            FetchError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            FetchError::UnexpectedShape(msg) => write!(f, "Unexpected page shape: {msg}"),
        }
    }
}

impl Error for FetchError {}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::Fetch(e.to_string())
    }
}
