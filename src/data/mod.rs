//! Trivia API client and response mapping.

mod client;
mod loader;

use std::fmt;

pub use client::{DEFAULT_REQUEST_TIMEOUT, OpenTdbClient};
pub use loader::{
    CATEGORY_IGNORE_PREFIXES, QuestionSet, decode_categories, decode_question_set,
    parse_category_name,
};

/// Error talking to the trivia service.
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be sent or the body could not be read.
    Http(reqwest::Error),
    /// Body was not the expected JSON.
    Decode(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "Request failed: {}", e),
            ApiError::Decode(e) => write!(f, "Unexpected response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::Decode(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}
