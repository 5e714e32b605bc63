//! HTTP client for the Open Trivia Database.

use std::time::Duration;

use log::{debug, info};

use crate::models::{GameSettings, TriviaCategory};
use crate::protocol::{categories_url, question_set_url};

use super::loader::{QuestionSet, decode_categories, decode_question_set};
use super::ApiError;

/// Default limit for a single request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches questions and categories from a trivia service.
#[derive(Debug, Clone)]
pub struct OpenTdbClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenTdbClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Question set URL for `settings` on this client's service.
    pub fn question_set_url(&self, settings: &GameSettings) -> String {
        question_set_url(&self.base_url, settings)
    }

    /// Fetch and decode the question set at `url`.
    pub async fn get_question_set(&self, url: &str) -> Result<QuestionSet, ApiError> {
        let json = self.retrieve_json(url).await?;
        let set = decode_question_set(&json)?;
        info!(
            "fetched {} questions ({})",
            set.questions.len(),
            set.response_code
        );
        Ok(set)
    }

    /// Fetch every category, sorted by display name.
    pub async fn get_categories(&self) -> Result<Vec<TriviaCategory>, ApiError> {
        let json = self.retrieve_json(&categories_url(&self.base_url)).await?;
        let categories = decode_categories(&json)?;
        info!("fetched {} categories", categories.len());
        Ok(categories)
    }

    async fn retrieve_json(&self, url: &str) -> Result<String, ApiError> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        Ok(response.text().await?)
    }
}
