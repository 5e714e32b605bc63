//! Response payloads of the Open Trivia Database API.
//!
//! All payloads are JSON objects returned from plain HTTP GET requests.

use std::fmt;

use serde::Deserialize;

/// Status value the trivia API attaches to every question response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    /// No response received yet, or a code the client does not know.
    #[default]
    None,
}

impl ResponseCode {
    /// Maps a numeric code from the wire.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ResponseCode::Success,
            1 => ResponseCode::NoResults,
            2 => ResponseCode::InvalidParameter,
            3 => ResponseCode::TokenNotFound,
            4 => ResponseCode::TokenEmpty,
            5 => ResponseCode::RateLimit,
            _ => ResponseCode::None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ResponseCode::Success => 0,
            ResponseCode::NoResults => 1,
            ResponseCode::InvalidParameter => 2,
            ResponseCode::TokenNotFound => 3,
            ResponseCode::TokenEmpty => 4,
            ResponseCode::RateLimit => 5,
            ResponseCode::None => -1,
        }
    }

    pub fn is_success(self) -> bool {
        self == ResponseCode::Success
    }

    pub fn name(self) -> &'static str {
        match self {
            ResponseCode::Success => "Success",
            ResponseCode::NoResults => "NoResults",
            ResponseCode::InvalidParameter => "InvalidParameter",
            ResponseCode::TokenNotFound => "TokenNotFound",
            ResponseCode::TokenEmpty => "TokenEmpty",
            ResponseCode::RateLimit => "RateLimit",
            ResponseCode::None => "None",
        }
    }

    /// Advice shown on the error screen.
    pub fn troubleshooting_tip(self) -> &'static str {
        match self {
            ResponseCode::Success => "Hey, this isn't an error. How did we get here?",
            ResponseCode::NoResults => {
                "Maybe try adjusting your question settings. The database may not contain \
                 enough questions that match your parameters."
            }
            ResponseCode::RateLimit => {
                "Too many requests in a short time. Wait a few moments before starting a new game."
            }
            ResponseCode::None => {
                "The trivia service could not be reached or sent something unexpected. \
                 Check your connection and try again."
            }
            ResponseCode::InvalidParameter
            | ResponseCode::TokenNotFound
            | ResponseCode::TokenEmpty => {
                "Something went wrong on our side while asking for questions. \
                 Try going back to the main menu and starting again."
            }
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Response Code {}: {}", self.code(), self.name())
    }
}

/// Envelope returned by the question endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResponse {
    pub response_code: i32,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

/// A question exactly as the API sends it (HTML-encoded text).
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub difficulty: String,
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

/// Envelope returned by the category endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryResponse {
    pub trivia_categories: Vec<RawCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub id: i32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_code_mapping() {
        for code in 0..=5 {
            assert_eq!(ResponseCode::from_code(code).code(), code);
        }
        assert_eq!(ResponseCode::from_code(1), ResponseCode::NoResults);
        assert_eq!(ResponseCode::from_code(5), ResponseCode::RateLimit);
        assert_eq!(ResponseCode::from_code(42), ResponseCode::None);
        assert_eq!(ResponseCode::default().code(), -1);
    }

    #[test]
    fn test_response_code_display() {
        assert_eq!(
            ResponseCode::NoResults.to_string(),
            "Response Code 1: NoResults"
        );
        assert_eq!(ResponseCode::None.to_string(), "Response Code -1: None");
    }

    #[test]
    fn test_question_response_deserialization() {
        let json = r#"{
            "response_code": 0,
            "results": [{
                "type": "boolean",
                "difficulty": "easy",
                "category": "Science: Computers",
                "question": "Linux was first created as an alternative to Windows XP.",
                "correct_answer": "False",
                "incorrect_answers": ["True"]
            }]
        }"#;
        let response: QuestionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response_code, 0);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].kind, "boolean");
        assert_eq!(response.results[0].incorrect_answers, vec!["True"]);
    }

    #[test]
    fn test_missing_results_defaults_to_empty() {
        let response: QuestionResponse =
            serde_json::from_str(r#"{"response_code": 5}"#).unwrap();
        assert_eq!(response.response_code, 5);
        assert!(response.results.is_empty());
    }
}
