//! Request URL construction.

use log::debug;

use crate::models::GameSettings;

/// Public Open Trivia Database host.
pub const DEFAULT_API_URL: &str = "https://opentdb.com";

const QUESTIONS_PATH: &str = "/api.php";
const CATEGORIES_PATH: &str = "/api_category.php";

/// Builds the question set URL for the public trivia service.
pub fn form_url(settings: &GameSettings) -> String {
    question_set_url(DEFAULT_API_URL, settings)
}

/// Builds the question set URL against `base`.
///
/// Category, difficulty and type are omitted when the setting is its
/// "any"/"mixed" sentinel.
pub fn question_set_url(base: &str, settings: &GameSettings) -> String {
    let mut url = format!(
        "{}{}?amount={}",
        base.trim_end_matches('/'),
        QUESTIONS_PATH,
        settings.num_questions
    );

    if !settings.category.is_any() {
        url.push_str(&format!("&category={}", settings.category.id));
    }
    if let Some(difficulty) = settings.difficulty.api_keyword() {
        url.push_str(&format!("&difficulty={}", difficulty));
    }
    if let Some(kind) = settings.question_type.api_keyword() {
        url.push_str(&format!("&type={}", kind));
    }

    debug!("question set url: {}", url);
    url
}

pub fn categories_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), CATEGORIES_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, QuestionType, TriviaCategory};

    #[test]
    fn test_defaults_omit_optional_parameters() {
        let url = form_url(&GameSettings::default());
        assert_eq!(url, "https://opentdb.com/api.php?amount=10");
    }

    #[test]
    fn test_all_parameters() {
        let settings = GameSettings {
            num_questions: 25,
            category: TriviaCategory::new(11, "Film"),
            difficulty: Difficulty::Hard,
            question_type: QuestionType::MultipleChoice,
            ..GameSettings::default()
        };
        assert_eq!(
            form_url(&settings),
            "https://opentdb.com/api.php?amount=25&category=11&difficulty=hard&type=multiple"
        );
    }

    #[test]
    fn test_each_parameter_independently() {
        let mut settings = GameSettings::default();
        settings.difficulty = Difficulty::Easy;
        let url = form_url(&settings);
        assert!(url.ends_with("&difficulty=easy"));
        assert!(!url.contains("category="));
        assert!(!url.contains("type="));

        settings.difficulty = Difficulty::Any;
        settings.question_type = QuestionType::TrueFalse;
        let url = form_url(&settings);
        assert!(url.ends_with("?amount=10&type=boolean"));
        assert!(!url.contains("difficulty="));

        settings.question_type = QuestionType::WriteIn;
        assert!(!form_url(&settings).contains("type="));

        settings.question_type = QuestionType::Mixed;
        settings.category = TriviaCategory::new(17, "Nature");
        assert!(form_url(&settings).ends_with("?amount=10&category=17"));
    }

    #[test]
    fn test_custom_base() {
        let url = question_set_url("http://localhost:8080/", &GameSettings::default());
        assert_eq!(url, "http://localhost:8080/api.php?amount=10");
        assert_eq!(
            categories_url("https://opentdb.com"),
            "https://opentdb.com/api_category.php"
        );
    }
}
