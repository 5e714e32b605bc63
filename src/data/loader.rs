use log::{debug, warn};

use crate::models::{TriviaCategory, TriviaQuestion};
use crate::protocol::{CategoryResponse, QuestionResponse, RawQuestion, ResponseCode};

use super::ApiError;

/// Category prefixes dropped for display ("Entertainment: Film" becomes "Film").
pub const CATEGORY_IGNORE_PREFIXES: [&str; 2] = ["Entertainment: ", "Science: "];

/// Decoded question endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionSet {
    pub response_code: ResponseCode,
    /// Empty unless `response_code` is success.
    pub questions: Vec<TriviaQuestion>,
}

/// Parses a question endpoint body into display-ready questions.
pub fn decode_question_set(json: &str) -> Result<QuestionSet, ApiError> {
    let response: QuestionResponse = serde_json::from_str(json)?;
    let response_code = ResponseCode::from_code(response.response_code);

    if !response_code.is_success() {
        warn!("trivia api returned {}", response_code);
        return Ok(QuestionSet {
            response_code,
            questions: Vec::new(),
        });
    }

    let questions: Vec<TriviaQuestion> = response
        .results
        .iter()
        .enumerate()
        .map(|(index, raw)| map_question(index + 1, raw))
        .collect();
    debug!("decoded {} questions", questions.len());

    Ok(QuestionSet {
        response_code,
        questions,
    })
}

/// Parses the category endpoint body, sorted by display name.
pub fn decode_categories(json: &str) -> Result<Vec<TriviaCategory>, ApiError> {
    let response: CategoryResponse = serde_json::from_str(json)?;

    let mut categories: Vec<TriviaCategory> = response
        .trivia_categories
        .into_iter()
        .map(|raw| TriviaCategory::new(raw.id, parse_category_name(&decode_entities(&raw.name))))
        .collect();
    categories.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(categories)
}

/// Strips the known ignore-prefixes from a category name.
pub fn parse_category_name(name: &str) -> String {
    let mut parsed = name;
    for prefix in CATEGORY_IGNORE_PREFIXES {
        if let Some(rest) = parsed.strip_prefix(prefix) {
            parsed = rest;
        }
    }
    parsed.to_string()
}

fn map_question(number: usize, raw: &RawQuestion) -> TriviaQuestion {
    TriviaQuestion {
        number,
        difficulty: capitalize_first(&raw.difficulty),
        category: parse_category_name(&decode_entities(&raw.category)),
        question: decode_entities(&raw.question),
        correct_answer: decode_entities(&raw.correct_answer),
        incorrect_answers: raw
            .incorrect_answers
            .iter()
            .map(|answer| decode_entities(answer))
            .collect(),
    }
}

fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTION_SET_JSON: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "type": "multiple",
                "difficulty": "medium",
                "category": "Entertainment: Film",
                "question": "Who directed &quot;Jaws&quot;?",
                "correct_answer": "Steven Spielberg",
                "incorrect_answers": ["George Lucas", "James Cameron", "Ridley Scott"]
            },
            {
                "type": "boolean",
                "difficulty": "hard",
                "category": "Science &amp; Nature",
                "question": "The Sun&#039;s core is hotter than its corona.",
                "correct_answer": "True",
                "incorrect_answers": ["False"]
            }
        ]
    }"#;

    #[test]
    fn test_decode_question_set() {
        let set = decode_question_set(QUESTION_SET_JSON).unwrap();
        assert_eq!(set.response_code, ResponseCode::Success);
        assert_eq!(set.questions.len(), 2);

        let first = &set.questions[0];
        assert_eq!(first.number, 1);
        assert_eq!(first.difficulty, "Medium");
        assert_eq!(first.category, "Film");
        assert_eq!(first.question, "Who directed \"Jaws\"?");
        assert_eq!(first.incorrect_answers.len(), 3);

        let second = &set.questions[1];
        assert_eq!(second.number, 2);
        assert_eq!(second.difficulty, "Hard");
        assert_eq!(second.category, "Science & Nature");
        assert_eq!(second.question, "The Sun's core is hotter than its corona.");
        assert!(second.is_true_false());
    }

    #[test]
    fn test_non_success_code_yields_empty_set() {
        let json = r#"{"response_code": 1, "results": [{
            "type": "boolean", "difficulty": "easy", "category": "General Knowledge",
            "question": "q", "correct_answer": "True", "incorrect_answers": ["False"]
        }]}"#;
        let set = decode_question_set(json).unwrap();
        assert_eq!(set.response_code, ResponseCode::NoResults);
        assert!(set.questions.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            decode_question_set("<html>502 Bad Gateway</html>"),
            Err(ApiError::Decode(_))
        ));
        assert!(decode_categories(r#"{"categories": []}"#).is_err());
    }

    #[test]
    fn test_parse_category_name() {
        assert_eq!(parse_category_name("Entertainment: Film"), "Film");
        assert_eq!(parse_category_name("Science: Nature"), "Nature");
        assert_eq!(parse_category_name("General Knowledge"), "General Knowledge");
        assert_eq!(parse_category_name("Science & Nature"), "Science & Nature");
        assert_eq!(
            parse_category_name("Entertainment: Japanese Anime & Manga"),
            "Japanese Anime & Manga"
        );
    }

    #[test]
    fn test_decode_categories_sorted() {
        let json = r#"{"trivia_categories": [
            {"id": 9, "name": "General Knowledge"},
            {"id": 11, "name": "Entertainment: Film"},
            {"id": 17, "name": "Science & Nature"},
            {"id": 18, "name": "Science: Computers"}
        ]}"#;
        let categories = decode_categories(json).unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Computers", "Film", "General Knowledge", "Science & Nature"]
        );
        assert_eq!(categories[1].id, 11);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("easy"), "Easy");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("Hard"), "Hard");
    }
}
