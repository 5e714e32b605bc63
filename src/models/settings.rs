use std::fmt;

use clap::ValueEnum;

use super::TriviaCategory;

/// Time limit value meaning "no countdown".
pub const UNLIMITED_TIME: f32 = -1.0;

/// Question difficulty filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    #[default]
    Any,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Options in the order the options menu shifts through them.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Any,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// Query keyword, or `None` for the "any" sentinel.
    pub fn api_keyword(self) -> Option<&'static str> {
        match self {
            Difficulty::Any => None,
            Difficulty::Easy => Some("easy"),
            Difficulty::Medium => Some("medium"),
            Difficulty::Hard => Some("hard"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Any => "Any",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Question type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum QuestionType {
    #[default]
    Mixed,
    MultipleChoice,
    TrueFalse,
    /// Not served by the trivia API; requests fall back to mixed.
    #[value(skip)]
    WriteIn,
}

impl QuestionType {
    /// Types the options menu lets the player pick.
    pub const SELECTABLE: [QuestionType; 3] = [
        QuestionType::Mixed,
        QuestionType::MultipleChoice,
        QuestionType::TrueFalse,
    ];

    /// Query keyword, or `None` when no type filter applies.
    pub fn api_keyword(self) -> Option<&'static str> {
        match self {
            QuestionType::MultipleChoice => Some("multiple"),
            QuestionType::TrueFalse => Some("boolean"),
            QuestionType::Mixed | QuestionType::WriteIn => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Mixed => "Mixed",
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::TrueFalse => "True / False",
            QuestionType::WriteIn => "Write In",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quiz configuration chosen on the main menu.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub num_questions: u32,
    pub category: TriviaCategory,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    /// Seconds per question; zero or less disables the countdown.
    pub time_per_question: f32,
}

impl GameSettings {
    /// The countdown length, if questions are timed.
    pub fn time_limit(&self) -> Option<f32> {
        (self.time_per_question > 0.0).then_some(self.time_per_question)
    }

    pub fn time_label(&self) -> String {
        match self.time_limit() {
            Some(seconds) => format!("{} (s)", seconds),
            None => "Unlimited".to_string(),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            num_questions: 10,
            category: TriviaCategory::any(),
            difficulty: Difficulty::Any,
            question_type: QuestionType::Mixed,
            time_per_question: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_limit() {
        let mut settings = GameSettings::default();
        assert_eq!(settings.time_limit(), Some(30.0));
        assert_eq!(settings.time_label(), "30 (s)");

        settings.time_per_question = UNLIMITED_TIME;
        assert_eq!(settings.time_limit(), None);
        assert_eq!(settings.time_label(), "Unlimited");

        settings.time_per_question = 0.0;
        assert_eq!(settings.time_limit(), None);
    }

    #[test]
    fn test_write_in_has_no_keyword() {
        assert_eq!(QuestionType::WriteIn.api_keyword(), None);
        assert_eq!(QuestionType::Mixed.api_keyword(), None);
        assert_eq!(QuestionType::TrueFalse.api_keyword(), Some("boolean"));
    }
}
