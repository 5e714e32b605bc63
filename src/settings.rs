//! Settings store and the stepping rules of the options menu.

use log::debug;

use crate::models::{Difficulty, GameSettings, QuestionType, TriviaCategory, UNLIMITED_TIME};

pub const MIN_QUESTIONS: u32 = 1;
pub const MAX_QUESTIONS: u32 = 50;

pub const MIN_TIME_PER_QUESTION: f32 = 5.0;
pub const MAX_TIME_PER_QUESTION: f32 = 60.0;
pub const TIME_STEP: f32 = 5.0;

/// Owns the quiz configuration and the categories it can pick from.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    settings: GameSettings,
    categories: Vec<TriviaCategory>,
}

impl SettingsStore {
    /// Create a store; "Any" is always the first category.
    pub fn new(settings: GameSettings, fetched: Vec<TriviaCategory>) -> Self {
        let mut categories = Vec::with_capacity(fetched.len() + 1);
        categories.push(TriviaCategory::any());
        categories.extend(fetched.into_iter().filter(|c| !c.is_any()));

        let mut store = Self {
            settings,
            categories,
        };
        store.settings.num_questions = store
            .settings
            .num_questions
            .clamp(MIN_QUESTIONS, MAX_QUESTIONS);
        store
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn update_settings(&mut self, settings: GameSettings) {
        self.settings = settings;
    }

    pub fn categories(&self) -> &[TriviaCategory] {
        &self.categories
    }

    /// Plus/minus control for the question count.
    pub fn step_num_questions(&mut self, delta: i32) {
        let next = self.settings.num_questions as i64 + delta as i64;
        self.settings.num_questions = next.clamp(MIN_QUESTIONS as i64, MAX_QUESTIONS as i64) as u32;
        debug!("num questions: {}", self.settings.num_questions);
    }

    /// Left/right shift through difficulties; stops at either end.
    pub fn shift_difficulty(&mut self, delta: i32) {
        let current = Difficulty::ALL
            .iter()
            .position(|d| *d == self.settings.difficulty)
            .unwrap_or(0);
        self.settings.difficulty = Difficulty::ALL[shift_index(current, delta, Difficulty::ALL.len())];
        debug!("difficulty: {}", self.settings.difficulty);
    }

    /// Left/right shift through selectable question types; stops at either end.
    pub fn shift_question_type(&mut self, delta: i32) {
        let current = QuestionType::SELECTABLE
            .iter()
            .position(|t| *t == self.settings.question_type)
            .unwrap_or(0);
        self.settings.question_type =
            QuestionType::SELECTABLE[shift_index(current, delta, QuestionType::SELECTABLE.len())];
        debug!("question type: {}", self.settings.question_type);
    }

    /// Time slider; one step past the maximum means unlimited.
    pub fn step_time_per_question(&mut self, delta: i32) {
        let next = match self.settings.time_limit() {
            None if delta < 0 => MAX_TIME_PER_QUESTION,
            None => UNLIMITED_TIME,
            Some(current) => {
                let stepped = current + TIME_STEP * delta as f32;
                if stepped > MAX_TIME_PER_QUESTION {
                    UNLIMITED_TIME
                } else {
                    stepped.max(MIN_TIME_PER_QUESTION)
                }
            }
        };
        self.settings.time_per_question = next;
        debug!("time per question: {}", self.settings.time_label());
    }

    /// Radio selection of a category by list index.
    ///
    /// Selecting the active category again deselects it, falling back to "Any".
    pub fn toggle_category(&mut self, index: usize) {
        let Some(category) = self.categories.get(index) else {
            return;
        };
        if category.id == self.settings.category.id {
            self.settings.category = TriviaCategory::any();
        } else {
            self.settings.category = category.clone();
        }
        debug!("category: {}", self.settings.category.name);
    }

    /// List index of the selected category.
    pub fn selected_category_index(&self) -> usize {
        self.categories
            .iter()
            .position(|c| c.id == self.settings.category.id)
            .unwrap_or(0)
    }

    /// Label/value pairs describing the current settings.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Number of Questions", self.settings.num_questions.to_string()),
            ("Time per Question", self.settings.time_label()),
            ("Category", self.settings.category.name.clone()),
            ("Difficulty", self.settings.difficulty.to_string()),
        ]
    }
}

fn shift_index(current: usize, delta: i32, len: usize) -> usize {
    let shifted = current as i64 + delta as i64;
    if shifted < 0 || shifted >= len as i64 {
        current
    } else {
        shifted as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SettingsStore {
        SettingsStore::new(
            GameSettings::default(),
            vec![
                TriviaCategory::new(11, "Film"),
                TriviaCategory::new(17, "Nature"),
            ],
        )
    }

    #[test]
    fn test_any_category_inserted_first() {
        let store = store();
        assert_eq!(store.categories().len(), 3);
        assert!(store.categories()[0].is_any());
        assert_eq!(store.selected_category_index(), 0);
    }

    #[test]
    fn test_num_questions_clamped() {
        let mut store = store();
        store.step_num_questions(-20);
        assert_eq!(store.settings().num_questions, MIN_QUESTIONS);
        store.step_num_questions(1);
        assert_eq!(store.settings().num_questions, 2);
        store.step_num_questions(100);
        assert_eq!(store.settings().num_questions, MAX_QUESTIONS);

        let oversized = GameSettings {
            num_questions: 500,
            ..GameSettings::default()
        };
        let store = SettingsStore::new(oversized, Vec::new());
        assert_eq!(store.settings().num_questions, MAX_QUESTIONS);
    }

    #[test]
    fn test_shift_difficulty_stops_at_ends() {
        let mut store = store();
        store.shift_difficulty(-1);
        assert_eq!(store.settings().difficulty, Difficulty::Any);
        store.shift_difficulty(1);
        store.shift_difficulty(1);
        store.shift_difficulty(1);
        assert_eq!(store.settings().difficulty, Difficulty::Hard);
        store.shift_difficulty(1);
        assert_eq!(store.settings().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_shift_question_type_skips_write_in() {
        let mut store = store();
        store.shift_question_type(1);
        assert_eq!(store.settings().question_type, QuestionType::MultipleChoice);
        store.shift_question_type(1);
        store.shift_question_type(1);
        assert_eq!(store.settings().question_type, QuestionType::TrueFalse);
    }

    #[test]
    fn test_time_slider_wraps_into_unlimited() {
        let mut store = store();
        for _ in 0..6 {
            store.step_time_per_question(1);
        }
        assert_eq!(store.settings().time_per_question, MAX_TIME_PER_QUESTION);
        store.step_time_per_question(1);
        assert_eq!(store.settings().time_limit(), None);
        store.step_time_per_question(1);
        assert_eq!(store.settings().time_limit(), None);
        store.step_time_per_question(-1);
        assert_eq!(store.settings().time_limit(), Some(MAX_TIME_PER_QUESTION));

        for _ in 0..20 {
            store.step_time_per_question(-1);
        }
        assert_eq!(store.settings().time_limit(), Some(MIN_TIME_PER_QUESTION));
    }

    #[test]
    fn test_toggle_category_deselects_to_any() {
        let mut store = store();
        store.toggle_category(1);
        assert_eq!(store.settings().category.name, "Film");
        assert_eq!(store.selected_category_index(), 1);

        store.toggle_category(2);
        assert_eq!(store.settings().category.id, 17);

        store.toggle_category(2);
        assert!(store.settings().category.is_any());

        store.toggle_category(0);
        assert!(store.settings().category.is_any());

        store.toggle_category(99);
        assert!(store.settings().category.is_any());
    }

    #[test]
    fn test_summary() {
        let store = store();
        let summary = store.summary();
        assert_eq!(summary[0], ("Number of Questions", "10".to_string()));
        assert_eq!(summary[1], ("Time per Question", "30 (s)".to_string()));
        assert_eq!(summary[2], ("Category", "Any".to_string()));
        assert_eq!(summary[3], ("Difficulty", "Any".to_string()));
    }
}
