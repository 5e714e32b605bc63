/// Category id used for "any category".
pub const ANY_CATEGORY_ID: i32 = -1;

/// A trivia question ready to be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaQuestion {
    /// 1-based position within the question set.
    pub number: usize,
    pub difficulty: String,
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl TriviaQuestion {
    /// True/false questions carry exactly one incorrect answer.
    pub fn is_true_false(&self) -> bool {
        self.incorrect_answers.len() == 1
    }

    /// Number of choices shown for this question.
    pub fn answer_count(&self) -> usize {
        self.incorrect_answers.len() + 1
    }
}

/// A question category offered by the trivia service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaCategory {
    pub id: i32,
    pub name: String,
}

impl TriviaCategory {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The "any category" sentinel.
    pub fn any() -> Self {
        Self::new(ANY_CATEGORY_ID, "Any")
    }

    pub fn is_any(&self) -> bool {
        self.id == ANY_CATEGORY_ID
    }
}

impl Default for TriviaCategory {
    fn default() -> Self {
        Self::any()
    }
}
