mod question;
mod settings;

pub use question::{ANY_CATEGORY_ID, TriviaCategory, TriviaQuestion};
pub use settings::{Difficulty, GameSettings, QuestionType, UNLIMITED_TIME};
