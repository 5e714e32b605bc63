//! Open Trivia Database wire format.

mod messages;
mod url;

pub use messages::{
    CategoryResponse, QuestionResponse, RawCategory, RawQuestion, ResponseCode,
};
pub use url::{DEFAULT_API_URL, categories_url, form_url, question_set_url};
