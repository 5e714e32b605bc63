use std::time::Duration;

use clap::Parser;
use log::info;
use trivia_quiz::Trivia;
use trivia_quiz::data::OpenTdbClient;
use trivia_quiz::models::{Difficulty, GameSettings, QuestionType, TriviaCategory, UNLIMITED_TIME};
use trivia_quiz::protocol::DEFAULT_API_URL;
use trivia_quiz::round::{DEFAULT_REVEAL_DELAY, DEFAULT_TRANSITION_DURATION, RoundTimings};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of questions per round (1-50)
    #[arg(short = 'n', long, default_value_t = 10)]
    questions: u32,

    /// Category id to ask questions from (omit for any category)
    #[arg(short, long)]
    category: Option<i32>,

    /// Question difficulty
    #[arg(short, long, value_enum, default_value_t = Difficulty::Any)]
    difficulty: Difficulty,

    /// Question type
    #[arg(short = 't', long, value_enum, default_value_t = QuestionType::Mixed)]
    question_type: QuestionType,

    /// Seconds per question, 0 for unlimited
    #[arg(long, default_value_t = 30.0)]
    time_per_question: f32,

    /// Seconds the correct answer stays visible before the next question
    #[arg(long, default_value_t = DEFAULT_REVEAL_DELAY)]
    reveal_delay: f32,

    /// Base URL of the trivia service
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    request_timeout: u64,
}

impl Args {
    fn settings(&self) -> GameSettings {
        GameSettings {
            num_questions: self.questions,
            category: TriviaCategory::default(),
            difficulty: self.difficulty,
            question_type: self.question_type,
            time_per_question: if self.time_per_question > 0.0 {
                self.time_per_question
            } else {
                UNLIMITED_TIME
            },
        }
    }

    fn timings(&self) -> RoundTimings {
        RoundTimings {
            reveal_delay: self.reveal_delay.max(0.0),
            transition_duration: DEFAULT_TRANSITION_DURATION,
        }
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let client = match OpenTdbClient::new(&args.api_url, Duration::from_secs(args.request_timeout)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error creating trivia client: {}", e);
            std::process::exit(1);
        }
    };

    println!("Loading categories from {}...", args.api_url);
    let mut trivia = Trivia::load(client, args.settings(), args.timings()).await;

    if let Some(id) = args.category {
        let index = trivia
            .app()
            .settings()
            .categories()
            .iter()
            .position(|category| category.id == id);
        match index {
            Some(index) => trivia.app_mut().settings_mut().toggle_category(index),
            None => eprintln!("Unknown category {}, using any category", id),
        }
    }
    info!("starting with {:?}", trivia.app().settings().settings());

    if let Err(e) = trivia.run().await {
        eprintln!("Error running trivia: {}", e);
        std::process::exit(1);
    }
}
