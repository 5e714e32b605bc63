//! # trivia-quiz
//!
//! A terminal trivia game backed by the Open Trivia Database.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_quiz::data::{DEFAULT_REQUEST_TIMEOUT, OpenTdbClient};
//! use trivia_quiz::models::GameSettings;
//! use trivia_quiz::protocol::DEFAULT_API_URL;
//! use trivia_quiz::round::RoundTimings;
//! use trivia_quiz::{Trivia, TriviaError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), TriviaError> {
//!     let client = OpenTdbClient::new(DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT)?;
//!
//!     // Fetch the category list, then take over the terminal
//!     let trivia = Trivia::load(client, GameSettings::default(), RoundTimings::default()).await;
//!     trivia.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod data;
pub mod game;
pub mod models;
pub mod protocol;
pub mod quotes;
pub mod round;
pub mod settings;
pub mod terminal;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{info, warn};
use tokio::sync::mpsc;

pub use app::{App, MenuItem, MenuView, OptionRow};
use data::{ApiError, OpenTdbClient, QuestionSet};
use game::GameState;
use models::{GameSettings, TriviaCategory};
use round::{FetchTicket, RoundController, RoundTimings};
use settings::SettingsStore;

/// Time budget of one frame of the event loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for trivia operations.
#[derive(Debug)]
pub enum TriviaError {
    /// Error talking to the trivia service.
    Api(ApiError),
    /// IO error while driving the terminal.
    Io(io::Error),
}

impl std::fmt::Display for TriviaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriviaError::Api(e) => write!(f, "Trivia service error: {}", e),
            TriviaError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for TriviaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TriviaError::Api(e) => Some(e),
            TriviaError::Io(e) => Some(e),
        }
    }
}

impl From<ApiError> for TriviaError {
    fn from(err: ApiError) -> Self {
        TriviaError::Api(err)
    }
}

impl From<io::Error> for TriviaError {
    fn from(err: io::Error) -> Self {
        TriviaError::Io(err)
    }
}

type FetchResult = (u64, Result<QuestionSet, ApiError>);

/// A trivia game that can be run in the terminal.
pub struct Trivia {
    app: App,
    client: OpenTdbClient,
}

impl Trivia {
    /// Create a game with an already known category list.
    pub fn new(
        client: OpenTdbClient,
        settings: GameSettings,
        categories: Vec<TriviaCategory>,
        timings: RoundTimings,
    ) -> Self {
        let store = SettingsStore::new(settings, categories);
        let app = App::new(store, RoundController::new(timings), client.base_url());
        Self { app, client }
    }

    /// Fetch the categories and create a game.
    ///
    /// If the categories cannot be fetched only "Any" is offered.
    pub async fn load(client: OpenTdbClient, settings: GameSettings, timings: RoundTimings) -> Self {
        let categories = match client.get_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!("could not load categories: {}", e);
                Vec::new()
            }
        };
        Self::new(client, settings, categories, timings)
    }

    /// Run the game in the terminal.
    ///
    /// This will take over the terminal and return when the player quits.
    pub async fn run(mut self) -> Result<(), TriviaError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &self.client).await;
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::TriviaTerminal,
    app: &mut App,
    client: &OpenTdbClient,
) -> Result<(), TriviaError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchResult>();
    let mut last_frame = Instant::now();

    loop {
        while let Ok((round_id, result)) = rx.try_recv() {
            app.on_question_set(round_id, result);
        }
        if let Some(ticket) = app.take_pending_fetch() {
            spawn_fetch(client.clone(), ticket, tx.clone());
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_input(app, key.code);
                }
            }
        }

        let now = Instant::now();
        app.tick(now - last_frame);
        last_frame = now;

        if app.should_quit {
            info!("quitting");
            break;
        }
    }

    Ok(())
}

fn spawn_fetch(client: OpenTdbClient, ticket: FetchTicket, tx: mpsc::UnboundedSender<FetchResult>) {
    tokio::spawn(async move {
        let result = client.get_question_set(&ticket.url).await;
        let _ = tx.send((ticket.round_id, result));
    });
}

fn handle_input(app: &mut App, key: KeyCode) {
    match app.state() {
        GameState::MainMenu => handle_menu_input(app, key),
        GameState::Playing => handle_question_input(app, key),
        GameState::Paused => handle_paused_input(app, key),
        GameState::GameOver => handle_game_over_input(app, key),
        GameState::Error => handle_error_input(app, key),
    }
}

fn handle_menu_input(app: &mut App, key: KeyCode) {
    match app.menu_view() {
        MenuView::Home => match key {
            KeyCode::Up | KeyCode::Char('k') => app.menu_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.menu_next(),
            KeyCode::Enter | KeyCode::Char(' ') => app.menu_activate(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        MenuView::Options => match key {
            KeyCode::Up | KeyCode::Char('k') => app.option_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.option_next(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.option_adjust(-1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => app.option_adjust(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.option_activate(),
            KeyCode::Esc | KeyCode::Backspace => app.menu_back(),
            _ => {}
        },
        MenuView::Categories => match key {
            KeyCode::Up | KeyCode::Char('k') => app.category_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.category_next(),
            KeyCode::Enter | KeyCode::Char(' ') => app.category_toggle(),
            KeyCode::Esc | KeyCode::Backspace => app.menu_back(),
            _ => {}
        },
    }
}

fn handle_question_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_answer(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_answer(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_selected(),
        KeyCode::Char(digit @ '1'..='9') => app.submit_answer(digit as usize - '1' as usize),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => app.pause(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_paused_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => app.resume(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.return_to_main_menu(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_game_over_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Enter => app.return_to_main_menu(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_error_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Enter => app.return_to_main_menu(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::protocol::ResponseCode;

    fn app() -> App {
        let settings = GameSettings {
            time_per_question: 0.0,
            ..GameSettings::default()
        };
        let round = RoundController::with_rng(RoundTimings::default(), StdRng::seed_from_u64(2));
        App::new(SettingsStore::new(settings, Vec::new()), round, "http://localhost")
    }

    #[test]
    fn test_keys_drive_a_round() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), GameState::Playing);
        let ticket = app.take_pending_fetch().unwrap();

        let set = QuestionSet {
            response_code: ResponseCode::Success,
            questions: vec![models::TriviaQuestion {
                number: 1,
                difficulty: "Easy".to_string(),
                category: "Nature".to_string(),
                question: "Water boils at 100 degrees Celsius at sea level.".to_string(),
                correct_answer: "True".to_string(),
                incorrect_answers: vec!["False".to_string()],
            }],
        };
        app.on_question_set(ticket.round_id, Ok(set));

        handle_input(&mut app, KeyCode::Char('p'));
        assert_eq!(app.state(), GameState::Paused);
        handle_input(&mut app, KeyCode::Char('1'));
        assert!(!app.round().has_answered());

        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), GameState::Playing);
        handle_input(&mut app, KeyCode::Char('1'));
        assert_eq!(app.game().score(), 1);
    }

    #[test]
    fn test_error_screen_returns_to_menu() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter);
        let ticket = app.take_pending_fetch().unwrap();
        app.on_question_set(
            ticket.round_id,
            Ok(QuestionSet {
                response_code: ResponseCode::RateLimit,
                questions: Vec::new(),
            }),
        );
        assert_eq!(app.state(), GameState::Error);

        handle_input(&mut app, KeyCode::Char('m'));
        assert_eq!(app.state(), GameState::MainMenu);
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_options_keys() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.menu_view(), MenuView::Options);
        handle_input(&mut app, KeyCode::Left);
        assert_eq!(app.settings().settings().num_questions, 9);
        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.menu_view(), MenuView::Home);
    }
}
