use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use log::debug;
use rand::thread_rng;

use crate::data::{ApiError, QuestionSet};
use crate::game::{GameManager, GameState, StateEffect};
use crate::quotes::{Quote, random_quote};
use crate::round::{FetchTicket, RoundController, RoundEvent};
use crate::settings::SettingsStore;

/// Sub-views of the main menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuView {
    Home,
    Options,
    Categories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Options,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Start, MenuItem::Options, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Start => "Start",
            MenuItem::Options => "Options",
            MenuItem::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRow {
    NumQuestions,
    TimePerQuestion,
    Difficulty,
    QuestionType,
    Category,
    Back,
}

impl OptionRow {
    pub const ALL: [OptionRow; 6] = [
        OptionRow::NumQuestions,
        OptionRow::TimePerQuestion,
        OptionRow::Difficulty,
        OptionRow::QuestionType,
        OptionRow::Category,
        OptionRow::Back,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OptionRow::NumQuestions => "Number of Questions",
            OptionRow::TimePerQuestion => "Time per Question",
            OptionRow::Difficulty => "Difficulty",
            OptionRow::QuestionType => "Question Type",
            OptionRow::Category => "Category",
            OptionRow::Back => "Back",
        }
    }
}

/// Application root: owns the dispatcher, the round and the settings.
pub struct App {
    game: GameManager,
    round: RoundController,
    settings: SettingsStore,
    api_url: String,
    entered_state: Rc<Cell<Option<GameState>>>,
    pending_fetch: Option<FetchTicket>,
    menu_view: MenuView,
    menu_cursor: usize,
    option_cursor: usize,
    category_cursor: usize,
    quote: Quote,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: SettingsStore, round: RoundController, api_url: impl Into<String>) -> Self {
        let mut game = GameManager::new();
        let entered_state = Rc::new(Cell::new(None));
        let sink = Rc::clone(&entered_state);
        game.subscribe(move |state| sink.set(Some(state)));

        Self {
            game,
            round,
            settings,
            api_url: api_url.into(),
            entered_state,
            pending_fetch: None,
            menu_view: MenuView::Home,
            menu_cursor: 0,
            option_cursor: 0,
            category_cursor: 0,
            quote: random_quote(&mut thread_rng()),
            should_quit: false,
        }
    }

    pub fn game(&self) -> &GameManager {
        &self.game
    }

    pub fn state(&self) -> GameState {
        self.game.state()
    }

    pub fn round(&self) -> &RoundController {
        &self.round
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    pub fn quote(&self) -> Quote {
        self.quote
    }

    pub fn menu_view(&self) -> MenuView {
        self.menu_view
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn category_cursor(&self) -> usize {
        self.category_cursor
    }

    /// Final score and the configured question count.
    pub fn final_score(&self) -> (u32, u32) {
        (self.game.score(), self.settings.settings().num_questions)
    }

    /// Move the dispatcher to `state` and carry out its effects.
    pub fn set_game_state(&mut self, state: GameState) {
        match self.game.update_game_state(state) {
            Some(StateEffect::StartRound) => {
                let ticket = self.round.begin_round(&self.api_url, self.settings.settings());
                self.pending_fetch = Some(ticket);
            }
            Some(StateEffect::StopRound) => {
                self.round.abort();
                self.pending_fetch = None;
            }
            None => {}
        }

        if let Some(entered) = self.entered_state.take() {
            self.on_screen_enabled(entered);
        }
    }

    fn on_screen_enabled(&mut self, state: GameState) {
        if state == GameState::MainMenu {
            self.quote = random_quote(&mut thread_rng());
            self.menu_view = MenuView::Home;
            self.menu_cursor = 0;
        }
    }

    /// The fetch the event loop has to perform, if any.
    pub fn take_pending_fetch(&mut self) -> Option<FetchTicket> {
        self.pending_fetch.take()
    }

    pub fn on_question_set(&mut self, round_id: u64, result: Result<QuestionSet, ApiError>) {
        if let Some(event) = self.round.complete_fetch(round_id, result) {
            self.handle_round_event(event);
        }
    }

    /// Advance the round by one frame.
    pub fn tick(&mut self, elapsed: Duration) {
        let dt = elapsed.as_secs_f32() * self.game.time_scale();
        if let Some(event) = self.round.update(dt) {
            self.handle_round_event(event);
        }
    }

    fn handle_round_event(&mut self, event: RoundEvent) {
        debug!("round event: {:?}", event);
        match event {
            RoundEvent::Answered { correct: true } => self.game.update_score(1),
            RoundEvent::RoundOver { .. } => self.set_game_state(GameState::GameOver),
            RoundEvent::Failed(_) => self.set_game_state(GameState::Error),
            RoundEvent::Started { .. } | RoundEvent::Answered { .. } | RoundEvent::TimedOut => {}
        }
    }

    pub fn submit_answer(&mut self, slot: usize) {
        if self.state() != GameState::Playing {
            return;
        }
        if let Some(event) = self.round.submit_answer(slot) {
            self.handle_round_event(event);
        }
    }

    pub fn submit_selected(&mut self) {
        self.submit_answer(self.round.selected());
    }

    pub fn select_next_answer(&mut self) {
        if self.state() == GameState::Playing {
            self.round.select_next();
        }
    }

    pub fn select_previous_answer(&mut self) {
        if self.state() == GameState::Playing {
            self.round.select_previous();
        }
    }

    pub fn pause(&mut self) {
        if self.state() == GameState::Playing {
            self.set_game_state(GameState::Paused);
        }
    }

    pub fn resume(&mut self) {
        if self.state() == GameState::Paused {
            self.set_game_state(GameState::Playing);
        }
    }

    /// Start a fresh round from the game over screen.
    pub fn restart(&mut self) {
        self.set_game_state(GameState::Playing);
    }

    pub fn return_to_main_menu(&mut self) {
        self.set_game_state(GameState::MainMenu);
    }

    pub fn menu_next(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1) % MenuItem::ALL.len();
    }

    pub fn menu_previous(&mut self) {
        self.menu_cursor = (self.menu_cursor + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }

    pub fn menu_activate(&mut self) {
        match MenuItem::ALL[self.menu_cursor] {
            MenuItem::Start => self.set_game_state(GameState::Playing),
            MenuItem::Options => {
                self.menu_view = MenuView::Options;
                self.option_cursor = 0;
            }
            MenuItem::Quit => self.should_quit = true,
        }
    }

    pub fn option_next(&mut self) {
        self.option_cursor = (self.option_cursor + 1) % OptionRow::ALL.len();
    }

    pub fn option_previous(&mut self) {
        self.option_cursor = (self.option_cursor + OptionRow::ALL.len() - 1) % OptionRow::ALL.len();
    }

    /// Left/right on the highlighted option row.
    pub fn option_adjust(&mut self, delta: i32) {
        match OptionRow::ALL[self.option_cursor] {
            OptionRow::NumQuestions => self.settings.step_num_questions(delta),
            OptionRow::TimePerQuestion => self.settings.step_time_per_question(delta),
            OptionRow::Difficulty => self.settings.shift_difficulty(delta),
            OptionRow::QuestionType => self.settings.shift_question_type(delta),
            OptionRow::Category | OptionRow::Back => {}
        }
    }

    pub fn option_activate(&mut self) {
        match OptionRow::ALL[self.option_cursor] {
            OptionRow::Category => {
                self.menu_view = MenuView::Categories;
                self.category_cursor = self.settings.selected_category_index();
            }
            OptionRow::Back => self.menu_back(),
            _ => {}
        }
    }

    pub fn category_next(&mut self) {
        let count = self.settings.categories().len();
        if count > 0 {
            self.category_cursor = (self.category_cursor + 1) % count;
        }
    }

    pub fn category_previous(&mut self) {
        let count = self.settings.categories().len();
        if count > 0 {
            self.category_cursor = (self.category_cursor + count - 1) % count;
        }
    }

    pub fn category_toggle(&mut self) {
        self.settings.toggle_category(self.category_cursor);
    }

    /// Step back one menu level.
    pub fn menu_back(&mut self) {
        self.menu_view = match self.menu_view {
            MenuView::Categories => MenuView::Options,
            MenuView::Options | MenuView::Home => MenuView::Home,
        };
    }
}
