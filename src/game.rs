//! Game-state dispatcher.
//!
//! Runs the side effects of each state transition, keeps exactly one screen
//! active and broadcasts the new state to subscribed listeners.

use std::fmt;

use log::info;

/// Top-level state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    MainMenu,
    Playing,
    Paused,
    GameOver,
    Error,
}

/// The UI surface shown for a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Question,
    Paused,
    GameOver,
    Error,
}

impl Screen {
    pub fn for_state(state: GameState) -> Self {
        match state {
            GameState::MainMenu => Screen::MainMenu,
            GameState::Playing => Screen::Question,
            GameState::Paused => Screen::Paused,
            GameState::GameOver => Screen::GameOver,
            GameState::Error => Screen::Error,
        }
    }
}

/// Work the owner of the round controller must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEffect {
    StartRound,
    StopRound,
}

/// Handle returned by [`GameManager::subscribe`].
pub type ListenerId = usize;

type Listener = Box<dyn FnMut(GameState)>;

pub struct GameManager {
    state: GameState,
    score: u32,
    is_playing: bool,
    time_scale: f32,
    active_screen: Screen,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: ListenerId,
}

impl GameManager {
    /// Create a dispatcher sitting on the main menu.
    pub fn new() -> Self {
        Self {
            state: GameState::MainMenu,
            score: 0,
            is_playing: false,
            time_scale: 1.0,
            active_screen: Screen::MainMenu,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Multiplier applied to frame time; zero while paused.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn active_screen(&self) -> Screen {
        self.active_screen
    }

    /// Register a listener called with every new state.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(GameState) + 'static,
    {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if no listener had this id.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn update_score(&mut self, delta: u32) {
        self.score += delta;
    }

    /// Move to `new_state` and return the round work it requires.
    pub fn update_game_state(&mut self, new_state: GameState) -> Option<StateEffect> {
        info!("game state: {} -> {}", self.state, new_state);
        self.state = new_state;

        let effect = match new_state {
            GameState::MainMenu => self.handle_main_menu_state(),
            GameState::Playing => self.handle_playing_state(),
            GameState::Paused => {
                self.time_scale = 0.0;
                None
            }
            GameState::GameOver => {
                self.is_playing = false;
                self.time_scale = 1.0;
                None
            }
            GameState::Error => {
                self.is_playing = false;
                None
            }
        };

        self.active_screen = Screen::for_state(new_state);
        for (_, listener) in self.listeners.iter_mut() {
            listener(new_state);
        }
        effect
    }

    fn handle_main_menu_state(&mut self) -> Option<StateEffect> {
        self.time_scale = 1.0;
        self.score = 0;
        self.is_playing = false;
        Some(StateEffect::StopRound)
    }

    fn handle_playing_state(&mut self) -> Option<StateEffect> {
        self.time_scale = 1.0;
        if self.is_playing {
            return None;
        }
        self.is_playing = true;
        self.score = 0;
        Some(StateEffect::StartRound)
    }
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameManager")
            .field("state", &self.state)
            .field("score", &self.score)
            .field("is_playing", &self.is_playing)
            .field("time_scale", &self.time_scale)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::MainMenu => "main menu",
            GameState::Playing => "playing",
            GameState::Paused => "paused",
            GameState::GameOver => "game over",
            GameState::Error => "error",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_starts_on_main_menu() {
        let game = GameManager::new();
        assert_eq!(game.state(), GameState::MainMenu);
        assert_eq!(game.active_screen(), Screen::MainMenu);
        assert!(!game.is_playing());
    }

    #[test]
    fn test_playing_starts_round_once() {
        let mut game = GameManager::new();
        assert_eq!(
            game.update_game_state(GameState::Playing),
            Some(StateEffect::StartRound)
        );
        assert!(game.is_playing());

        assert_eq!(game.update_game_state(GameState::Paused), None);
        assert_eq!(game.time_scale(), 0.0);
        assert_eq!(game.active_screen(), Screen::Paused);

        // Resuming must not restart the round.
        assert_eq!(game.update_game_state(GameState::Playing), None);
        assert_eq!(game.time_scale(), 1.0);
        assert_eq!(game.active_screen(), Screen::Question);
    }

    #[test]
    fn test_game_over_allows_restart() {
        let mut game = GameManager::new();
        game.update_game_state(GameState::Playing);
        game.update_score(3);
        game.update_game_state(GameState::GameOver);
        assert!(!game.is_playing());
        assert_eq!(game.score(), 3);

        assert_eq!(
            game.update_game_state(GameState::Playing),
            Some(StateEffect::StartRound)
        );
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_main_menu_resets_score_and_stops_round() {
        let mut game = GameManager::new();
        game.update_game_state(GameState::Playing);
        game.update_score(2);
        game.update_game_state(GameState::Paused);

        assert_eq!(
            game.update_game_state(GameState::MainMenu),
            Some(StateEffect::StopRound)
        );
        assert_eq!(game.score(), 0);
        assert_eq!(game.time_scale(), 1.0);
        assert!(!game.is_playing());
    }

    #[test]
    fn test_error_state() {
        let mut game = GameManager::new();
        game.update_game_state(GameState::Playing);
        assert_eq!(game.update_game_state(GameState::Error), None);
        assert!(!game.is_playing());
        assert_eq!(game.active_screen(), Screen::Error);
    }

    #[test]
    fn test_listeners_receive_states() {
        let mut game = GameManager::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = game.subscribe(move |state| sink.borrow_mut().push(state));

        game.update_game_state(GameState::Playing);
        game.update_game_state(GameState::GameOver);
        assert!(game.unsubscribe(id));
        assert!(!game.unsubscribe(id));
        game.update_game_state(GameState::MainMenu);

        assert_eq!(
            *seen.borrow(),
            vec![GameState::Playing, GameState::GameOver]
        );
    }

    #[test]
    fn test_exactly_one_screen_per_state() {
        let states = [
            GameState::MainMenu,
            GameState::Playing,
            GameState::Paused,
            GameState::GameOver,
            GameState::Error,
        ];
        let mut screens: Vec<Screen> = states.iter().map(|s| Screen::for_state(*s)).collect();
        screens.dedup();
        assert_eq!(screens.len(), states.len());
    }
}
