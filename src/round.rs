//! Round controller.
//!
//! Drives one round of trivia: fetch, display, answer or timeout, reveal,
//! exit/enter transition, and finally round over. Time only moves through
//! [`RoundController::update`], which receives the elapsed frame time.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{ApiError, QuestionSet};
use crate::models::{GameSettings, TriviaQuestion};
use crate::protocol::{ResponseCode, question_set_url};

pub const TRUE_LABEL: &str = "True";
pub const FALSE_LABEL: &str = "False";

/// Seconds the answer stays revealed before moving on.
pub const DEFAULT_REVEAL_DELAY: f32 = 3.0;
/// Seconds for each half of the question swap transition.
pub const DEFAULT_TRANSITION_DURATION: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTimings {
    pub reveal_delay: f32,
    pub transition_duration: f32,
}

impl Default for RoundTimings {
    fn default() -> Self {
        Self {
            reveal_delay: DEFAULT_REVEAL_DELAY,
            transition_duration: DEFAULT_TRANSITION_DURATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerLayout {
    TrueFalse,
    MultipleChoice,
}

/// Border state of a displayed choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerChoice {
    pub text: String,
    pub is_correct: bool,
    pub highlight: Highlight,
}

impl AnswerChoice {
    fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
            highlight: Highlight::Normal,
        }
    }
}

/// Choices laid out for one question; exactly one is correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub layout: AnswerLayout,
    pub choices: Vec<AnswerChoice>,
    pub correct_index: usize,
}

/// Lay out the choices of `question`.
///
/// A single incorrect answer means a True/False question with fixed order.
/// Otherwise the correct answer goes into a uniformly random slot and the
/// incorrect answers keep their order around it.
pub fn layout_answers<R: Rng>(question: &TriviaQuestion, rng: &mut R) -> AnswerSet {
    if question.is_true_false() {
        let correct_index = if question.correct_answer == TRUE_LABEL { 0 } else { 1 };
        let choices = [TRUE_LABEL, FALSE_LABEL]
            .iter()
            .enumerate()
            .map(|(slot, text)| AnswerChoice::new(*text, slot == correct_index))
            .collect();
        return AnswerSet {
            layout: AnswerLayout::TrueFalse,
            choices,
            correct_index,
        };
    }

    let count = question.answer_count();
    let correct_index = rng.gen_range(0..count);
    let mut incorrect = question.incorrect_answers.iter();
    let choices = (0..count)
        .filter_map(|slot| {
            if slot == correct_index {
                Some(AnswerChoice::new(question.correct_answer.as_str(), true))
            } else {
                incorrect
                    .next()
                    .map(|text| AnswerChoice::new(text.as_str(), false))
            }
        })
        .collect();

    AnswerSet {
        layout: AnswerLayout::MultipleChoice,
        choices,
        correct_index,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Exit,
    Enter,
}

/// Where the round currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    Idle,
    Fetching,
    AwaitingAnswer,
    /// Answer recorded or timed out; waiting out the reveal delay.
    Resolved { elapsed: f32 },
    Transition { kind: TransitionKind, elapsed: f32 },
    RoundOver,
    /// Fetch failed; see [`RoundController::failure`].
    Error,
}

/// Why a round could not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFailure {
    pub response_code: ResponseCode,
    pub detail: Option<String>,
}

/// Something the owner of the controller has to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    Started { total: usize },
    Answered { correct: bool },
    TimedOut,
    RoundOver { total: usize },
    Failed(ResponseCode),
}

/// A question set request for a specific round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub round_id: u64,
    pub url: String,
}

pub struct RoundController {
    phase: RoundPhase,
    round_id: u64,
    failure: Option<RoundFailure>,
    questions: Vec<TriviaQuestion>,
    current_index: usize,
    answers: Option<AnswerSet>,
    has_answered: bool,
    selected: usize,
    time_limit: Option<f32>,
    time_remaining: f32,
    timings: RoundTimings,
    rng: StdRng,
}

impl RoundController {
    pub fn new(timings: RoundTimings) -> Self {
        Self::with_rng(timings, StdRng::from_entropy())
    }

    /// Create a controller with a fixed random source.
    pub fn with_rng(timings: RoundTimings, rng: StdRng) -> Self {
        Self {
            phase: RoundPhase::Idle,
            round_id: 0,
            failure: None,
            questions: Vec::new(),
            current_index: 0,
            answers: None,
            has_answered: false,
            selected: 0,
            time_limit: None,
            time_remaining: 0.0,
            timings,
            rng,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn failure(&self) -> Option<&RoundFailure> {
        self.failure.as_ref()
    }

    /// Response code of the last fetch failure, `None` if there was none.
    pub fn response_code(&self) -> ResponseCode {
        self.failure
            .as_ref()
            .map(|f| f.response_code)
            .unwrap_or_default()
    }

    pub fn questions(&self) -> &[TriviaQuestion] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&TriviaQuestion> {
        match self.phase {
            RoundPhase::Idle | RoundPhase::Fetching | RoundPhase::Error => None,
            _ => self.questions.get(self.current_index),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn answer_set(&self) -> Option<&AnswerSet> {
        self.answers.as_ref()
    }

    pub fn choices(&self) -> &[AnswerChoice] {
        self.answers
            .as_ref()
            .map(|set| set.choices.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_answered(&self) -> bool {
        self.has_answered
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Remaining share of the countdown in `0.0..=1.0`, if timed.
    pub fn time_fraction(&self) -> Option<f32> {
        self.time_limit
            .map(|limit| (self.time_remaining / limit).clamp(0.0, 1.0))
    }

    pub fn time_remaining(&self) -> Option<f32> {
        self.time_limit.map(|_| self.time_remaining)
    }

    /// Progress of a running transition in `0.0..=1.0`.
    pub fn transition_progress(&self) -> Option<(TransitionKind, f32)> {
        match self.phase {
            RoundPhase::Transition { kind, elapsed } => {
                let duration = self.timings.transition_duration;
                let progress = if duration > 0.0 {
                    (elapsed / duration).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                Some((kind, progress))
            }
            _ => None,
        }
    }

    /// Reset for a new round and return the request to perform.
    ///
    /// Supersedes any fetch, reveal or transition of the previous round.
    pub fn begin_round(&mut self, api_url: &str, settings: &GameSettings) -> FetchTicket {
        self.reset();
        self.round_id += 1;
        self.time_limit = settings.time_limit();
        self.time_remaining = self.time_limit.unwrap_or(0.0);
        self.phase = RoundPhase::Fetching;

        let url = question_set_url(api_url, settings);
        info!("round {} fetching {}", self.round_id, url);
        FetchTicket {
            round_id: self.round_id,
            url,
        }
    }

    /// Feed the result of a fetch started by [`Self::begin_round`].
    ///
    /// Results of superseded rounds are dropped.
    pub fn complete_fetch(
        &mut self,
        round_id: u64,
        result: Result<QuestionSet, ApiError>,
    ) -> Option<RoundEvent> {
        if round_id != self.round_id || self.phase != RoundPhase::Fetching {
            debug!("dropping fetch result for round {}", round_id);
            return None;
        }

        let set = match result {
            Ok(set) => set,
            Err(err) => return Some(self.fail(ResponseCode::None, Some(err.to_string()))),
        };
        if !set.response_code.is_success() {
            return Some(self.fail(set.response_code, None));
        }
        if set.questions.is_empty() {
            return Some(self.fail(
                ResponseCode::NoResults,
                Some("The trivia service returned no questions.".to_string()),
            ));
        }

        self.questions = set.questions;
        self.current_index = 0;
        self.display_question();
        self.start_countdown();
        self.phase = RoundPhase::AwaitingAnswer;

        info!("round {} started with {} questions", self.round_id, self.questions.len());
        Some(RoundEvent::Started {
            total: self.questions.len(),
        })
    }

    /// Record an answer for the displayed question.
    ///
    /// Only the first submission per question counts.
    pub fn submit_answer(&mut self, slot: usize) -> Option<RoundEvent> {
        if self.phase != RoundPhase::AwaitingAnswer || self.has_answered {
            return None;
        }
        let answers = self.answers.as_mut()?;
        let choice = answers.choices.get_mut(slot)?;

        let correct = choice.is_correct;
        choice.highlight = if correct {
            Highlight::Correct
        } else {
            Highlight::Incorrect
        };
        self.has_answered = true;
        self.selected = slot;
        if !correct {
            self.reveal_correct();
        }
        self.phase = RoundPhase::Resolved { elapsed: 0.0 };

        debug!(
            "question {} answered {}",
            self.current_index + 1,
            if correct { "correctly" } else { "incorrectly" }
        );
        Some(RoundEvent::Answered { correct })
    }

    pub fn submit_selected(&mut self) -> Option<RoundEvent> {
        self.submit_answer(self.selected)
    }

    pub fn select_next(&mut self) {
        let count = self.choices().len();
        if self.accepts_input() && count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.choices().len();
        if self.accepts_input() && count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Whether an answer can still be submitted.
    pub fn accepts_input(&self) -> bool {
        self.phase == RoundPhase::AwaitingAnswer && !self.has_answered
    }

    /// Advance timers by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> Option<RoundEvent> {
        match self.phase {
            RoundPhase::AwaitingAnswer => {
                self.time_limit?;
                self.time_remaining = (self.time_remaining - dt).max(0.0);
                if self.time_remaining > 0.0 {
                    return None;
                }
                Some(self.time_out())
            }
            RoundPhase::Resolved { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed < self.timings.reveal_delay {
                    self.phase = RoundPhase::Resolved { elapsed };
                    return None;
                }
                self.advance()
            }
            RoundPhase::Transition { kind, elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed < self.timings.transition_duration {
                    self.phase = RoundPhase::Transition { kind, elapsed };
                    return None;
                }
                match kind {
                    TransitionKind::Exit => {
                        self.current_index += 1;
                        self.display_question();
                        self.phase = RoundPhase::Transition {
                            kind: TransitionKind::Enter,
                            elapsed: 0.0,
                        };
                    }
                    TransitionKind::Enter => {
                        self.start_countdown();
                        self.phase = RoundPhase::AwaitingAnswer;
                    }
                }
                None
            }
            RoundPhase::Idle
            | RoundPhase::Fetching
            | RoundPhase::RoundOver
            | RoundPhase::Error => None,
        }
    }

    /// Drop the current round; any in-flight fetch becomes stale.
    pub fn abort(&mut self) {
        if self.phase != RoundPhase::Idle {
            debug!("round {} aborted", self.round_id);
        }
        self.reset();
        self.round_id += 1;
    }

    fn reset(&mut self) {
        self.phase = RoundPhase::Idle;
        self.failure = None;
        self.questions.clear();
        self.current_index = 0;
        self.answers = None;
        self.has_answered = false;
        self.selected = 0;
    }

    fn fail(&mut self, response_code: ResponseCode, detail: Option<String>) -> RoundEvent {
        warn!("round {} failed: {}", self.round_id, response_code);
        if let Some(detail) = &detail {
            warn!("{}", detail);
        }
        self.questions.clear();
        self.failure = Some(RoundFailure {
            response_code,
            detail,
        });
        self.phase = RoundPhase::Error;
        RoundEvent::Failed(response_code)
    }

    fn display_question(&mut self) {
        self.has_answered = false;
        self.selected = 0;
        self.answers = self
            .questions
            .get(self.current_index)
            .map(|question| layout_answers(question, &mut self.rng));
    }

    fn start_countdown(&mut self) {
        self.time_remaining = self.time_limit.unwrap_or(0.0);
    }

    fn time_out(&mut self) -> RoundEvent {
        debug!("question {} timed out", self.current_index + 1);
        self.has_answered = true;
        self.reveal_correct();
        self.phase = RoundPhase::Resolved { elapsed: 0.0 };
        RoundEvent::TimedOut
    }

    fn reveal_correct(&mut self) {
        if let Some(answers) = self.answers.as_mut() {
            if let Some(choice) = answers.choices.get_mut(answers.correct_index) {
                choice.highlight = Highlight::Correct;
            }
        }
    }

    fn advance(&mut self) -> Option<RoundEvent> {
        if self.current_index + 1 < self.questions.len() {
            self.phase = RoundPhase::Transition {
                kind: TransitionKind::Exit,
                elapsed: 0.0,
            };
            return None;
        }

        self.phase = RoundPhase::RoundOver;
        info!("round {} over", self.round_id);
        Some(RoundEvent::RoundOver {
            total: self.questions.len(),
        })
    }
}
