//! Quiz session controller.
//!
//! The session is an explicit [`SessionState`] value driven by three pure
//! transitions: [`select_answer`], [`advance`] and [`restart`]. Violated
//! preconditions leave the state untouched instead of failing.

use tracing::debug;

use crate::models::{Phase, Question, Quiz};

/// Mutable progress through one quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_index: usize,
    pub selected_answer: Option<String>,
    pub score: usize,
    pub phase: Phase,
}

impl SessionState {
    /// State at the start of a pass.
    pub fn initial() -> Self {
        Self {
            current_index: 0,
            selected_answer: None,
            score: 0,
            phase: Phase::InProgress,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Marks `option` as the chosen answer for the current question.
///
/// Ignored unless the session is in progress and `option` belongs to the
/// current question.
pub fn select_answer(quiz: &Quiz, state: SessionState, option: &str) -> SessionState {
    if state.phase != Phase::InProgress {
        return state;
    }

    let Some(question) = quiz.question(state.current_index) else {
        return state;
    };

    if !question.has_option(option) {
        return state;
    }

    SessionState {
        selected_answer: Some(option.to_string()),
        ..state
    }
}

/// Grades the current question and moves to the next one, or finishes the
/// pass on the last question.
///
/// Ignored unless the session is in progress with an answer selected.
pub fn advance(quiz: &Quiz, state: SessionState) -> SessionState {
    if state.phase != Phase::InProgress {
        return state;
    }

    let Some(question) = quiz.question(state.current_index) else {
        return state;
    };

    let Some(selected) = state.selected_answer.as_deref() else {
        return state;
    };

    let score = if question.is_correct(selected) {
        state.score + 1
    } else {
        state.score
    };

    if state.current_index < quiz.last_index() {
        SessionState {
            current_index: state.current_index + 1,
            selected_answer: None,
            score,
            phase: Phase::InProgress,
        }
    } else {
        SessionState {
            score,
            phase: Phase::Finished,
            ..state
        }
    }
}

/// Starts a new pass over the same questions. Safe from any phase.
pub fn restart(_quiz: &Quiz, _state: SessionState) -> SessionState {
    SessionState::initial()
}

/// Final score of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
}

impl Summary {
    pub fn new(score: usize, total: usize) -> Self {
        Self { score, total }
    }

    /// Score as a whole percentage, rounding halves away from zero.
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (200 * self.score + self.total) / (2 * self.total)
    }
}

/// A loaded quiz together with the state of the current pass.
#[derive(Debug, Clone)]
pub struct Session {
    quiz: Quiz,
    state: SessionState,
}

impl Session {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            state: SessionState::initial(),
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_question_number(&self) -> usize {
        self.state.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.question(self.state.current_index)
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.state.selected_answer.as_deref()
    }

    pub fn score(&self) -> usize {
        self.state.score
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_index >= self.quiz.last_index()
    }

    /// Whether the primary action is enabled.
    pub fn can_advance(&self) -> bool {
        self.state.phase == Phase::InProgress && self.state.selected_answer.is_some()
    }

    /// Label of the primary action for the current question.
    pub fn advance_label(&self) -> &'static str {
        if self.is_last_question() {
            "Finish Quiz"
        } else {
            "Next Question"
        }
    }

    /// Only available once the pass is finished.
    pub fn summary(&self) -> Option<Summary> {
        (self.state.phase == Phase::Finished)
            .then(|| Summary::new(self.state.score, self.quiz.len()))
    }

    pub fn select_answer(&mut self, option: &str) {
        let state = std::mem::take(&mut self.state);
        self.state = select_answer(&self.quiz, state, option);
    }

    pub fn advance(&mut self) {
        let before = self.state.current_index;
        let state = std::mem::take(&mut self.state);
        self.state = advance(&self.quiz, state);
        debug!(
            from = before,
            to = self.state.current_index,
            score = self.state.score,
            phase = %self.state.phase,
            "advanced"
        );
    }

    pub fn restart(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = restart(&self.quiz, state);
        debug!(questions = self.quiz.len(), "restarted quiz");
    }
}
