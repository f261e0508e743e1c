use crossterm::event::KeyCode;
use tracing::{debug, info, warn};

use crate::data::LoadOutcome;
use crate::error::LoadError;
use crate::models::Phase;
use crate::session::Session;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Load,
    Quit,
}

/// State of the quiz page for one class.
#[derive(Debug)]
pub enum QuizPage {
    Loading { generation: u64 },
    Error(LoadError),
    Ready(Session),
}

#[derive(Debug)]
pub enum Screen {
    Landing,
    Quiz(QuizPage),
}

pub struct App {
    class_id: String,
    screen: Screen,
    cursor: usize,
}

impl App {
    pub fn new(class_id: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            screen: Screen::Landing,
            cursor: 0,
        }
    }

    pub fn class_id(&self) -> &str {
        &self.class_id
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// `None` while the landing screen is shown.
    pub fn phase(&self) -> Option<Phase> {
        match &self.screen {
            Screen::Landing => None,
            Screen::Quiz(QuizPage::Loading { .. }) => Some(Phase::Loading),
            Screen::Quiz(QuizPage::Error(_)) => Some(Phase::Error),
            Screen::Quiz(QuizPage::Ready(session)) => Some(session.phase()),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Quiz(QuizPage::Ready(session)) => Some(session),
            _ => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.screen {
            Screen::Quiz(QuizPage::Ready(session)) => Some(session),
            _ => None,
        }
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.screen {
            Screen::Quiz(QuizPage::Error(err)) => Some(err),
            _ => None,
        }
    }

    /// Index of the highlighted option on the question screen.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Shows the loading screen and waits for the outcome of `generation`.
    pub fn begin_loading(&mut self, generation: u64) {
        debug!(generation, class_id = %self.class_id, "waiting for quiz");
        self.screen = Screen::Quiz(QuizPage::Loading { generation });
        self.cursor = 0;
    }

    /// Applies a finished load. Returns `false` if the outcome is stale.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> bool {
        let expected = match &self.screen {
            Screen::Quiz(QuizPage::Loading { generation }) => *generation,
            _ => {
                debug!(generation = outcome.generation, "discarding quiz load, not loading");
                return false;
            }
        };

        if outcome.generation != expected {
            debug!(
                generation = outcome.generation,
                expected, "discarding stale quiz load"
            );
            return false;
        }

        let page = match outcome.result {
            Ok(quiz) => {
                info!(questions = quiz.len(), "quiz started");
                QuizPage::Ready(Session::new(quiz))
            }
            Err(err) => {
                warn!(error = %err, class_id = %self.class_id, "failed to load quiz");
                QuizPage::Error(err)
            }
        };

        self.screen = Screen::Quiz(page);
        self.cursor = 0;
        true
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Command {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
            return Command::Quit;
        }

        match self.phase() {
            None => self.handle_landing_key(key),
            Some(Phase::Loading) => Command::None,
            Some(Phase::Error) => self.handle_error_key(key),
            Some(Phase::InProgress) => self.handle_question_key(key),
            Some(Phase::Finished) => self.handle_result_key(key),
        }
    }

    fn handle_landing_key(&mut self, key: KeyCode) -> Command {
        match key {
            KeyCode::Enter => Command::Load,
            KeyCode::Esc => Command::Quit,
            _ => Command::None,
        }
    }

    fn handle_error_key(&mut self, key: KeyCode) -> Command {
        match key {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Command::Load,
            _ => Command::None,
        }
    }

    fn handle_question_key(&mut self, key: KeyCode) -> Command {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
            KeyCode::Char(' ') => self.select_option(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.option_count() {
                    self.cursor = index;
                    self.select_option(index);
                }
            }
            KeyCode::Enter => self.advance(),
            _ => {}
        }
        Command::None
    }

    fn handle_result_key(&mut self, key: KeyCode) -> Command {
        if matches!(key, KeyCode::Char('r') | KeyCode::Char('R')) {
            self.restart();
        }
        Command::None
    }

    fn option_count(&self) -> usize {
        self.session()
            .and_then(Session::current_question)
            .map_or(0, |question| question.options.len())
    }

    fn move_cursor_down(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    fn move_cursor_up(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    fn select_option(&mut self, index: usize) {
        let Some(session) = self.session_mut() else {
            return;
        };
        let Some(option) = session
            .current_question()
            .and_then(|question| question.options.get(index))
            .cloned()
        else {
            return;
        };
        session.select_answer(&option);
    }

    fn advance(&mut self) {
        let Some(session) = self.session_mut() else {
            return;
        };
        if !session.can_advance() {
            return;
        }
        session.advance();
        self.cursor = 0;
    }

    fn restart(&mut self) {
        if let Some(session) = self.session_mut() {
            session.restart();
            self.cursor = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, Quiz};

    fn capitals() -> Quiz {
        Quiz::new(vec![
            Question::new("Capital of France?", &["London", "Paris"], "Paris"),
            Question::new("Capital of France, again?", &["Paris", "Berlin"], "Paris"),
        ])
    }

    fn loaded_app() -> App {
        let mut app = App::new("cs101");
        app.begin_loading(1);
        assert!(app.apply_load(LoadOutcome {
            generation: 1,
            result: Ok(capitals()),
        }));
        app
    }

    #[test]
    fn test_landing_starts_load() {
        let mut app = App::new("cs101");
        assert_eq!(app.phase(), None);
        assert_eq!(app.handle_key(KeyCode::Enter), Command::Load);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Command::Quit);
    }

    #[test]
    fn test_load_success_starts_session() {
        let app = loaded_app();
        assert_eq!(app.phase(), Some(Phase::InProgress));
        let session = app.session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn test_load_failure_shows_error_without_session() {
        let mut app = App::new("cs101");
        app.begin_loading(1);
        app.apply_load(LoadOutcome {
            generation: 1,
            result: Err(LoadError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)),
        });

        assert_eq!(app.phase(), Some(Phase::Error));
        assert!(app.session().is_none());
        assert!(app.load_error().is_some());
        assert_eq!(app.handle_key(KeyCode::Char('r')), Command::Load);
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut app = App::new("cs101");
        app.begin_loading(1);
        app.begin_loading(2);

        let applied = app.apply_load(LoadOutcome {
            generation: 1,
            result: Ok(capitals()),
        });
        assert!(!applied);
        assert_eq!(app.phase(), Some(Phase::Loading));
    }

    #[test]
    fn test_outcome_after_load_is_discarded() {
        let mut app = loaded_app();
        app.handle_key(KeyCode::Char('2'));

        let applied = app.apply_load(LoadOutcome {
            generation: 1,
            result: Err(LoadError::InvalidQuiz("late".to_string())),
        });
        assert!(!applied);
        assert_eq!(app.session().unwrap().selected_answer(), Some("Paris"));
    }

    #[test]
    fn test_loading_ignores_keys_but_quit() {
        let mut app = App::new("cs101");
        app.begin_loading(1);
        assert_eq!(app.handle_key(KeyCode::Enter), Command::None);
        assert_eq!(app.handle_key(KeyCode::Char('Q')), Command::Quit);
    }

    #[test]
    fn test_enter_without_selection_does_nothing() {
        let mut app = loaded_app();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().unwrap().current_index(), 0);
    }

    #[test]
    fn test_cursor_and_space_select() {
        let mut app = loaded_app();
        app.handle_key(KeyCode::Down);
        assert_eq!(app.cursor(), 1);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.cursor(), 0);
        app.handle_key(KeyCode::Char('k'));
        assert_eq!(app.cursor(), 1);

        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.session().unwrap().selected_answer(), Some("Paris"));
        assert_eq!(app.session().unwrap().score(), 0);
    }

    #[test]
    fn test_digit_out_of_range_is_ignored() {
        let mut app = loaded_app();
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.session().unwrap().selected_answer(), None);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_full_pass_and_restart() {
        let mut app = loaded_app();
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.cursor(), 0);
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.phase(), Some(Phase::Finished));
        let summary = app.session().unwrap().summary().unwrap();
        assert_eq!((summary.score, summary.total), (1, 2));
        assert_eq!(summary.percentage(), 50);

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.phase(), Some(Phase::InProgress));
        assert_eq!(app.session().unwrap().score(), 0);
        assert_eq!(app.session().unwrap().current_index(), 0);
    }
}
