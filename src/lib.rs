//! # class-quiz
//!
//! A terminal client for class quizzes. It fetches a set of multiple-choice
//! questions for a class from a quiz provider, walks the user through them
//! one at a time and shows the final score.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use class_quiz::{ClientConfig, QuizError, QuizPortal};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = ClientConfig::default().with_base_url("http://localhost:8000");
//!     QuizPortal::new("cs101", &config)?.run().await
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod error;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::info;

pub use app::{App, Command, QuizPage, Screen};
pub use config::ClientConfig;
pub use data::{LoadOutcome, Loader, QuizClient};
pub use error::{LOAD_FAILURE_MESSAGE, LoadError, QuizError};
pub use models::{Phase, Question, Quiz, QuizEnvelope};
pub use session::{Session, SessionState, Summary};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A quiz page for one class, ready to run in the terminal.
pub struct QuizPortal {
    app: App,
    client: QuizClient,
    skip_landing: bool,
}

impl QuizPortal {
    pub fn new(class_id: impl Into<String>, config: &ClientConfig) -> Result<Self, QuizError> {
        config.validate()?;

        let class_id = class_id.into();
        if class_id.trim().is_empty() {
            return Err(QuizError::Config("class id must not be empty".to_string()));
        }

        Ok(Self {
            app: App::new(class_id),
            client: QuizClient::new(config)?,
            skip_landing: false,
        })
    }

    /// Go straight to loading the quiz instead of showing the landing screen.
    pub fn skip_landing(mut self, skip: bool) -> Self {
        self.skip_landing = skip;
        self
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the quiz in the terminal until the user quits.
    ///
    /// Must be called from within a multi-threaded tokio runtime; the quiz is
    /// fetched on a background task while this loop blocks on input.
    pub async fn run(self) -> Result<(), QuizError> {
        let Self {
            mut app,
            client,
            skip_landing,
        } = self;

        info!(class_id = app.class_id(), base_url = client.base_url(), "starting quiz client");

        let (mut loader, mut outcomes) = Loader::new(client);
        if skip_landing {
            start_load(&mut app, &mut loader);
        }

        let mut guard = terminal::TerminalGuard::enter()?;
        let result = run_event_loop(guard.terminal(), &mut app, &mut loader, &mut outcomes);

        // Late responses must not reach a torn-down session.
        loader.cancel();
        outcomes.close();
        info!("quiz client stopped");
        result
    }
}

fn start_load(app: &mut App, loader: &mut Loader) {
    let generation = loader.start(app.class_id());
    app.begin_loading(generation);
}

fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut App,
    loader: &mut Loader,
    outcomes: &mut mpsc::UnboundedReceiver<LoadOutcome>,
) -> Result<(), QuizError> {
    loop {
        while let Ok(outcome) = outcomes.try_recv() {
            app.apply_load(outcome);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.handle_key(key.code) {
                Command::Quit => break,
                Command::Load => start_load(app, loader),
                Command::None => {}
            }
        }
    }

    Ok(())
}
