//! Background quiz loads.
//!
//! Each load runs on its own tokio task and reports back over a channel,
//! tagged with a generation number. Starting a new load or dropping the
//! [`Loader`] aborts the previous task, and the generation lets the
//! receiver discard anything that still slips through.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::LoadError;
use crate::models::Quiz;

use super::loader::QuizClient;

/// Result of one load attempt.
#[derive(Debug)]
pub struct LoadOutcome {
    pub generation: u64,
    pub result: Result<Quiz, LoadError>,
}

pub struct Loader {
    client: Arc<QuizClient>,
    tx: mpsc::UnboundedSender<LoadOutcome>,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl Loader {
    pub fn new(client: QuizClient) -> (Self, mpsc::UnboundedReceiver<LoadOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let loader = Self {
            client: Arc::new(client),
            tx,
            task: None,
            generation: 0,
        };
        (loader, rx)
    }

    /// Spawns a load for `class_id`, aborting any load still in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, class_id: &str) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let class_id = class_id.to_string();

        self.task = Some(tokio::spawn(async move {
            let result = client.fetch_quiz(&class_id).await;
            // The receiver is gone once the app has shut down.
            let _ = tx.send(LoadOutcome { generation, result });
        }));

        debug!(generation, "quiz load started");
        generation
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                debug!(generation = self.generation, "aborting quiz load");
            }
            task.abort();
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.cancel();
    }
}
