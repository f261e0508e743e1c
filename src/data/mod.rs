mod loader;
mod task;

pub use loader::QuizClient;
pub use task::{LoadOutcome, Loader};
