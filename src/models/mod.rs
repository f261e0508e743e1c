mod phase;
mod question;

pub use phase::Phase;
pub use question::{Question, Quiz, QuizEnvelope};
