//! Error types for loading and running a quiz.

use std::io;

use thiserror::Error;

/// The one message shown when a quiz cannot be loaded, whatever the cause.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load quiz. Please try again later.";

/// Why a quiz load failed.
///
/// Every variant is presented to the user as the same load failure; the
/// variants exist for logging.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("invalid quiz provider url: {0}")]
    InvalidUrl(String),
    #[error("quiz request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("quiz provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("quiz response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("quiz response has an invalid shape: {0}")]
    InvalidQuiz(String),
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}

/// Errors that stop the quiz client itself.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
