//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::error::QuizError;

/// Address of the quiz provider when none is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Log file name, placed in the system temp directory by default.
pub const DEFAULT_LOG_FILE: &str = "class-quiz.log";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the quiz provider, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// `None` leaves the request unbounded.
    pub request_timeout: Option<Duration>,
    pub log_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            log_file: default_log_file(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    /// Rejects anything but an absolute http(s) base url and a zero timeout.
    pub fn validate(&self) -> Result<(), QuizError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| QuizError::Config(format!("base url {:?}: {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(QuizError::Config(format!(
                "base url {:?} must use http or https",
                self.base_url
            )));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(QuizError::Config("timeout must be greater than zero".to_string()));
        }

        Ok(())
    }
}

pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE)
}
