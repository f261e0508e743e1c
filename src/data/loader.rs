use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{LoadError, QuizError};
use crate::models::{Quiz, QuizEnvelope};

/// HTTP client for the quiz provider.
#[derive(Debug, Clone)]
pub struct QuizClient {
    http: Client,
    base_url: String,
}

impl QuizClient {
    pub fn new(config: &ClientConfig) -> Result<Self, QuizError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/class/{class_id}/quiz`, with the class id as a single
    /// encoded path segment.
    pub fn quiz_url(&self, class_id: &str) -> Result<Url, LoadError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LoadError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| LoadError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["class", class_id, "quiz"]);

        Ok(url)
    }

    /// Fetches and validates the quiz for `class_id`.
    ///
    /// The quiz is returned whole or not at all.
    pub async fn fetch_quiz(&self, class_id: &str) -> Result<Quiz, LoadError> {
        let url = self.quiz_url(class_id)?;
        info!(%url, class_id, "loading quiz");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "quiz response received");

        let envelope: QuizEnvelope = serde_json::from_slice(&body)?;
        envelope.quiz.validate().map_err(LoadError::InvalidQuiz)?;

        info!(class_id, questions = envelope.quiz.len(), "quiz loaded");
        Ok(envelope.quiz)
    }
}
