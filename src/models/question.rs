use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One multiple-choice item as served by the quiz provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "Question")]
    pub text: String,
    #[serde(rename = "Options")]
    pub options: Vec<String>,
    #[serde(rename = "Answer")]
    pub answer: String,
}

impl Question {
    pub fn new(text: impl Into<String>, options: &[&str], answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.into(),
        }
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    fn validate(&self, index: usize) -> Result<(), String> {
        if self.options.is_empty() {
            return Err(format!("question {} has no options", index + 1));
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if option.is_empty() {
                return Err(format!("question {} has an empty option", index + 1));
            }
            if !seen.insert(option.as_str()) {
                return Err(format!(
                    "question {} repeats option {:?}",
                    index + 1,
                    option
                ));
            }
        }

        if !self.has_option(&self.answer) {
            return Err(format!(
                "question {} answer {:?} is not one of its options",
                index + 1,
                self.answer
            ));
        }

        Ok(())
    }
}

/// An ordered, non-empty set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(rename = "Questions")]
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    /// Checks the shape the session controller relies on.
    pub fn validate(&self) -> Result<(), String> {
        if self.questions.is_empty() {
            return Err("quiz contains no questions".to_string());
        }

        self.questions
            .iter()
            .enumerate()
            .try_for_each(|(index, question)| question.validate(index))
    }
}

/// Response body of `GET /class/{class_id}/quiz`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizEnvelope {
    pub quiz: Quiz,
}
