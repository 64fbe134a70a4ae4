//! Question catalog
//!
//! The catalog is the fixed, ordered list of questions a quiz walks through.
//! It is loaded once, wrapped in an `Arc` and never mutated afterwards.
//! Questions are identified by their zero-based position.

use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::utils::errors::{QuizBuddyError, Result};

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt shown to the user
    pub question: String,
    /// Options in display order, matched case-insensitively
    pub options: Vec<String>,
    /// The correct option
    pub answer: String,
}

impl Question {
    /// Create a new question
    pub fn new<S: Into<String>>(question: S, options: Vec<S>, answer: S) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// Whether `input` names one of the options, ignoring case
    pub fn accepts(&self, input: &str) -> bool {
        let input = input.to_lowercase();
        self.options.iter().any(|option| option.to_lowercase() == input)
    }

    /// Whether `input` is the correct answer, ignoring case
    pub fn is_correct(&self, input: &str) -> bool {
        self.answer.to_lowercase() == input.to_lowercase()
    }

    /// Render the prompt followed by numbered options, one per line
    pub fn render(&self) -> String {
        let mut text = format!("{}\n", self.question);
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}. {}", i + 1, option))
            .collect::<Vec<_>>()
            .join("\n");
        text.push_str(&options);
        text.trim().to_string()
    }
}

/// Ordered, read-only question list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// What the quiz is about, e.g. "Python"
    pub subject: String,
    #[serde(default)]
    questions: Vec<Question>,
}

impl Catalog {
    /// Create a catalog from an ordered list of questions
    pub fn new(subject: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            subject: subject.into(),
            questions,
        }
    }

    /// Parse a catalog from TOML text
    ///
    /// ```toml
    /// subject = "Python"
    ///
    /// [[questions]]
    /// question = "What is 1 + 1?"
    /// options = ["1", "2", "3"]
    /// answer = "2"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        debug!(subject = %catalog.subject, questions = catalog.len(), "Catalog parsed");
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_toml_str(&content)?;
        catalog.validate()?;

        info!(path = %path.display(), subject = %catalog.subject,
              questions = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Question at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalog has no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate questions in order
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Check that every question can actually be answered correctly
    pub fn validate(&self) -> Result<()> {
        if self.subject.trim().is_empty() {
            return Err(QuizBuddyError::InvalidInput("Catalog subject is required".to_string()));
        }

        for (index, question) in self.questions.iter().enumerate() {
            if question.question.trim().is_empty() {
                return Err(QuizBuddyError::InvalidInput(
                    format!("Question {} has an empty prompt", index)
                ));
            }

            if question.options.is_empty() {
                return Err(QuizBuddyError::InvalidInput(
                    format!("Question {} has no options", index)
                ));
            }

            if !question.accepts(&question.answer) {
                return Err(QuizBuddyError::InvalidInput(
                    format!("Answer of question {} is not one of its options", index)
                ));
            }
        }

        Ok(())
    }

    /// Built-in catalog used when no catalog file is configured
    pub fn python_basics() -> Self {
        Self::new(
            "Python",
            vec![
                Question::new(
                    "What is the output of print(2 ** 3)?",
                    vec!["6", "8", "9", "5"],
                    "8",
                ),
                Question::new(
                    "Which keyword is used to define a function in Python?",
                    vec!["func", "define", "def", "function"],
                    "def",
                ),
                Question::new(
                    "Which of these is a mutable data type?",
                    vec!["tuple", "str", "list", "frozenset"],
                    "list",
                ),
                Question::new(
                    "What does len([1, 2, 3]) return?",
                    vec!["2", "3", "4", "None"],
                    "3",
                ),
                Question::new(
                    "Which value is falsy in Python?",
                    vec!["[0]", "\"False\"", "0", "-1"],
                    "0",
                ),
            ],
        )
    }
}
