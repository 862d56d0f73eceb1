use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

/// One selectable answer of a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// A quiz item: a prompt and its options in display order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    #[serde(default)]
    pub hint: Option<String>,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn option(&self, id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == id)
    }

    pub fn option_index(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|option| option.id == id)
    }

    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.is_correct)
    }
}

/// A titled, ordered set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub completion_message: Option<String>,
    pub questions: Vec<Question>,
}

/// Authoring mistakes caught when quiz content is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("quiz must contain at least one question")]
    NoQuestions,
    #[error("duplicate question id `{0}`")]
    DuplicateQuestion(String),
    #[error("question `{question}` needs at least two options, found {found}")]
    TooFewOptions { question: String, found: usize },
    #[error("question `{question}` has duplicate option id `{option}`")]
    DuplicateOption { question: String, option: String },
    #[error("question `{question}` has {found} correct options, expected exactly one")]
    CorrectCount { question: String, found: usize },
}

/// Checks the invariants every quiz must satisfy before a session can run it.
pub fn validate_questions(questions: &[Question]) -> Result<(), ContentError> {
    if questions.is_empty() {
        return Err(ContentError::NoQuestions);
    }

    let mut question_ids = HashSet::with_capacity(questions.len());
    for question in questions {
        if !question_ids.insert(question.id.as_str()) {
            return Err(ContentError::DuplicateQuestion(question.id.clone()));
        }

        if question.options.len() < 2 {
            return Err(ContentError::TooFewOptions {
                question: question.id.clone(),
                found: question.options.len(),
            });
        }

        let mut option_ids = HashSet::with_capacity(question.options.len());
        for option in &question.options {
            if !option_ids.insert(option.id.as_str()) {
                return Err(ContentError::DuplicateOption {
                    question: question.id.clone(),
                    option: option.id.clone(),
                });
            }
        }

        let correct = question.options.iter().filter(|o| o.is_correct).count();
        if correct != 1 {
            return Err(ContentError::CorrectCount {
                question: question.id.clone(),
                found: correct,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A question with four options `a`..`d` where `correct` is the right one.
    pub fn question(id: &str, correct: &str) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("Prompt for {id}"),
            hint: Some(format!("Hint for {id}")),
            options: ["a", "b", "c", "d"]
                .into_iter()
                .map(|option| QuizOption {
                    id: option.to_string(),
                    text: format!("Option {option}"),
                    is_correct: option == correct,
                    explanation: (option == correct).then(|| format!("{option} is right")),
                })
                .collect(),
        }
    }

    pub fn four_questions() -> Vec<Question> {
        vec![
            question("q1", "b"),
            question("q2", "b"),
            question("q3", "c"),
            question("q4", "b"),
        ]
    }
}
