mod catalog;
mod question;

pub use catalog::{Catalog, CatalogEntry, Difficulty, Route, Section};
pub use question::{validate_questions, ContentError, Question, QuizDefinition, QuizOption};

#[cfg(test)]
pub(crate) use question::fixtures;
