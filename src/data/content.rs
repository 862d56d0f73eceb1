//! Course content compiled into the binary.

use crate::models::{Catalog, QuizDefinition};

use super::loader::{parse_catalog, parse_quiz, LoadError};

/// Id of the quiz attached to the first lesson step.
pub const REGISTER_BASICS_QUIZ_ID: &str = "register-basics";

const REGISTER_BASICS_QUIZ: &str = include_str!("../../content/register_basics_quiz.json");
const CATALOG: &str = include_str!("../../content/catalog.json");

pub fn builtin_quiz() -> Result<QuizDefinition, LoadError> {
    parse_quiz(REGISTER_BASICS_QUIZ, REGISTER_BASICS_QUIZ_ID)
}

pub fn builtin_catalog() -> Result<Catalog, LoadError> {
    parse_catalog(CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Route};

    #[test]
    fn builtin_quiz_is_valid() {
        let quiz = builtin_quiz().unwrap();
        assert_eq!(quiz.id, REGISTER_BASICS_QUIZ_ID);
        assert_eq!(quiz.questions.len(), 4);
        assert!(quiz.questions.iter().all(|q| q.options.len() == 4));
        assert!(quiz.completion_message.is_some());
    }

    #[test]
    fn builtin_catalog_links_first_step_to_quiz() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.steps.len(), 4);
        assert_eq!(catalog.patterns.len(), 5);
        assert_eq!(
            catalog.steps[0].route(),
            Route::Quiz(REGISTER_BASICS_QUIZ_ID.to_string())
        );
        assert!(catalog.patterns.iter().all(|p| p.difficulty.is_some()));
        assert_eq!(catalog.patterns[3].difficulty, Some(Difficulty::Advanced));
    }
}
