use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::{validate_questions, Catalog, ContentError, Question, QuizDefinition};

/// Title given to quizzes loaded from a bare list of questions.
const CUSTOM_QUIZ_TITLE: &str = "Custom quiz";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid quiz content: {0}")]
    Invalid(#[from] ContentError),
}

/// Parses quiz JSON; a bare question list is stored under `fallback_id`.
///
/// A top-level array is read as a question list, anything else as a full
/// definition, so parse errors point at the offending field.
pub fn parse_quiz(json: &str, fallback_id: &str) -> Result<QuizDefinition, LoadError> {
    let definition = if json.trim_start().starts_with('[') {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        QuizDefinition {
            id: fallback_id.to_string(),
            title: CUSTOM_QUIZ_TITLE.to_string(),
            summary: None,
            completion_message: None,
            questions,
        }
    } else {
        serde_json::from_str::<QuizDefinition>(json)?
    };

    validate_questions(&definition.questions)?;
    Ok(definition)
}

pub fn parse_catalog(json: &str) -> Result<Catalog, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads and validates a quiz from a JSON file.
pub fn load_quiz_from_json<P: AsRef<Path>>(
    path: P,
    fallback_id: &str,
) -> Result<QuizDefinition, LoadError> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let definition = parse_quiz(&json, fallback_id)?;

    info!(
        path = %path.display(),
        questions = definition.questions.len(),
        "loaded quiz"
    );
    Ok(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE_LIST: &str = r#"[
        {
            "id": "only",
            "prompt": "Pick b",
            "options": [
                { "id": "a", "text": "A" },
                { "id": "b", "text": "B", "is_correct": true }
            ]
        }
    ]"#;

    #[test]
    fn bare_question_list_gets_fallback_identity() {
        let quiz = parse_quiz(BARE_LIST, "custom").unwrap();
        assert_eq!(quiz.id, "custom");
        assert_eq!(quiz.title, CUSTOM_QUIZ_TITLE);
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].hint, None);
    }

    #[test]
    fn full_definition_keeps_its_own_identity() {
        let json = format!(
            r#"{{ "id": "mine", "title": "Mine", "questions": {BARE_LIST} }}"#
        );
        let quiz = parse_quiz(&json, "custom").unwrap();
        assert_eq!(quiz.id, "mine");
        assert_eq!(quiz.title, "Mine");
    }

    #[test]
    fn invalid_content_is_rejected() {
        let json = BARE_LIST.replace(r#", "is_correct": true"#, "");
        let err = parse_quiz(&json, "custom").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(ContentError::CorrectCount { found: 0, .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_quiz("{ not json", "custom"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn malformed_definition_names_the_bad_field() {
        let json = format!(r#"{{ "id": "mine", "title": 7, "questions": {BARE_LIST} }}"#);
        let err = parse_quiz(&json, "custom").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        let message = err.to_string();
        assert!(message.contains("invalid type"), "{message}");
        assert!(!message.contains("untagged"), "{message}");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("form-lessons-missing-quiz.json");
        let err = load_quiz_from_json(&path, "custom").unwrap_err();
        assert!(err.to_string().contains("form-lessons-missing-quiz.json"));
    }

    #[test]
    fn loads_quiz_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "form-lessons-quiz-{}.json",
            std::process::id()
        ));
        fs::write(&path, BARE_LIST).unwrap();

        let quiz = load_quiz_from_json(&path, "custom");
        let _ = fs::remove_file(&path);

        assert_eq!(quiz.unwrap().questions[0].id, "only");
    }
}
