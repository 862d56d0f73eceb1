mod content;
mod loader;

pub use content::{builtin_catalog, builtin_quiz, REGISTER_BASICS_QUIZ_ID};
pub use loader::{load_quiz_from_json, parse_catalog, parse_quiz, LoadError};
