//! # form-lessons
//!
//! A terminal edition of the React Hook Form lesson catalog with its
//! interactive comprehension quiz.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use form_lessons::{Config, Lessons, LessonsError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LessonsError> {
//!     let lessons = Lessons::new(&Config::default())?;
//!     lessons.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod data;
pub mod logging;
mod models;
pub mod quiz;
pub mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::{info, warn};

pub use app::{ActiveQuiz, App, Screen};
pub use config::Config;
pub use data::{
    builtin_catalog, builtin_quiz, load_quiz_from_json, parse_catalog, parse_quiz, LoadError,
    REGISTER_BASICS_QUIZ_ID,
};
pub use models::{
    validate_questions, Catalog, CatalogEntry, ContentError, Difficulty, Question,
    QuizDefinition, QuizOption, Route, Section,
};

/// How long the event loop waits for input before repainting.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for lesson operations.
#[derive(Debug, Error)]
pub enum LessonsError {
    #[error("failed to load content: {0}")]
    Load(#[from] LoadError),
    #[error("invalid quiz content: {0}")]
    Content(#[from] ContentError),
    #[error("unknown quiz `{0}`")]
    UnknownQuiz(String),
    #[error("failed to set up logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// The lesson catalog and quiz, ready to run in the terminal.
pub struct Lessons {
    app: App,
}

impl Lessons {
    pub fn new(config: &Config) -> Result<Self, LessonsError> {
        Ok(Self {
            app: App::from_config(config)?,
        })
    }

    /// Takes over the terminal until the visitor quits.
    ///
    /// Must be called from within a tokio runtime so the celebration
    /// timeline can be scheduled.
    pub fn run(mut self) -> Result<(), LessonsError> {
        let mut session = terminal::TerminalSession::enter()?;
        info!("terminal ui started");
        let result = run_event_loop(&mut session, &mut self.app);
        session.leave()?;
        info!("terminal ui stopped");
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    session: &mut terminal::TerminalSession,
    app: &mut App,
) -> Result<(), LessonsError> {
    loop {
        session.terminal().draw(|frame| ui::render(frame, app))?;

        if !event::poll(FRAME_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Catalog => handle_catalog_input(app, key),
        Screen::Detail(_) => handle_detail_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
    }
}

fn handle_catalog_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_card();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_card();
            false
        }
        KeyCode::Enter => {
            if let Err(e) = app.activate_card() {
                warn!(error = %e, "could not open card");
            }
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_detail_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('b') => {
            app.back_to_catalog();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Char(c @ '1'..='9') => {
            app.select_option_at(c as usize - '1' as usize);
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Char('r') => {
            app.retry_question();
            false
        }
        KeyCode::Char('R') => {
            app.restart_quiz();
            false
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            app.next_question();
            false
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
            app.previous_question();
            false
        }
        KeyCode::Esc | KeyCode::Char('b') => {
            app.back_to_catalog();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_app() -> App {
        let config = Config {
            open_quiz: true,
            ..Config::default()
        };
        App::from_config(&config).unwrap()
    }

    #[test]
    fn quiz_keys_drive_the_session() {
        let mut app = quiz_app();
        assert!(!handle_input(&mut app, KeyCode::Char('2')));
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.session().unwrap().completed_count(), 1);

        handle_input(&mut app, KeyCode::Right);
        assert_eq!(app.session().unwrap().current_index(), 1);

        handle_input(&mut app, KeyCode::Char('R'));
        let session = app.session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.completed_count(), 0);
    }

    #[test]
    fn retry_key_resets_only_the_question() {
        let mut app = quiz_app();
        handle_input(&mut app, KeyCode::Char('1'));
        handle_input(&mut app, KeyCode::Enter);
        assert!(app.session().unwrap().presenter().is_submitted());

        handle_input(&mut app, KeyCode::Char('r'));
        assert!(!app.session().unwrap().presenter().is_submitted());
    }

    #[test]
    fn escape_returns_to_catalog_and_q_quits() {
        let mut app = quiz_app();
        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Catalog);
        assert!(app.session().is_none());

        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Detail(1));
        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Catalog);

        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }
}
