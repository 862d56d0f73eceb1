use std::collections::HashMap;

use tracing::{debug, info};

use crate::data::{builtin_catalog, builtin_quiz, load_quiz_from_json, REGISTER_BASICS_QUIZ_ID};
use crate::models::{Catalog, CatalogEntry, QuizDefinition, Route, Section};
use crate::quiz::{CelebrationTimeline, SessionTracker, SubmitReport};
use crate::{Config, LessonsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    /// Description page of the catalog card at this flat index.
    Detail(usize),
    Quiz,
}

/// The mounted quiz. Dropped when the visitor leaves the quiz screen.
pub struct ActiveQuiz {
    pub quiz_id: String,
    pub session: SessionTracker,
}

pub struct App {
    pub screen: Screen,
    catalog: Catalog,
    quizzes: HashMap<String, QuizDefinition>,
    catalog_cursor: usize,
    active: Option<ActiveQuiz>,
    timeline: CelebrationTimeline,
}

impl App {
    /// Builds the app from built-in content plus any overrides in `config`.
    pub fn from_config(config: &Config) -> Result<Self, LessonsError> {
        let catalog = builtin_catalog()?;
        let quiz = match &config.questions_path {
            Some(path) => {
                let mut quiz = load_quiz_from_json(path, REGISTER_BASICS_QUIZ_ID)?;
                // The first lesson card links the register quiz by id.
                if quiz.id != REGISTER_BASICS_QUIZ_ID {
                    debug!(file_id = %quiz.id, "quiz file replaces the register quiz");
                    quiz.id = REGISTER_BASICS_QUIZ_ID.to_string();
                }
                quiz
            }
            None => builtin_quiz()?,
        };

        let mut app = Self::new(catalog, vec![quiz], config.celebration);
        if config.open_quiz {
            let quiz_id = app
                .catalog
                .steps
                .iter()
                .find_map(|entry| entry.quiz.clone())
                .unwrap_or_else(|| REGISTER_BASICS_QUIZ_ID.to_string());
            app.open_quiz(&quiz_id)?;
        }
        Ok(app)
    }

    pub fn new(
        catalog: Catalog,
        quizzes: Vec<QuizDefinition>,
        timeline: CelebrationTimeline,
    ) -> Self {
        Self {
            screen: Screen::Catalog,
            catalog,
            quizzes: quizzes
                .into_iter()
                .map(|quiz| (quiz.id.clone(), quiz))
                .collect(),
            catalog_cursor: 0,
            active: None,
            timeline,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_cursor(&self) -> usize {
        self.catalog_cursor
    }

    pub fn selected_entry(&self) -> Option<(Section, &CatalogEntry)> {
        self.catalog.get(self.catalog_cursor)
    }

    pub fn select_next_card(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.catalog_cursor = (self.catalog_cursor + 1) % self.catalog.len();
    }

    pub fn select_previous_card(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let len = self.catalog.len();
        self.catalog_cursor = (self.catalog_cursor + len - 1) % len;
    }

    /// Opens the selected card. Disabled cards stay put.
    pub fn activate_card(&mut self) -> Result<(), LessonsError> {
        let Some((_, entry)) = self.selected_entry() else {
            return Ok(());
        };
        if entry.disabled {
            debug!(title = %entry.title, "ignored disabled card");
            return Ok(());
        }

        let route = entry.route();
        match route {
            Route::Quiz(quiz_id) => self.open_quiz(&quiz_id),
            Route::Detail => {
                self.screen = Screen::Detail(self.catalog_cursor);
                Ok(())
            }
        }
    }

    /// Mounts a fresh session for the quiz.
    pub fn open_quiz(&mut self, quiz_id: &str) -> Result<(), LessonsError> {
        let quiz = self
            .quizzes
            .get(quiz_id)
            .ok_or_else(|| LessonsError::UnknownQuiz(quiz_id.to_string()))?;
        let session = SessionTracker::new(quiz.questions.clone(), self.timeline)?;

        info!(quiz = quiz_id, questions = session.total(), "quiz opened");
        self.active = Some(ActiveQuiz {
            quiz_id: quiz_id.to_string(),
            session,
        });
        self.screen = Screen::Quiz;
        Ok(())
    }

    /// Returns to the catalog, unmounting any active quiz.
    pub fn back_to_catalog(&mut self) {
        if let Some(active) = self.active.take() {
            info!(quiz = %active.quiz_id, "quiz closed");
        }
        self.screen = Screen::Catalog;
    }

    pub fn active_quiz(&self) -> Option<(&QuizDefinition, &SessionTracker)> {
        let active = self.active.as_ref()?;
        let quiz = self.quizzes.get(&active.quiz_id)?;
        Some((quiz, &active.session))
    }

    pub fn session(&self) -> Option<&SessionTracker> {
        self.active.as_ref().map(|active| &active.session)
    }

    pub fn session_mut(&mut self) -> Option<&mut SessionTracker> {
        self.active.as_mut().map(|active| &mut active.session)
    }

    pub fn select_next_option(&mut self) {
        if let Some(session) = self.session_mut() {
            session.presenter_mut().select_next();
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(session) = self.session_mut() {
            session.presenter_mut().select_previous();
        }
    }

    pub fn select_option_at(&mut self, index: usize) {
        if let Some(session) = self.session_mut() {
            session.presenter_mut().select_index(index);
        }
    }

    pub fn submit_answer(&mut self) -> Option<SubmitReport> {
        self.session_mut().map(SessionTracker::submit_current)
    }

    pub fn retry_question(&mut self) {
        if let Some(session) = self.session_mut() {
            session.reset_current();
        }
    }

    pub fn next_question(&mut self) {
        if let Some(session) = self.session_mut() {
            session.go_to_next();
        }
    }

    pub fn previous_question(&mut self) {
        if let Some(session) = self.session_mut() {
            session.go_to_previous();
        }
    }

    pub fn restart_quiz(&mut self) {
        if let Some(session) = self.session_mut() {
            session.reset_session();
        }
    }
}
