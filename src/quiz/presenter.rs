//! A single question: selection, submission and result feedback.

use tracing::{debug, info};

use crate::models::{Question, QuizOption};

use super::celebration::{Celebration, CelebrationTimeline};

/// Identity of a mounted presenter. A new key always means a fresh instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresenterKey {
    pub question_id: String,
    pub epoch: u64,
}

/// What a call to [`Presenter::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Nothing selected or already submitted; state is unchanged.
    Ignored,
    Correct,
    Incorrect,
}

/// How an option is styled once the answer is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    Neutral,
    Success,
    Error,
}

/// The result revealed after submission.
#[derive(Debug, Clone, Copy)]
pub struct Outcome<'a> {
    pub is_correct: bool,
    pub selected: Option<&'a QuizOption>,
    pub correct: Option<&'a QuizOption>,
}

pub struct Presenter {
    key: PresenterKey,
    question: Question,
    selected: Option<String>,
    result: Option<bool>,
    celebration: Celebration,
}

impl Presenter {
    pub fn new(question: Question, epoch: u64, timeline: CelebrationTimeline) -> Self {
        let key = PresenterKey {
            question_id: question.id.clone(),
            epoch,
        };
        debug!(question = %key.question_id, epoch, "presenter mounted");

        Self {
            key,
            question,
            selected: None,
            result: None,
            celebration: Celebration::new(timeline),
        }
    }

    pub fn key(&self) -> &PresenterKey {
        &self.key
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn selected_option_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.result.is_some()
    }

    /// Whether the submitted answer was right; `None` until submission.
    pub fn is_correct(&self) -> Option<bool> {
        self.result
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitted() && self.selected.is_some()
    }

    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    /// The hint is only shown while the question is unanswered.
    pub fn hint(&self) -> Option<&str> {
        if self.is_submitted() {
            return None;
        }
        self.question.hint.as_deref()
    }

    /// Selects an option by id. Returns false if the selection was refused.
    pub fn select(&mut self, option_id: &str) -> bool {
        if self.is_submitted() || self.question.option(option_id).is_none() {
            return false;
        }
        self.selected = Some(option_id.to_string());
        true
    }

    pub fn select_next(&mut self) {
        let len = self.question.options.len();
        if len == 0 {
            return;
        }
        let next = match self.selected_index() {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.select_index(next);
    }

    pub fn select_previous(&mut self) {
        let len = self.question.options.len();
        if len == 0 {
            return;
        }
        let previous = match self.selected_index() {
            Some(index) => (index + len - 1) % len,
            None => len.saturating_sub(1),
        };
        self.select_index(previous);
    }

    /// Selects the option at `index` in display order.
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(id) = self.question.options.get(index).map(|o| o.id.clone()) else {
            return false;
        };
        self.select(&id)
    }

    pub fn submit(&mut self) -> Submission {
        if self.is_submitted() {
            debug!(question = %self.key.question_id, "submit ignored: already submitted");
            return Submission::Ignored;
        }
        let Some(selected) = self.selected.as_deref() else {
            debug!(question = %self.key.question_id, "submit ignored: nothing selected");
            return Submission::Ignored;
        };

        let is_correct = self
            .question
            .option(selected)
            .is_some_and(|option| option.is_correct);
        info!(
            question = %self.key.question_id,
            option = selected,
            correct = is_correct,
            "answer submitted"
        );
        self.result = Some(is_correct);

        if is_correct {
            self.celebration.trigger();
            Submission::Correct
        } else {
            Submission::Incorrect
        }
    }

    /// Returns to the freshly mounted state.
    pub fn reset(&mut self) {
        debug!(question = %self.key.question_id, "presenter reset");
        self.selected = None;
        self.result = None;
        self.celebration.cancel();
    }

    pub fn option_feedback(&self, option: &QuizOption) -> OptionFeedback {
        if !self.is_submitted() {
            return OptionFeedback::Neutral;
        }
        if option.is_correct {
            OptionFeedback::Success
        } else if self.selected.as_deref() == Some(option.id.as_str()) {
            OptionFeedback::Error
        } else {
            OptionFeedback::Neutral
        }
    }

    pub fn outcome(&self) -> Option<Outcome<'_>> {
        let is_correct = self.result?;
        Some(Outcome {
            is_correct,
            selected: self
                .selected
                .as_deref()
                .and_then(|id| self.question.option(id)),
            correct: self.question.correct_option(),
        })
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
            .as_deref()
            .and_then(|id| self.question.option_index(id))
    }
}
