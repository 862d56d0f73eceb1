//! Navigation and aggregate progress over a fixed list of questions.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::models::{validate_questions, ContentError, Question};

use super::celebration::CelebrationTimeline;
use super::presenter::{Presenter, PresenterKey, Submission};

/// Result of submitting the active question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReport {
    pub submission: Submission,
    /// True only for the submission that completed the last open question.
    pub all_complete_reached: bool,
}

pub struct SessionTracker {
    questions: Vec<Question>,
    current: usize,
    completed: BTreeSet<usize>,
    epoch: u64,
    timeline: CelebrationTimeline,
    presenter: Presenter,
}

impl SessionTracker {
    pub fn new(
        questions: Vec<Question>,
        timeline: CelebrationTimeline,
    ) -> Result<Self, ContentError> {
        validate_questions(&questions)?;
        let presenter = Presenter::new(questions[0].clone(), 0, timeline);

        Ok(Self {
            questions,
            current: 0,
            completed: BTreeSet::new(),
            epoch: 0,
            timeline,
            presenter,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut Presenter {
        &mut self.presenter
    }

    pub fn presenter_key(&self) -> &PresenterKey {
        self.presenter.key()
    }

    pub fn completed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed.iter().copied()
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn ratio(&self) -> f64 {
        self.completed.len() as f64 / self.questions.len() as f64
    }

    pub fn percentage(&self) -> f64 {
        100.0 * self.ratio()
    }

    pub fn rounded_percentage(&self) -> u16 {
        self.percentage().round() as u16
    }

    pub fn is_all_complete(&self) -> bool {
        self.completed.len() == self.questions.len()
    }

    pub fn progress_label(&self) -> String {
        format!("{} / {} completed", self.completed.len(), self.questions.len())
    }

    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.questions.len())
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.questions.len()
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn go_to_next(&mut self) {
        if !self.can_go_next() {
            return;
        }
        self.current += 1;
        self.remount();
    }

    pub fn go_to_previous(&mut self) {
        if !self.can_go_previous() {
            return;
        }
        self.current -= 1;
        self.remount();
    }

    /// Clears progress, returns to the first question and remounts it fresh.
    pub fn reset_session(&mut self) {
        info!(epoch = self.epoch + 1, "quiz session reset");
        self.completed.clear();
        self.current = 0;
        self.epoch += 1;
        self.remount();
    }

    pub fn select_option(&mut self, option_id: &str) -> bool {
        self.presenter.select(option_id)
    }

    pub fn submit_current(&mut self) -> SubmitReport {
        let was_complete = self.is_all_complete();
        let submission = self.presenter.submit();

        if submission == Submission::Correct && self.completed.insert(self.current) {
            info!(
                question = self.current,
                completed = self.completed.len(),
                total = self.questions.len(),
                "question completed"
            );
        }

        let all_complete_reached = !was_complete && self.is_all_complete();
        if all_complete_reached {
            info!("all questions completed");
        }

        SubmitReport {
            submission,
            all_complete_reached,
        }
    }

    /// Lets the visitor try the active question again.
    pub fn reset_current(&mut self) {
        self.presenter.reset();
    }

    fn remount(&mut self) {
        debug!(index = self.current, epoch = self.epoch, "switching question");
        self.presenter = Presenter::new(
            self.questions[self.current].clone(),
            self.epoch,
            self.timeline,
        );
    }
}
