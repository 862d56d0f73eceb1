//! Quiz session: per-question presenter, session tracker and the
//! celebration effect shown on correct answers.

mod celebration;
mod presenter;
mod session;

pub use celebration::{Celebration, CelebrationPhase, CelebrationTimeline};
pub use presenter::{OptionFeedback, Outcome, Presenter, PresenterKey, Submission};
pub use session::{SessionTracker, SubmitReport};
