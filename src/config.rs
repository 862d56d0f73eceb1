use std::path::PathBuf;
use std::time::Duration;

use crate::quiz::CelebrationTimeline;

/// Runtime settings, assembled from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Quiz file that replaces the built-in register quiz.
    pub questions_path: Option<PathBuf>,
    /// Where tracing output goes; logging is off when unset.
    pub log_file: Option<PathBuf>,
    pub celebration: CelebrationTimeline,
    /// Skip the catalog and open the quiz straight away.
    pub open_quiz: bool,
}

impl Config {
    pub fn with_celebration_millis(mut self, hold_ms: u64, fade_ms: u64) -> Self {
        self.celebration = CelebrationTimeline {
            hold: Duration::from_millis(hold_ms),
            fade: Duration::from_millis(fade_ms),
        };
        self
    }
}
