//! Confetti shown after a correct answer.
//!
//! The effect owns its own timeline: full opacity for `hold`, a `fade`
//! transition, then removal. The timeline runs as a tokio task whose handle
//! is aborted when the effect is cancelled, re-triggered or dropped, so no
//! scheduled step ever outlives the presenter that owns it.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

const DEFAULT_HOLD: Duration = Duration::from_millis(4000);
const DEFAULT_FADE: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationPhase {
    Hidden,
    Showing,
    Fading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelebrationTimeline {
    /// Time spent at full opacity.
    pub hold: Duration,
    /// Length of the fade before the effect is removed.
    pub fade: Duration,
}

impl Default for CelebrationTimeline {
    fn default() -> Self {
        Self {
            hold: DEFAULT_HOLD,
            fade: DEFAULT_FADE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PhaseState {
    phase: CelebrationPhase,
    since: Instant,
}

impl PhaseState {
    fn now(phase: CelebrationPhase) -> Self {
        Self {
            phase,
            since: Instant::now(),
        }
    }
}

pub struct Celebration {
    timeline: CelebrationTimeline,
    state: watch::Receiver<PhaseState>,
    started: Option<Instant>,
    task: Option<JoinHandle<()>>,
}

impl Celebration {
    pub fn new(timeline: CelebrationTimeline) -> Self {
        Self {
            timeline,
            state: hidden_channel(),
            started: None,
            task: None,
        }
    }

    pub fn timeline(&self) -> CelebrationTimeline {
        self.timeline
    }

    /// Starts the effect from the beginning, replacing any running timeline.
    ///
    /// Without a tokio runtime the effect is skipped; it is purely cosmetic.
    pub fn trigger(&mut self) {
        self.cancel();

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("no async runtime available, skipping celebration");
                return;
            }
        };

        let (tx, rx) = watch::channel(PhaseState::now(CelebrationPhase::Showing));
        let timeline = self.timeline;
        self.state = rx;
        self.started = Some(Instant::now());
        self.task = Some(handle.spawn(async move {
            tokio::time::sleep(timeline.hold).await;
            if tx.send(PhaseState::now(CelebrationPhase::Fading)).is_err() {
                return;
            }
            debug!("celebration fading");

            tokio::time::sleep(timeline.fade).await;
            if tx.send(PhaseState::now(CelebrationPhase::Hidden)).is_ok() {
                debug!("celebration finished");
            }
        }));
        debug!(?timeline, "celebration started");
    }

    /// Stops the effect immediately.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state = hidden_channel();
        self.started = None;
    }

    pub fn phase(&self) -> CelebrationPhase {
        self.state.borrow().phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase() != CelebrationPhase::Hidden
    }

    /// Time since the current run was triggered, while it is visible.
    pub fn elapsed(&self) -> Option<Duration> {
        if !self.is_visible() {
            return None;
        }
        self.started.map(|started| started.elapsed())
    }

    /// Opacity in `0.0..=1.0` for the current instant.
    pub fn opacity(&self) -> f32 {
        let state = *self.state.borrow();
        match state.phase {
            CelebrationPhase::Hidden => 0.0,
            CelebrationPhase::Showing => 1.0,
            CelebrationPhase::Fading => {
                if self.timeline.fade.is_zero() {
                    return 0.0;
                }
                let progress =
                    state.since.elapsed().as_secs_f32() / self.timeline.fade.as_secs_f32();
                (1.0 - progress).clamp(0.0, 1.0)
            }
        }
    }
}

impl Drop for Celebration {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn hidden_channel() -> watch::Receiver<PhaseState> {
    let (_tx, rx) = watch::channel(PhaseState::now(CelebrationPhase::Hidden));
    rx
}
