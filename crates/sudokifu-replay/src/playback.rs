//! Timed auto-play over a replay session.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use log::debug;
use sudokifu_core::Board;

use crate::{ReplayEngine, Step};

/// Cloneable stop flag for [`ReplayEngine::play`].
///
/// The driving loop reads the flag between steps, never mid-step, so a stop
/// request always leaves the board at a step boundary. Clones share the flag;
/// keep one and hand another to whatever should be able to interrupt
/// playback (another thread, or the `on_step` callback itself).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use sudokifu_core::Board;
/// use sudokifu_replay::{PlayHandle, PlayOutcome, ReplayEngine, StepSequence};
///
/// let trace = StepSequence::from_wire([(0, 0, 1), (0, 1, 2), (0, 2, 3)]).unwrap();
/// let mut engine = ReplayEngine::start(Board::new(), trace);
///
/// // Stop from inside the callback after the first step lands
/// let handle = PlayHandle::new();
/// let stopper = handle.clone();
/// let outcome = engine.play(Duration::ZERO, &handle, |_step, _board| stopper.stop());
///
/// assert_eq!(outcome, PlayOutcome::Stopped);
/// assert_eq!(engine.cursor(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlayHandle {
    stopped: Arc<AtomicBool>,
}

impl PlayHandle {
    /// Creates a handle in the running state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that playback stop at the next step boundary.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`stop`](Self::stop) has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// How a [`ReplayEngine::play`] run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlayOutcome {
    /// The cursor reached the end of the trace.
    Finished,
    /// The handle was stopped first.
    Stopped,
}

impl ReplayEngine {
    /// Auto-plays the remaining steps at a fixed cadence.
    ///
    /// Each applied step invokes `on_step` with the step and the board state
    /// after it, which is where rendering hooks in. The calling thread is
    /// blocked for `interval` before every step; `Duration::ZERO` plays
    /// without sleeping.
    ///
    /// The handle is consulted between steps only. Stopping never rolls back
    /// or splits a step: board and cursor stay exactly where the last
    /// completed step left them.
    pub fn play<F>(
        &mut self,
        interval: Duration,
        handle: &PlayHandle,
        mut on_step: F,
    ) -> PlayOutcome
    where
        F: FnMut(Step, &Board),
    {
        while !self.is_at_end() {
            if handle.is_stopped() {
                break;
            }
            if !interval.is_zero() {
                thread::sleep(interval);
            }
            // A stop may have arrived while sleeping; the step after it must
            // not run.
            if handle.is_stopped() {
                break;
            }
            if let Some(step) = self.trace().get(self.cursor()) {
                self.advance();
                on_step(step, self.board());
            }
        }

        if self.is_at_end() {
            debug!("playback finished, {} steps applied", self.cursor());
            PlayOutcome::Finished
        } else {
            debug!("playback stopped at step {}", self.cursor());
            PlayOutcome::Stopped
        }
    }
}

#[cfg(test)]
mod tests {
    use sudokifu_core::Position;

    use super::*;
    use crate::StepSequence;

    fn engine_over_empty(triples: &[(u8, u8, u8)]) -> ReplayEngine {
        let trace = StepSequence::from_wire(triples.iter().copied()).unwrap();
        ReplayEngine::start(Board::new(), trace)
    }

    #[test]
    fn plays_to_completion_and_reports_each_step() {
        let mut engine = engine_over_empty(&[(0, 0, 5), (1, 1, 3), (0, 0, 0)]);
        let handle = PlayHandle::new();

        let mut seen = Vec::new();
        let outcome = engine.play(Duration::ZERO, &handle, |step, board| {
            seen.push((step.pos, board.get(step.pos).value()));
        });

        assert_eq!(outcome, PlayOutcome::Finished);
        assert!(outcome.is_finished());
        assert!(engine.is_at_end());
        assert_eq!(
            seen,
            vec![
                (Position::new(0, 0), 5),
                (Position::new(1, 1), 3),
                (Position::new(0, 0), 0),
            ]
        );
    }

    #[test]
    fn playback_board_matches_a_jump() {
        let triples = [(0, 0, 5), (1, 1, 3), (0, 0, 0), (0, 0, 7), (5, 5, 2)];
        let mut reference = engine_over_empty(&triples);
        reference.jump_to_end();

        let mut engine = engine_over_empty(&triples);
        let handle = PlayHandle::new();
        engine.play(Duration::ZERO, &handle, |_, _| {});

        assert_eq!(engine.board(), reference.board());
    }

    #[test]
    fn pre_stopped_handle_applies_nothing() {
        let mut engine = engine_over_empty(&[(0, 0, 5)]);
        let handle = PlayHandle::new();
        handle.stop();

        let mut calls = 0;
        let outcome = engine.play(Duration::ZERO, &handle, |_, _| calls += 1);

        assert_eq!(outcome, PlayOutcome::Stopped);
        assert!(outcome.is_stopped());
        assert_eq!(calls, 0);
        assert!(engine.is_at_start());
        assert!(engine.board().is_empty());
    }

    #[test]
    fn stop_from_callback_halts_at_a_step_boundary() {
        let mut engine = engine_over_empty(&[(0, 0, 1), (0, 1, 2), (0, 2, 3), (0, 3, 4)]);
        let handle = PlayHandle::new();
        let stopper = handle.clone();

        let mut calls = 0;
        let outcome = engine.play(Duration::ZERO, &handle, |_, _| {
            calls += 1;
            if calls == 2 {
                stopper.stop();
            }
        });

        assert_eq!(outcome, PlayOutcome::Stopped);
        assert_eq!(calls, 2);
        assert_eq!(engine.cursor(), 2);
        assert_eq!(engine.board().get(Position::new(0, 1)).value(), 2);
        assert_eq!(engine.board().get(Position::new(0, 2)).value(), 0);
    }

    #[test]
    fn playing_a_finished_session_is_a_no_op() {
        let mut engine = engine_over_empty(&[(0, 0, 5)]);
        engine.jump_to_end();

        let handle = PlayHandle::new();
        let mut calls = 0;
        let outcome = engine.play(Duration::ZERO, &handle, |_, _| calls += 1);

        assert_eq!(outcome, PlayOutcome::Finished);
        assert_eq!(calls, 0);
    }
}
