//! Step-by-step replay of solver traces.
//!
//! A solver reports its work as an ordered list of cell assignments (a
//! *trace*), including the dead ends a backtracking search wrote and later
//! cleared. This crate turns such a trace into a navigable animation over a
//! board: forward one step, backward one step, straight to the end, or
//! auto-played at a fixed cadence with a stop handle.
//!
//! # Overview
//!
//! - [`step`]: one typed assignment ([`Step`]) and the wire-range validation
//!   that produces it
//! - [`sequence`]: the immutable [`StepSequence`] a session replays,
//!   including the backward scan that makes undo exact under backtracking
//! - [`engine`]: [`ReplayEngine`], the cursor that mutates the board in both
//!   directions
//! - [`playback`]: timed auto-play with a cloneable [`PlayHandle`] stop flag
//!
//! # Examples
//!
//! ```
//! use sudokifu_core::{Board, Position};
//! use sudokifu_replay::{ReplayEngine, StepSequence};
//!
//! // A backtracking solver tried 5 at (0,0), gave up, and settled on 7
//! let trace = StepSequence::from_wire([(0, 0, 5), (0, 0, 0), (0, 0, 7)]).unwrap();
//! let mut engine = ReplayEngine::start(Board::new(), trace);
//!
//! engine.jump_to_end();
//! assert_eq!(engine.board().get(Position::new(0, 0)).value(), 7);
//!
//! // Walking backward revisits the dead end exactly
//! assert!(engine.retreat());
//! assert_eq!(engine.board().get(Position::new(0, 0)).value(), 0);
//! assert!(engine.retreat());
//! assert_eq!(engine.board().get(Position::new(0, 0)).value(), 5);
//! ```

pub mod engine;
pub mod playback;
pub mod sequence;
pub mod step;

pub use self::{
    engine::ReplayEngine,
    playback::{PlayHandle, PlayOutcome},
    sequence::StepSequence,
    step::{InvalidStep, Step},
};
