//! Session state for editing a board and replaying a solver trace.
//!
//! # Overview
//!
//! A [`GameSession`] owns the board across its whole lifecycle: the user
//! edits given cells, a solve request snapshots the board and hands it to
//! a replay engine, and clearing the board ends the session. The session
//! enforces the phase rules (no edits while a replay is active) so the
//! layers above only wire commands to methods.
//!
//! # Examples
//!
//! ```
//! use sudokifu_core::{Digit, Position};
//! use sudokifu_game::{GameSession, Phase};
//! use sudokifu_replay::StepSequence;
//!
//! let mut session = GameSession::new();
//! session.set_cell(Position::new(0, 0), Digit::new(5).unwrap())?;
//!
//! let trace = StepSequence::from_wire([(0, 1, 3)]).unwrap();
//! session.begin_replay(trace);
//! assert_eq!(session.phase(), Phase::Replaying);
//!
//! session.clear_board();
//! assert!(session.board().is_empty());
//! # Ok::<(), sudokifu_game::GameError>(())
//! ```

pub mod game;

pub use self::game::{GameError, GameSession, Phase};
