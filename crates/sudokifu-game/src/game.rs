//! The session state machine tying a board to replay sessions.

use log::debug;
use sudokifu_core::{Board, Cell, Digit, Origin, Position, validator};
use sudokifu_replay::{ReplayEngine, StepSequence};

/// Which layer currently owns board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// The user edits given cells directly.
    Editing,
    /// A replay engine owns the board; edits are rejected.
    Replaying,
}

/// Errors returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The board cannot be edited while a replay is active.
    #[display("the board cannot be edited while a replay is active")]
    ReplayInProgress,
}

/// A board plus the replay session that may own it.
///
/// The session starts in [`Phase::Editing`]: the user fills given cells
/// and the board may transiently hold conflicts, which [`conflicts`]
/// reports for display. [`begin_replay`] snapshots the visible board and
/// moves to [`Phase::Replaying`], where the visible board is the engine's
/// and all edits are rejected. [`clear_board`] is the one way back: it
/// discards the trace and empties every cell.
///
/// [`conflicts`]: GameSession::conflicts
/// [`begin_replay`]: GameSession::begin_replay
/// [`clear_board`]: GameSession::clear_board
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: Board,
    replay: Option<ReplayEngine>,
}

impl GameSession {
    /// Creates a session with an empty board, ready for editing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that starts from an existing board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            replay: None,
        }
    }

    /// Returns the board as the user currently sees it.
    ///
    /// While a replay is active this is the engine's board, which moves
    /// with the cursor; otherwise it is the edited board.
    #[must_use]
    pub fn board(&self) -> &Board {
        match &self.replay {
            Some(engine) => engine.board(),
            None => &self.board,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.replay.is_some() {
            Phase::Replaying
        } else {
            Phase::Editing
        }
    }

    /// Returns the active replay engine, if any.
    #[must_use]
    pub fn replay(&self) -> Option<&ReplayEngine> {
        self.replay.as_ref()
    }

    /// Returns the active replay engine mutably, if any.
    pub fn replay_mut(&mut self) -> Option<&mut ReplayEngine> {
        self.replay.as_mut()
    }

    /// Writes `digit` at `pos` as a given cell.
    ///
    /// Conflicting placements are accepted; validity is advisory and
    /// reported separately by [`GameSession::conflicts`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ReplayInProgress`] while a replay is active.
    pub fn set_cell(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        self.edit_board()?
            .set(pos, Cell::filled(Origin::Given, digit));
        Ok(())
    }

    /// Empties the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ReplayInProgress`] while a replay is active.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        self.edit_board()?.set(pos, Cell::Empty);
        Ok(())
    }

    /// Replaces the whole board with a generated puzzle.
    ///
    /// Any live replay is discarded first; the session returns to editing
    /// with the new givens in place.
    pub fn accept_generated(&mut self, board: Board) {
        self.replay = None;
        self.board = board;
    }

    /// Tests whether writing `entry` at `pos` would conflict with a peer.
    #[must_use]
    pub fn is_placement_valid(&self, pos: Position, entry: Option<Digit>) -> bool {
        validator::is_placement_valid(self.board(), pos, entry)
    }

    /// Returns every position whose value collides with a peer, in
    /// row-major order.
    #[must_use]
    pub fn conflicts(&self) -> Vec<Position> {
        validator::conflicts(self.board())
    }

    /// Snapshots the visible board and starts replaying `trace` against it.
    ///
    /// The snapshot is taken at call time, so later cursor movement always
    /// reconstructs from the board as it stood when the solve was
    /// requested. Any previously bound replay is discarded; callers bind a
    /// new trace only once it has fully parsed, so a failed solve never
    /// reaches this point.
    pub fn begin_replay(&mut self, trace: StepSequence) {
        let snapshot = match self.replay.take() {
            Some(engine) => engine.into_board(),
            None => self.board.clone(),
        };
        debug!("session entering replay phase");
        self.replay = Some(ReplayEngine::start(snapshot, trace));
    }

    /// Empties every cell and discards any active replay.
    ///
    /// This is the only way back to [`Phase::Editing`] from a replay.
    /// Always succeeds, whatever the prior state.
    pub fn clear_board(&mut self) {
        if self.replay.take().is_some() {
            debug!("session replay discarded by clear");
        }
        self.board.reset();
    }

    fn edit_board(&mut self) -> Result<&mut Board, GameError> {
        if self.replay.is_some() {
            return Err(GameError::ReplayInProgress);
        }
        Ok(&mut self.board)
    }
}
