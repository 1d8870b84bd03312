//! Cursor-driven replay over a solver trace.

use log::debug;
use sudokifu_core::{Board, Cell, Origin};

use crate::{Step, StepSequence};

/// Replays a solver trace against a board, one step at a time, in either
/// direction.
///
/// The engine owns the board for the lifetime of the session, together with
/// the snapshot captured when the solve was requested. The cursor counts
/// applied steps: 0 is the untouched snapshot, `trace().len()` the final
/// board. Cells written by replay are tagged [`Derived`](Cell::Derived);
/// walking backward restores whatever the preceding touch (or the snapshot)
/// held, provenance included.
///
/// # Examples
///
/// ```
/// use sudokifu_core::{Board, Position};
/// use sudokifu_replay::{ReplayEngine, StepSequence};
///
/// let trace = StepSequence::from_wire([(0, 0, 5), (0, 1, 3)]).unwrap();
/// let mut engine = ReplayEngine::start(Board::new(), trace);
///
/// assert!(engine.advance());
/// assert_eq!(engine.board().get(Position::new(0, 0)).value(), 5);
///
/// assert!(engine.retreat());
/// assert!(engine.board().is_empty());
/// assert!(!engine.retreat());
/// ```
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    board: Board,
    snapshot: Board,
    trace: StepSequence,
    cursor: usize,
}

impl ReplayEngine {
    /// Binds a fresh replay session: the board starts as an exact copy of
    /// `snapshot` and the cursor at 0.
    ///
    /// Construct one only after a solver response has fully parsed; an
    /// engine always holds a complete trace and is never half-initialized.
    #[must_use]
    pub fn start(snapshot: Board, trace: StepSequence) -> Self {
        debug!("replay session bound: {} steps", trace.len());
        Self {
            board: snapshot.clone(),
            snapshot,
            trace,
            cursor: 0,
        }
    }

    /// The board in its current replay state.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The snapshot the session started from.
    #[must_use]
    pub fn snapshot(&self) -> &Board {
        &self.snapshot
    }

    /// The trace being replayed.
    #[must_use]
    pub fn trace(&self) -> &StepSequence {
        &self.trace
    }

    /// Number of applied steps, between 0 and `trace().len()`.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if no steps are applied.
    #[must_use]
    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    /// Returns `true` if every step is applied.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor == self.trace.len()
    }

    /// Consumes the session, releasing the board in its current state.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Applies the next step, if any.
    ///
    /// A step with a digit writes it as [`Cell::Derived`]; a clear step
    /// empties the cell. Returns `false`, changing nothing, when the cursor
    /// is already at the end of the trace.
    pub fn advance(&mut self) -> bool {
        let Some(step) = self.trace.get(self.cursor) else {
            return false;
        };
        self.board.set(step.pos, Self::replayed_cell(step));
        self.cursor += 1;
        debug!("step {} applied: {step}", self.cursor);
        true
    }

    /// Un-applies the most recent step, if any.
    ///
    /// The touched cell is reconstructed locally: the nearest earlier step
    /// to the same position wins; failing that, the snapshot cell is
    /// restored as captured. Returns `false`, changing nothing, when the
    /// cursor is already at 0.
    ///
    /// The backward scan is what keeps undo exact under backtracking: a cell
    /// set, cleared, and set again must step back through that exact chain.
    pub fn retreat(&mut self) -> bool {
        let Some(previous) = self.cursor.checked_sub(1) else {
            return false;
        };
        let Some(undone) = self.trace.get(previous) else {
            return false;
        };

        let restored = match self.trace.last_touch_before(previous, undone.pos) {
            Some(prior) => Self::replayed_cell(prior),
            None => self.snapshot.get(undone.pos),
        };
        self.board.set(undone.pos, restored);
        self.cursor = previous;
        debug!("step {} undone: {undone}", self.cursor + 1);
        true
    }

    /// Jumps straight to the final board.
    ///
    /// Reconstructs the terminal state as a single fold of the whole trace
    /// over a copy of the snapshot; equivalent to advancing until
    /// [`is_at_end`](Self::is_at_end) holds, without per-step work.
    pub fn jump_to_end(&mut self) {
        let mut board = self.snapshot.clone();
        for step in &self.trace {
            board.set(step.pos, Self::replayed_cell(*step));
        }
        self.board = board;
        self.cursor = self.trace.len();
        debug!("jumped to end of trace, {} steps", self.cursor);
    }

    const fn replayed_cell(step: Step) -> Cell {
        match step.entry {
            Some(digit) => Cell::filled(Origin::Derived, digit),
            None => Cell::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use sudokifu_core::{Digit, Position};

    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn engine_over_empty(triples: &[(u8, u8, u8)]) -> ReplayEngine {
        let trace = StepSequence::from_wire(triples.iter().copied()).unwrap();
        ReplayEngine::start(Board::new(), trace)
    }

    #[test]
    fn advance_applies_steps_as_derived() {
        let mut engine = engine_over_empty(&[(0, 0, 5), (1, 1, 3)]);

        assert!(engine.advance());
        assert_eq!(engine.board().get(pos(0, 0)), Cell::Derived(Digit::D5));
        assert_eq!(engine.cursor(), 1);

        assert!(engine.advance());
        assert!(engine.is_at_end());
        assert!(!engine.advance());
        assert_eq!(engine.cursor(), 2);
    }

    #[test]
    fn boundaries_are_no_ops() {
        let mut engine = engine_over_empty(&[(0, 0, 5)]);

        assert!(!engine.retreat());
        assert_eq!(engine.cursor(), 0);
        assert!(engine.board().is_empty());

        assert!(engine.advance());
        assert!(!engine.advance());
        let at_end = engine.board().clone();
        assert!(!engine.advance());
        assert_eq!(engine.board(), &at_end);
    }

    #[test]
    fn empty_trace_is_both_start_and_end() {
        let mut engine = engine_over_empty(&[]);
        assert!(engine.is_at_start());
        assert!(engine.is_at_end());
        assert!(!engine.advance());
        assert!(!engine.retreat());
        engine.jump_to_end();
        assert!(engine.board().is_empty());
        assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn advance_then_retreat_restores_board_bit_for_bit() {
        let mut snapshot = Board::new();
        snapshot.set(pos(0, 1), Cell::Given(Digit::D9));
        let trace = StepSequence::from_wire([(0, 0, 5), (0, 1, 2), (0, 0, 0)]).unwrap();
        let mut engine = ReplayEngine::start(snapshot, trace);

        for _ in 0..3 {
            let before = engine.board().clone();
            assert!(engine.advance());
            assert!(engine.retreat());
            assert_eq!(engine.board(), &before);
            assert!(engine.advance());
        }
    }

    #[test]
    fn retreat_falls_back_to_snapshot_provenance() {
        let mut snapshot = Board::new();
        snapshot.set(pos(4, 4), Cell::Given(Digit::D6));
        let trace = StepSequence::from_wire([(4, 4, 1)]).unwrap();
        let mut engine = ReplayEngine::start(snapshot, trace);

        assert!(engine.advance());
        assert_eq!(engine.board().get(pos(4, 4)), Cell::Derived(Digit::D1));

        // The overwritten given comes back as a given, not as derived
        assert!(engine.retreat());
        assert_eq!(engine.board().get(pos(4, 4)), Cell::Given(Digit::D6));
    }

    #[test]
    fn backtracking_trace_retreats_through_prior_touches() {
        // A solver wrote 5 at (0,0), placed 3 at (1,1), backtracked the 5
        // away, and settled on 7
        let mut engine = engine_over_empty(&[(0, 0, 5), (1, 1, 3), (0, 0, 0), (0, 0, 7)]);

        for _ in 0..4 {
            assert!(engine.advance());
        }
        assert_eq!(engine.board().get(pos(0, 0)).value(), 7);
        assert_eq!(engine.board().get(pos(1, 1)).value(), 3);

        // Undo (0,0,7): the nearest prior touch of (0,0) is the clear
        assert!(engine.retreat());
        assert_eq!(engine.board().get(pos(0, 0)), Cell::Empty);
        assert_eq!(engine.board().get(pos(1, 1)).value(), 3);

        // Undo the clear: back to the dead-end 5, tagged derived
        assert!(engine.retreat());
        assert_eq!(engine.board().get(pos(0, 0)), Cell::Derived(Digit::D5));

        // Undo (1,1,3): nothing earlier touches (1,1), snapshot says empty
        assert!(engine.retreat());
        assert_eq!(engine.board().get(pos(1, 1)), Cell::Empty);
        assert_eq!(engine.board().get(pos(0, 0)), Cell::Derived(Digit::D5));

        // Undo (0,0,5): snapshot fallback again
        assert!(engine.retreat());
        assert!(engine.board().is_empty());
        assert!(engine.is_at_start());
        assert!(!engine.retreat());
    }

    #[test]
    fn jump_to_end_matches_sequential_advances() {
        let triples = [
            (0, 0, 5),
            (1, 1, 3),
            (0, 0, 0),
            (0, 0, 7),
            (2, 5, 4),
            (2, 5, 0),
            (8, 8, 9),
        ];
        let mut stepped = engine_over_empty(&triples);
        while stepped.advance() {}

        let mut jumped = engine_over_empty(&triples);
        jumped.jump_to_end();

        assert_eq!(jumped.board(), stepped.board());
        assert_eq!(jumped.cursor(), triples.len());
        assert!(jumped.is_at_end());
    }

    #[test]
    fn jump_to_end_from_midway_reaches_the_same_terminal_board() {
        let triples = [(0, 0, 5), (1, 1, 3), (0, 0, 0), (0, 0, 7)];
        let mut reference = engine_over_empty(&triples);
        reference.jump_to_end();

        let mut engine = engine_over_empty(&triples);
        assert!(engine.advance());
        assert!(engine.advance());
        engine.jump_to_end();

        assert_eq!(engine.board(), reference.board());
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        fn arbitrary_snapshot() -> impl Strategy<Value = Board> {
            prop::collection::vec((0u8..9, 0u8..9, 1u8..=9), 0..15).prop_map(|cells| {
                let mut board = Board::new();
                for (row, col, value) in cells {
                    let digit = Digit::new(value).unwrap();
                    board.set(Position::new(row, col), Cell::Given(digit));
                }
                board
            })
        }

        fn arbitrary_trace() -> impl Strategy<Value = StepSequence> {
            prop::collection::vec((0u8..9, 0u8..9, 0u8..=9), 0..40)
                .prop_map(|triples| StepSequence::from_wire(triples).unwrap())
        }

        /// Reference state: the snapshot with the first `cursor` steps folded
        /// over it.
        fn board_at(snapshot: &Board, trace: &StepSequence, cursor: usize) -> Board {
            let mut board = snapshot.clone();
            for step in trace.iter().take(cursor) {
                board.set(step.pos, ReplayEngine::replayed_cell(*step));
            }
            board
        }

        proptest! {
            /// Property: a full forward walk and a jump land on the same
            /// board.
            #[test]
            fn prop_fold_equivalence(
                snapshot in arbitrary_snapshot(),
                trace in arbitrary_trace(),
            ) {
                let mut stepped = ReplayEngine::start(snapshot.clone(), trace.clone());
                while stepped.advance() {}

                let mut jumped = ReplayEngine::start(snapshot, trace);
                jumped.jump_to_end();

                prop_assert_eq!(stepped.board(), jumped.board());
                prop_assert_eq!(stepped.cursor(), jumped.cursor());
            }

            /// Property: after any interleaving of advances and retreats the
            /// board equals a fresh fold of the first `cursor` steps, and
            /// the cursor stays within bounds.
            #[test]
            fn prop_board_always_matches_cursor_prefix(
                snapshot in arbitrary_snapshot(),
                trace in arbitrary_trace(),
                moves in prop::collection::vec(any::<bool>(), 0..80),
            ) {
                let mut engine = ReplayEngine::start(snapshot.clone(), trace.clone());
                for forward in moves {
                    if forward {
                        engine.advance();
                    } else {
                        engine.retreat();
                    }
                    prop_assert!(engine.cursor() <= trace.len());
                    let expected = board_at(&snapshot, &trace, engine.cursor());
                    prop_assert_eq!(engine.board(), &expected);
                }
            }

            /// Property: walking all the way forward and then all the way
            /// back restores the snapshot exactly.
            #[test]
            fn prop_full_round_trip_restores_snapshot(
                snapshot in arbitrary_snapshot(),
                trace in arbitrary_trace(),
            ) {
                let mut engine = ReplayEngine::start(snapshot.clone(), trace);
                while engine.advance() {}
                while engine.retreat() {}
                prop_assert_eq!(engine.board(), &snapshot);
            }
        }
    }
}
