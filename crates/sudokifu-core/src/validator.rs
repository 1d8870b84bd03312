//! Advisory placement validation.
//!
//! Pure predicates over a [`Board`]: nothing here mutates state or caches
//! results. At interactive scale (81 cells, a nine-digit alphabet) a fresh
//! O(27) scan per keystroke beats any bookkeeping, so every call recomputes
//! from the board.

use crate::{Board, Digit, Position};

/// Checks whether placing `entry` at `pos` avoids a direct row, column, or
/// 3×3-box duplicate.
///
/// The probed cell itself is excluded from all three comparisons, so
/// re-asserting the value already present at `pos` is valid. Clearing
/// (`entry == None`) is always valid.
///
/// # Examples
///
/// ```
/// use sudokifu_core::{Board, Cell, Digit, Position, validator};
///
/// let mut board = Board::new();
/// board.set(Position::new(0, 0), Cell::Given(Digit::D5));
///
/// // Same row, same box, and an unrelated cell
/// assert!(!validator::is_placement_valid(&board, Position::new(0, 8), Some(Digit::D5)));
/// assert!(!validator::is_placement_valid(&board, Position::new(2, 2), Some(Digit::D5)));
/// assert!(validator::is_placement_valid(&board, Position::new(4, 4), Some(Digit::D5)));
///
/// // Clearing never conflicts
/// assert!(validator::is_placement_valid(&board, Position::new(0, 8), None));
/// ```
#[must_use]
pub fn is_placement_valid(board: &Board, pos: Position, entry: Option<Digit>) -> bool {
    let Some(digit) = entry else {
        return true;
    };

    for col in 0..9 {
        let probe = Position::new(pos.row, col);
        if probe != pos && board.get(probe).digit() == Some(digit) {
            return false;
        }
    }

    for row in 0..9 {
        let probe = Position::new(row, pos.col);
        if probe != pos && board.get(probe).digit() == Some(digit) {
            return false;
        }
    }

    let origin = pos.box_origin();
    for row in origin.row..origin.row + 3 {
        for col in origin.col..origin.col + 3 {
            let probe = Position::new(row, col);
            if probe != pos && board.get(probe).digit() == Some(digit) {
                return false;
            }
        }
    }

    true
}

/// Lists every filled cell whose value collides with a peer, in row-major
/// order.
///
/// Drives live conflict highlighting after each edit, and doubles as the
/// pre-flight check before a board is submitted for solving.
///
/// # Examples
///
/// ```
/// use sudokifu_core::{Board, Cell, Digit, Position, validator};
///
/// let mut board = Board::new();
/// board.set(Position::new(3, 0), Cell::Given(Digit::D2));
/// board.set(Position::new(3, 5), Cell::Given(Digit::D2));
///
/// assert_eq!(
///     validator::conflicts(&board),
///     vec![Position::new(3, 0), Position::new(3, 5)],
/// );
/// ```
#[must_use]
pub fn conflicts(board: &Board) -> Vec<Position> {
    board
        .iter()
        .filter(|&(pos, cell)| !is_placement_valid(board, pos, cell.digit()))
        .map(|(pos, _)| pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Cell;

    fn board_with(cells: &[(u8, u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(row, col, value) in cells {
            let digit = Digit::new(value).unwrap();
            board.set(Position::new(row, col), Cell::Given(digit));
        }
        board
    }

    #[test]
    fn test_empty_board_accepts_everything() {
        let board = Board::new();
        for pos in Position::ALL {
            for digit in Digit::ALL {
                assert!(is_placement_valid(&board, pos, Some(digit)));
            }
        }
    }

    #[test]
    fn test_detects_row_column_and_box_duplicates() {
        let board = board_with(&[(4, 4, 7)]);

        assert!(!is_placement_valid(&board, Position::new(4, 0), Some(Digit::D7)));
        assert!(!is_placement_valid(&board, Position::new(0, 4), Some(Digit::D7)));
        assert!(!is_placement_valid(&board, Position::new(5, 3), Some(Digit::D7)));

        // A different digit in the same places is fine
        assert!(is_placement_valid(&board, Position::new(4, 0), Some(Digit::D6)));
        // The same digit outside row, column, and box is fine
        assert!(is_placement_valid(&board, Position::new(0, 0), Some(Digit::D7)));
    }

    #[test]
    fn test_probed_cell_is_excluded() {
        let board = board_with(&[(2, 3, 9)]);
        // Re-asserting the cell's own value does not self-conflict
        assert!(is_placement_valid(&board, Position::new(2, 3), Some(Digit::D9)));
        // Replacing it with another digit is judged against peers only
        assert!(is_placement_valid(&board, Position::new(2, 3), Some(Digit::D1)));
    }

    #[test]
    fn test_clearing_is_always_valid() {
        let board = board_with(&[(0, 0, 1), (0, 1, 1), (0, 2, 1)]);
        for pos in Position::ALL {
            assert!(is_placement_valid(&board, pos, None));
        }
    }

    #[test]
    fn test_conflicts_lists_each_collision_once_in_row_major_order() {
        // (0,0) and (0,7) collide in row 0; (5,5) and (8,5) collide in column 5
        let board = board_with(&[(0, 0, 4), (0, 7, 4), (5, 5, 2), (8, 5, 2), (4, 0, 8)]);
        assert_eq!(
            conflicts(&board),
            vec![
                Position::new(0, 0),
                Position::new(0, 7),
                Position::new(5, 5),
                Position::new(8, 5),
            ]
        );
    }

    #[test]
    fn test_conflict_free_board_reports_nothing() {
        let board = board_with(&[(0, 0, 1), (1, 3, 1), (2, 6, 1), (0, 4, 2)]);
        assert_eq!(conflicts(&board), Vec::new());
    }

    proptest! {
        /// Property: the three-scan check agrees with a brute-force sweep
        /// over all 81 cells using the peer relation.
        #[test]
        fn prop_agrees_with_peer_sweep(
            cells in prop::collection::vec((0u8..9, 0u8..9, 1u8..=9), 0..25),
            row in 0u8..9,
            col in 0u8..9,
            value in 1u8..=9,
        ) {
            let board = board_with(&cells);
            let pos = Position::new(row, col);
            let digit = Digit::new(value).unwrap();

            let oracle = !Position::ALL.into_iter().any(|other| {
                pos.is_peer_of(other) && board.get(other).digit() == Some(digit)
            });
            prop_assert_eq!(is_placement_valid(&board, pos, Some(digit)), oracle);
        }

        /// Property: every position reported by `conflicts` really has a
        /// peer with the same digit, and vice versa.
        #[test]
        fn prop_conflicts_matches_pairwise_collisions(
            cells in prop::collection::vec((0u8..9, 0u8..9, 1u8..=9), 0..25),
        ) {
            let board = board_with(&cells);
            let reported = conflicts(&board);

            for pos in Position::ALL {
                let Some(digit) = board.get(pos).digit() else {
                    prop_assert!(!reported.contains(&pos));
                    continue;
                };
                let collides = Position::ALL.into_iter().any(|other| {
                    pos.is_peer_of(other) && board.get(other).digit() == Some(digit)
                });
                prop_assert_eq!(reported.contains(&pos), collides);
            }
        }
    }
}
