//! Solver trace steps.

use std::fmt::{self, Display};

use sudokifu_core::{Digit, Position};

/// Rejection of a wire step with an out-of-range coordinate or value.
///
/// The raw triple is echoed back so the offending trace element can be
/// reported without re-parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid step: row {row}, col {col}, value {value}")]
pub struct InvalidStep {
    /// Raw row index.
    pub row: u8,
    /// Raw column index.
    pub col: u8,
    /// Raw cell value.
    pub value: u8,
}

/// One atomic assignment from a solver trace: set a cell to a digit, or
/// clear it.
///
/// Traces may touch the same cell repeatedly; a backtracking solver emits
/// set/clear/set chains for cells it revisits, and replay relies on the
/// order being preserved.
///
/// # Examples
///
/// ```
/// use sudokifu_replay::Step;
///
/// let set = Step::from_wire(0, 0, 5).unwrap();
/// assert!(!set.is_clear());
///
/// let clear = Step::from_wire(0, 0, 0).unwrap();
/// assert!(clear.is_clear());
///
/// assert!(Step::from_wire(9, 0, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The targeted cell.
    pub pos: Position,
    /// The digit to place, or `None` to clear the cell.
    pub entry: Option<Digit>,
}

impl Step {
    /// Creates a step from already-typed parts.
    #[must_use]
    pub const fn new(pos: Position, entry: Option<Digit>) -> Self {
        Self { pos, entry }
    }

    /// Validates a raw wire triple into a typed step.
    ///
    /// `row` and `col` must be 0-8 and `value` 0-9, with `value == 0`
    /// meaning "clear the cell" as the wire contract defines it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStep`] echoing the raw triple if any part is out of
    /// range.
    pub const fn from_wire(row: u8, col: u8, value: u8) -> Result<Self, InvalidStep> {
        let Some(pos) = Position::try_new(row, col) else {
            return Err(InvalidStep { row, col, value });
        };
        let entry = match Digit::new(value) {
            Some(digit) => Some(digit),
            None if value == 0 => None,
            None => return Err(InvalidStep { row, col, value }),
        };
        Ok(Self { pos, entry })
    }

    /// Returns `true` if this step clears its cell.
    #[must_use]
    pub const fn is_clear(self) -> bool {
        self.entry.is_none()
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry {
            Some(digit) => write!(f, "{} <- {digit}", self.pos),
            None => write!(f, "{} cleared", self.pos),
        }
    }
}
