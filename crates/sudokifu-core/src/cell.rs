//! Cell contents with provenance.

use crate::Digit;

/// How a filled cell came to hold its value.
///
/// Bulk loads ([`Board::load_matrix`], [`Board::parse_line`]) tag every
/// nonzero entry with one origin chosen by the caller.
///
/// [`Board::load_matrix`]: crate::Board::load_matrix
/// [`Board::parse_line`]: crate::Board::parse_line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Entered by the user before solving.
    Given,
    /// Produced by applying a solver step.
    Derived,
}

/// One cell of the board: empty, or a digit plus its provenance.
///
/// The numeric cell value used by wire formats maps onto this as `0` ⇔
/// [`Cell::Empty`] and 1-9 ⇔ one of the filled variants. Replay cares about
/// the distinction: undoing a solver step must not resurrect a user-entered
/// value as derived, or vice versa.
///
/// # Examples
///
/// ```
/// use sudokifu_core::{Cell, Digit, Origin};
///
/// let cell = Cell::filled(Origin::Derived, Digit::D5);
/// assert_eq!(cell, Cell::Derived(Digit::D5));
/// assert_eq!(cell.digit(), Some(Digit::D5));
/// assert_eq!(cell.value(), 5);
///
/// assert_eq!(Cell::Empty.value(), 0);
/// assert!(Cell::Empty.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Cell {
    /// No value.
    #[default]
    Empty,
    /// A value entered by the user before solving.
    Given(Digit),
    /// A value produced by a solver step.
    Derived(Digit),
}

impl Cell {
    /// Builds a filled cell with the requested provenance.
    #[must_use]
    pub const fn filled(origin: Origin, digit: Digit) -> Self {
        match origin {
            Origin::Given => Self::Given(digit),
            Origin::Derived => Self::Derived(digit),
        }
    }

    /// Returns the digit held by this cell, if any.
    ///
    /// Provenance is erased; row/column/box comparisons only care about the
    /// value.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Empty => None,
            Self::Given(digit) | Self::Derived(digit) => Some(digit),
        }
    }

    /// Returns the numeric value of this cell; `0` means empty.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.digit() {
            Some(digit) => digit.value(),
            None => 0,
        }
    }
}
