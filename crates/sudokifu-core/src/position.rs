//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// Both components are in the range 0-8 and the range is enforced at
/// construction time, so downstream indexing never re-checks bounds.
///
/// # Examples
///
/// ```
/// use sudokifu_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row, 4);
/// assert_eq!(pos.col, 7);
/// assert_eq!(pos.box_origin(), Position::new(3, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: u8,
    /// Column index, 0 at the left.
    pub col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokifu_core::Position;
    ///
    /// assert_eq!(Position::ALL.len(), 81);
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[80], Position::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut row = 0u8;
        while row < 9 {
            let mut col = 0u8;
            while col < 9 {
                all[row as usize * 9 + col as usize] = Self { row, col };
                col += 1;
            }
            row += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokifu_core::Position;
    ///
    /// let pos = Position::new(0, 8);
    /// assert_eq!(pos.row, 0);
    /// assert_eq!(pos.col, 8);
    /// ```
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Creates a position, returning `None` if either coordinate is out of
    /// range.
    ///
    /// Use this when the coordinates come from untrusted wire data.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokifu_core::Position;
    ///
    /// assert_eq!(Position::try_new(8, 8), Some(Position::new(8, 8)));
    /// assert_eq!(Position::try_new(9, 0), None);
    /// assert_eq!(Position::try_new(0, 9), None);
    /// ```
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the top-left corner of the 3×3 box containing this position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokifu_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_origin(), Position::new(0, 0));
    /// assert_eq!(Position::new(5, 1).box_origin(), Position::new(3, 0));
    /// assert_eq!(Position::new(8, 8).box_origin(), Position::new(6, 6));
    /// ```
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            row: self.row / 3 * 3,
            col: self.col / 3 * 3,
        }
    }

    /// Returns `true` if `other` shares this position's row, column, or box
    /// and is not the position itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokifu_core::Position;
    ///
    /// let pos = Position::new(4, 4);
    /// assert!(pos.is_peer_of(Position::new(4, 0))); // same row
    /// assert!(pos.is_peer_of(Position::new(0, 4))); // same column
    /// assert!(pos.is_peer_of(Position::new(5, 5))); // same box
    /// assert!(!pos.is_peer_of(pos)); // never its own peer
    /// assert!(!pos.is_peer_of(Position::new(0, 0)));
    /// ```
    #[must_use]
    pub const fn is_peer_of(self, other: Self) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        self.row == other.row
            || self.col == other.col
            || (self.row / 3 == other.row / 3 && self.col / 3 == other.col / 3)
    }

    /// Returns the position one row up, or `None` at the top edge.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        match self.row.checked_sub(1) {
            Some(row) => Some(Self { row, col: self.col }),
            None => None,
        }
    }

    /// Returns the position one row down, or `None` at the bottom edge.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        Self::try_new(self.row + 1, self.col)
    }

    /// Returns the position one column left, or `None` at the left edge.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        match self.col.checked_sub(1) {
            Some(col) => Some(Self { row: self.row, col }),
            None => None,
        }
    }

    /// Returns the position one column right, or `None` at the right edge.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        Self::try_new(self.row, self.col + 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
