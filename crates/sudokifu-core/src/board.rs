//! The 9×9 board and its exchange forms.

use std::fmt::{self, Display, Write as _};

use crate::{Cell, Digit, Origin, Position};

/// Parse failure for the flat 81-character board form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardLineError {
    /// The input has the wrong number of significant characters.
    #[display("expected 81 board characters, found {found}")]
    WrongLength {
        /// Number of non-whitespace characters in the input.
        found: usize,
    },
    /// A character outside `1`-`9`, `0`, `.`, and whitespace.
    #[display("invalid board character {found:?} at cell {index}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Its row-major cell index.
        index: usize,
    },
}

/// Rejection of a numeric matrix entry outside `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell value {value} at {pos}")]
pub struct InvalidCellValue {
    /// Coordinate of the offending entry.
    pub pos: Position,
    /// The rejected raw value.
    pub value: u8,
}

/// The 9×9 cell matrix.
///
/// `Board` enforces shape, never Sudoku validity: it may transiently hold
/// conflicting values while the user edits. Conflict detection is the
/// advisory [`validator`](crate::validator) layer's job, and its results are
/// recorded by callers, not here.
///
/// # Examples
///
/// ```
/// use sudokifu_core::{Board, Cell, Digit, Position};
///
/// let mut board = Board::new();
/// board.set(Position::new(0, 0), Cell::Given(Digit::D5));
/// assert_eq!(board.get(Position::new(0, 0)).value(), 5);
///
/// board.reset();
/// assert!(board.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 9]; 9],
}

impl Board {
    /// Creates an all-empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 9]; 9],
        }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Writes `cell` at `pos`, replacing the previous contents.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[usize::from(pos.row)][usize::from(pos.col)] = cell;
    }

    /// Resets every cell to [`Cell::Empty`].
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; 9]; 9];
    }

    /// Returns `true` if every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, cell)| cell.is_empty())
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }

    /// Exports the numeric snapshot; `0` means empty, provenance is dropped.
    #[must_use]
    pub fn to_matrix(&self) -> [[u8; 9]; 9] {
        let mut matrix = [[0; 9]; 9];
        for (pos, cell) in self.iter() {
            matrix[usize::from(pos.row)][usize::from(pos.col)] = cell.value();
        }
        matrix
    }

    /// Bulk-loads a numeric matrix, tagging every nonzero entry with
    /// `origin`. Previous contents are fully replaced.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCellValue`] for the first entry outside `0..=9`; the
    /// board is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokifu_core::{Board, Cell, Digit, Origin, Position};
    ///
    /// let mut matrix = [[0; 9]; 9];
    /// matrix[2][3] = 7;
    ///
    /// let mut board = Board::new();
    /// board.load_matrix(&matrix, Origin::Given).unwrap();
    /// assert_eq!(board.get(Position::new(2, 3)), Cell::Given(Digit::D7));
    /// ```
    pub fn load_matrix(
        &mut self,
        matrix: &[[u8; 9]; 9],
        origin: Origin,
    ) -> Result<(), InvalidCellValue> {
        let mut cells = [[Cell::Empty; 9]; 9];
        for pos in Position::ALL {
            let value = matrix[usize::from(pos.row)][usize::from(pos.col)];
            match Digit::new(value) {
                Some(digit) => {
                    cells[usize::from(pos.row)][usize::from(pos.col)] = Cell::filled(origin, digit);
                }
                None if value == 0 => {}
                None => return Err(InvalidCellValue { pos, value }),
            }
        }
        self.cells = cells;
        Ok(())
    }

    /// Builds a board from a numeric matrix.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCellValue`] for the first entry outside `0..=9`.
    pub fn from_matrix(matrix: &[[u8; 9]; 9], origin: Origin) -> Result<Self, InvalidCellValue> {
        let mut board = Self::new();
        board.load_matrix(matrix, origin)?;
        Ok(board)
    }

    /// Parses the flat row-major form used at the UI boundary.
    ///
    /// Exactly 81 significant characters are required: `1`-`9` are values,
    /// `0` and `.` are empty. ASCII whitespace is ignored so multi-line grids
    /// are accepted. Nonzero cells are tagged with `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardLineError::WrongLength`] if the significant character
    /// count is not 81, and [`BoardLineError::InvalidCharacter`] for the
    /// first character outside the accepted alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokifu_core::{Board, Cell, Digit, Origin, Position};
    ///
    /// let board = Board::parse_line(
    ///     "530070000\
    ///      600195000\
    ///      098000060\
    ///      800060003\
    ///      400803001\
    ///      700020006\
    ///      060000280\
    ///      000419005\
    ///      000080079",
    ///     Origin::Given,
    /// )
    /// .unwrap();
    /// assert_eq!(board.get(Position::new(0, 0)), Cell::Given(Digit::D5));
    /// assert_eq!(board.get(Position::new(0, 2)), Cell::Empty);
    /// ```
    pub fn parse_line(input: &str, origin: Origin) -> Result<Self, BoardLineError> {
        let significant: Vec<char> = input
            .chars()
            .filter(|ch| !ch.is_ascii_whitespace())
            .collect();
        if significant.len() != 81 {
            return Err(BoardLineError::WrongLength {
                found: significant.len(),
            });
        }

        let mut board = Self::new();
        for (index, ch) in significant.into_iter().enumerate() {
            let cell = match ch {
                '0' | '.' => Cell::Empty,
                _ => {
                    let digit = ch
                        .to_digit(10)
                        .and_then(|value| u8::try_from(value).ok())
                        .and_then(Digit::new)
                        .ok_or(BoardLineError::InvalidCharacter { found: ch, index })?;
                    Cell::filled(origin, digit)
                }
            };
            board.set(Position::ALL[index], cell);
        }
        Ok(board)
    }

    /// Emits the flat row-major form: 81 characters, `0` for empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokifu_core::{Board, Origin};
    ///
    /// let line = "003020600900305001001806400\
    ///             008102900700000008006708200\
    ///             002609500800203009005010300";
    /// let board = Board::parse_line(line, Origin::Given).unwrap();
    /// assert_eq!(board.to_line(), line);
    /// ```
    #[must_use]
    pub fn to_line(&self) -> String {
        self.iter()
            .map(|(_, cell)| char::from(b'0' + cell.value()))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 && row % 3 == 0 {
                f.write_str("---+---+---\n")?;
            }
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    f.write_char('|')?;
                }
                match self.get(Position::new(row, col)).digit() {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('.')?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
