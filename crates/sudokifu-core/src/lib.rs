//! Core board model for Sudoku trace replay.
//!
//! This crate provides the data types a replay client manipulates: typed
//! digits and coordinates, cells that remember where their value came from,
//! the 9×9 board with its numeric and flat-text exchange forms, and the
//! advisory placement validator used for live conflict feedback.
//!
//! # Overview
//!
//! 1. **Value types**
//!    - [`digit`]: type-safe digits 1-9 (`0` in wire data means "empty" and
//!      maps to `Option<Digit>::None`)
//!    - [`position`]: board coordinates with construction-time range checks
//! 2. **Board state**
//!    - [`cell`]: cell contents plus provenance (given vs. derived)
//!    - [`board`]: the 9×9 matrix, bulk matrix loads, and the flat
//!      81-character codec used at the UI boundary
//! 3. **Validation**
//!    - [`validator`]: pure row/column/box duplicate checks; advisory only,
//!      the board itself never rejects a conflicting edit
//!
//! # Examples
//!
//! ```
//! use sudokifu_core::{Board, Cell, Digit, Position, validator};
//!
//! let mut board = Board::new();
//! board.set(Position::new(0, 0), Cell::Given(Digit::D5));
//!
//! // A duplicate in the same row is flagged, not forbidden
//! assert!(!validator::is_placement_valid(
//!     &board,
//!     Position::new(0, 6),
//!     Some(Digit::D5),
//! ));
//! board.set(Position::new(0, 6), Cell::Given(Digit::D5));
//! assert_eq!(validator::conflicts(&board).len(), 2);
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod position;
pub mod validator;

pub use self::{
    board::{Board, BoardLineError, InvalidCellValue},
    cell::{Cell, Origin},
    digit::Digit,
    position::Position,
};
