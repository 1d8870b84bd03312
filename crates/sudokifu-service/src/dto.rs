//! Request and response bodies for the solver/generator endpoints.
//!
//! The service tags every response with a `status` field:
//!
//! ```json
//! {"status": "success", "steps": [{"row": 0, "col": 0, "value": 5}]}
//! {"status": "error", "message": "Board is unsolvable"}
//! ```
//!
//! The codecs here are pure functions over strings, so transports and
//! tests share one definition of the contract.

use serde::{Deserialize, Serialize};
use sudokifu_core::{Board, Origin};
use sudokifu_replay::StepSequence;

use crate::backend::ServiceError;

/// Path of the solve endpoint.
pub const SOLVE_PATH: &str = "/solve";

/// Path of the generate endpoint, without its query string.
pub const GENERATE_PATH: &str = "/generate";

/// Body of a solve request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// The 9x9 grid in row-major order, `0` for an empty cell.
    pub grid: [[u8; 9]; 9],
}

impl SolveRequest {
    /// Builds the request body for `board`.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            grid: board.to_matrix(),
        }
    }
}

/// One trace element as the service serializes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireStep {
    /// Row index, `0..=8`.
    pub row: u8,
    /// Column index, `0..=8`.
    pub col: u8,
    /// Value to write, `1..=9`, or `0` to clear the cell.
    pub value: u8,
}

/// Response to a solve request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SolveResponse {
    /// The board was solved.
    Success {
        /// The solver's trace, in application order.
        steps: Vec<WireStep>,
    },
    /// The service rejected the board.
    Error {
        /// The service's own wording, surfaced to the user verbatim.
        message: String,
    },
}

impl SolveResponse {
    /// Resolves the envelope into a typed trace.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Rejected`] carrying the verbatim message for an
    /// error status, or [`ServiceError::InvalidStep`] if any step is out
    /// of range. Rejection is atomic, so no partial trace escapes.
    pub fn into_trace(self) -> Result<StepSequence, ServiceError> {
        match self {
            Self::Success { steps } => StepSequence::from_wire(
                steps.into_iter().map(|step| (step.row, step.col, step.value)),
            )
            .map_err(ServiceError::InvalidStep),
            Self::Error { message } => Err(ServiceError::Rejected { message }),
        }
    }
}

/// Response to a generate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerateResponse {
    /// A fresh puzzle.
    Success {
        /// The generated grid, `0` for an empty cell.
        board: [[u8; 9]; 9],
    },
    /// Generation failed.
    Error {
        /// The service's own wording, surfaced to the user verbatim.
        message: String,
    },
}

impl GenerateResponse {
    /// Resolves the envelope into a board whose clues are given cells.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Rejected`] carrying the verbatim message for an
    /// error status, or [`ServiceError::InvalidCell`] if the grid holds a
    /// value outside `0..=9`.
    pub fn into_board(self) -> Result<Board, ServiceError> {
        match self {
            Self::Success { board } => {
                Board::from_matrix(&board, Origin::Given).map_err(ServiceError::InvalidCell)
            }
            Self::Error { message } => Err(ServiceError::Rejected { message }),
        }
    }
}

/// Renders the path and query string of a generate request.
#[must_use]
pub fn generate_path(difficulty: u8) -> String {
    format!("{GENERATE_PATH}?difficulty={difficulty}")
}

/// Serializes a solve request body.
///
/// # Errors
///
/// Returns [`ServiceError::Malformed`] if serialization fails.
pub fn encode_solve_request(request: &SolveRequest) -> Result<String, ServiceError> {
    serde_json::to_string(request).map_err(malformed)
}

/// Parses a solve response body.
///
/// # Errors
///
/// Returns [`ServiceError::Malformed`] if `json` does not match the
/// contract shape.
pub fn decode_solve_response(json: &str) -> Result<SolveResponse, ServiceError> {
    serde_json::from_str(json).map_err(malformed)
}

/// Parses a generate response body.
///
/// # Errors
///
/// Returns [`ServiceError::Malformed`] if `json` does not match the
/// contract shape.
pub fn decode_generate_response(json: &str) -> Result<GenerateResponse, ServiceError> {
    serde_json::from_str(json).map_err(malformed)
}

/// Parses a bare JSON step array, the `steps` field without its envelope.
///
/// Trace files saved from earlier sessions use this shape.
///
/// # Errors
///
/// Returns [`ServiceError::Malformed`] if `json` is not an array of steps.
pub fn decode_steps(json: &str) -> Result<Vec<WireStep>, ServiceError> {
    serde_json::from_str(json).map_err(malformed)
}

fn malformed(err: serde_json::Error) -> ServiceError {
    ServiceError::Malformed {
        detail: err.to_string(),
    }
}
