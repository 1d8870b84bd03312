//! The transport seam between the replay UI and the solving service.

use sudokifu_core::InvalidCellValue;
use sudokifu_replay::InvalidStep;

use crate::dto::{GenerateResponse, SolveResponse};

/// Failures surfaced by a [`SolverBackend`] or by envelope resolution.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ServiceError {
    /// The service could not be reached at all.
    ///
    /// Deliberately carries no transport detail; callers show a generic
    /// message instead of a stack of connection internals.
    #[display("solver service is unavailable")]
    Unavailable,
    /// The service answered with an error status.
    #[display("{message}")]
    Rejected {
        /// The service's own wording, passed through verbatim.
        message: String,
    },
    /// The response body did not match the contract shape.
    #[display("malformed service response: {detail}")]
    Malformed {
        /// Parser-provided context.
        detail: String,
    },
    /// The response parsed but a trace step was out of range.
    #[display("{_0}")]
    InvalidStep(InvalidStep),
    /// The response parsed but the grid held an out-of-range value.
    #[display("{_0}")]
    InvalidCell(InvalidCellValue),
}

/// A solving/generation endpoint.
///
/// Implementations own the transport. The trait speaks raw grids and
/// response envelopes; logical outcomes (a trace, a rejection) are read
/// out of the envelope afterwards, so a backend only fails when it
/// cannot produce a well-formed response at all.
pub trait SolverBackend {
    /// Requests a solve trace for `grid`.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Unavailable`] when the service cannot be reached,
    /// [`ServiceError::Malformed`] when the response does not match the
    /// contract shape.
    fn solve(&self, grid: &[[u8; 9]; 9]) -> Result<SolveResponse, ServiceError>;

    /// Requests a fresh puzzle with roughly `difficulty` empty cells.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SolverBackend::solve`].
    fn generate(&self, difficulty: u8) -> Result<GenerateResponse, ServiceError>;
}
