//! Solve and generate round trips against a service backend.

use log::{debug, info};
use sudokifu_game::GameSession;
use sudokifu_service::{ServiceError, SolverBackend};

/// Sends the visible board to the solver and binds the returned trace.
///
/// The grid is snapshotted at call time. The session is only touched
/// after the response parses into a complete trace, so a rejection, an
/// outage, or a malformed body leaves board and phase exactly as they
/// were. Returns the length of the bound trace.
///
/// # Errors
///
/// [`ServiceError::Rejected`] carries the service's message verbatim;
/// [`ServiceError::Unavailable`] and [`ServiceError::Malformed`] come
/// from the transport; [`ServiceError::InvalidStep`] flags out-of-range
/// steps in an otherwise well-formed response.
pub fn request_solve<B: SolverBackend>(
    session: &mut GameSession,
    backend: &B,
) -> Result<usize, ServiceError> {
    let grid = session.board().to_matrix();
    let response = backend.solve(&grid)?;
    let trace = response.into_trace()?;
    let len = trace.len();
    info!("solve produced a trace of {len} steps");
    session.begin_replay(trace);
    Ok(len)
}

/// Fetches a fresh puzzle and loads it as the session's givens.
///
/// Any live replay is discarded only after the response parses into a
/// valid board; failures leave the session untouched. `difficulty` is a
/// clue-count hint passed through unchanged.
///
/// # Errors
///
/// Same failure modes as [`request_solve`], with
/// [`ServiceError::InvalidCell`] for grids holding out-of-range values.
pub fn request_generate<B: SolverBackend>(
    session: &mut GameSession,
    backend: &B,
    difficulty: u8,
) -> Result<(), ServiceError> {
    let response = backend.generate(difficulty)?;
    let board = response.into_board()?;
    debug!("generated puzzle accepted at difficulty {difficulty}");
    session.accept_generated(board);
    Ok(())
}
