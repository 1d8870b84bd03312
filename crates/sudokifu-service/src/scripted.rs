//! A canned backend that serves pre-loaded responses.

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard, PoisonError},
};

use log::debug;

use crate::{
    backend::{ServiceError, SolverBackend},
    dto::{GenerateResponse, SolveResponse, WireStep},
};

/// A [`SolverBackend`] that replays scripted responses in FIFO order.
///
/// Useful for tests and offline runs: load the responses up front, then
/// hand the solver to code that expects a live endpoint. Requests are
/// recorded so tests can assert on what was sent. An exhausted script
/// behaves like an unreachable service.
///
/// # Examples
///
/// ```
/// use sudokifu_service::{ScriptedSolver, ServiceError, SolverBackend};
///
/// let solver = ScriptedSolver::new().with_solve_rejection("Board is unsolvable");
///
/// let response = solver.solve(&[[0; 9]; 9])?;
/// assert_eq!(
///     response.into_trace().unwrap_err().to_string(),
///     "Board is unsolvable",
/// );
/// assert_eq!(solver.solve(&[[0; 9]; 9]), Err(ServiceError::Unavailable));
/// # Ok::<(), ServiceError>(())
/// ```
#[derive(Debug, Default)]
pub struct ScriptedSolver {
    solves: Mutex<VecDeque<Result<SolveResponse, ServiceError>>>,
    generates: Mutex<VecDeque<Result<GenerateResponse, ServiceError>>>,
    solved_grids: Mutex<Vec<[[u8; 9]; 9]>>,
    requested_difficulties: Mutex<Vec<u8>>,
}

impl ScriptedSolver {
    /// Creates a solver with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful solve response carrying `steps`.
    #[must_use]
    pub fn with_solve_trace(self, steps: Vec<WireStep>) -> Self {
        self.push_solve(Ok(SolveResponse::Success { steps }))
    }

    /// Queues a solve rejection with the service's `message`.
    #[must_use]
    pub fn with_solve_rejection(self, message: impl Into<String>) -> Self {
        self.push_solve(Ok(SolveResponse::Error {
            message: message.into(),
        }))
    }

    /// Queues a transport failure for the next solve request.
    #[must_use]
    pub fn with_solve_outage(self) -> Self {
        self.push_solve(Err(ServiceError::Unavailable))
    }

    /// Queues a successful generate response carrying `board`.
    #[must_use]
    pub fn with_generate_board(self, board: [[u8; 9]; 9]) -> Self {
        self.push_generate(Ok(GenerateResponse::Success { board }))
    }

    /// Queues a generate rejection with the service's `message`.
    #[must_use]
    pub fn with_generate_rejection(self, message: impl Into<String>) -> Self {
        self.push_generate(Ok(GenerateResponse::Error {
            message: message.into(),
        }))
    }

    /// Queues a transport failure for the next generate request.
    #[must_use]
    pub fn with_generate_outage(self) -> Self {
        self.push_generate(Err(ServiceError::Unavailable))
    }

    /// Returns the grids received by [`SolverBackend::solve`], oldest first.
    #[must_use]
    pub fn solved_grids(&self) -> Vec<[[u8; 9]; 9]> {
        lock(&self.solved_grids).clone()
    }

    /// Returns the difficulties received by [`SolverBackend::generate`],
    /// oldest first.
    #[must_use]
    pub fn requested_difficulties(&self) -> Vec<u8> {
        lock(&self.requested_difficulties).clone()
    }

    fn push_solve(self, response: Result<SolveResponse, ServiceError>) -> Self {
        lock(&self.solves).push_back(response);
        self
    }

    fn push_generate(self, response: Result<GenerateResponse, ServiceError>) -> Self {
        lock(&self.generates).push_back(response);
        self
    }
}

impl SolverBackend for ScriptedSolver {
    fn solve(&self, grid: &[[u8; 9]; 9]) -> Result<SolveResponse, ServiceError> {
        lock(&self.solved_grids).push(*grid);
        let response = lock(&self.solves)
            .pop_front()
            .unwrap_or(Err(ServiceError::Unavailable));
        debug!("scripted solve request answered with {response:?}");
        response
    }

    fn generate(&self, difficulty: u8) -> Result<GenerateResponse, ServiceError> {
        lock(&self.requested_difficulties).push(difficulty);
        let response = lock(&self.generates)
            .pop_front()
            .unwrap_or(Err(ServiceError::Unavailable));
        debug!("scripted generate request answered with {response:?}");
        response
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
