//! Wire contract and backend seam for the solving/generation service.
//!
//! # Overview
//!
//! The replay UI never solves a board itself. It ships the grid to an
//! external service and plays back the trace the service returns. This
//! crate pins down that boundary:
//!
//! - [`dto`] holds the request/response bodies and pure JSON codecs, so
//!   any transport (HTTP client, test harness, fixture file) speaks the
//!   same shapes.
//! - [`SolverBackend`] abstracts the transport itself.
//! - [`ScriptedSolver`] is a canned backend for tests and offline runs.
//!
//! Responses arrive as a status envelope. [`SolveResponse::into_trace`]
//! and [`GenerateResponse::into_board`] resolve the envelope into typed
//! values, rejecting out-of-range data before it reaches a board or a
//! replay engine.
//!
//! # Examples
//!
//! ```
//! use sudokifu_service::{ScriptedSolver, SolverBackend, WireStep};
//!
//! let solver = ScriptedSolver::new().with_solve_trace(vec![WireStep {
//!     row: 0,
//!     col: 0,
//!     value: 5,
//! }]);
//! let response = solver.solve(&[[0; 9]; 9])?;
//! let trace = response.into_trace()?;
//! assert_eq!(trace.len(), 1);
//! # Ok::<(), sudokifu_service::ServiceError>(())
//! ```

pub mod backend;
pub mod dto;
pub mod scripted;

pub use self::{
    backend::{ServiceError, SolverBackend},
    dto::{GenerateResponse, SolveRequest, SolveResponse, WireStep},
    scripted::ScriptedSolver,
};
