//! Shared library module for the Sudokifu app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Auto-play cadence used when the caller does not pick one.
pub const DEFAULT_PLAY_INTERVAL_MS: u64 = 200;

pub mod command;
pub mod controller;
pub mod flow;
