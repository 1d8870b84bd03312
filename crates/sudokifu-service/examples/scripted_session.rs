//! Example demonstrating the solve-response contract and the backend seam.
//!
//! This example shows how to:
//! - Decode a solve response body from JSON
//! - Queue the decoded response behind a `ScriptedSolver`
//! - Drive the backend like a live endpoint and resolve its envelope
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scripted_session
//! ```
//!
//! Decode a response body captured from a real service:
//!
//! ```sh
//! cargo run --example scripted_session -- --response response.json
//! ```

use std::{fs, path::PathBuf, process};

use clap::Parser;
use sudokifu_service::{ScriptedSolver, SolveResponse, SolverBackend, dto};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file holding a solve response body.
    #[arg(long, value_name = "FILE")]
    response: Option<PathBuf>,
}

/// A backtracking trace: 5 at (0,0) turns out to be a dead end.
const SAMPLE: &str = r#"{"status":"success","steps":[
    {"row":0,"col":0,"value":5},
    {"row":1,"col":1,"value":3},
    {"row":0,"col":0,"value":0},
    {"row":0,"col":0,"value":7}
]}"#;

fn main() {
    let args = Args::parse();

    let json = match &args.response {
        Some(path) => match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("cannot read {}: {err}", path.display());
                process::exit(1);
            }
        },
        None => SAMPLE.to_owned(),
    };

    let response = match dto::decode_solve_response(&json) {
        Ok(response) => response,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let solver = match response {
        SolveResponse::Success { steps } => ScriptedSolver::new().with_solve_trace(steps),
        SolveResponse::Error { message } => ScriptedSolver::new().with_solve_rejection(message),
    };

    let grid = [[0u8; 9]; 9];
    let trace = match solver.solve(&grid).and_then(SolveResponse::into_trace) {
        Ok(trace) => trace,
        Err(err) => {
            eprintln!("solve failed: {err}");
            process::exit(1);
        }
    };

    println!("trace of {} steps:", trace.len());
    for (index, step) in trace.iter().enumerate() {
        println!("  {:>3}: {step}", index + 1);
    }
}
