//! Command-line front end for validating boards and replaying solver
//! traces.
//!
//! Boards are entered as 81 row-major characters with `0` or `.` for an
//! empty cell. Traces are JSON step arrays as the solver emits them:
//!
//! ```sh
//! sudokifu validate "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//! sudokifu replay "$BOARD" --trace trace.json --interval-ms 100
//! sudokifu replay "$BOARD" --trace trace.json --jump
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    process,
    time::Duration,
};

use clap::{Parser, Subcommand};
use sudokifu_app::{DEFAULT_PLAY_INTERVAL_MS, flow};
use sudokifu_core::{Board, Origin, validator};
use sudokifu_game::GameSession;
use sudokifu_replay::{PlayHandle, PlayOutcome};
use sudokifu_service::{ScriptedSolver, dto};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Parse a board and report conflicting cells.
    Validate {
        /// 81 characters, row-major; `0` or `.` for an empty cell.
        board: String,
    },
    /// Replay a recorded solver trace against a board.
    Replay {
        /// 81 characters, row-major; `0` or `.` for an empty cell.
        board: String,

        /// JSON file holding the step array of a solve response.
        #[arg(long, value_name = "FILE")]
        trace: PathBuf,

        /// Milliseconds between auto-play steps.
        #[arg(
            long,
            value_name = "MILLIS",
            default_value_t = DEFAULT_PLAY_INTERVAL_MS,
            conflicts_with = "jump"
        )]
        interval_ms: u64,

        /// Jump straight to the final board instead of playing.
        #[arg(long)]
        jump: bool,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match args.command {
        CliCommand::Validate { board } => validate(&board),
        CliCommand::Replay {
            board,
            trace,
            interval_ms,
            jump,
        } => replay(&board, &trace, interval_ms, jump),
    }
}

fn validate(input: &str) {
    let board = parse_board(input);
    println!("{board}");

    let conflicts = validator::conflicts(&board);
    if conflicts.is_empty() {
        println!("no conflicts");
        return;
    }

    println!("conflicting cells:");
    for pos in &conflicts {
        println!("  {pos}");
    }
    process::exit(1);
}

fn replay(input: &str, trace_path: &Path, interval_ms: u64, jump: bool) {
    let board = parse_board(input);
    let mut session = GameSession::from_board(board);

    let json = match fs::read_to_string(trace_path) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("cannot read {}: {err}", trace_path.display());
            process::exit(1);
        }
    };
    let steps = match dto::decode_steps(&json) {
        Ok(steps) => steps,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let backend = ScriptedSolver::new().with_solve_trace(steps);
    let total = match flow::request_solve(&mut session, &backend) {
        Ok(total) => total,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    if let Some(engine) = session.replay_mut() {
        if jump {
            engine.jump_to_end();
            println!("{}", engine.board());
            println!("jumped to end: {total} steps applied");
            return;
        }

        let handle = PlayHandle::new();
        let mut applied = 0;
        let outcome = engine.play(
            Duration::from_millis(interval_ms),
            &handle,
            |step, board| {
                applied += 1;
                println!("step {applied}/{total}: {step}");
                println!("{board}");
                println!();
            },
        );
        match outcome {
            PlayOutcome::Finished => println!("replay finished: {total} steps"),
            PlayOutcome::Stopped => println!("replay stopped after {applied} steps"),
        }
    }
}

fn parse_board(input: &str) -> Board {
    match Board::parse_line(input, Origin::Given) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    }
}
