//! Print perft counts for a position, to check move generation by hand.
//!
//! Usage: `perft [depth] [fen...]`. With `--divide` as the first argument the
//! per-move counts at the given depth are printed as well.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_game::board::{Position, STARTING_FEN};

fn main() -> ExitCode {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let divide = args.first().is_some_and(|a| a == "--divide");
    if divide {
        args.remove(0);
    }

    let depth: usize = match args.first().map(|d| d.parse()) {
        None => 4,
        Some(Ok(depth)) => depth,
        Some(Err(_)) => {
            eprintln!("depth must be a number, got '{}'", args[0]);
            return ExitCode::FAILURE;
        }
    };
    let fen = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        STARTING_FEN.to_string()
    };

    let position = match Position::from_fen(&fen) {
        Ok(position) => position,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{fen}");
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = position.perft(d);
        println!("perft({d}) = {nodes} ({:.2?})", start.elapsed());
    }

    if divide && depth > 0 {
        println!();
        for (mv, nodes) in position.perft_divide(depth) {
            println!("{mv}: {nodes}");
        }
    }
    ExitCode::SUCCESS
}
