use std::env;
use std::process::ExitCode;

use log::info;
use rand::thread_rng;

use minimax_chess::board::{find_best_move, GameState, SearchDepth};

fn parse_depth(arg: &str) -> Option<SearchDepth> {
    if arg == "best" {
        return Some(SearchDepth::Best);
    }
    arg.parse::<u8>().ok().and_then(SearchDepth::fixed)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: position_status <fen> [1-4|best]");
        return ExitCode::FAILURE;
    }

    let (mut state, to_move) = match GameState::from_fen(&args[1]) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("invalid position: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = state.validate_setup(to_move) {
        eprintln!("invalid position: {e}");
        return ExitCode::FAILURE;
    }

    let depth = match args.get(2).map(|arg| (arg, parse_depth(arg))) {
        None => None,
        Some((_, Some(depth))) => Some(depth),
        Some((arg, None)) => {
            eprintln!("invalid depth '{arg}': expected 1-4 or best");
            return ExitCode::FAILURE;
        }
    };

    let (status, legal_moves) = match (state.game_status(to_move), state.legal_moves(to_move)) {
        (Ok(status), Ok(moves)) => (status, moves),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("move generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("side_to_move: {to_move}");
    println!("status: {status}");
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }

    if let Some(depth) = depth {
        info!("searching at depth {depth}");
        match find_best_move(&mut state, depth, to_move, &mut thread_rng()) {
            Ok(Some(mv)) => println!("best_move: {mv} ({})", mv.score()),
            Ok(None) => println!("best_move: none"),
            Err(e) => {
                eprintln!("search failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
