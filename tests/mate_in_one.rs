use serde::Deserialize;

use minimax_chess::board::{
    Color, GameState, GameStatus, Move, Search, SearchConfig, SearchDepth, Square, SCALE_FACTOR,
    WIN_SCORE,
};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    fen: String,
    moves: String,
}

fn load_problems() -> ProblemSet {
    let data = include_str!("data/problems.json");
    serde_json::from_str(data).expect("invalid problems.json")
}

/// Position and the legal move written as `from-to`
fn setup(problem: &Problem) -> (GameState, Color, Move) {
    let (mut state, to_move) = GameState::from_fen(&problem.fen).expect("invalid FEN");
    let (from, to) = problem.moves.split_once('-').expect("move is from-to");
    let from: Square = from.parse().expect("from square");
    let to: Square = to.parse().expect("to square");
    let mv = state
        .legal_moves(to_move)
        .expect("move generation")
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .unwrap_or_else(|| panic!("{} is not legal in {}", problem.moves, problem.fen));
    (state, to_move, mv)
}

#[test]
fn mate_in_one_suite() {
    let set = load_problems();
    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let (mut state, to_move, mv) = setup(problem);
        state.apply_move(&mv);
        assert_eq!(
            state.game_status(to_move.opponent()).unwrap(),
            GameStatus::Checkmate { winner: to_move },
            "mate in one failed for fen: {} move: {}",
            problem.fen,
            problem.moves
        );
    }
}

#[test]
fn stalemate_suite() {
    let set = load_problems();
    for problem in set.problems.iter().filter(|p| p.kind == "Stalemate in One") {
        let (mut state, to_move, mv) = setup(problem);
        state.apply_move(&mv);
        assert_eq!(
            state.game_status(to_move.opponent()).unwrap(),
            GameStatus::Stalemate,
            "stalemate failed for fen: {}",
            problem.fen
        );
    }
}

#[test]
fn fixed_depth_search_finds_mates() {
    let set = load_problems();
    let mut search = Search::default();
    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let (mut state, to_move, mv) = setup(problem);
        let best = search
            .best_move_list(&mut state, SearchDepth::Fixed(1), to_move)
            .unwrap();
        assert!(
            best.contains(&mv),
            "search missed {} in {}",
            problem.moves,
            problem.fen
        );
        assert!(best.iter().all(|m| m.score() == WIN_SCORE));
    }
}

#[test]
fn budget_search_finds_mates() {
    let set = load_problems();
    let mut search = Search::new(SearchConfig {
        node_budget: 20_000,
        min_ply: 1,
        ..SearchConfig::default()
    });
    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let (mut state, to_move, mv) = setup(problem);
        let best = search
            .best_move_list(&mut state, SearchDepth::Best, to_move)
            .unwrap();
        assert!(
            best.contains(&mv),
            "search missed {} in {}",
            problem.moves,
            problem.fen
        );
        // Mate on the first ply carries the largest proximity bonus
        assert!(best
            .iter()
            .all(|m| m.score() == WIN_SCORE * SCALE_FACTOR + 5));
    }
}
