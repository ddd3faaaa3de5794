//! Whole-game properties of the search on the 3x3 board
//!
//! - The exhaustive search never loses, whichever side it plays and whatever
//!   the opponent does
//! - Perfect play from both sides is a draw
//! - Cut-offs and root parallelism never change the chosen move or its score

use tictactoe_engine::{BoardState, GameResult, Move, Score, SearchEngine, Side};

const FULL_DEPTH: u8 = 9;

/// Walk every opponent reply while `ai_side` answers with the search.
/// Returns the number of finished games visited.
fn explore(board: &BoardState, ai_side: Side, engine: &SearchEngine) -> u32 {
    if let Some(result) = GameResult::from_board(board) {
        assert_ne!(
            result.winner(),
            Some(ai_side.opposite()),
            "search lost as {ai_side}:\n{board}"
        );
        return 1;
    }

    let side = board.side_to_move();
    if side == ai_side {
        let result = engine.choose_move(board, side, 1, FULL_DEPTH).unwrap();
        let mut next = board.clone();
        next.place_mark(result.best_move.row, result.best_move.col, side)
            .unwrap();
        explore(&next, ai_side, engine)
    } else {
        board
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let mut next = board.clone();
                next.place_mark(mv.row, mv.col, side).unwrap();
                explore(&next, ai_side, engine)
            })
            .sum()
    }
}

#[test]
fn test_never_loses_moving_first() {
    let games = explore(&BoardState::new(3).unwrap(), Side::PlayerOne, &SearchEngine::new());
    assert!(games > 0);
}

#[test]
fn test_never_loses_moving_second() {
    let games = explore(&BoardState::new(3).unwrap(), Side::PlayerTwo, &SearchEngine::new());
    assert!(games > 0);
}

#[test]
fn test_perfect_play_is_a_draw() {
    let engine = SearchEngine::new();
    let mut board = BoardState::new(3).unwrap();
    let mut plies: Vec<Move> = Vec::new();

    while GameResult::from_board(&board).is_none() {
        let side = board.side_to_move();
        let result = engine.choose_move(&board, side, 1, FULL_DEPTH).unwrap();
        assert_eq!(result.score, Score::Value(0), "position after {plies:?}");
        board.place_mark(result.best_move.row, result.best_move.col, side)
            .unwrap();
        plies.push(result.best_move);
    }

    assert_eq!(GameResult::from_board(&board), Some(GameResult::Draw));
    assert_eq!(plies.len(), 9);
    assert_eq!(plies[0], Move::new(0, 0));
}

#[test]
fn test_engine_variants_agree_over_a_game() {
    let variants = [
        SearchEngine::new(),
        SearchEngine::new().with_pruning(false),
        SearchEngine::new().with_parallel_root(true),
    ];
    let mut board = BoardState::from_rows("X../.../...").unwrap();

    while GameResult::from_board(&board).is_none() {
        let side = board.side_to_move();
        let answers: Vec<_> = variants
            .iter()
            .map(|engine| {
                let result = engine.choose_move(&board, side, 1, FULL_DEPTH).unwrap();
                (result.best_move, result.score)
            })
            .collect();

        assert!(answers.iter().all(|answer| *answer == answers[0]), "{answers:?}\n{board}");
        board.place_mark(answers[0].0.row, answers[0].0.col, side).unwrap();
    }
}
