use crate::agent::ai::*;
use crate::game_repr::{BoardState, Move, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a board from its row form
pub fn board(rows: &str) -> BoardState {
    BoardState::from_rows(rows).expect("test board should parse")
}

/// Helper function to run a search and keep only the part callers compare
pub fn best(engine: SearchEngine, pos: &BoardState, side: Side, depth_limit: u8) -> (Move, Score) {
    let result = engine.choose_move(pos, side, 1, depth_limit).unwrap();
    (result.best_move, result.score)
}

/// Helper function to play `plies` random moves, stopping early on a terminal position
pub fn random_position(rng: &mut StdRng, size: usize, plies: usize) -> BoardState {
    let mut pos = BoardState::new(size).unwrap();
    for _ in 0..plies {
        if pos.is_terminal() {
            break;
        }
        let moves = pos.legal_moves();
        let mv = moves[rng.gen_range(0..moves.len())];
        let side = pos.side_to_move();
        pos.place_mark(mv.row, mv.col, side).unwrap();
    }
    pos
}

// ==================== TEST MODULES ====================
