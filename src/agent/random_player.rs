use super::player::Player;
use crate::game_repr::{BoardState, Move, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniformly random opponent, the baseline the search is measured against.
pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name: "Random".to_string(),
        }
    }

    /// Reproducible player for self-play series and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &BoardState, _side: Side) -> Option<Move> {
        let legal_moves = board.legal_moves();
        if legal_moves.is_empty() {
            None
        } else {
            Some(legal_moves[self.rng.gen_range(0..legal_moves.len())])
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
