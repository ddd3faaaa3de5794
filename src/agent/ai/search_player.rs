//! SearchPlayer - computer opponent backed by the minimax search
//!
//! The player delegates every decision to [`SearchEngine::choose_move`] with
//! the skill level and depth limit its [`Difficulty`] resolves to for the
//! current board size, and logs the choice, its evaluation and the time it
//! took.
//!
//! # Difficulty Levels
//!
//! - **Random**: skill level 0, a uniformly random empty cell
//! - **Fast**: depth 5 on every board size
//! - **Standard**: exhaustive on 3x3 (depth 9), depth 8 on 4x4, depth 10 on 5x5
//! - **Custom(n)**: depth n

use super::search::{SearchEngine, SearchResult};
use crate::agent::player::Player;
use crate::game_repr::{BoardState, Move, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Depth limit used by [`Difficulty::Standard`] for a board of side `size`.
///
/// 3x3 is searched to the end of the game; the larger boards rely on the
/// cut-off to stay tractable.
pub fn default_depth_limit(size: usize) -> u8 {
    match size {
        0..=3 => 9,
        4 => 8,
        _ => 10,
    }
}

/// AI strength settings mapped to search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Uniformly random legal move (skill level 0)
    Random,
    /// Shallow search, depth 5
    Fast,
    /// Size-dependent depth from [`default_depth_limit`]
    #[default]
    Standard,
    /// Explicit depth limit
    Custom(u8),
}

impl Difficulty {
    /// Skill level passed to the search engine
    pub fn skill_level(&self) -> u8 {
        match self {
            Difficulty::Random => 0,
            _ => 1,
        }
    }

    /// Depth limit for a board of side `board_size`
    pub fn depth_limit(&self, board_size: usize) -> u8 {
        match self {
            Difficulty::Random => 0,
            Difficulty::Fast => 5,
            Difficulty::Standard => default_depth_limit(board_size),
            Difficulty::Custom(depth) => *depth,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Random => "Random",
            Difficulty::Fast => "Fast",
            Difficulty::Standard => "Standard",
            Difficulty::Custom(_) => "Custom",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Custom(depth) => write!(f, "Custom (depth {depth})"),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Computer player running the search for every move.
pub struct SearchPlayer {
    engine: SearchEngine,
    difficulty: Difficulty,
    name: String,
    /// Only used at skill level 0
    rng: StdRng,
    last_result: Option<SearchResult>,
}

impl SearchPlayer {
    pub fn new(engine: SearchEngine, difficulty: Difficulty, name: String) -> Self {
        Self {
            engine,
            difficulty,
            name,
            rng: StdRng::from_entropy(),
            last_result: None,
        }
    }

    /// Default engine, name generated as "AI ({difficulty})"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(SearchEngine::default(), difficulty, name)
    }

    /// Seed the RNG behind the random skill level.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        // Update name if it follows the auto-generated pattern
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty.name());
        }
    }

    /// Statistics of the most recent search, for diagnostics.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }
}

impl Player for SearchPlayer {
    fn get_move(&mut self, board: &BoardState, side: Side) -> Option<Move> {
        let skill_level = self.difficulty.skill_level();
        let depth_limit = self.difficulty.depth_limit(board.size());

        match self
            .engine
            .choose_move_with_rng(board, side, skill_level, depth_limit, &mut self.rng)
        {
            Ok(result) => {
                log::info!(
                    "[{}] has chosen to mark the square in position {} (eval = {}, eval time = {} ms, {} nodes)",
                    self.name,
                    result.best_move,
                    result.score,
                    result.time_ms,
                    result.nodes_searched
                );
                let best_move = result.best_move;
                self.last_result = Some(result);
                Some(best_move)
            }
            Err(err) => {
                log::warn!("[{}] cannot move: {}", self.name, err);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
