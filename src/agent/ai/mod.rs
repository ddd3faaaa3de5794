// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the computer opponent for every supported board
// size with one depth-limited minimax search.
//
// Key features:
// - Deterministic for skill level >= 1 (same position always gives same move)
// - Alpha-beta pruning that never changes the chosen move or its score
// - Depth limit scored as a draw to keep 4x4 and 5x5 tractable
// - Uniform random fallback for skill level 0
// - Optional root-parallel search on rayon

mod minimax;
mod search;
mod search_player;

#[cfg(test)]
mod tests;

pub use minimax::{minimax, SearchContext, DRAW_SCORE, MAX_SCORE, MIN_SCORE, WIN_SCORE};
pub use search::{choose_move, Score, SearchEngine, SearchResult};
pub use search_player::{default_depth_limit, Difficulty, SearchPlayer};
