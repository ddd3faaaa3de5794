// Move Search Entry Point
//
// Validates the position, dispatches skill level 0 to a uniform random pick
// and everything else to minimax with alpha-beta pruning, and gathers the
// statistics reported for each search.

use super::minimax::{minimax, SearchContext, MAX_SCORE, MIN_SCORE};
use crate::error::{GameError, Result};
use crate::game_repr::{BoardState, Move, Side};
use rand::Rng;
use rayon::prelude::*;
use std::fmt;
use std::time::Instant;

/// Evaluation attached to a chosen move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// Minimax value from PlayerOne's point of view: -1, 0 or +1
    Value(i32),
    /// Random pick, nothing was evaluated
    Unscored,
}

impl Score {
    pub fn value(&self) -> Option<i32> {
        match self {
            Score::Value(v) => Some(*v),
            Score::Unscored => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Value(v) => write!(f, "{v}"),
            Score::Unscored => write!(f, "random"),
        }
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: Score,
    pub depth_limit: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// Move chooser for any supported board size.
///
/// The engine holds no state between calls: every search is a pure function
/// of the position and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    pruning: bool,
    parallel_root: bool,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            pruning: true,
            parallel_root: false,
        }
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable alpha-beta cut-offs. Either way the same move and
    /// score come back; only the number of visited positions changes.
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    /// Search each top-level candidate on its own rayon task.
    pub fn with_parallel_root(mut self, enabled: bool) -> Self {
        self.parallel_root = enabled;
        self
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }

    pub fn parallel_root(&self) -> bool {
        self.parallel_root
    }

    /// Choose a move for `side` on `board`.
    ///
    /// # Arguments
    /// * `skill_level` - 0 picks a uniformly random legal move, anything
    ///   higher runs the full search
    /// * `depth_limit` - Plies explored before a position is scored as a
    ///   draw; raised to 1 if 0 is passed
    ///
    /// # Errors
    /// `InvalidState` when the board has no legal move or already has a
    /// winner.
    pub fn choose_move(
        &self,
        board: &BoardState,
        side: Side,
        skill_level: u8,
        depth_limit: u8,
    ) -> Result<SearchResult> {
        self.choose_move_with_rng(board, side, skill_level, depth_limit, &mut rand::thread_rng())
    }

    /// Same as [`choose_move`](Self::choose_move) with a caller-supplied RNG
    /// for the skill level 0 pick.
    pub fn choose_move_with_rng<R: Rng>(
        &self,
        board: &BoardState,
        side: Side,
        skill_level: u8,
        depth_limit: u8,
        rng: &mut R,
    ) -> Result<SearchResult> {
        let start_time = Instant::now();

        let legal_moves = board.legal_moves();
        if legal_moves.is_empty() {
            return Err(GameError::InvalidState("no legal moves on a full board"));
        }
        if board.winner().is_some() {
            return Err(GameError::InvalidState("game already has a winner"));
        }

        if skill_level == 0 {
            let best_move = legal_moves[rng.gen_range(0..legal_moves.len())];
            return Ok(SearchResult {
                best_move,
                score: Score::Unscored,
                depth_limit: 0,
                nodes_searched: 0,
                time_ms: start_time.elapsed().as_millis() as u64,
            });
        }

        // Ensure we search at least depth 1
        let depth_limit = depth_limit.max(1);

        let (score, best_move, nodes) = if self.parallel_root {
            self.search_parallel_root(board, side, depth_limit)
        } else {
            let mut ctx = SearchContext::new(depth_limit, self.pruning);
            let (score, mv) = minimax(board, MIN_SCORE, MAX_SCORE, side.is_maximizing(), 0, &mut ctx);
            (score, mv, ctx.nodes)
        };

        // The root is neither won nor full and the limit is at least one ply,
        // so the first candidate always becomes the best move.
        let best_move = best_move.ok_or(GameError::InvalidState("search returned no move"))?;

        let result = SearchResult {
            best_move,
            score: Score::Value(score),
            depth_limit,
            nodes_searched: nodes,
            time_ms: start_time.elapsed().as_millis() as u64,
        };
        log_search_info(&result, &start_time);

        Ok(result)
    }

    /// Score every root candidate independently with a full window, then fold
    /// in row-major order keeping strict improvements only. A full window
    /// gives exact child scores, so this matches the sequential search.
    fn search_parallel_root(
        &self,
        board: &BoardState,
        side: Side,
        depth_limit: u8,
    ) -> (i32, Option<Move>, u64) {
        let maximizing = side.is_maximizing();
        let moves = board.legal_moves();

        let scored: Vec<(Move, i32, u64)> = moves
            .as_slice()
            .par_iter()
            .map(|&mv| {
                let child = board.with_mark(mv, side);
                let mut ctx = SearchContext::new(depth_limit, self.pruning);
                let (score, _) = minimax(&child, MIN_SCORE, MAX_SCORE, !maximizing, 1, &mut ctx);
                (mv, score, ctx.nodes)
            })
            .collect();

        let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };
        let mut best_move = None;
        let mut nodes = 1;

        for (mv, score, child_nodes) in scored {
            nodes += child_nodes;
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }
        }

        (best_score, best_move, nodes)
    }
}

/// Convenience wrapper around a default [`SearchEngine`].
pub fn choose_move(
    board: &BoardState,
    side: Side,
    skill_level: u8,
    depth_limit: u8,
) -> Result<SearchResult> {
    SearchEngine::default().choose_move(board, side, skill_level, depth_limit)
}

fn log_search_info(result: &SearchResult, start_time: &Instant) {
    let elapsed_ms = start_time.elapsed().as_millis() as u64;
    let nps = if elapsed_ms > 0 {
        (result.nodes_searched as f64 / elapsed_ms as f64 * 1000.0) as u64
    } else {
        result.nodes_searched
    };

    log::debug!(
        "info depth {} score {} nodes {} time {} nps {} move {}",
        result.depth_limit,
        result.score,
        result.nodes_searched,
        elapsed_ms,
        nps,
        result.best_move
    );
}
