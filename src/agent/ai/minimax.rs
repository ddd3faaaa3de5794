// Minimax Search with Alpha-Beta Pruning
//
// PlayerOne maximizes and PlayerTwo minimizes, so every score is from
// PlayerOne's point of view:
// - +1: PlayerOne has completed a line
// - -1: PlayerTwo has completed a line
// -  0: full board, or the depth limit was reached first
//
// There is no evaluation function: a position cut off by the depth limit is
// scored exactly like a draw.
//
// Candidates are visited in row-major order and only a strict improvement
// replaces the best move, so ties go to the earliest cell. Pruning only skips
// candidates that cannot change the result at the root.
//
// Every child is searched on its own copy of the board; sibling branches
// never observe each other's marks.

use crate::game_repr::{BoardState, Move, Side};

/// Score of a position won by PlayerOne (PlayerTwo wins score the negation)
pub const WIN_SCORE: i32 = 1;

/// Score of a drawn or cut-off position
pub const DRAW_SCORE: i32 = 0;

/// Initial alpha: below any reachable score
pub const MIN_SCORE: i32 = i32::MIN;

/// Initial beta: above any reachable score
pub const MAX_SCORE: i32 = i32::MAX;

/// Settings and counters shared by one recursive search.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Ply count at which a non-terminal position is scored as a draw
    pub depth_limit: u8,
    /// Stop enumerating candidates once `beta <= alpha`
    pub pruning: bool,
    /// Positions visited, including the root
    pub nodes: u64,
}

impl SearchContext {
    pub fn new(depth_limit: u8, pruning: bool) -> Self {
        Self {
            depth_limit,
            pruning,
            nodes: 0,
        }
    }
}

/// Depth-limited minimax with alpha-beta pruning
///
/// # Arguments
///
/// * `board` - Position to evaluate (never mutated; children are copies)
/// * `alpha` - Best score the maximizing side can already guarantee
/// * `beta` - Best score the minimizing side can already guarantee
/// * `maximizing` - True when PlayerOne is to move at this ply
/// * `depth` - Plies below the root (0 at the root)
/// * `ctx` - Depth limit, pruning switch and node counter
///
/// # Returns
///
/// (score, best_move). `best_move` is `None` for terminal and cut-off
/// positions.
pub fn minimax(
    board: &BoardState,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    depth: u8,
    ctx: &mut SearchContext,
) -> (i32, Option<Move>) {
    ctx.nodes += 1;

    match board.winner() {
        Some(Side::PlayerOne) => return (WIN_SCORE, None),
        Some(Side::PlayerTwo) => return (-WIN_SCORE, None),
        None => {}
    }
    if board.is_full() || depth >= ctx.depth_limit {
        return (DRAW_SCORE, None);
    }

    let side = if maximizing { Side::PlayerOne } else { Side::PlayerTwo };
    let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };
    let mut best_move = None;

    for mv in board.legal_moves() {
        let child = board.with_mark(mv, side);
        let (score, _) = minimax(&child, alpha, beta, !maximizing, depth + 1, ctx);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }

        if ctx.pruning && beta <= alpha {
            break;
        }
    }

    (best_score, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(rows: &str, maximizing: bool, depth_limit: u8, pruning: bool) -> (i32, Option<Move>, u64) {
        let board = BoardState::from_rows(rows).unwrap();
        let mut ctx = SearchContext::new(depth_limit, pruning);
        let (score, mv) = minimax(&board, MIN_SCORE, MAX_SCORE, maximizing, 0, &mut ctx);
        (score, mv, ctx.nodes)
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(search("XXX/OO./...", false, 9, true), (WIN_SCORE, None, 1));
        assert_eq!(search("XX./OOO/X..", true, 9, true), (-WIN_SCORE, None, 1));
        assert_eq!(search("XOX/XOO/OXX", true, 9, true), (DRAW_SCORE, None, 1));
    }

    #[test]
    fn test_player_one_win_checked_first() {
        // Not reachable in play, but the scan order is fixed: PlayerOne first
        let (score, mv, _) = search("XXX/OOO/...", true, 9, true);
        assert_eq!((score, mv), (WIN_SCORE, None));
    }

    #[test]
    fn test_depth_limit_scores_as_draw() {
        // X wins next move, but a zero-ply budget sees nothing
        let (score, mv, nodes) = search("XX./OO./...", true, 0, true);
        assert_eq!((score, mv, nodes), (DRAW_SCORE, None, 1));

        // One ply is enough to find it
        let (score, mv, _) = search("XX./OO./...", true, 1, true);
        assert_eq!((score, mv), (WIN_SCORE, Some(Move::new(0, 2))));
    }

    #[test]
    fn test_cut_off_search_misses_slow_win() {
        // O to move is lost: after the block at (0,2), X forks through the
        // centre. A one-ply budget cannot see that and calls it a draw.
        let (score_deep, mv_deep, _) = search("XX./O../...", false, 9, true);
        assert_eq!((score_deep, mv_deep), (WIN_SCORE, Some(Move::new(0, 2))));

        let (score_shallow, mv_shallow, _) = search("XX./O../...", false, 1, true);
        assert_eq!((score_shallow, mv_shallow), (DRAW_SCORE, Some(Move::new(0, 2))));
    }

    #[test]
    fn test_ties_keep_first_move() {
        // Every opening is a draw under perfect play: first cell wins the tie
        let (score, mv, _) = search(".../.../...", true, 9, true);
        assert_eq!((score, mv), (DRAW_SCORE, Some(Move::new(0, 0))));
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let (pruned_score, pruned_move, pruned_nodes) = search(".../.X./...", false, 9, true);
        let (full_score, full_move, full_nodes) = search(".../.X./...", false, 9, false);

        assert_eq!((pruned_score, pruned_move), (full_score, full_move));
        assert!(pruned_nodes < full_nodes, "{pruned_nodes} >= {full_nodes}");
    }
}
