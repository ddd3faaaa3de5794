//! Player trait and associated types for game participants.
//!
//! Anything that can pick a cell for a side implements [`Player`]: the search
//! engine, the uniform random opponent, or a person typing coordinates into a
//! console. The [`Orchestrator`](crate::orchestrator::Orchestrator) asks the
//! player whose turn it is for a move, applies it to the live board and checks
//! for a terminal position after every ply.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking. A human player waits for input, the search
//! player computes; the game loop simply waits for the answer.

use crate::game_repr::{BoardState, Move, Side};
use std::fmt;

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning side
    pub fn from_winner(winner: Side) -> Self {
        match winner {
            Side::PlayerOne => GameResult::PlayerOneWins,
            Side::PlayerTwo => GameResult::PlayerTwoWins,
        }
    }

    /// Result of a terminal position, `None` while the game is still open.
    pub fn from_board(board: &BoardState) -> Option<Self> {
        match board.winner() {
            Some(side) => Some(Self::from_winner(side)),
            None if board.is_full() => Some(GameResult::Draw),
            None => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::PlayerOneWins => Some(Side::PlayerOne),
            GameResult::PlayerTwoWins => Some(Side::PlayerTwo),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(side) => write!(f, "{side} wins"),
            None => write!(f, "Tie game"),
        }
    }
}

/// Trait for entities that can provide moves.
///
/// Only `get_move()` must be implemented. The notifications default to doing
/// nothing.
pub trait Player {
    /// Request the next move for `side` on `board`.
    ///
    /// - `Some(Move)`: the chosen cell. The orchestrator rejects occupied or
    ///   off-board cells with an `InvalidMove`/`OutOfBounds` error.
    /// - `None`: the player resigns (console EOF, quit command, no legal move).
    fn get_move(&mut self, board: &BoardState, side: Side) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Display name used in logs and console output.
    fn name(&self) -> &str {
        "Player"
    }
}
