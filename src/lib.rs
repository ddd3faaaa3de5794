//! N-in-a-row engine for square boards of side 3, 4 and 5.
//!
//! [`game_repr`] holds the board and its win detection, [`agent`] the players
//! (search, random, console), and [`orchestrator`] drives a game or a series
//! of games between two players.

pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use agent::ai::{choose_move, Difficulty, Score, SearchEngine, SearchResult};
pub use agent::{GameResult, Player};
pub use config::{GameConfig, GameMode, PlayerConfig};
pub use error::{GameError, Result};
pub use game_repr::{BoardState, Line, Mark, Move, Side};
pub use orchestrator::{GameRecord, Orchestrator, SeriesTally};
