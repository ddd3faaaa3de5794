//! Game configuration types.
//!
//! A [`GameConfig`] holds everything needed to start a game: the board size
//! and who plays each side. The orchestrator turns it into live players.

use crate::agent::ai::{Difficulty, SearchEngine, SearchPlayer};
use crate::agent::{HumanPlayer, Player, RandomPlayer};
use crate::error::{GameError, Result};
use crate::game_repr::{Side, MAX_SIZE, MIN_SIZE};

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Human player typing coordinates on the console
    Human,
    /// Uniformly random player
    Random,
    /// Search player with specified difficulty
    Ai { difficulty: Difficulty },
}

impl PlayerConfig {
    /// Build the player. `seed` makes the random choices reproducible.
    pub fn create_player(&self, engine: SearchEngine, seed: Option<u64>) -> Box<dyn Player> {
        match *self {
            PlayerConfig::Human => Box::new(HumanPlayer::stdio("Human".to_string())),
            PlayerConfig::Random => match seed {
                Some(seed) => Box::new(RandomPlayer::with_seed(seed)),
                None => Box::new(RandomPlayer::new()),
            },
            PlayerConfig::Ai { difficulty } => {
                let name = format!("AI ({})", difficulty.name());
                let player = SearchPlayer::new(engine, difficulty, name);
                match seed {
                    Some(seed) => Box::new(player.with_seed(seed)),
                    None => Box::new(player),
                }
            }
        }
    }
}

/// Kind of game, derived from the two player configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player - two humans
    PvP,
    /// Player vs AI - one human, one computer player
    PvAI,
    /// AI vs AI - two search players
    AIvAI,
    /// Random player against a search player, the baseline self-play setup
    RandomVsAI,
    /// Anything else (e.g. two random players)
    Custom,
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Side of the square board (3, 4 or 5)
    pub board_size: usize,
    /// Configuration for PlayerOne (moves first, X)
    pub player_one: PlayerConfig,
    /// Configuration for PlayerTwo (O)
    pub player_two: PlayerConfig,
}

impl Default for GameConfig {
    /// Human opening on 3x3 against the standard AI, as the game starts up.
    fn default() -> Self {
        Self::pvai(3, Side::PlayerOne, Difficulty::Standard)
    }
}

impl GameConfig {
    /// Create a PvP game configuration.
    pub fn pvp(board_size: usize) -> Self {
        Self {
            board_size,
            player_one: PlayerConfig::Human,
            player_two: PlayerConfig::Human,
        }
    }

    /// Create a PvAI game configuration.
    ///
    /// # Arguments
    /// * `human_side` - The side the human player will play
    /// * `ai_difficulty` - The difficulty level for the AI opponent
    pub fn pvai(board_size: usize, human_side: Side, ai_difficulty: Difficulty) -> Self {
        let ai = PlayerConfig::Ai {
            difficulty: ai_difficulty,
        };
        let (player_one, player_two) = match human_side {
            Side::PlayerOne => (PlayerConfig::Human, ai),
            Side::PlayerTwo => (ai, PlayerConfig::Human),
        };

        Self {
            board_size,
            player_one,
            player_two,
        }
    }

    /// Create an AIvAI game configuration.
    pub fn aivai(board_size: usize, one: Difficulty, two: Difficulty) -> Self {
        Self {
            board_size,
            player_one: PlayerConfig::Ai { difficulty: one },
            player_two: PlayerConfig::Ai { difficulty: two },
        }
    }

    /// Random player opens, the AI answers.
    pub fn random_vs_ai(board_size: usize, ai_difficulty: Difficulty) -> Self {
        Self {
            board_size,
            player_one: PlayerConfig::Random,
            player_two: PlayerConfig::Ai {
                difficulty: ai_difficulty,
            },
        }
    }

    pub fn player(&self, side: Side) -> PlayerConfig {
        match side {
            Side::PlayerOne => self.player_one,
            Side::PlayerTwo => self.player_two,
        }
    }

    pub fn mode(&self) -> GameMode {
        use PlayerConfig::*;
        match (self.player_one, self.player_two) {
            (Human, Human) => GameMode::PvP,
            (Human, Ai { .. }) | (Ai { .. }, Human) => GameMode::PvAI,
            (Ai { .. }, Ai { .. }) => GameMode::AIvAI,
            (Random, Ai { .. }) | (Ai { .. }, Random) => GameMode::RandomVsAI,
            _ => GameMode::Custom,
        }
    }

    /// Get the human player's side in a PvAI game.
    /// Returns None for every other mode.
    pub fn human_side(&self) -> Option<Side> {
        match self.mode() {
            GameMode::PvAI => {
                if matches!(self.player_one, PlayerConfig::Human) {
                    Some(Side::PlayerOne)
                } else {
                    Some(Side::PlayerTwo)
                }
            }
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.board_size) {
            return Err(GameError::InvalidBoardSize(self.board_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pvp_config() {
        let config = GameConfig::pvp(3);
        assert_eq!(config.mode(), GameMode::PvP);
        assert_eq!(config.player_one, PlayerConfig::Human);
        assert_eq!(config.player_two, PlayerConfig::Human);
        assert_eq!(config.human_side(), None);
    }

    #[test]
    fn test_pvai_config_player_one() {
        let config = GameConfig::pvai(4, Side::PlayerOne, Difficulty::Fast);
        assert_eq!(config.mode(), GameMode::PvAI);
        assert_eq!(config.player_one, PlayerConfig::Human);
        assert_eq!(config.player_two, PlayerConfig::Ai { difficulty: Difficulty::Fast });
        assert_eq!(config.human_side(), Some(Side::PlayerOne));
    }

    #[test]
    fn test_pvai_config_player_two() {
        let config = GameConfig::pvai(3, Side::PlayerTwo, Difficulty::Random);
        assert_eq!(config.player_one, PlayerConfig::Ai { difficulty: Difficulty::Random });
        assert_eq!(config.player(Side::PlayerTwo), PlayerConfig::Human);
        assert_eq!(config.human_side(), Some(Side::PlayerTwo));
    }

    #[test]
    fn test_aivai_and_random_configs() {
        let config = GameConfig::aivai(5, Difficulty::Fast, Difficulty::Standard);
        assert_eq!(config.mode(), GameMode::AIvAI);
        assert_eq!(config.human_side(), None);

        let config = GameConfig::random_vs_ai(3, Difficulty::Standard);
        assert_eq!(config.mode(), GameMode::RandomVsAI);
        assert_eq!(config.player_one, PlayerConfig::Random);
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 3);
        assert_eq!(config.human_side(), Some(Side::PlayerOne));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_board_size() {
        assert_eq!(
            GameConfig::pvp(6).validate(),
            Err(GameError::InvalidBoardSize(6))
        );
        assert!(GameConfig::pvp(5).validate().is_ok());
    }

    #[test]
    fn test_create_players() {
        let player = PlayerConfig::Random.create_player(SearchEngine::new(), Some(1));
        assert_eq!(player.name(), "Random");

        let player = PlayerConfig::Ai { difficulty: Difficulty::Fast }
            .create_player(SearchEngine::new(), None);
        assert_eq!(player.name(), "AI (Fast)");
    }
}
