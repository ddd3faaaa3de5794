//! Game loop and self-play series.
//!
//! This module contains the [`Orchestrator`], the root coordinator of a game.
//! It manages:
//! - The live [`BoardState`] and the position it was started from
//! - Player ownership and turn management
//! - Game flow (move request, validation, end detection, notifications)
//! - Repeated games with win/draw tallies
//!
//! # Example Flow
//!
//! ```text
//! [Config] -> [Create Players] -> [Request Move] -> [Validate + Place Mark]
//!   -> [Notify Opponent] -> [Check End] -> [Switch Turn] -> [Request Move] ...
//! ```

use crate::agent::ai::SearchEngine;
use crate::agent::player::{GameResult, Player};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::game_repr::{BoardState, Line, Move, Side};

/// Everything that happened in one finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    /// Plies in the order they were played
    pub moves: Vec<(Side, Move)>,
    /// Line to highlight, present only when a side completed one
    pub winning_line: Option<Line>,
    /// Side that gave up instead of moving
    pub resigned: Option<Side>,
}

/// Outcome counts over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesTally {
    pub player_one_wins: u32,
    pub player_two_wins: u32,
    pub draws: u32,
}

impl SeriesTally {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::PlayerOneWins => self.player_one_wins += 1,
            GameResult::PlayerTwoWins => self.player_two_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.player_one_wins + self.player_two_wins + self.draws
    }
}

/// Root component coordinating one pair of players over one board.
///
/// # Game Flow
///
/// While no result is set, [`play_turn`](Orchestrator::play_turn):
/// 1. Asks the player whose turn it is for a move
/// 2. Places the mark, rejecting occupied or off-board cells with an error
/// 3. Notifies the opponent
/// 4. Checks the board for a win or a draw
/// 5. Switches `current_turn`
pub struct Orchestrator {
    /// Position every game of this orchestrator starts from
    initial: BoardState,

    /// Live board, mutated only through `place_mark`
    board: BoardState,

    player_one: Box<dyn Player>,
    player_two: Box<dyn Player>,

    /// Whose turn it is
    current_turn: Side,

    /// Plies of the current game
    moves: Vec<(Side, Move)>,

    resigned: Option<Side>,

    /// Result of the game if it has ended
    result: Option<GameResult>,
}

impl Orchestrator {
    /// Create an orchestrator for an empty board of side `board_size`.
    ///
    /// # Errors
    ///
    /// `InvalidBoardSize` for sizes other than 3, 4 or 5.
    pub fn new(
        board_size: usize,
        player_one: Box<dyn Player>,
        player_two: Box<dyn Player>,
    ) -> Result<Self> {
        Self::with_starting_position(BoardState::new(board_size)?, player_one, player_two)
    }

    /// Create an orchestrator that starts (and resets) to `board`.
    ///
    /// The side to move is derived from the number of marks already placed.
    ///
    /// # Errors
    ///
    /// `InvalidState` when `board` is already finished.
    pub fn with_starting_position(
        board: BoardState,
        player_one: Box<dyn Player>,
        player_two: Box<dyn Player>,
    ) -> Result<Self> {
        if board.is_terminal() {
            return Err(GameError::InvalidState("starting position is already finished"));
        }

        Ok(Self {
            current_turn: board.side_to_move(),
            initial: board.clone(),
            board,
            player_one,
            player_two,
            moves: Vec::new(),
            resigned: None,
            result: None,
        })
    }

    /// Validate `config` and build its players.
    ///
    /// `seed` makes every random choice of the created players reproducible;
    /// the two players get different streams.
    pub fn from_config(config: &GameConfig, engine: SearchEngine, seed: Option<u64>) -> Result<Self> {
        config.validate()?;
        let player_one = config.player_one.create_player(engine, seed);
        let player_two = config
            .player_two
            .create_player(engine, seed.map(|s| s.wrapping_add(1)));
        Self::new(config.board_size, player_one, player_two)
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Plies played so far in the current game.
    pub fn moves(&self) -> &[(Side, Move)] {
        &self.moves
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        match side {
            Side::PlayerOne => self.player_one.as_ref(),
            Side::PlayerTwo => self.player_two.as_ref(),
        }
    }

    /// Abandon the current game and go back to the starting position.
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.current_turn = self.board.side_to_move();
        self.moves.clear();
        self.resigned = None;
        self.result = None;
    }

    /// Play one ply.
    ///
    /// Returns the result once the game has ended, `None` while it goes on.
    /// A player returning no move resigns and the opponent wins.
    ///
    /// # Errors
    ///
    /// `InvalidMove`/`OutOfBounds` when the player picks a cell that cannot be
    /// marked, `InvalidState` when the game is already over. The board is left
    /// untouched on error.
    pub fn play_turn(&mut self) -> Result<Option<GameResult>> {
        if self.result.is_some() {
            return Err(GameError::InvalidState("game is already over"));
        }

        let side = self.current_turn;
        let (mover, opponent) = match side {
            Side::PlayerOne => (&mut self.player_one, &mut self.player_two),
            Side::PlayerTwo => (&mut self.player_two, &mut self.player_one),
        };

        let Some(mv) = mover.get_move(&self.board, side) else {
            log::info!("{} ({}) resigned", mover.name(), side);
            self.resigned = Some(side);
            let result = GameResult::from_winner(side.opposite());
            self.finish(result);
            return Ok(Some(result));
        };

        self.board.place_mark(mv.row, mv.col, side)?;
        self.moves.push((side, mv));
        log::debug!("{} ({}) marked {}", mover.name(), side, mv);
        opponent.opponent_moved(mv);

        match GameResult::from_board(&self.board) {
            Some(result) => {
                self.finish(result);
                Ok(Some(result))
            }
            None => {
                self.current_turn = side.opposite();
                Ok(None)
            }
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.result = Some(result);
        match self.board.winning_line() {
            Some((side, line)) => log::info!("Game over: {} wins along {:?}", side, line),
            None => log::info!("Game over: {}", result),
        }
        self.player_one.game_ended(result);
        self.player_two.game_ended(result);
    }

    /// Play the current game to the end.
    pub fn play_game(&mut self) -> Result<GameRecord> {
        let result = loop {
            if let Some(result) = self.play_turn()? {
                break result;
            }
        };

        Ok(GameRecord {
            result,
            moves: self.moves.clone(),
            winning_line: self.board.winning_line().map(|(_, line)| line),
            resigned: self.resigned,
        })
    }

    /// Play `games` games from the starting position and count the results.
    pub fn play_series(&mut self, games: u32) -> Result<SeriesTally> {
        let mut tally = SeriesTally::default();

        for game in 1..=games {
            self.reset();
            log::info!("New Game ({game}/{games})");
            let record = self.play_game()?;
            tally.record(record.result);
        }

        log::info!(
            "{} games: {} wins {}, {} wins {}, {} draws",
            tally.games(),
            self.player_one.name(),
            tally.player_one_wins,
            self.player_two.name(),
            tally.player_two_wins,
            tally.draws
        );
        Ok(tally)
    }
}
