//! Console front end: play against the engine, run self-play series or
//! analyze a single position.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::{
    BoardState, Difficulty, GameConfig, Orchestrator, PlayerConfig, SearchEngine, Side,
};

/// N-in-a-row on 3x3, 4x4 and 5x5 boards with a minimax opponent.
#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Play N-in-a-row against a minimax engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine on the console.
    Play {
        /// Board side length (3, 4 or 5).
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Engine strength.
        #[arg(short, long, value_enum, default_value = "standard")]
        difficulty: Level,

        /// Which side the human plays (1 moves first).
        #[arg(long, default_value = "1")]
        human_side: u8,

        /// Override the engine's depth limit.
        #[arg(long)]
        depth: Option<u8>,

        /// Search root moves in parallel.
        #[arg(long)]
        parallel: bool,
    },

    /// Play a series of computer games and report the tally.
    Selfplay {
        /// Board side length (3, 4 or 5).
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Number of games to play.
        #[arg(short, long, default_value = "50")]
        games: u32,

        /// PlayerOne (moves first).
        #[arg(long, value_enum, default_value = "random")]
        player_one: Level,

        /// PlayerTwo.
        #[arg(long, value_enum, default_value = "standard")]
        player_two: Level,

        /// Random seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,

        /// Search root moves in parallel.
        #[arg(long)]
        parallel: bool,
    },

    /// Print the engine's move and evaluation for a position.
    Analyze {
        /// Rows separated by '/', cells X, O or '.', e.g. "XO./.X./..O".
        #[arg(short, long)]
        board: String,

        /// Depth limit (defaults to the size's standard depth).
        #[arg(short, long)]
        depth: Option<u8>,

        /// Plain minimax without alpha-beta cut-offs.
        #[arg(long)]
        no_pruning: bool,

        /// Search root moves in parallel.
        #[arg(long)]
        parallel: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    Random,
    Fast,
    Standard,
}

impl Level {
    fn difficulty(self, depth: Option<u8>) -> Difficulty {
        match (self, depth) {
            (Level::Random, _) => Difficulty::Random,
            (_, Some(depth)) => Difficulty::Custom(depth),
            (Level::Fast, None) => Difficulty::Fast,
            (Level::Standard, None) => Difficulty::Standard,
        }
    }

    /// Self-play seat: `random` is the plain random player.
    fn player_config(self) -> PlayerConfig {
        match self {
            Level::Random => PlayerConfig::Random,
            level => PlayerConfig::Ai {
                difficulty: level.difficulty(None),
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            size,
            difficulty,
            human_side,
            depth,
            parallel,
        } => cmd_play(size, difficulty.difficulty(depth), human_side, parallel),

        Commands::Selfplay {
            size,
            games,
            player_one,
            player_two,
            seed,
            parallel,
        } => {
            let config = GameConfig {
                board_size: size,
                player_one: player_one.player_config(),
                player_two: player_two.player_config(),
            };
            cmd_selfplay(&config, games, seed, parallel)
        }

        Commands::Analyze {
            board,
            depth,
            no_pruning,
            parallel,
        } => cmd_analyze(&board, depth, !no_pruning, parallel),
    }
}

fn cmd_play(size: usize, difficulty: Difficulty, human_side: u8, parallel: bool) -> Result<()> {
    let human_side = match human_side {
        1 => Side::PlayerOne,
        2 => Side::PlayerTwo,
        other => bail!("human side must be 1 or 2, got {other}"),
    };

    let config = GameConfig::pvai(size, human_side, difficulty);
    let engine = SearchEngine::new().with_parallel_root(parallel);
    let mut game = Orchestrator::from_config(&config, engine, None)
        .context("Failed to set up the game")?;

    println!("You are {human_side} against {difficulty}. Enter moves as \"row col\".");
    let record = game.play_game().context("Game aborted")?;

    println!("\n{}", game.board());
    println!("{}", record.result);
    Ok(())
}

fn cmd_selfplay(config: &GameConfig, games: u32, seed: Option<u64>, parallel: bool) -> Result<()> {
    let engine = SearchEngine::new().with_parallel_root(parallel);
    let mut game = Orchestrator::from_config(config, engine, seed)
        .context("Failed to set up self-play")?;

    let tally = game.play_series(games).context("Self-play aborted")?;
    let total = tally.games().max(1) as f32;

    println!("\n================================================");
    println!("RESULTS ({}x{}, {} games)", config.board_size, config.board_size, tally.games());
    println!("================================================");
    println!(
        "{:<16} wins: {} ({:.1}%)",
        game.player(Side::PlayerOne).name(),
        tally.player_one_wins,
        tally.player_one_wins as f32 / total * 100.0
    );
    println!(
        "{:<16} wins: {} ({:.1}%)",
        game.player(Side::PlayerTwo).name(),
        tally.player_two_wins,
        tally.player_two_wins as f32 / total * 100.0
    );
    println!("{:<16}     : {} ({:.1}%)", "Ties", tally.draws, tally.draws as f32 / total * 100.0);
    Ok(())
}

fn cmd_analyze(rows: &str, depth: Option<u8>, pruning: bool, parallel: bool) -> Result<()> {
    let board = BoardState::from_rows(rows).with_context(|| format!("Invalid board {rows:?}"))?;
    let side = board.side_to_move();
    let depth = depth.unwrap_or_else(|| Difficulty::Standard.depth_limit(board.size()));

    let engine = SearchEngine::new()
        .with_pruning(pruning)
        .with_parallel_root(parallel);
    let result = engine
        .choose_move(&board, side, 1, depth)
        .context("Cannot analyze this position")?;

    println!("{board}");
    println!("{side} to move");
    println!("Best move:  {}", result.best_move);
    println!("Eval:       {}", result.score);
    println!("Depth:      {}", result.depth_limit);
    println!("Nodes:      {}", result.nodes_searched);
    println!("Eval Time:  {} ms", result.time_ms);
    Ok(())
}
