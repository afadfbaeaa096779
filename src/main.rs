use clap::{Parser, ValueEnum};
use log::error;

use minichess::agent::ai::Difficulty;
use minichess::config::{GameConfig, PlayerConfig, DEFAULT_MAX_PLIES};
use minichess::game_repr::{DEFAULT_COLS, DEFAULT_ROWS, STARTING_LAYOUT};
use minichess::orchestrator::Game;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PlayerKind {
    Human,
    Random,
    Ai,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
            Level::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Minichess on a small board with a minimax opponent")]
struct Args {
    /// Who plays White
    #[arg(short, long, value_enum, default_value = "human")]
    white: PlayerKind,

    /// Who plays Black
    #[arg(short, long, value_enum, default_value = "ai")]
    black: PlayerKind,

    /// AI strength (search depth 1 to 4)
    #[arg(short, long, value_enum, default_value = "medium")]
    difficulty: Level,

    /// Board rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u8,

    /// Board columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: u8,

    /// Starting layout, rows separated by '/'
    #[arg(short, long, default_value = STARTING_LAYOUT)]
    layout: String,

    /// Plies before the game is called a draw (0 for no limit)
    #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
    max_plies: u32,

    /// Search threads for AI players (0 for one per core); searches on the game thread if unset
    #[arg(short, long)]
    threads: Option<usize>,

    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Shortcut for --log-level debug
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn player(&self, kind: PlayerKind, seed_offset: u64) -> PlayerConfig {
        match kind {
            PlayerKind::Human => PlayerConfig::Human,
            PlayerKind::Random => PlayerConfig::Random {
                seed: self.seed.map(|seed| seed.wrapping_add(seed_offset)),
            },
            PlayerKind::Ai => PlayerConfig::AI {
                difficulty: self.difficulty.into(),
            },
        }
    }

    fn game_config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            layout: self.layout.clone(),
            white_player: self.player(self.white, 0),
            black_player: self.player(self.black, 1),
            max_plies: (self.max_plies > 0).then_some(self.max_plies),
            threads: self.threads,
        }
    }
}

fn run(config: &GameConfig) -> minichess::Result<()> {
    let mut game = Game::from_config(config)?;
    println!("{}", game.board());

    let result = loop {
        if let Some(result) = game.step()? {
            break result;
        }
        if let Some(last) = game.history().last() {
            println!("{} ({:?} to move)", last, game.turn());
        }
        println!("{}", game.board());
    };

    println!("Game over after {} plies: {result:?}", game.ply());
    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { args.log_level.as_str() };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    if let Err(e) = run(&args.game_config()) {
        error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
