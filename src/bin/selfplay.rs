//! Headless AI-vs-AI games
//!
//! ```text
//! selfplay --red minimax --blue greedy --depth 3 --seed 7
//! ```

use clap::{Parser, ValueEnum};
use towers::{AIEngine, Color, GameStatus, MoveError, Session, Strategy};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Player {
    Random,
    Greedy,
    Minimax,
}

impl Player {
    fn strategy(self, depth: u8) -> Strategy {
        match self {
            Player::Random => Strategy::Random,
            Player::Greedy => Strategy::Greedy,
            Player::Minimax => Strategy::Minimax { depth },
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "Play Towers AI against AI and print the game")]
struct Args {
    /// Strategy for Red
    #[arg(long, value_enum, default_value_t = Player::Minimax)]
    red: Player,

    /// Strategy for Blue
    #[arg(long, value_enum, default_value_t = Player::Greedy)]
    blue: Player,

    /// Minimax search depth
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=8))]
    depth: u8,

    /// RNG seed; Blue uses seed + 1
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies and report the game as unfinished
    #[arg(long, default_value_t = 300)]
    max_plies: usize,

    /// Only print the result
    #[arg(short, long)]
    quiet: bool,
}

fn engine(player: Player, depth: u8, seed: Option<u64>) -> AIEngine {
    let strategy = player.strategy(depth);
    match seed {
        Some(seed) => AIEngine::with_seed(strategy, seed),
        None => AIEngine::with_strategy(strategy),
    }
}

fn main() -> Result<(), MoveError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let mut red = engine(args.red, args.depth, args.seed);
    let mut blue = engine(args.blue, args.depth, args.seed.map(|s| s.wrapping_add(1)));
    info!(red = %red.strategy(), blue = %blue.strategy(), "starting self-play");

    let mut session = Session::new();
    while let GameStatus::AwaitingMove(color) = session.status() {
        if session.move_count() >= args.max_plies {
            break;
        }
        let engine = match color {
            Color::Red => &mut red,
            Color::Blue => &mut blue,
        };
        let result = engine.get_move_with_stats(session.board(), color);
        // A side to move with no legal move is already a lockout
        let Some(mv) = result.best_move else { break };
        session.play_move(&mv)?;

        if !args.quiet {
            println!(
                "{:>3}. {:<4} {:<7} score {:>7}  {:>7} nodes  {}ms",
                session.move_count(),
                color.name(),
                mv.to_string(),
                result.score,
                result.nodes,
                result.time_ms
            );
        }
    }

    match session.status() {
        GameStatus::Terminal { mode, winner } => println!(
            "{winner} wins by {} after {} plies ({} vs {})",
            mode.describe(),
            session.move_count(),
            red.strategy(),
            blue.strategy()
        ),
        GameStatus::AwaitingMove(_) => println!(
            "unfinished after {} plies ({} vs {})",
            session.move_count(),
            red.strategy(),
            blue.strategy()
        ),
    }
    Ok(())
}
