//! ttt-search: play or analyse tic-tac-toe with exhaustive search.
//!
//! ## Usage
//!
//! - `ttt-search` - Alpha-beta against alpha-beta
//! - `ttt-search play --one random --two minimax` - Choose each side's player
//! - `ttt-search analyze "X.. .O. ..."` - Score every move with both engines
//!
//! Set `RUST_LOG=info` to log every move, `RUST_LOG=debug` for search details.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use ttt_search::board::{Board, Player};
use ttt_search::game::{ConsolePresenter, Game};
use ttt_search::player::PlayerKind;
use ttt_search::rules::{Outcome, evaluate};
use ttt_search::search::Engine;

/// ttt-search: perfect-play tic-tac-toe
#[derive(Parser)]
#[command(name = "ttt-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game on the console
    Play {
        /// Player one (X), moves first
        #[arg(long, value_enum, default_value_t = PlayerKind::AlphaBeta)]
        one: PlayerKind,
        /// Player two (O)
        #[arg(long, value_enum, default_value_t = PlayerKind::AlphaBeta)]
        two: PlayerKind,
        /// Seed for random players (player two uses seed + 1)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print both engines' scores for every legal move
    Analyze {
        /// Board as nine cells in row-major order, e.g. "X.. .O. ..."
        board: String,
        /// Side to move (inferred from the piece counts by default)
        #[arg(long, value_enum)]
        player: Option<Side>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Side {
    One,
    Two,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::One => Player::One,
            Side::Two => Player::Two,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { one, two, seed }) => run_play(one, two, seed),
        Some(Commands::Analyze { board, player }) => run_analyze(&board, player.map(Player::from)),
        None => run_play(PlayerKind::AlphaBeta, PlayerKind::AlphaBeta, None),
    }
}

fn run_play(one: PlayerKind, two: PlayerKind, seed: Option<u64>) -> Result<()> {
    let mut game = Game::new(
        one.into_provider(seed),
        two.into_provider(seed.map(|s| s.wrapping_add(1))),
    );
    let mut presenter = ConsolePresenter::stdout();
    let outcome = game.play(&mut presenter).context("game aborted")?;

    let winner = match outcome {
        Outcome::Win(Player::One) => 1,
        Outcome::Win(Player::Two) => 2,
        Outcome::Draw | Outcome::Undecided => 0,
    };
    println!("Winner: {winner}");
    Ok(())
}

fn run_analyze(board: &str, player: Option<Player>) -> Result<()> {
    let mut board: Board = board.parse().context("could not parse board")?;
    let player = player.unwrap_or_else(|| board.to_move());

    print!("{board}");
    let outcome = evaluate(&board);
    if outcome.is_terminal() {
        println!("position is already decided: {outcome:?}");
        return Ok(());
    }
    println!("{player} to move\n");

    for engine in Engine::ALL {
        let mut searcher = engine.searcher();
        let scores = searcher
            .score_moves(&mut board, player)
            .with_context(|| format!("{engine} failed"))?;
        let nodes = searcher.nodes();
        let best = searcher.best_move(&mut board, player)?;

        println!("{engine}:");
        for (position, score) in scores {
            let marker = if position == best.position { " *" } else { "" };
            println!("  {position} {score:+}{marker}");
        }
        println!("  {nodes} nodes\n");
    }
    Ok(())
}
