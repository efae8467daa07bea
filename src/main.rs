//! Goban-Puzzle: play Go puzzles on boards with open edges.
//!
//! ## Usage
//!
//! - `goban-puzzle` - Show a demo
//! - `goban-puzzle session` - Read protocol commands from stdin
//! - `goban-puzzle --puzzle p.json session` - Play a stored puzzle
//! - `goban-puzzle --height 7 --width 9 --open top,right session`
//!
//! Set `RUST_LOG=debug` to trace moves and captures.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use goban_puzzle::board::{BoardState, Color, Move};
use goban_puzzle::constants::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, EDGE_BOTTOM, EDGE_COUNT, EDGE_LEFT, EDGE_RIGHT, EDGE_TOP,
};
use goban_puzzle::protocol::Session;
use goban_puzzle::puzzle::Puzzle;

/// Goban-Puzzle: a Go rules engine for puzzle boards
#[derive(Parser)]
#[command(name = "goban-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board height, ignored when a puzzle file is given
    #[arg(long, global = true, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Board width, ignored when a puzzle file is given
    #[arg(long, global = true, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Edges that continue into unmodeled board
    #[arg(long, global = true, value_enum, value_delimiter = ',')]
    open: Vec<Edge>,

    /// Puzzle record (JSON) to start from
    #[arg(long, global = true)]
    puzzle: Option<PathBuf>,

    /// Seed for the opponent's random moves
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play over the text protocol on stdin/stdout
    Session,
    /// Run a short demonstration of captures, ko and scoring
    Demo,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Edge {
    Top,
    Left,
    Right,
    Bottom,
}

impl Edge {
    fn index(self) -> usize {
        match self {
            Edge::Top => EDGE_TOP,
            Edge::Left => EDGE_LEFT,
            Edge::Right => EDGE_RIGHT,
            Edge::Bottom => EDGE_BOTTOM,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Session) => {
            let board = load_board(&cli)?;
            let mut session = match cli.seed {
                Some(seed) => Session::with_seed(board, seed),
                None => Session::new(board),
            };
            session
                .run(io::stdin().lock(), io::stdout().lock())
                .context("session I/O failed")?;
        }
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn load_board(cli: &Cli) -> Result<BoardState> {
    if let Some(path) = &cli.puzzle {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read puzzle {}", path.display()))?;
        let puzzle: Puzzle = serde_json::from_str(&text)
            .with_context(|| format!("cannot parse puzzle {}", path.display()))?;
        log::info!(
            "loaded puzzle {}: player {}",
            path.display(),
            puzzle.player()?
        );
        return Ok(puzzle.build()?);
    }

    let mut open = [false; EDGE_COUNT];
    for edge in &cli.open {
        open[edge.index()] = true;
    }
    Ok(BoardState::new(cli.height, cli.width, &open)?)
}

fn run_demo() -> Result<()> {
    println!("Goban-Puzzle: Go rules on open-edge boards\n");

    println!("=== Capture and ko ===");
    let mut board = BoardState::from_text(
        4,
        5,
        &[false; EDGE_COUNT],
        "01200\n12020\n01200\n00000\n",
    )?;
    println!("{board}");
    let outcome = board.apply_move(Move::Play((1, 2)), Color::Black)?;
    println!("Black at (1, 2) captures {:?}", outcome.captured);
    println!("{board}");
    match board.apply_move(Move::Play((1, 1)), Color::White) {
        Ok(_) => println!("White retakes at (1, 1)"),
        Err(err) => println!("White at (1, 1): {err}"),
    }
    println!("Score: {}\n", board.score());

    println!("=== Open edges ===");
    let board = BoardState::from_text(
        3,
        5,
        &[true, false, false, false],
        "00100\n11200\n02200\n",
    )?;
    println!("{board}");
    println!("Legal for black:\n{}", board.legality_text(Color::Black));
    println!("Score: {}", board.score());
    Ok(())
}
