//! Line-oriented text protocol for playing a puzzle.
//!
//! The framing follows GTP version 2: each command may carry a numeric id,
//! and each response starts with `=` (success) or `?` (failure), followed by
//! the id and the message, and ends with a blank line. Points are written as
//! two numbers, `row col`, counted from the top-left corner.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `clear_board` - Restore the puzzle's starting position
//! - `showboard` - Draw the board, open edges marked
//! - `play <color> <row> <col>` or `play <color> pass`
//! - `legal <color>` - Legality grid, one digit per point
//! - `genmove <color>` - Play a random legal move for `color`
//! - `score` - Territory plus captures for both colors
//! - `history [n]` - List the moves, or show the board before move `n`
//!
//! ## Example
//!
//! ```
//! use goban_puzzle::board::BoardState;
//! use goban_puzzle::protocol::Session;
//!
//! let mut session = Session::new(BoardState::closed(5, 5).unwrap());
//! let mut out = Vec::new();
//! session.run("play black 2 2\nscore\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("= black 24 white 0"));
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::board::{BoardState, Color, Move, Point};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "genmove",
    "history",
    "known_command",
    "legal",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "version",
];

/// A puzzle being played over the text protocol.
pub struct Session {
    /// Current position
    board: BoardState,
    /// Position restored by `clear_board`
    start: BoardState,
    /// Source of the opponent's random moves
    rng: fastrand::Rng,
}

impl Session {
    pub fn new(board: BoardState) -> Self {
        Self::with_rng(board, fastrand::Rng::new())
    }

    /// Create a session whose random moves are reproducible.
    pub fn with_seed(board: BoardState, seed: u64) -> Self {
        Self::with_rng(board, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(board: BoardState, rng: fastrand::Rng) -> Self {
        Self {
            start: board.clone(),
            board,
            rng,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        info!(
            "session started on a {}x{} board, open edges {:?}",
            self.board.height(),
            self.board.width(),
            self.board.open_edge_names()
        );
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!("command {command} {args:?}");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "clear_board" => {
                self.board = self.start.clone();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.board)),

            "play" => {
                let color = match parse_color(args) {
                    Ok(color) => color,
                    Err(msg) => return (false, msg),
                };
                let mv = match parse_move(&args[1..]) {
                    Some(mv) => mv,
                    None => return (false, "invalid vertex".to_string()),
                };
                match self.board.apply_move(mv, color) {
                    Ok(outcome) if outcome.captured.is_empty() => (true, String::new()),
                    Ok(outcome) => (true, format!("captured {}", outcome.captured.len())),
                    Err(err) => (false, err.to_string()),
                }
            }

            "legal" => match parse_color(args) {
                Ok(color) => (true, format!("\n{}", self.board.legality_text(color).trim_end())),
                Err(msg) => (false, msg),
            },

            "genmove" => {
                let color = match parse_color(args) {
                    Ok(color) => color,
                    Err(msg) => return (false, msg),
                };
                let mv = self.random_move(color);
                match self.board.apply_move(mv, color) {
                    Ok(_) => (true, mv.to_string()),
                    Err(err) => (false, err.to_string()),
                }
            }

            "score" => (true, self.board.score().to_string()),

            "history" => match args.first() {
                None => {
                    let listing: Vec<String> = self
                        .board
                        .move_history()
                        .iter()
                        .enumerate()
                        .map(|(i, mv)| format!("{} {mv}", i + 1))
                        .collect();
                    (true, listing.join("\n"))
                }
                Some(n) => match n.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= self.board.board_history().len() => {
                        (true, format!("\n{}", self.board.board_history()[n - 1]))
                    }
                    _ => (false, "no such move".to_string()),
                },
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Pick uniformly among the legal points, passing when there are none.
    fn random_move(&mut self, color: Color) -> Move {
        let legal: Vec<Point> = self.board.legal_points(color);
        if legal.is_empty() {
            return Move::Pass;
        }
        Move::Play(legal[self.rng.usize(..legal.len())])
    }
}

fn parse_color(args: &[&str]) -> Result<Color, String> {
    match args.first() {
        Some(s) => s.parse::<Color>().map_err(|err| err.to_string()),
        None => Err("missing argument".to_string()),
    }
}

/// Parse `pass` or `<row> <col>`.
fn parse_move(args: &[&str]) -> Option<Move> {
    match args {
        [pass] if pass.eq_ignore_ascii_case("pass") => Some(Move::Pass),
        [row, col] => Some(Move::Play((row.parse().ok()?, col.parse().ok()?))),
        _ => None,
    }
}
