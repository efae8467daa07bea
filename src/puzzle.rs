//! Puzzle records: a serializable snapshot of a [`BoardState`].
//!
//! A record stores every field of the board (grids in the digit text
//! encoding) plus which color the solver plays and which color answers.
//! Loading a record validates it the same way the board constructors do, so
//! a hand-edited file cannot produce a board that breaks the rule invariants.
//!
//! ```
//! use goban_puzzle::board::{BoardState, Color, Move};
//! use goban_puzzle::puzzle::Puzzle;
//!
//! let mut board = BoardState::new(3, 3, &[true, false, false, false]).unwrap();
//! board.apply_move(Move::Play((1, 1)), Color::Black).unwrap();
//!
//! let record = Puzzle::from_board(&board, Color::Black);
//! assert_eq!(record.build().unwrap(), board);
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Color, Grid, Ko, Move};
use crate::constants::CLOSED_BORDERS;
use crate::error::BoardError;

fn closed_borders() -> Vec<bool> {
    CLOSED_BORDERS.to_vec()
}

fn black() -> u8 {
    Color::Black.code()
}

fn white() -> u8 {
    Color::White.code()
}

/// A stored puzzle position.
///
/// Colors are stored as their digit codes (1 black, 2 white).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub height: usize,
    pub width: usize,
    /// Top, left, right, bottom
    #[serde(default = "closed_borders")]
    pub open_edges: Vec<bool>,
    pub board: String,
    #[serde(default)]
    pub captured: [i64; 2],
    #[serde(default)]
    pub ko: Option<Ko>,
    #[serde(default)]
    pub moves: Vec<Move>,
    /// Board text before each move
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default = "black")]
    pub player_color: u8,
    #[serde(default = "white")]
    pub opponent_color: u8,
}

impl Puzzle {
    /// Snapshot `board`, with `player` as the solving side.
    ///
    /// Capture tallies beyond `i64::MAX` are stored as `i64::MAX`.
    pub fn from_board(board: &BoardState, player: Color) -> Self {
        Self {
            height: board.height(),
            width: board.width(),
            open_edges: board.open_edges().to_vec(),
            board: board.to_text(),
            captured: [Color::Black, Color::White]
                .map(|c| i64::try_from(board.captured(c)).unwrap_or(i64::MAX)),
            ko: board.ko(),
            moves: board.move_history().to_vec(),
            history: board.board_history().iter().map(Grid::to_text).collect(),
            player_color: player.code(),
            opponent_color: player.opponent().code(),
        }
    }

    pub fn player(&self) -> Result<Color, BoardError> {
        Color::try_from(self.player_color)
    }

    pub fn opponent(&self) -> Result<Color, BoardError> {
        Color::try_from(self.opponent_color)
    }

    /// Rebuild the board this record describes.
    pub fn build(&self) -> Result<BoardState, BoardError> {
        let mut board =
            BoardState::from_text(self.height, self.width, &self.open_edges, &self.board)?;
        self.player()?;
        self.opponent()?;

        for (slot, &count) in self.captured.iter().enumerate() {
            board.captured[slot] =
                usize::try_from(count).map_err(|_| BoardError::NegativeCaptureCount(count))?;
        }

        if self.history.len() != self.moves.len() {
            return Err(BoardError::HistoryMismatch {
                boards: self.history.len(),
                moves: self.moves.len(),
            });
        }
        for mv in &self.moves {
            if let Move::Play(at) = *mv {
                if !board.contains(at) {
                    return Err(BoardError::out_of_bounds(at));
                }
            }
        }
        board.history = self
            .history
            .iter()
            .map(|text| Grid::from_text(self.height, self.width, text))
            .collect::<Result<_, _>>()?;
        board.moves = self.moves.clone();

        if let Some(ko) = self.ko {
            if !board.contains(ko.point) {
                return Err(BoardError::out_of_bounds(ko.point));
            }
        }
        board.ko = self.ko;
        Ok(board)
    }
}
