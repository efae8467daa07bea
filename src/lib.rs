//! Goban-Puzzle: a Go rules engine for puzzle boards with open edges.
//!
//! A puzzle often shows only a corner or side of a larger position. The
//! engine models such a sub-board by marking each of its four edges as closed
//! (a real board edge) or open (more board continues beyond it), and applies
//! the usual rules on that basis: groups and liberties, suicide, simple ko,
//! captures, and area scoring.
//!
//! ## Modules
//!
//! - [`constants`] - Defaults, edge indices and the text encoding
//! - [`board`] - Board state, colors, moves and grids
//! - [`group`] - Flood fills over groups, frontiers and liberties
//! - [`legality`] - Occupied, ko and suicide checks
//! - [`capture`] - Applying moves, captures and ko bookkeeping
//! - [`scoring`] - Territory plus captured stones
//! - [`puzzle`] - Serializable puzzle records
//! - [`protocol`] - Line-oriented text protocol for playing a puzzle
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use goban_puzzle::board::{BoardState, Color, Move};
//!
//! // A 5x5 corner of a larger board: the top and right edges continue
//! let mut board = BoardState::new(5, 5, &[true, false, true, false]).unwrap();
//!
//! board.apply_move(Move::Play((2, 2)), Color::Black).unwrap();
//! assert!(!board.is_legal(Move::Play((2, 2)), Color::White));
//!
//! // Every empty point reaches an open edge, so nobody owns territory yet
//! assert_eq!(board.score().as_pair(), (0, 0));
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod error;
pub mod group;
pub mod legality;
pub mod protocol;
pub mod puzzle;
pub mod scoring;

pub use crate::board::{BoardState, Color, Grid, Ko, Move, Point};
pub use crate::capture::MoveOutcome;
pub use crate::error::{BoardError, IllegalReason};
pub use crate::group::{Group, Site, Surface};
pub use crate::scoring::Score;
