//! Move legality: occupied points, simple ko and suicide.
//!
//! A candidate stone is tried on a trial view that overlays it on the
//! board, so every query here takes `&self` and can never leave the board
//! modified, whatever path it returns through.

use log::trace;

use crate::board::{BoardState, Color, Ko, Move, Point};
use crate::error::{BoardError, IllegalReason};
use crate::group::Surface;

/// The board as it would look with one extra stone on it.
struct Trial<'a> {
    board: &'a BoardState,
    at: Point,
    color: Color,
}

impl Surface for Trial<'_> {
    fn height(&self) -> usize {
        self.board.height()
    }

    fn width(&self) -> usize {
        self.board.width()
    }

    fn cell(&self, point: Point) -> Option<Color> {
        if point == self.at {
            Some(self.color)
        } else {
            self.board.grid.get(point)
        }
    }

    fn is_open(&self, edge: usize) -> bool {
        self.board.open[edge]
    }
}

impl BoardState {
    /// Check whether `color` may play `mv`, reporting why not.
    ///
    /// A pass is always legal. A stone that would have no liberties is still
    /// legal if it leaves an adjacent opponent group without liberties too,
    /// since that group is captured first.
    pub fn check_move(&self, mv: Move, color: Color) -> Result<(), BoardError> {
        let at = match mv {
            Move::Pass => return Ok(()),
            Move::Play(at) => at,
        };
        if !self.contains(at) {
            return Err(BoardError::out_of_bounds(at));
        }
        if self.grid.get(at).is_some() {
            return Err(BoardError::illegal(at, IllegalReason::Occupied));
        }
        if self.ko == Some(Ko { point: at, color }) {
            trace!("{color} at {at:?} refused: ko");
            return Err(BoardError::illegal(at, IllegalReason::Ko));
        }

        let trial = Trial {
            board: self,
            at,
            color,
        };
        if !trial.is_dead(at) {
            return Ok(());
        }
        let captures = trial
            .neighbors(at)
            .into_iter()
            .any(|n| trial.cell(n) == Some(color.opponent()) && trial.is_dead(n));
        if captures {
            Ok(())
        } else {
            trace!("{color} at {at:?} refused: suicide");
            Err(BoardError::illegal(at, IllegalReason::Suicide))
        }
    }

    /// True if `color` may play `mv` now.
    pub fn is_legal(&self, mv: Move, color: Color) -> bool {
        self.check_move(mv, color).is_ok()
    }

    /// Legality of a stone of `color` at every point, shaped like the board.
    pub fn legality_grid(&self, color: Color) -> Vec<Vec<bool>> {
        (0..self.height())
            .map(|row| {
                (0..self.width())
                    .map(|col| self.is_legal(Move::Play((row, col)), color))
                    .collect()
            })
            .collect()
    }

    /// [`legality_grid`](Self::legality_grid) as text: one line per row, `1` where legal.
    pub fn legality_text(&self, color: Color) -> String {
        let mut text = String::new();
        for row in self.legality_grid(color) {
            for legal in row {
                text.push(if legal { '1' } else { '0' });
            }
            text.push('\n');
        }
        text
    }

    /// Every point where `color` may place a stone, row by row.
    pub fn legal_points(&self, color: Color) -> Vec<Point> {
        (0..self.height())
            .flat_map(|row| (0..self.width()).map(move |col| (row, col)))
            .filter(|&at| self.is_legal(Move::Play(at), color))
            .collect()
    }
}
