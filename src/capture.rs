//! Move execution: stone placement, captures, ko and history.
//!
//! This is the only place that changes a [`BoardState`]. Nothing is touched
//! until the move has passed [`BoardState::check_move`], so a refused move
//! leaves the board, its histories and its tallies exactly as they were.

use log::debug;

use crate::board::{BoardState, Color, Ko, Move, Point};
use crate::constants::PASS_PENALTY;
use crate::error::BoardError;
use crate::group::{Site, Surface, to_vertex};

/// What a successfully applied move did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Points whose stones were removed
    pub captured: Vec<Point>,
    /// Restriction in force for the next move
    pub ko: Option<Ko>,
}

impl BoardState {
    /// Play `mv` for `color`.
    ///
    /// Turn order is not checked; the caller decides who moves. A pass
    /// credits the opponent with [`PASS_PENALTY`] captured stones.
    ///
    /// # Errors
    /// - [`BoardError::OutOfBounds`] if the point is not on the board
    /// - [`BoardError::IllegalMove`] if the point is occupied, retakes a ko,
    ///   or would be suicide
    pub fn apply_move(&mut self, mv: Move, color: Color) -> Result<MoveOutcome, BoardError> {
        self.check_move(mv, color)?;

        self.history.push(self.grid.clone());
        self.moves.push(mv);

        let at = match mv {
            Move::Pass => {
                self.add_captured(PASS_PENALTY, color.opponent());
                self.ko = None;
                debug!("{color} passes");
                return Ok(MoveOutcome::default());
            }
            Move::Play(at) => at,
        };

        self.grid.set(at, Some(color));

        let mut captured = Vec::new();
        for n in self.neighbors(at) {
            if self.grid.get(n) == Some(color.opponent()) && self.is_dead(n) {
                captured.extend(self.remove_group(n));
            }
        }
        self.add_captured(captured.len(), color);

        self.ko = None;
        if let [taken] = captured[..] {
            if self.group(to_vertex(at), Site::OutOfBounds).len() == 1 {
                self.ko = Some(Ko {
                    point: taken,
                    color: color.opponent(),
                });
            }
        }

        debug!(
            "{color} plays {at:?}, captures {}, ko {:?}",
            captured.len(),
            self.ko
        );
        Ok(MoveOutcome {
            captured,
            ko: self.ko,
        })
    }

    /// Clear every stone of the group at `point`, returning where they were.
    fn remove_group(&mut self, point: Point) -> Vec<Point> {
        let stones: Vec<Point> = self
            .group(to_vertex(point), Site::OutOfBounds)
            .points()
            .collect();
        for &stone in &stones {
            self.grid.set(stone, None);
        }
        stones
    }

    fn add_captured(&mut self, count: usize, color: Color) {
        self.captured[color.index()] += count;
    }
}
