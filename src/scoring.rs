//! Area scoring.
//!
//! Each empty region is owned by a color when every point bordering it holds
//! that color's stones. A region that reaches an open edge borders unmodeled
//! board and belongs to nobody, as does a region bordered by both colors or
//! by nothing at all. Captured stones are then added on top of territory.

use std::fmt;

use crate::board::{BoardState, Color};
use crate::group::{Site, Surface, Vertex, to_vertex};

/// Points per color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn of(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn add(&mut self, color: Color, points: usize) {
        match color {
            Color::Black => self.black += points,
            Color::White => self.white += points,
        }
    }

    /// `(black, white)`
    pub fn as_pair(&self) -> (usize, usize) {
        (self.black, self.white)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "black {} white {}", self.black, self.white)
    }
}

impl BoardState {
    /// Territory plus captured stones for each color.
    ///
    /// Prisoners are added to territory even though area scoring already
    /// counts the board; puzzles are scored this way.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        let mut seen = vec![false; self.height() * self.width()];

        for row in 0..self.height() {
            for col in 0..self.width() {
                let idx = row * self.width() + col;
                if seen[idx] || self.grid.get((row, col)).is_some() {
                    continue;
                }
                let region = self.group(to_vertex((row, col)), Site::Neutral);
                for (r, c) in region.points() {
                    seen[r * self.width() + c] = true;
                }
                if let Some(owner) = self.frontier_owner(&region.frontier) {
                    score.add(owner, region.len());
                }
            }
        }

        score.black += self.captured(Color::Black);
        score.white += self.captured(Color::White);
        score
    }

    /// The single color found along `frontier`, if there is exactly one.
    fn frontier_owner(&self, frontier: &[Vertex]) -> Option<Color> {
        let mut found: Option<Site> = None;
        for &v in frontier {
            let site = self.access(v, Site::Neutral);
            match found {
                None => found = Some(site),
                Some(seen) if seen == site => {}
                Some(_) => return None,
            }
        }
        match found {
            Some(Site::Stone(color)) => Some(color),
            _ => None,
        }
    }
}
