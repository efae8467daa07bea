//! Connectivity analysis: groups, frontiers and liberties.
//!
//! Flood fills run over a virtual board one point larger on every side than
//! the real one. Points just beyond an open edge are reported as a caller
//! chosen placeholder [`Site`]; anything further out, beyond a closed edge, or
//! diagonally past a corner is [`Site::OutOfBounds`]. A fill therefore sees at
//! most one layer of unmodeled board and always terminates.
//!
//! The analysis is written against the [`Surface`] trait so that legality
//! checks can run it over a board with one stone hypothetically added,
//! without touching the real grid.

use crate::board::{BoardState, Color, Point};
use crate::constants::{DELTA, EDGE_BOTTOM, EDGE_LEFT, EDGE_RIGHT, EDGE_TOP};

/// A point coordinate that may lie one step outside the board.
pub type Vertex = (isize, isize);

/// What a flood fill sees at a vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Site {
    Empty,
    Stone(Color),
    /// Placeholder for unmodeled board, distinct from both colors and from empty
    Neutral,
    OutOfBounds,
}

impl From<Option<Color>> for Site {
    fn from(cell: Option<Color>) -> Self {
        match cell {
            Some(color) => Site::Stone(color),
            None => Site::Empty,
        }
    }
}

/// A connected region and the vertices bordering it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Group {
    /// Every vertex reachable from the start through vertices of the same kind, start included
    pub members: Vec<Vertex>,
    /// Every distinct vertex of a different kind adjacent to a member, out-of-bounds excluded
    pub frontier: Vec<Vertex>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members as board points, dropping vertices above or left of the board.
    ///
    /// Stone groups never leave the board, so for them this is every member.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.members.iter().filter_map(|&v| to_point(v))
    }
}

pub fn to_vertex((row, col): Point) -> Vertex {
    (row as isize, col as isize)
}

/// Convert back to a point if the vertex is not left of or above the board.
pub fn to_point((row, col): Vertex) -> Option<Point> {
    Some((usize::try_from(row).ok()?, usize::try_from(col).ok()?))
}

/// Read access to a board for flood fills.
pub trait Surface {
    fn height(&self) -> usize;

    fn width(&self) -> usize;

    /// Stone at an on-board point.
    fn cell(&self, point: Point) -> Option<Color>;

    /// Whether edge `edge` (see [`crate::constants::EDGE_TOP`] and friends) is open.
    fn is_open(&self, edge: usize) -> bool;

    /// Classify `vertex`, reporting `open_edge` for a point exactly one step
    /// beyond an open edge.
    fn access(&self, (row, col): Vertex, open_edge: Site) -> Site {
        let height = self.height() as isize;
        let width = self.width() as isize;
        let row_out = row < 0 || row >= height;
        let col_out = col < 0 || col >= width;

        let edge = match (row_out, col_out) {
            (false, false) => return Site::from(self.cell((row as usize, col as usize))),
            (true, true) => return Site::OutOfBounds,
            (true, false) if row == -1 => EDGE_TOP,
            (true, false) if row == height => EDGE_BOTTOM,
            (false, true) if col == -1 => EDGE_LEFT,
            (false, true) if col == width => EDGE_RIGHT,
            _ => return Site::OutOfBounds,
        };
        if self.is_open(edge) {
            open_edge
        } else {
            Site::OutOfBounds
        }
    }

    /// Flood-fill the region containing `start`.
    ///
    /// Works for stones and for empty points alike. An out-of-bounds start
    /// yields an empty group.
    fn group(&self, start: Vertex, open_edge: Site) -> Group {
        let kind = self.access(start, open_edge);
        if kind == Site::OutOfBounds {
            return Group::default();
        }

        let stride = self.width() + 2;
        let slot = |(row, col): Vertex| (row + 1) as usize * stride + (col + 1) as usize;
        let mut in_group = vec![false; (self.height() + 2) * stride];
        let mut in_frontier = vec![false; in_group.len()];

        let mut group = Group {
            members: vec![start],
            frontier: Vec::new(),
        };
        in_group[slot(start)] = true;
        let mut stack = vec![start];

        while let Some((row, col)) = stack.pop() {
            for (dr, dc) in DELTA {
                let next = (row + dr, col + dc);
                let site = self.access(next, open_edge);
                if site == Site::OutOfBounds {
                    continue;
                }
                let i = slot(next);
                if site == kind {
                    if !in_group[i] {
                        in_group[i] = true;
                        group.members.push(next);
                        stack.push(next);
                    }
                } else if !in_frontier[i] {
                    in_frontier[i] = true;
                    group.frontier.push(next);
                }
            }
        }
        group
    }

    /// Count the empty on-board points bordering `group`.
    ///
    /// Unmodeled board beyond an open edge never counts as a liberty.
    fn liberties(&self, group: &Group) -> usize {
        group
            .frontier
            .iter()
            .filter(|&&v| self.access(v, Site::OutOfBounds) == Site::Empty)
            .count()
    }

    /// True if the group containing the stone at `point` has no liberties.
    fn is_dead(&self, point: Point) -> bool {
        let group = self.group(to_vertex(point), Site::Empty);
        self.liberties(&group) == 0
    }

    /// The up to 4 orthogonal on-board neighbors of `point`.
    fn neighbors(&self, point: Point) -> Vec<Point> {
        let origin = to_vertex(point);
        DELTA
            .iter()
            .map(|&(dr, dc)| (origin.0 + dr, origin.1 + dc))
            .filter(|&v| self.access(v, Site::OutOfBounds) != Site::OutOfBounds)
            .filter_map(to_point)
            .collect()
    }
}

impl Surface for BoardState {
    fn height(&self) -> usize {
        self.grid.height()
    }

    fn width(&self) -> usize {
        self.grid.width()
    }

    fn cell(&self, point: Point) -> Option<Color> {
        self.grid.get(point)
    }

    fn is_open(&self, edge: usize) -> bool {
        self.open[edge]
    }
}
