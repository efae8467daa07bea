//! Board state for open-edge puzzle boards.
//!
//! A [`BoardState`] is a rectangular grid of points addressed as `(row, col)`,
//! with row 0 at the top. Each of its four edges is either closed (a real
//! board edge) or open (the position continues beyond it, but that part is
//! not modeled). Moves are only applied through
//! [`BoardState::apply_move`](crate::capture), which keeps the capture
//! tallies, ko restriction and histories consistent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DIGIT_BLACK, DIGIT_EMPTY, DIGIT_WHITE, EDGE_BOTTOM, EDGE_COUNT, EDGE_LEFT, EDGE_RIGHT,
    EDGE_NAMES, EDGE_TOP, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, MIN_SIDE,
};
use crate::error::BoardError;

/// A stone color. Empty points are `None` wherever a cell is an `Option<Color>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Slot of this color in per-color tallies.
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Numeric code used by the text encoding (1 or 2).
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Color::Black),
            2 => Ok(Color::White),
            other => Err(BoardError::InvalidColor(other.to_string())),
        }
    }
}

impl FromStr for Color {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" | "x" | "1" => Ok(Color::Black),
            "white" | "w" | "o" | "2" => Ok(Color::White),
            _ => Err(BoardError::InvalidColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A point on the board as `(row, col)`.
pub type Point = (usize, usize);

/// A move: a stone placed at a point, or a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play(Point),
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play((row, col)) => write!(f, "{row} {col}"),
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// A simple-ko restriction: `color` may not play at `point` on the next move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub point: Point,
    pub color: Color,
}

/// The stones on the board, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Option<Color>>,
}

impl Grid {
    pub(crate) fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.height && col < self.width
    }

    fn idx(&self, (row, col): Point) -> usize {
        row * self.width + col
    }

    /// Stone at `point`; `None` for empty points and points off the grid.
    pub fn get(&self, point: Point) -> Option<Color> {
        if !self.contains(point) {
            return None;
        }
        self.cells[self.idx(point)]
    }

    pub(crate) fn set(&mut self, point: Point, cell: Option<Color>) {
        let i = self.idx(point);
        self.cells[i] = cell;
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Color>]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Number of stones of `color` on the grid.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Encode as one line per row and one digit per cell (`0` empty, `1` black, `2` white).
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.height * (self.width + 1));
        for row in self.rows() {
            for &cell in row {
                text.push(cell_digit(cell) as char);
            }
            text.push('\n');
        }
        text
    }

    /// Decode the digit encoding produced by [`Grid::to_text`].
    ///
    /// The text carries no dimensions, so the caller supplies them and every
    /// row must match exactly.
    pub fn from_text(height: usize, width: usize, text: &str) -> Result<Self, BoardError> {
        if height <= MIN_SIDE || width <= MIN_SIDE {
            return Err(BoardError::InvalidDimension { height, width });
        }
        let mut grid = Grid::new(height, width);
        let mut rows = 0;
        for (row, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if row >= height {
                if line.is_empty() {
                    continue;
                }
                return Err(BoardError::MalformedText(format!(
                    "expected {height} rows, found more"
                )));
            }
            if !line.is_ascii() {
                return Err(BoardError::MalformedText(format!(
                    "row {row} contains non-digit characters"
                )));
            }
            if line.len() != width {
                return Err(BoardError::MalformedText(format!(
                    "row {row} has {} cells, expected {width}",
                    line.len()
                )));
            }
            for (col, digit) in line.bytes().enumerate() {
                grid.set((row, col), digit_cell(digit)?);
            }
            rows += 1;
        }
        if rows != height {
            return Err(BoardError::MalformedText(format!(
                "expected {height} rows, found {rows}"
            )));
        }
        Ok(grid)
    }
}

fn cell_digit(cell: Option<Color>) -> u8 {
    match cell {
        None => DIGIT_EMPTY,
        Some(Color::Black) => DIGIT_BLACK,
        Some(Color::White) => DIGIT_WHITE,
    }
}

fn digit_cell(digit: u8) -> Result<Option<Color>, BoardError> {
    match digit {
        DIGIT_EMPTY => Ok(None),
        b'1'..=b'9' => Color::try_from(digit - DIGIT_EMPTY).map(Some),
        other => Err(BoardError::MalformedText(format!(
            "unexpected character {:?}",
            other as char
        ))),
    }
}

fn glyph(cell: Option<Color>) -> char {
    match cell {
        Some(Color::Black) => GLYPH_BLACK,
        Some(Color::White) => GLYPH_WHITE,
        None => GLYPH_EMPTY,
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{} ", glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A puzzle position together with its rule state and history.
///
/// Cloning produces a fully independent copy: the grid, both histories, the
/// capture tallies and the ko restriction are all copied by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub(crate) grid: Grid,
    pub(crate) open: [bool; EDGE_COUNT],
    /// Stones captured by each color, indexed by [`Color::index`]
    pub(crate) captured: [usize; 2],
    pub(crate) ko: Option<Ko>,
    pub(crate) moves: Vec<Move>,
    /// Grid as it was immediately before each entry of `moves`
    pub(crate) history: Vec<Grid>,
}

impl BoardState {
    /// Create an empty board.
    ///
    /// `open` lists, for the top, left, right and bottom edges in that order,
    /// whether the edge continues into unmodeled board.
    pub fn new(height: usize, width: usize, open: &[bool]) -> Result<Self, BoardError> {
        if height <= MIN_SIDE || width <= MIN_SIDE {
            return Err(BoardError::InvalidDimension { height, width });
        }
        let open: [bool; EDGE_COUNT] = open
            .try_into()
            .map_err(|_| BoardError::InvalidBorderSpec(open.len()))?;
        Ok(Self {
            grid: Grid::new(height, width),
            open,
            captured: [0, 0],
            ko: None,
            moves: Vec::new(),
            history: Vec::new(),
        })
    }

    /// Create an empty board with every edge closed.
    pub fn closed(height: usize, width: usize) -> Result<Self, BoardError> {
        Self::new(height, width, &[false; EDGE_COUNT])
    }

    /// Create a board pre-populated from the digit encoding.
    ///
    /// Stones set up this way are not moves: both histories start empty.
    pub fn from_text(
        height: usize,
        width: usize,
        open: &[bool],
        text: &str,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(height, width, open)?;
        board.grid = Grid::from_text(height, width, text)?;
        Ok(board)
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    /// The current stones.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn contains(&self, point: Point) -> bool {
        self.grid.contains(point)
    }

    /// Open flags for the top, left, right and bottom edges.
    pub fn open_edges(&self) -> [bool; EDGE_COUNT] {
        self.open
    }

    /// Names of the open edges, in border specification order.
    pub fn open_edge_names(&self) -> Vec<&'static str> {
        EDGE_NAMES
            .iter()
            .zip(self.open)
            .filter_map(|(&name, open)| open.then_some(name))
            .collect()
    }

    /// Stones captured so far by `color`, including pass penalties paid by the opponent.
    pub fn captured(&self, color: Color) -> usize {
        self.captured[color.index()]
    }

    /// The move forbidden on the next turn, if any.
    pub fn ko(&self) -> Option<Ko> {
        self.ko
    }

    pub fn move_history(&self) -> &[Move] {
        &self.moves
    }

    /// Grids recorded immediately before each move in [`move_history`](Self::move_history).
    pub fn board_history(&self) -> &[Grid] {
        &self.history
    }

    pub fn to_text(&self) -> String {
        self.grid.to_text()
    }
}

impl fmt::Display for BoardState {
    /// Draws the board with `|` above/below open top/bottom edges and `-`
    /// beside open left/right edges.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let margin = if self.open[EDGE_LEFT] { "  " } else { "" };
        if self.open[EDGE_TOP] {
            open_line(f, margin, self.width())?;
        }
        for row in self.grid.rows() {
            if self.open[EDGE_LEFT] {
                write!(f, "- ")?;
            }
            for &cell in row {
                write!(f, "{} ", glyph(cell))?;
            }
            if self.open[EDGE_RIGHT] {
                write!(f, "-")?;
            }
            writeln!(f)?;
        }
        if self.open[EDGE_BOTTOM] {
            open_line(f, margin, self.width())?;
        }
        Ok(())
    }
}

fn open_line(f: &mut fmt::Formatter<'_>, margin: &str, width: usize) -> fmt::Result {
    write!(f, "{margin}")?;
    for _ in 0..width {
        write!(f, "| ")?;
    }
    writeln!(f)
}
