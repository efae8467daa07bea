//! Constants for board geometry, edge layout, and the text encoding.
//!
//! Puzzle boards are rectangular and small, so their dimensions are chosen at
//! runtime. Everything that is fixed for the lifetime of the engine lives here.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board height when none is given on the command line.
pub const DEFAULT_HEIGHT: usize = 5;

/// Default board width when none is given on the command line.
pub const DEFAULT_WIDTH: usize = 5;

/// Smallest legal side length. A board must be strictly larger than this.
pub const MIN_SIDE: usize = 1;

/// Orthogonal neighbor offsets as `(d_row, d_col)`.
/// Order: South, North, East, West
pub const DELTA: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

// =============================================================================
// Edges
// =============================================================================

/// Number of board edges described by a border specification.
pub const EDGE_COUNT: usize = 4;

/// Index of the top edge (row -1) in a border specification.
pub const EDGE_TOP: usize = 0;

/// Index of the left edge (column -1).
pub const EDGE_LEFT: usize = 1;

/// Index of the right edge (column `width`).
pub const EDGE_RIGHT: usize = 2;

/// Index of the bottom edge (row `height`).
pub const EDGE_BOTTOM: usize = 3;

/// Edge names, indexed like a border specification.
pub const EDGE_NAMES: [&str; EDGE_COUNT] = ["top", "left", "right", "bottom"];

/// All edges closed: a complete board.
pub const CLOSED_BORDERS: [bool; EDGE_COUNT] = [false; EDGE_COUNT];

// =============================================================================
// Rules
// =============================================================================

/// Stones credited to the opponent when a player passes.
pub const PASS_PENALTY: usize = 1;

// =============================================================================
// Text Encoding (one digit per cell)
// =============================================================================

/// Digit for an empty point.
pub const DIGIT_EMPTY: u8 = b'0';

/// Digit for a black stone.
pub const DIGIT_BLACK: u8 = b'1';

/// Digit for a white stone.
pub const DIGIT_WHITE: u8 = b'2';

// =============================================================================
// Display
// =============================================================================

/// Black stone glyph.
pub const GLYPH_BLACK: char = 'X';

/// White stone glyph.
pub const GLYPH_WHITE: char = 'O';

/// Empty point glyph.
pub const GLYPH_EMPTY: char = '.';
