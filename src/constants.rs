//! Constants for board geometry and search scores.
//!
//! Everything here is fixed at compile time. The board is always 3x3 and a
//! game is only ever won by three in a row, so there is nothing to configure
//! at runtime beyond which move provider plays each side.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// Number of winning lines (3 rows, 3 columns, 2 diagonals).
pub const LINE_COUNT: usize = 2 * N + 2;

// =============================================================================
// Scores
// =============================================================================

/// A search score relative to a perspective player.
///
/// Only [`LOSS`], [`DRAW`] and [`WIN`] are ever produced by the engines.
pub type Score = i32;

/// The perspective player wins with perfect play.
pub const WIN: Score = 1;

/// Neither side can force a win.
pub const DRAW: Score = 0;

/// The perspective player loses against perfect play.
pub const LOSS: Score = -1;

/// Sentinel bound for the search window and for initial best scores.
///
/// Anything greater than 1 would do, as the only possible scores are -1, 0 and 1.
pub const INFINITY: Score = 1_000_000;
