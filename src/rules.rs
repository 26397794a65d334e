//! Terminal-state evaluation.
//!
//! [`evaluate`] looks at the 8 lines of the board and decides whether the
//! game is won, drawn or still open. It is pure: the same board always
//! evaluates to the same [`Outcome`].

use crate::board::{Board, Cell, Player, Position};
use crate::constants::{DRAW, LINE_COUNT, LOSS, Score, WIN};

/// The 8 winning lines, in the order they are checked: rows, columns, then
/// the main and anti diagonals.
pub const LINES: [[Position; 3]; LINE_COUNT] = [
    // Rows
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    // Columns
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    // Diagonals
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)],
];

/// Result of evaluating a board. Always derived from the board, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Undecided,
    Draw,
    Win(Player),
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Undecided
    }

    /// Score of a terminal outcome from `perspective`'s point of view.
    ///
    /// Returns `None` while the game is undecided.
    pub fn score_for(self, perspective: Player) -> Option<Score> {
        match self {
            Outcome::Undecided => None,
            Outcome::Draw => Some(DRAW),
            Outcome::Win(winner) if winner == perspective => Some(WIN),
            Outcome::Win(_) => Some(LOSS),
        }
    }
}

/// Find the first completed line and its owner.
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.iter().find_map(|&line| match board.get(line[0]) {
        Cell::Occupied(player)
            if line[1..]
                .iter()
                .all(|&p| board.get(p) == Cell::Occupied(player)) =>
        {
            Some((player, line))
        }
        _ => None,
    })
}

/// Evaluate a board.
///
/// A completed line wins even on a full board; only a full board without any
/// completed line is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, _)) = winning_line(board) {
        return Outcome::Win(player);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::Undecided
}
