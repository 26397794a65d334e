//! The 3x3 board, its cells and move targets.
//!
//! The board is plain data. The only behaviour beyond access and mutation is
//! [`Board::place`], which hands out a [`Placement`] guard used by the search
//! engines to play hypothetical moves on a single shared board: the guard
//! restores the cell it touched when it goes out of scope.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::constants::{CELLS, N};
use crate::error::GameError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Marker used in text output: `X` for the first player, `O` for the second.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// A move target, addressed as (column, row).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    pub fn in_bounds(self) -> bool {
        self.col < N && self.row < N
    }

    /// Every position on the board in row-major order (row outer, column inner).
    ///
    /// This is the scan order of the engines and therefore their tie-break order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..N).flat_map(|row| (0..N).map(move |col| Position::new(col, row)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// A 3x3 tic-tac-toe board, stored row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if `position` is off the board.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.row][position.col]
    }

    /// # Panics
    ///
    /// Panics if `position` is off the board.
    pub fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.row][position.col] = cell;
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Occupied(player))
            .count()
    }

    /// The player whose turn it is, assuming [`Player::One`] moved first.
    pub fn to_move(&self) -> Player {
        if self.count(Player::One) > self.count(Player::Two) {
            Player::Two
        } else {
            Player::One
        }
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&p| self.is_empty_at(p))
    }

    /// Place `player` at `position` for as long as the returned guard lives.
    ///
    /// The guard dereferences to the board, so the caller can keep searching
    /// through it. Dropping it puts the previous cell value back, whichever
    /// way the enclosing scope is left.
    #[must_use = "the placement is undone as soon as the guard is dropped"]
    pub fn place(&mut self, position: Position, player: Player) -> Placement<'_> {
        let prior = self.get(position);
        self.set(position, Cell::Occupied(player));
        Placement {
            board: self,
            position,
            prior,
        }
    }
}

/// A hypothetical move on a borrowed board, undone on drop.
pub struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
    prior: Cell,
}

impl Placement<'_> {
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, self.prior);
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parse nine cells in row-major order.
    ///
    /// `X`/`x` is player one, `O`/`o` is player two, and `.`, `_` or `-` is an
    /// empty cell. Whitespace and `/` row separators are ignored, so
    /// `"X.O/.X./..O"` and the output of `Display` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match c {
                'X' | 'x' => Cell::Occupied(Player::One),
                'O' | 'o' => Cell::Occupied(Player::Two),
                '.' | '_' | '-' => Cell::Empty,
                other => {
                    return Err(GameError::InvalidBoard {
                        reason: format!("unexpected character '{other}'"),
                    });
                }
            };
            cells.push(cell);
        }
        if cells.len() != CELLS {
            return Err(GameError::InvalidBoard {
                reason: format!("expected {CELLS} cells, got {}", cells.len()),
            });
        }

        let mut board = Board::new();
        for (position, cell) in Position::all().zip(cells) {
            board.set(position, cell);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().count(), CELLS);
        assert_eq!(board.to_move(), Player::One);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "X.. / .O. / ...".parse().unwrap();
        let empty: Vec<Position> = board.empty_cells().collect();
        assert_eq!(empty[0], Position::new(1, 0));
        assert_eq!(empty[1], Position::new(2, 0));
        assert_eq!(empty[2], Position::new(0, 1));
        assert_eq!(empty[3], Position::new(2, 1));
        assert_eq!(empty.len(), 7);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(Position::new(0, 0)), Cell::Occupied(Player::One));
        assert_eq!(board.get(Position::new(1, 0)), Cell::Occupied(Player::Two));
        assert_eq!(board.get(Position::new(2, 2)), Cell::Occupied(Player::Two));
        assert_eq!(board.to_string(), "X O .\n. X .\n. . O\n");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "XO.".parse::<Board>(),
            Err(GameError::InvalidBoard { .. })
        ));
        assert!(matches!(
            "XO.?.....".parse::<Board>(),
            Err(GameError::InvalidBoard { .. })
        ));
    }

    #[test]
    fn test_placement_restores_on_drop() {
        let mut board = Board::new();
        let pos = Position::new(1, 1);
        {
            let placed = board.place(pos, Player::Two);
            assert_eq!(placed.get(pos), Cell::Occupied(Player::Two));
            assert_eq!(placed.position(), pos);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_placement_restores_on_early_return() {
        fn first_occupied(board: &mut Board) -> Option<Position> {
            for pos in Position::all() {
                let placed = board.place(pos, Player::One);
                if placed.occupied_count() == 1 {
                    return Some(placed.position());
                }
            }
            None
        }

        let mut board = Board::new();
        assert_eq!(first_occupied(&mut board), Some(Position::new(0, 0)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_nested_placements() {
        let mut board: Board = "X........".parse().unwrap();
        let snapshot = board;
        {
            let mut outer = board.place(Position::new(1, 1), Player::Two);
            {
                let inner = outer.place(Position::new(2, 2), Player::One);
                assert_eq!(inner.occupied_count(), 3);
            }
            assert_eq!(outer.occupied_count(), 2);
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_to_move_and_bounds() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.to_move(), Player::Two);
        assert!(Position::new(2, 2).in_bounds());
        assert!(!Position::new(3, 0).in_bounds());
        assert_eq!(Player::One.opponent(), Player::Two);
    }
}
