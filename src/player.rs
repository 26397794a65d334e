//! Move providers: whatever supplies a move for the side to play.
//!
//! The game controller only sees the [`MoveProvider`] trait. Which
//! implementation plays each side is decided once, when the game is built,
//! usually through [`PlayerKind`].

use clap::ValueEnum;
use log::debug;

use crate::board::{Board, Player, Position};
use crate::error::GameError;
use crate::search::{AlphaBeta, Minimax, SearchEngine};

pub trait MoveProvider {
    fn name(&self) -> &str;

    /// Choose a move for `player`. The returned cell must be empty.
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<Position, GameError>;
}

/// Plays the move chosen by a search engine.
pub struct SearchPlayer<E> {
    engine: E,
}

impl<E: SearchEngine> SearchPlayer<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: SearchEngine> MoveProvider for SearchPlayer<E> {
    fn name(&self) -> &str {
        self.engine.name()
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<Position, GameError> {
        // The engine plays hypothetical moves on a scratch copy.
        let mut scratch = *board;
        let result = self.engine.best_move(&mut scratch, player)?;
        debug_assert_eq!(&scratch, board, "search did not restore the board");
        Ok(result.position)
    }
}

/// Plays a uniformly random empty cell.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A random player that makes the same choices on every run.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl MoveProvider for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<Position, GameError> {
        let moves: Vec<Position> = board.empty_cells().collect();
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        let position = moves[self.rng.usize(..moves.len())];
        debug!("random picked {position} for {player}");
        Ok(position)
    }
}

/// Which provider plays a side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Perfect play by exhaustive minimax
    Minimax,
    /// Perfect play by alpha-beta search
    AlphaBeta,
    /// Uniformly random legal moves
    Random,
}

impl PlayerKind {
    /// Build the provider. `seed` only affects [`PlayerKind::Random`].
    pub fn into_provider(self, seed: Option<u64>) -> Box<dyn MoveProvider> {
        match self {
            PlayerKind::Minimax => Box::new(SearchPlayer::new(Minimax::new())),
            PlayerKind::AlphaBeta => Box::new(SearchPlayer::new(AlphaBeta::new())),
            PlayerKind::Random => match seed {
                Some(seed) => Box::new(RandomPlayer::with_seed(seed)),
                None => Box::new(RandomPlayer::new()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_player_does_not_touch_board() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let mut player = SearchPlayer::new(AlphaBeta::new());
        let position = player.choose_move(&board, Player::One).unwrap();
        assert!(board.is_empty_at(position));
        assert_eq!(board.occupied_count(), 2);
        assert!(player.engine().nodes() > 0);
    }

    #[test]
    fn test_random_player_picks_empty_cells() {
        let board: Board = "XOX OX. O..".parse().unwrap();
        let mut player = RandomPlayer::with_seed(7);
        for _ in 0..50 {
            let position = player.choose_move(&board, Player::Two).unwrap();
            assert!(board.is_empty_at(position));
        }
    }

    #[test]
    fn test_random_player_is_reproducible() {
        let board = Board::new();
        let mut a = RandomPlayer::with_seed(42);
        let mut b = RandomPlayer::with_seed(42);
        for _ in 0..20 {
            assert_eq!(
                a.choose_move(&board, Player::One).unwrap(),
                b.choose_move(&board, Player::One).unwrap()
            );
        }
    }

    #[test]
    fn test_random_player_rejects_full_board() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(
            RandomPlayer::with_seed(1).choose_move(&board, Player::One),
            Err(GameError::NoLegalMoves)
        );
    }

    #[test]
    fn test_player_kind_names() {
        assert_eq!(PlayerKind::Minimax.into_provider(None).name(), "minimax");
        assert_eq!(PlayerKind::AlphaBeta.into_provider(None).name(), "alpha-beta");
        assert_eq!(PlayerKind::Random.into_provider(Some(3)).name(), "random");
    }
}
