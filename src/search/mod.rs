//! Exhaustive game-tree search.
//!
//! Both engines share the same root policy, implemented once by the provided
//! methods of [`SearchEngine`]: try every empty cell in row-major order, score
//! the reply position, and keep the first cell with the strictly greatest
//! score. They differ only in the recursive scorer:
//!
//! - [`Minimax`] visits every node of the remaining tree.
//! - [`AlphaBeta`] stops scanning siblings once the window closes.
//!
//! Hypothetical moves are played on the caller's board through
//! [`Board::place`] guards, so a search always hands the board back unchanged.

pub mod alphabeta;
pub mod minimax;

use std::fmt;

use log::debug;

use crate::board::{Board, Player, Position};
use crate::constants::{INFINITY, Score};
use crate::error::GameError;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;

/// The move chosen by a search, its perfect-play score and the work it took.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Position,
    pub score: Score,
    pub nodes: u64,
}

pub trait SearchEngine {
    fn name(&self) -> &'static str;

    /// Score the position where `player` has just moved and the opponent is
    /// to reply, from `player`'s perspective.
    fn score_reply(&mut self, board: &mut Board, player: Player) -> Score;

    /// Nodes visited since the last [`reset_nodes`](Self::reset_nodes).
    fn nodes(&self) -> u64;

    fn reset_nodes(&mut self);

    /// Score every legal move for `player`, in row-major order.
    ///
    /// Node counts accumulate across calls.
    fn score_moves(
        &mut self,
        board: &mut Board,
        player: Player,
    ) -> Result<Vec<(Position, Score)>, GameError> {
        if board.is_full() {
            return Err(GameError::NoLegalMoves);
        }

        let mut scores = Vec::new();
        for position in Position::all() {
            if !board.is_empty_at(position) {
                continue;
            }
            let mut placed = board.place(position, player);
            let score = self.score_reply(&mut placed, player);
            scores.push((position, score));
        }
        Ok(scores)
    }

    /// Pick the best move for `player`. Ties go to the first cell in scan order.
    fn best_move(&mut self, board: &mut Board, player: Player) -> Result<SearchResult, GameError> {
        self.reset_nodes();

        let mut best_score = -INFINITY;
        let mut best_position = None;
        for (position, score) in self.score_moves(board, player)? {
            if score > best_score {
                best_score = score;
                best_position = Some(position);
            }
        }
        let position = best_position.ok_or(GameError::NoLegalMoves)?;

        let result = SearchResult {
            position,
            score: best_score,
            nodes: self.nodes(),
        };
        debug!(
            "{} chose {} for {} (score {}, {} nodes)",
            self.name(),
            result.position,
            player,
            result.score,
            result.nodes
        );
        Ok(result)
    }
}

/// Search algorithm selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Engine {
    Minimax,
    AlphaBeta,
}

impl Engine {
    pub const ALL: [Engine; 2] = [Engine::Minimax, Engine::AlphaBeta];

    pub fn searcher(self) -> Box<dyn SearchEngine> {
        match self {
            Engine::Minimax => Box::new(Minimax::new()),
            Engine::AlphaBeta => Box::new(AlphaBeta::new()),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Minimax => write!(f, "minimax"),
            Engine::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DRAW, LOSS, WIN};

    #[test]
    fn test_full_board_rejected_before_search() {
        let mut board: Board = "XOX XOO OXX".parse().unwrap();
        for engine in Engine::ALL {
            let mut searcher = engine.searcher();
            assert_eq!(
                searcher.best_move(&mut board, Player::One),
                Err(GameError::NoLegalMoves)
            );
            assert_eq!(searcher.nodes(), 0);
        }
    }

    #[test]
    fn test_single_empty_cell() {
        // X to move; the last cell completes the top row.
        let mut board: Board = "XX. OOX XOO".parse().unwrap();
        for engine in Engine::ALL {
            let result = engine.searcher().best_move(&mut board, Player::One).unwrap();
            assert_eq!(result.position, Position::new(2, 0));
            assert_eq!(result.score, WIN);
        }
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        // O to move can win on the middle row or block X's top row.
        let mut board: Board = "XX. OO. X..".parse().unwrap();
        for engine in Engine::ALL {
            let result = engine.searcher().best_move(&mut board, Player::Two).unwrap();
            assert_eq!(result.position, Position::new(2, 1), "{engine}");
            assert_eq!(result.score, WIN);
        }
    }

    #[test]
    fn test_blocks_forced_loss() {
        // O to move must block X's top row; every other move loses.
        let mut board: Board = "XX. .O. ...".parse().unwrap();
        for engine in Engine::ALL {
            let scores = engine.searcher().score_moves(&mut board, Player::Two).unwrap();
            for (position, score) in scores {
                if position == Position::new(2, 0) {
                    assert_eq!(score, DRAW, "{engine}");
                } else {
                    assert_eq!(score, LOSS, "{engine} at {position}");
                }
            }
        }
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let mut board: Board = "X.. .O. ...".parse().unwrap();
        let snapshot = board;
        for engine in Engine::ALL {
            engine.searcher().best_move(&mut board, Player::One).unwrap();
            assert_eq!(board, snapshot, "{engine}");
        }
    }
}
