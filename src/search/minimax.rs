//! Plain minimax without pruning.

use crate::board::{Board, Player, Position};
use crate::constants::{INFINITY, Score};
use crate::rules::evaluate;
use crate::search::SearchEngine;

/// Visits every node of the remaining game tree.
#[derive(Debug, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    fn minimax(&mut self, board: &mut Board, perspective: Player, maximizing: bool) -> Score {
        self.nodes += 1;

        if let Some(score) = evaluate(board).score_for(perspective) {
            return score;
        }

        let mover = if maximizing {
            perspective
        } else {
            perspective.opponent()
        };
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for position in Position::all() {
            if !board.is_empty_at(position) {
                continue;
            }
            let mut placed = board.place(position, mover);
            let score = self.minimax(&mut placed, perspective, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

impl SearchEngine for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn score_reply(&mut self, board: &mut Board, player: Player) -> Score {
        self.minimax(board, player, false)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }

    fn reset_nodes(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DRAW;

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new();
        let result = Minimax::new().best_move(&mut board, Player::One).unwrap();
        assert_eq!(result.score, DRAW);
        // Every cell draws with perfect play, so the first one is kept.
        assert_eq!(result.position, Position::new(0, 0));
    }

    #[test]
    fn test_visits_whole_tree() {
        // The full game tree below the empty board has 549945 nodes; the
        // root itself is not counted, only the 9 subtrees.
        let mut board = Board::new();
        let mut engine = Minimax::new();
        engine.best_move(&mut board, Player::One).unwrap();
        assert_eq!(engine.nodes(), 549_945);
    }
}
