//! Minimax with alpha-beta pruning.
//!
//! Each root candidate is scored with the full `[-INFINITY, INFINITY]`
//! window, so the value reported for every candidate is exact and matches
//! [`Minimax`](super::Minimax). Pruning only saves nodes below the root.

use crate::board::{Board, Player, Position};
use crate::constants::{INFINITY, Score};
use crate::rules::evaluate;
use crate::search::SearchEngine;

#[derive(Debug, Default)]
pub struct AlphaBeta {
    nodes: u64,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail-soft alpha-beta: on a cutoff the best score seen so far is
    /// returned as is.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        perspective: Player,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
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
            let score = self.alpha_beta(&mut placed, perspective, !maximizing, alpha, beta);

            if maximizing {
                best = best.max(score);
                if score > alpha {
                    alpha = score;
                }
            } else {
                best = best.min(score);
                if score < beta {
                    beta = score;
                }
            }

            // `placed` is dropped on this return too, restoring the cell.
            if alpha > beta {
                return best;
            }
        }

        best
    }
}

impl SearchEngine for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn score_reply(&mut self, board: &mut Board, player: Player) -> Score {
        self.alpha_beta(board, player, false, -INFINITY, INFINITY)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }

    fn reset_nodes(&mut self) {
        self.nodes = 0;
    }
}
