//! Error types for the search core and the game controller.
//!
//! Every error here is a contract violation between components rather than a
//! transient condition, so none of them is retried.

use thiserror::Error;

use crate::board::{Player, Position};

/// Errors raised by the board, the engines and the game controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move: {position} is already occupied (player {player} to move)")]
    IllegalMove { position: Position, player: Player },

    #[error("position {position} is off the board")]
    OutOfBounds { position: Position },

    #[error("no legal moves: the board is full")]
    NoLegalMoves,

    #[error("game already over")]
    GameOver,

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },
}
