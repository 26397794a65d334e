//! ttt-search: perfect-play tic-tac-toe by exhaustive game-tree search.
//!
//! The search is always carried to terminal positions; there is no depth
//! limit and no heuristic evaluation. Two engines are provided and agree on
//! the score of every legal move in every reachable position.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, score values and the search sentinel
//! - [`board`] - Players, cells, positions and the 3x3 board
//! - [`rules`] - Terminal-state evaluation
//! - [`search`] - Minimax and alpha-beta engines
//! - [`player`] - Move providers (search-backed and random)
//! - [`game`] - Game controller and presentation
//! - [`error`] - Error type shared by all of the above
//!
//! ## Example
//!
//! ```
//! use ttt_search::board::{Board, Player, Position};
//! use ttt_search::search::{AlphaBeta, SearchEngine};
//!
//! // X has taken the centre; find O's best reply.
//! let mut board: Board = ". . . / . X . / . . .".parse().unwrap();
//! let result = AlphaBeta::new().best_move(&mut board, Player::Two).unwrap();
//! assert_eq!(result.position, Position::new(0, 0));
//! assert_eq!(result.score, 0);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;
