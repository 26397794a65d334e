//! The game controller and its presentation collaborator.
//!
//! [`Game`] owns the only live board. Each turn it asks the active player's
//! [`MoveProvider`] for a position, rejects anything that is not an empty
//! cell on the board, applies the move and re-evaluates. An illegal move
//! ends the game with an error and leaves the board as it was.

use std::io::Write;

use log::{info, warn};

use crate::board::{Board, Cell, Player};
use crate::error::GameError;
use crate::player::MoveProvider;
use crate::rules::{Outcome, evaluate, winning_line};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Ongoing,
    Finished(Outcome),
}

/// Receives read-only snapshots of the board as the game progresses.
pub trait Presenter {
    fn show_board(&mut self, board: &Board);

    fn show_outcome(&mut self, board: &Board, outcome: Outcome);
}

/// Silent presenter.
impl Presenter for () {
    fn show_board(&mut self, _board: &Board) {}

    fn show_outcome(&mut self, _board: &Board, _outcome: Outcome) {}
}

/// Writes boards and the final result as text.
pub struct ConsolePresenter<W> {
    out: W,
}

impl ConsolePresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_board(&mut self, board: &Board) -> std::io::Result<()> {
        writeln!(self.out, "{board}")?;
        self.out.flush()
    }

    fn write_outcome(&mut self, board: &Board, outcome: Outcome) -> std::io::Result<()> {
        match outcome {
            Outcome::Win(player) => match winning_line(board) {
                Some((_, line)) => writeln!(
                    self.out,
                    "Player {player} wins ({} {} {})",
                    line[0], line[1], line[2]
                )?,
                None => writeln!(self.out, "Player {player} wins")?,
            },
            Outcome::Draw => writeln!(self.out, "Draw")?,
            Outcome::Undecided => writeln!(self.out, "Undecided")?,
        }
        self.out.flush()
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_board(&mut self, board: &Board) {
        if let Err(e) = self.write_board(board) {
            warn!("failed to write board: {e}");
        }
    }

    fn show_outcome(&mut self, board: &Board, outcome: Outcome) {
        if let Err(e) = self.write_outcome(board, outcome) {
            warn!("failed to write outcome: {e}");
        }
    }
}

/// A game between two move providers.
pub struct Game {
    board: Board,
    to_move: Player,
    state: GameState,
    moves_played: usize,
    players: [Box<dyn MoveProvider>; 2],
}

impl Game {
    /// A fresh game: empty board, player one to move.
    pub fn new(one: Box<dyn MoveProvider>, two: Box<dyn MoveProvider>) -> Self {
        Self::with_board(Board::new(), Player::One, one, two)
    }

    /// Continue from an existing position.
    pub fn with_board(
        board: Board,
        to_move: Player,
        one: Box<dyn MoveProvider>,
        two: Box<dyn MoveProvider>,
    ) -> Self {
        let state = match evaluate(&board) {
            Outcome::Undecided => GameState::Ongoing,
            outcome => GameState::Finished(outcome),
        };
        Self {
            board,
            to_move,
            state,
            moves_played: 0,
            players: [one, two],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Moves applied by this controller (not counting a starting position).
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    fn provider(&mut self, player: Player) -> &mut dyn MoveProvider {
        match player {
            Player::One => self.players[0].as_mut(),
            Player::Two => self.players[1].as_mut(),
        }
    }

    /// Play one turn.
    pub fn step(&mut self) -> Result<GameState, GameError> {
        if self.state != GameState::Ongoing {
            return Err(GameError::GameOver);
        }

        let player = self.to_move;
        let board = self.board;
        let provider = self.provider(player);
        let name = provider.name().to_string();
        let position = provider.choose_move(&board, player)?;

        if !position.in_bounds() {
            warn!("{name} returned {position} for {player}, which is off the board");
            return Err(GameError::OutOfBounds { position });
        }
        if !self.board.is_empty_at(position) {
            warn!("{name} returned occupied {position} for {player}");
            return Err(GameError::IllegalMove { position, player });
        }

        self.board.set(position, Cell::Occupied(player));
        self.moves_played += 1;
        self.to_move = player.opponent();
        info!("{player} ({name}) plays {position}");

        let outcome = evaluate(&self.board);
        if outcome.is_terminal() {
            info!("game over after {} moves: {outcome:?}", self.moves_played);
            self.state = GameState::Finished(outcome);
        }
        Ok(self.state)
    }

    /// Play until the game is decided and return the outcome.
    ///
    /// The presenter sees the board before every turn, the final board once
    /// more, and then the outcome.
    pub fn play(&mut self, presenter: &mut dyn Presenter) -> Result<Outcome, GameError> {
        loop {
            if let GameState::Finished(outcome) = self.state {
                presenter.show_board(&self.board);
                presenter.show_outcome(&self.board, outcome);
                return Ok(outcome);
            }
            presenter.show_board(&self.board);
            self.step()?;
        }
    }
}
