//! The `Game` engine facade.
//!
//! One value owns the whole game: board, cached line geometry, turn
//! order, winner state, and the move history. A presentation layer
//! drives it one input event at a time: vet the move, apply it, check
//! the outcome, and advance the turn only when the game continues.
//!
//! ```
//! use rust_ttt::{Coord, GameBuilder, Move};
//!
//! let mut game = GameBuilder::new().build();
//! let mv = Move::new(Coord::new(0, 0), game.current_player().label());
//!
//! assert!(game.is_valid_move(&mv));
//! game.process_move(mv);
//!
//! if !game.has_winner() && !game.is_tied() {
//!     game.toggle_player();
//! }
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Board, Coord, LineSet, Move, Player, Roster, TurnOrder, WinningLine};

use super::outcome::{self, GameStatus, Win};

/// A recorded move with its position in the game, for replay and
/// debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move as applied.
    pub mv: Move,
    /// Zero-based position in the game since the last reset.
    pub sequence: u32,
}

/// Builder for a [`Game`].
///
/// Defaults to the classic setup: a 3x3 board with players `X` (blue)
/// and `O` (green).
#[derive(Clone, Debug)]
pub struct GameBuilder {
    players: Vec<Player>,
    board_size: usize,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            players: vec![Player::new("X", "blue"), Player::new("O", "green")],
            board_size: 3,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster.
    #[must_use]
    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    /// Set the board side length.
    #[must_use]
    pub fn board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Build the game.
    ///
    /// Panics on a malformed configuration: fewer than 2 players,
    /// duplicate or empty labels, or a zero board size.
    #[must_use]
    pub fn build(self) -> Game {
        Game::new(self.players, self.board_size)
    }
}

/// Complete game state and rules.
///
/// Created once per match; [`Game::reset`] returns it to the initial
/// empty-board condition for a rematch without rebuilding the player
/// cycle or the line geometry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    lines: LineSet,
    turn: TurnOrder,
    winner: Option<Win>,
    history: Vector<MoveRecord>,
}

impl Game {
    /// Create a game from an ordered player list and a board size.
    ///
    /// Panics on a malformed configuration, see [`GameBuilder::build`].
    #[must_use]
    pub fn new(players: Vec<Player>, board_size: usize) -> Self {
        Self {
            board: Board::new(board_size),
            lines: LineSet::new(board_size),
            turn: TurnOrder::new(Roster::new(players)),
            winner: None,
            history: Vector::new(),
        }
    }

    // === Queries ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cached winning-line geometry.
    #[must_use]
    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.turn.current()
    }

    /// Whether a winning line has been completed.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// The winning label and line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&Win> {
        self.winner.as_ref()
    }

    /// The completed line, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winner.as_ref().map(|win| &win.line)
    }

    /// Whether the game ended with a full board and no winner.
    ///
    /// Checked after win detection: a full board with a completed line
    /// is a win, not a tie.
    #[must_use]
    pub fn is_tied(&self) -> bool {
        outcome::is_tied(&self.board, self.has_winner())
    }

    /// Current phase of the game.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match &self.winner {
            Some(win) => GameStatus::Won(win.clone()),
            None if self.board.is_full() => GameStatus::Tied,
            None => GameStatus::InProgress,
        }
    }

    /// Moves applied since the last reset, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of moves applied since the last reset.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Whether `mv` may be applied: its cell is unclaimed and no winner
    /// has been declared.
    ///
    /// Illegal moves are expected play (a click on an occupied cell, a
    /// click after the game ended) and are reported with `false`, never
    /// an error. Out-of-range coordinates are a programmer error and
    /// panic.
    #[must_use]
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        !self.has_winner() && self.board.is_empty_at(mv.coord)
    }

    /// Coordinates still open for play. Empty once a winner exists or
    /// the board is full.
    #[must_use]
    pub fn valid_moves(&self) -> Vec<Coord> {
        if self.has_winner() {
            return Vec::new();
        }
        self.board.empty_coords().collect()
    }

    // === Mutations ===

    /// Apply a vetted move and evaluate the outcome.
    ///
    /// Writes the move's label into the board, records it in the
    /// history, and scans for a completed line in fixed order (rows,
    /// columns, main diagonal, anti diagonal), keeping the first match.
    ///
    /// Callers must vet the move with [`Game::is_valid_move`] first;
    /// applying an unvetted move is a contract violation.
    #[instrument(skip(self), fields(coord = %mv.coord, label = %mv.label))]
    pub fn process_move(&mut self, mv: Move) {
        debug_assert!(self.is_valid_move(&mv), "process_move on an invalid move");
        debug_assert!(
            self.turn.roster().contains_label(&mv.label),
            "move label {:?} is not in the roster",
            mv.label
        );

        self.board.mark(mv.coord, mv.label.clone());

        let sequence = self.history.len() as u32;
        self.history.push_back(MoveRecord { mv, sequence });

        self.winner = outcome::find_win(&self.board, &self.lines);
        if let Some(win) = &self.winner {
            debug!(label = %win.label, "winning line completed");
        }
    }

    /// Advance to the next player in cyclic order.
    ///
    /// Call exactly once per completed non-terminal move. The engine
    /// does not advance the turn on its own: a winning or tying move
    /// ends the game with the scoring player still current, which is
    /// what presentation layers report.
    pub fn toggle_player(&mut self) {
        self.turn.advance();
    }

    /// Return to the initial empty-board condition.
    ///
    /// Clears the board, winner state, and history. The turn cycle is
    /// deliberately left alone: a rematch resumes with whichever player
    /// was current.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.winner = None;
        self.history = Vector::new();
    }
}
