//! Outcome evaluation: win scanning and tie detection.
//!
//! After every applied move the board is checked against the cached
//! line set in fixed scan order (rows, then columns, then the main
//! diagonal, then the anti diagonal). The first fully-claimed line
//! wins: a move that completes two lines at once reports only the
//! earlier one in scan order.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{Board, LineSet, WinningLine};

/// Phase of a game: in progress or one of the two terminal states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// A line was completed; no further moves are accepted.
    Won(Win),
    /// Every cell is claimed and nobody completed a line.
    Tied,
}

/// A completed winning line: who won and where.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// Label of the winning player.
    pub label: String,
    /// The completed line.
    pub line: WinningLine,
}

/// Scan for a completed line.
///
/// A line is complete when the set of distinct labels on it has exactly
/// one member and that member is a real mark, i.e. every cell on the
/// line is claimed by the same player. Lines are scanned in the fixed
/// order of `lines` and the first match is returned.
#[instrument(skip_all)]
#[must_use]
pub fn find_win(board: &Board, lines: &LineSet) -> Option<Win> {
    for line in lines.iter() {
        let labels: FxHashSet<Option<&str>> = line
            .coords()
            .iter()
            .map(|&coord| board.cell(coord).label())
            .collect();

        if labels.len() == 1 {
            if let Some(Some(label)) = labels.into_iter().next() {
                return Some(Win {
                    label: label.to_string(),
                    line: line.clone(),
                });
            }
        }
    }

    None
}

/// Whether the game is tied: no winner and no unclaimed cell left.
///
/// Only meaningful once win detection has run; a full board with a
/// completed line is a win, not a tie.
#[must_use]
pub fn is_tied(board: &Board, has_winner: bool) -> bool {
    !has_winner && board.is_full()
}
