//! Turn order: a cyclic sequence over the roster.
//!
//! The cycle is an explicit index with modulo advance, so the state is
//! bounded, serializable, and directly testable.

use serde::{Deserialize, Serialize};

use super::player::{Player, Roster};

/// Cyclic turn order over a roster.
///
/// The current player starts at the first roster entry; `advance` wraps
/// from the last player back to the first. Game resets leave the turn
/// order alone, so a rematch resumes with whichever player was current.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    roster: Roster,
    current: usize,
}

impl TurnOrder {
    /// Create a turn order starting at the first player.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self { roster, current: 0 }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        self.roster.get(self.current)
    }

    /// Advance to the next player in roster order, wrapping at the end.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.roster.len();
    }

    /// The roster this order cycles over.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_players() -> Roster {
        Roster::new(vec![Player::new("X", "blue"), Player::new("O", "green")])
    }

    #[test]
    fn test_starts_at_first_player() {
        let turn = TurnOrder::new(two_players());
        assert_eq!(turn.current().label(), "X");
    }

    #[test]
    fn test_two_players_alternate() {
        let mut turn = TurnOrder::new(two_players());

        for _ in 0..3 {
            assert_eq!(turn.current().label(), "X");
            turn.advance();
            assert_eq!(turn.current().label(), "O");
            turn.advance();
        }
    }

    #[test]
    fn test_cycle_preserves_roster_order() {
        let roster = Roster::new(vec![
            Player::new("A", "red"),
            Player::new("B", "green"),
            Player::new("C", "blue"),
        ]);
        let mut turn = TurnOrder::new(roster);

        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(turn.current().label().to_string());
            turn.advance();
        }

        assert_eq!(seen, vec!["A", "B", "C", "A", "B", "C", "A"]);
    }
}
