//! Players and roster validation.
//!
//! ## Player
//!
//! Immutable label + display color pair. The label is the mark written
//! into board cells; the color is an opaque hint for presentation layers.
//!
//! ## Roster
//!
//! The ordered player list for one game. Turn order follows roster
//! order. Invariants (at least 2 players, labels non-empty and unique)
//! are checked at construction and violations panic.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A participant in the game.
///
/// Equality and hashing cover both fields, but the label alone
/// identifies the player within a game: it is what board cells and win
/// results carry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    label: String,
    color: String,
}

impl Player {
    /// Create a new player.
    ///
    /// Panics if `label` is empty: an unmarked cell is the engine's
    /// empty state, so an empty label can never identify a player.
    ///
    /// ```
    /// use rust_ttt::Player;
    ///
    /// let x = Player::new("X", "blue");
    /// assert_eq!(x.label(), "X");
    /// assert_eq!(x.color(), "blue");
    /// ```
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        let label = label.into();
        assert!(!label.is_empty(), "Player label must be non-empty");

        Self {
            label,
            color: color.into(),
        }
    }

    /// The mark this player writes into cells.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Display color hint. The engine never interprets it.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Ordered player list for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from an ordered player list.
    ///
    /// Panics unless there are at least 2 players and every label is
    /// unique.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        assert!(players.len() >= 2, "Must have at least 2 players");

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for player in &players {
            assert!(
                seen.insert(player.label()),
                "Duplicate player label: {}",
                player.label()
            );
        }

        Self { players }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; a roster holds at least 2 players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by roster position.
    ///
    /// Panics on an out-of-range index.
    #[must_use]
    pub fn get(&self, index: usize) -> &Player {
        &self.players[index]
    }

    /// Iterate players in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Whether `label` belongs to a player in this roster.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.players.iter().any(|p| p.label() == label)
    }
}
