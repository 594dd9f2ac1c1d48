//! Winning-line geometry.
//!
//! Every `size x size` board has `2 * size + 2` candidate lines: one
//! per row, one per column, and the two full diagonals. The set depends
//! only on the board size, never on cell contents, so it is computed
//! once at game construction and cached for the life of the game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Coord;

/// Inline capacity for line coordinates; the classic 3x3 game stays on
/// the stack.
type CoordVec = SmallVec<[Coord; 3]>;

/// One candidate line: an ordered run of `size` coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    coords: CoordVec,
}

impl WinningLine {
    fn new(coords: CoordVec) -> Self {
        Self { coords }
    }

    /// The coordinates of this line, in order.
    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Number of coordinates (the board size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always false; a line spans a full board side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Whether `coord` lies on this line.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }
}

/// All candidate lines for one board size, in scan order.
///
/// Scan order is fixed: rows top to bottom, then columns left to right,
/// then the main diagonal, then the anti diagonal. Outcome evaluation
/// relies on this order for its first-match rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSet {
    size: usize,
    lines: Vec<WinningLine>,
}

impl LineSet {
    /// Compute the line set for a `size x size` board.
    ///
    /// Panics if `size` is zero. For `size == 1` the row, the column,
    /// and both diagonals coincide on the single cell; all four lines
    /// are still emitted, without de-duplication.
    ///
    /// ```
    /// use rust_ttt::LineSet;
    ///
    /// let lines = LineSet::new(3);
    /// assert_eq!(lines.len(), 8);
    /// ```
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");

        let mut lines = Vec::with_capacity(2 * size + 2);

        // Rows, left to right.
        for row in 0..size {
            lines.push(WinningLine::new(
                (0..size).map(|col| Coord::new(row, col)).collect(),
            ));
        }

        // Columns, top to bottom: the transpose of the rows.
        for col in 0..size {
            lines.push(WinningLine::new(
                (0..size).map(|row| Coord::new(row, col)).collect(),
            ));
        }

        // Main diagonal, top-left to bottom-right.
        lines.push(WinningLine::new(
            (0..size).map(|i| Coord::new(i, i)).collect(),
        ));

        // Anti diagonal, top-right to bottom-left.
        lines.push(WinningLine::new(
            (0..size).map(|row| Coord::new(row, size - 1 - row)).collect(),
        ));

        Self { size, lines }
    }

    /// Board size these lines were computed for.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of lines (`2 * size + 2`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; even a 1x1 board has four lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate lines in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &WinningLine> {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_classic_board_has_eight_lines() {
        let lines = LineSet::new(3);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines.size(), 3);
    }

    #[test]
    fn test_scan_order_rows_columns_diagonals() {
        let lines = LineSet::new(3);
        let all: Vec<_> = lines.iter().collect();

        // First the rows.
        assert_eq!(
            all[0].coords(),
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
        assert_eq!(
            all[2].coords(),
            &[Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)]
        );

        // Then the columns, transposed.
        assert_eq!(
            all[3].coords(),
            &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
        assert_eq!(
            all[5].coords(),
            &[Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)]
        );

        // Main diagonal, then anti diagonal.
        assert_eq!(
            all[6].coords(),
            &[Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]
        );
        assert_eq!(
            all[7].coords(),
            &[Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_size_one_emits_four_coincident_lines() {
        let lines = LineSet::new(1);

        assert_eq!(lines.len(), 4);
        for line in lines.iter() {
            assert_eq!(line.coords(), &[Coord::new(0, 0)]);
        }
    }

    #[test]
    fn test_line_contains() {
        let lines = LineSet::new(3);
        let anti = lines.iter().last().unwrap();

        assert!(anti.contains(Coord::new(1, 1)));
        assert!(!anti.contains(Coord::new(0, 0)));
    }

    #[test]
    #[should_panic(expected = "Board size must be at least 1")]
    fn test_zero_size_rejected() {
        LineSet::new(0);
    }

    #[test]
    fn test_line_set_serialization() {
        let lines = LineSet::new(4);
        let json = serde_json::to_string(&lines).unwrap();
        let deserialized: LineSet = serde_json::from_str(&json).unwrap();

        assert_eq!(lines, deserialized);
    }

    proptest! {
        /// For every board size: 2n + 2 lines, each holding n distinct
        /// in-range coordinates.
        #[test]
        fn line_set_shape(size in 1usize..16) {
            let lines = LineSet::new(size);
            prop_assert_eq!(lines.len(), 2 * size + 2);

            for line in lines.iter() {
                prop_assert_eq!(line.len(), size);
                prop_assert!(!line.is_empty());

                let distinct: FxHashSet<Coord> = line.coords().iter().copied().collect();
                prop_assert_eq!(distinct.len(), size);

                for coord in line.coords() {
                    prop_assert!(coord.row < size && coord.col < size);
                }
            }
        }

        /// Every cell of the board lies on at least two lines (its row
        /// and its column).
        #[test]
        fn every_cell_covered(size in 1usize..10) {
            let lines = LineSet::new(size);

            for row in 0..size {
                for col in 0..size {
                    let coord = Coord::new(row, col);
                    let covering = lines.iter().filter(|line| line.contains(coord)).count();
                    prop_assert!(covering >= 2);
                }
            }
        }
    }
}
