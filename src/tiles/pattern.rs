//! Tile connectivity patterns.
//!
//! A `Pattern` records, for each of the four sides of a tile, whether a
//! path leaves the tile through that side. It is a fixed-size table indexed
//! by [`Direction`], so every direction always has an entry.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// Open/blocked flag for each side of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    open: [bool; 4],
}

impl Pattern {
    /// All four sides blocked.
    pub const CLOSED: Pattern = Pattern { open: [false; 4] };

    /// All four sides open.
    pub const CROSS: Pattern = Pattern { open: [true; 4] };

    /// Create a pattern from the four sides, clockwise from `Up`.
    #[must_use]
    pub const fn new(up: bool, right: bool, down: bool, left: bool) -> Self {
        Self { open: [up, right, down, left] }
    }

    /// Is the side facing `direction` open?
    #[must_use]
    pub const fn is_open(&self, direction: Direction) -> bool {
        self.open[direction.index()]
    }

    /// Open or close one side.
    pub fn set(&mut self, direction: Direction, open: bool) {
        self.open[direction.index()] = open;
    }

    /// Overwrite the given sides, leaving the others untouched.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = (Direction, bool)>) {
        for (direction, open) in entries {
            self.set(direction, open);
        }
    }

    /// The pattern after one rotation step.
    ///
    /// The side that was open towards `d.next()` now faces `d`.
    #[must_use]
    pub fn rotated(self) -> Self {
        let mut rotated = Pattern::CLOSED;
        for direction in Direction::ALL {
            rotated.set(direction, self.is_open(direction.next()));
        }
        rotated
    }

    /// Iterate `(direction, open)` pairs clockwise from `Up`.
    pub fn entries(&self) -> impl Iterator<Item = (Direction, bool)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.is_open(d)))
    }

    /// Number of open sides.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&open| open).count()
    }
}

/// The four canonical tile shapes the generator draws from.
///
/// Every other pattern used on the board is one of these rotated 0-3 times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Straight corridor (up-down).
    Straight,
    /// 90 degree bend (up-right).
    Elbow,
    /// T junction (closed on the left).
    ThreeWay,
    /// Crossroads.
    FourWay,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Straight, Shape::Elbow, Shape::ThreeWay, Shape::FourWay];

    /// The unrotated pattern for this shape.
    #[must_use]
    pub const fn pattern(self) -> Pattern {
        match self {
            Shape::Straight => Pattern::new(true, false, true, false),
            Shape::Elbow => Pattern::new(true, true, false, false),
            Shape::ThreeWay => Pattern::new(true, true, true, false),
            Shape::FourWay => Pattern::CROSS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_moves_next_side_in() {
        // up+right elbow: new[Up] = old[Right], new[Left] = old[Up]
        let rotated = Shape::Elbow.pattern().rotated();
        assert_eq!(rotated, Pattern::new(true, false, false, true));
    }

    #[test]
    fn test_straight_alternates() {
        let straight = Shape::Straight.pattern();
        let once = straight.rotated();
        assert_eq!(once, Pattern::new(false, true, false, true));
        assert_eq!(once.rotated(), straight);
    }

    #[test]
    fn test_four_rotations_identity() {
        for shape in Shape::ALL {
            let p = shape.pattern();
            assert_eq!(p.rotated().rotated().rotated().rotated(), p);
        }
    }

    #[test]
    fn test_merge_overwrites_only_given_sides() {
        let mut p = Pattern::CLOSED;
        p.merge([(Direction::Up, true), (Direction::Left, true)]);
        assert!(p.is_open(Direction::Up));
        assert!(!p.is_open(Direction::Right));
        assert!(p.is_open(Direction::Left));

        p.merge([(Direction::Up, false)]);
        assert!(!p.is_open(Direction::Up));
        assert!(p.is_open(Direction::Left));
    }

    #[test]
    fn test_open_count() {
        assert_eq!(Shape::Straight.pattern().open_count(), 2);
        assert_eq!(Shape::ThreeWay.pattern().open_count(), 3);
        assert_eq!(Pattern::CROSS.open_count(), 4);
    }

    #[test]
    fn test_entries_clockwise() {
        let dirs: Vec<_> = Pattern::CROSS.entries().map(|(d, _)| d).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
    }
}
