//! Board coordinates and compass directions.
//!
//! ## Coordinate
//!
//! A `(row, column)` pair. Rows grow downwards, columns grow to the right,
//! so `(0, 0)` is the top-left corner of the board.
//!
//! ## Direction
//!
//! The four sides of a tile. Directions form a clockwise cycle:
//! `Up → Right → Down → Left → Up`.

use serde::{Deserialize, Serialize};

/// Position of a cell on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row index (0 = top).
    pub row: i32,
    /// Column index (0 = left).
    pub column: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// The neighbouring coordinate one step towards `direction`.
    ///
    /// The result may lie outside the board; callers check bounds.
    ///
    /// ```
    /// use labyrinth_engine::core::{Coordinate, Direction};
    ///
    /// let c = Coordinate::new(2, 3);
    /// assert_eq!(c.step(Direction::Up), Coordinate::new(1, 3));
    /// assert_eq!(c.step(Direction::Right), Coordinate::new(2, 4));
    /// ```
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.row - 1, self.column),
            Direction::Right => Self::new(self.row, self.column + 1),
            Direction::Down => Self::new(self.row + 1, self.column),
            Direction::Left => Self::new(self.row, self.column - 1),
        }
    }

    /// Chebyshev distance (king moves) between two coordinates.
    #[must_use]
    pub fn ring_distance(self, other: Coordinate) -> i32 {
        (self.row - other.row).abs().max((self.column - other.column).abs())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One side of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in clockwise order, starting from `Up`.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// The next direction clockwise.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// The facing direction (two clockwise steps).
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.next().next()
    }

    /// Index into a fixed-size per-direction table.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// True for `Left` and `Right`.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}
