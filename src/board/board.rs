//! The game board: a fixed grid of tiles plus the set of blocked cells.
//!
//! Blocked cells (the guild and every source) can never be shifted or
//! rotated. Players still walk over them.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coordinate, Direction, EngineError, Result};
use crate::tiles::Tile;

/// Coordinates of a full row or column.
pub type LineCoords = SmallVec<[Coordinate; 16]>;

/// A full row or column of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(i32),
    Column(i32),
}

impl Line {
    /// The line through `cursor` that a shift towards `direction` moves.
    ///
    /// Horizontal shifts move the cursor's row, vertical ones its column.
    #[must_use]
    pub fn through(cursor: Coordinate, direction: Direction) -> Self {
        if direction.is_horizontal() {
            Line::Row(cursor.row)
        } else {
            Line::Column(cursor.column)
        }
    }

    /// Can tiles on this line be pushed towards `direction`?
    #[must_use]
    pub fn accepts(self, direction: Direction) -> bool {
        match self {
            Line::Row(_) => direction.is_horizontal(),
            Line::Column(_) => !direction.is_horizontal(),
        }
    }

    #[must_use]
    pub fn contains(self, coord: Coordinate) -> bool {
        match self {
            Line::Row(row) => coord.row == row,
            Line::Column(column) => coord.column == column,
        }
    }

    /// Where `coord` ends up after the line is shifted towards `direction`,
    /// wrapping around the board edge.
    #[must_use]
    pub fn wrap_step(self, coord: Coordinate, direction: Direction, height: i32, width: i32) -> Coordinate {
        let next = coord.step(direction);
        Coordinate::new(next.row.rem_euclid(height), next.column.rem_euclid(width))
    }

    /// The line's coordinates, top-to-bottom or left-to-right.
    #[must_use]
    pub fn coordinates(self, height: i32, width: i32) -> LineCoords {
        match self {
            Line::Row(row) => (0..width).map(|c| Coordinate::new(row, c)).collect(),
            Line::Column(column) => (0..height).map(|r| Coordinate::new(r, column)).collect(),
        }
    }
}

/// Coordinate to tile mapping with fixed dimensions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: FxHashMap<Coordinate, Tile>,
    blocked: FxHashSet<Coordinate>,
    height: i32,
    width: i32,
}

impl Board {
    /// Create an empty board of the given size.
    #[must_use]
    pub fn new(height: i32, width: i32) -> Self {
        Self {
            tiles: FxHashMap::default(),
            blocked: FxHashSet::default(),
            height,
            width,
        }
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The guild's cell.
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.height / 2, self.width / 2)
    }

    /// Is `coord` inside the board bounds?
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        (0..self.height).contains(&coord.row) && (0..self.width).contains(&coord.column)
    }

    /// Place a tile on an empty cell.
    pub fn insert_tile(&mut self, coord: Coordinate, tile: Tile) -> Result<()> {
        if self.tiles.contains_key(&coord) {
            return Err(EngineError::DuplicateCoordinate(coord));
        }
        self.tiles.insert(coord, tile);
        Ok(())
    }

    /// Exclude a cell from shifting and rotation.
    pub fn add_blocked(&mut self, coord: Coordinate) {
        self.blocked.insert(coord);
    }

    #[must_use]
    pub fn is_blocked(&self, coord: Coordinate) -> bool {
        self.blocked.contains(&coord)
    }

    #[must_use]
    pub fn map(&self) -> &FxHashMap<Coordinate, Tile> {
        &self.tiles
    }

    #[must_use]
    pub fn blocked(&self) -> &FxHashSet<Coordinate> {
        &self.blocked
    }

    #[must_use]
    pub fn tile(&self, coord: Coordinate) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub fn tile_mut(&mut self, coord: Coordinate) -> Option<&mut Tile> {
        self.tiles.get_mut(&coord)
    }

    /// Every cell holds a tile.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tiles.len() == (self.height * self.width) as usize
    }

    /// A line can move when it lies on the board and has no blocked cell.
    #[must_use]
    pub fn is_shiftable(&self, line: Line) -> bool {
        let in_range = match line {
            Line::Row(row) => (0..self.height).contains(&row),
            Line::Column(column) => (0..self.width).contains(&column),
        };
        in_range
            && line
                .coordinates(self.height, self.width)
                .iter()
                .all(|c| !self.is_blocked(*c))
    }

    /// Push every tile of `line` one cell towards `direction`.
    ///
    /// The tile pushed off the edge re-enters at the opposite end. Returns
    /// `false` and leaves the board untouched when the line is not
    /// shiftable or `direction` runs across it.
    pub fn shift_line(&mut self, line: Line, direction: Direction) -> bool {
        if !line.accepts(direction) || !self.is_shiftable(line) {
            return false;
        }

        let coords = line.coordinates(self.height, self.width);
        let mut moving: Vec<Option<Tile>> = coords.iter().map(|c| self.tiles.remove(c)).collect();
        match direction {
            Direction::Right | Direction::Down => moving.rotate_right(1),
            Direction::Left | Direction::Up => moving.rotate_left(1),
        }
        for (coord, tile) in coords.iter().zip(moving) {
            if let Some(tile) = tile {
                self.tiles.insert(*coord, tile);
            }
        }
        true
    }

    /// Rotate the tile at `coord` one step. Refuses blocked or empty cells.
    pub fn rotate_tile(&mut self, coord: Coordinate) -> bool {
        if self.is_blocked(coord) {
            return false;
        }
        match self.tiles.get_mut(&coord) {
            Some(tile) => {
                tile.rotate();
                true
            }
            None => false,
        }
    }

    /// Can a player walk from `from` to its neighbour towards `direction`?
    ///
    /// Both tiles must be open towards each other.
    #[must_use]
    pub fn can_move(&self, from: Coordinate, direction: Direction) -> bool {
        let to = from.step(direction);
        match (self.tiles.get(&from), self.tiles.get(&to)) {
            (Some(origin), Some(target)) => {
                origin.is_open(direction) && target.is_open(direction.opposite())
            }
            _ => false,
        }
    }

    /// Advance every source tile by one tick.
    pub fn tick_sources(&mut self) {
        for source in self.tiles.values_mut().filter_map(Tile::as_source_mut) {
            source.update_tile();
        }
    }

    /// Iterate over source tiles and their coordinates.
    pub fn sources(&self) -> impl Iterator<Item = (Coordinate, &Tile)> + '_ {
        self.tiles
            .iter()
            .filter(|(_, tile)| tile.as_source().is_some())
            .map(|(&coord, tile)| (coord, tile))
    }
}
