//! Tile model: connectivity patterns, tile kinds, and the source state machine.

pub mod pattern;
pub mod source;
pub mod tile;

pub use pattern::{Pattern, Shape};
pub use source::{
    SourceTile, COOLDOWN_TURNS, MAX_QUANTITY_PER_PLAYER, MIN_QUANTITY_PER_PLAYER,
    STARTING_QUANTITY_PER_PLAYER,
};
pub use tile::{Bonus, GuildTile, StandardTile, Tile, TileKind};
