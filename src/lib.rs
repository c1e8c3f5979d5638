//! # labyrinth-engine
//!
//! Rules engine for a tile-shifting labyrinth board game.
//!
//! Players take turns rolling a die, reshaping the labyrinth (shift a whole
//! row or column, or rotate a single tile), walking through open
//! corridors, collecting materials from source tiles and trading them at
//! the central guild for mission points.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine consumes seven logical
//!    operations (four directions, primary, secondary, back). Input
//!    devices, rendering and audio live outside.
//!
//! 2. **Deterministic**: All randomness flows through seeded `GameRng`
//!    streams. Same seed and configuration, same game.
//!
//! 3. **Single Owner**: The [`Game`] driver owns the board and the players
//!    inside one [`GameState`] and lends it to the active context per
//!    operation.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, materials, RNG, configuration, errors
//! - `tiles`: Connectivity patterns, standard/source/guild tiles
//! - `board`: Board storage, line shifting, procedural generation
//! - `players`: Players, inventory and turn bookkeeping
//! - `missions`: Guild missions and their generator
//! - `context`: Turn-phase state machines
//! - `game`: Builder, driver and final result

pub mod core;
pub mod tiles;
pub mod board;
pub mod players;
pub mod missions;
pub mod context;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Coordinate, Direction,
    Material, Category,
    GameRng, GameConfig,
    EngineError, Result,
};

pub use crate::tiles::{Pattern, Shape, Tile, TileKind, StandardTile, SourceTile, GuildTile, Bonus};

pub use crate::board::{Board, Line, BoardGenerator};

pub use crate::players::{Player, PlayersManager, Subphase};

pub use crate::missions::{Item, MissionGenerator};

pub use crate::context::{
    Context, ContextId, Operation, Mode,
    TurnContext, DiceContext, LabyrinthContext, ShifterContext, RotationContext,
    GuildContext, UpdateBoardContext,
};

pub use crate::game::{Game, GameBuilder, GameResult, GameState};
