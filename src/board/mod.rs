//! Board storage, line shifting, and procedural generation.

pub mod board;
pub mod placement;
pub mod generator;

pub use board::{Board, Line, LineCoords};
pub use generator::{BoardGenerator, BONUS_AMOUNT, EMPTY_BONUS_SLOTS_PER_MATERIAL};
