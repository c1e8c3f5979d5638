//! Core engine types: coordinates, materials, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by every other module.

pub mod coord;
pub mod material;
pub mod rng;
pub mod config;
pub mod error;

pub use coord::{Coordinate, Direction};
pub use material::{Category, Material};
pub use rng::GameRng;
pub use config::{GameConfig, MAX_PLAYERS};
pub use error::{EngineError, Result};
