//! Guild missions and their generator.

pub mod item;
pub mod generator;

pub use item::Item;
pub use generator::{MissionGenerator, DEFAULT_POINTS, DEFAULT_REQUIRED};
