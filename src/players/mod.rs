//! Players and turn ownership.

pub mod player;
pub mod manager;

pub use player::Player;
pub use manager::{PlayersManager, Subphase};
