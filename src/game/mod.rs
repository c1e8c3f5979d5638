//! The game driver.
//!
//! [`GameBuilder`] turns a [`GameConfig`](crate::core::GameConfig) and a
//! seed into a ready [`Game`]. The game owns the [`GameState`] and every
//! context, and routes each logical operation to the active one.

mod builder;
mod driver;
mod result;
mod state;

pub use builder::GameBuilder;
pub use driver::Game;
pub use result::GameResult;
pub use state::GameState;

#[cfg(test)]
pub(crate) use state::test_state;
