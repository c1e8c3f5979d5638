//! Turn-phase contexts.
//!
//! Each phase of a turn is a context: a small state machine that accepts
//! the seven logical operations coming from the input layer and mutates the
//! shared [`GameState`].
//!
//! ## Protocol
//!
//! After every operation the driver polls [`Context::done`]. Once it
//! returns `true`, the driver calls [`Context::next_context`] exactly once,
//! which clears the completion flag and names the successor. `done` never
//! has side effects and `next_context` is never called speculatively.
//!
//! ## Flow
//!
//! ```text
//!  UpdateBoard ──► Dice ──► Labyrinth ──► Turn ──► Guild ──► Turn
//!       ▲                 (shift|rotate)   │ move/collect       │
//!       └──────────────────────────────────┴────────────────────┘
//!                                         back() ends the turn
//! ```
//!
//! Contexts form a closed set identified by [`ContextId`]; the driver
//! dispatches to the concrete type with a `match`.

mod dice;
mod guild;
mod labyrinth;
mod rotator;
mod shifter;
mod turn;
mod update;

pub use dice::DiceContext;
pub use guild::GuildContext;
pub use labyrinth::{LabyrinthContext, Mode};
pub use rotator::RotationContext;
pub use shifter::ShifterContext;
pub use turn::TurnContext;
pub use update::UpdateBoardContext;

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, Direction};
use crate::game::GameState;

/// Identifies one of the game's contexts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextId {
    /// The turn owner: movement and collection.
    Turn,
    Dice,
    Labyrinth,
    Guild,
    UpdateBoard,
}

/// A logical input operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Up,
    Down,
    Left,
    Right,
    Primary,
    Secondary,
    Back,
}

impl Operation {
    /// The direction for navigation operations.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Operation::Up => Some(Direction::Up),
            Operation::Down => Some(Direction::Down),
            Operation::Left => Some(Direction::Left),
            Operation::Right => Some(Direction::Right),
            Operation::Primary | Operation::Secondary | Operation::Back => None,
        }
    }
}

/// One interactive phase of a turn.
///
/// Operations default to no-ops so each context only implements the keys
/// it reacts to.
pub trait Context {
    fn up(&mut self, _state: &mut GameState) {}

    fn down(&mut self, _state: &mut GameState) {}

    fn left(&mut self, _state: &mut GameState) {}

    fn right(&mut self, _state: &mut GameState) {}

    fn primary(&mut self, _state: &mut GameState) {}

    fn secondary(&mut self, _state: &mut GameState) {}

    fn back(&mut self, _state: &mut GameState) {}

    /// Has this context finished? Pure.
    fn done(&self) -> bool;

    /// Clear the completion flag and name the next context.
    ///
    /// Only called after `done()` returned `true`.
    fn next_context(&mut self) -> ContextId;

    /// Route an [`Operation`] to the matching method.
    fn apply(&mut self, state: &mut GameState, op: Operation) {
        match op {
            Operation::Up => self.up(state),
            Operation::Down => self.down(state),
            Operation::Left => self.left(state),
            Operation::Right => self.right(state),
            Operation::Primary => self.primary(state),
            Operation::Secondary => self.secondary(state),
            Operation::Back => self.back(state),
        }
    }
}

/// Apply `op`, then run the completion handshake.
///
/// Returns the successor when the context finished.
pub fn dispatch<C: Context>(context: &mut C, state: &mut GameState, op: Operation) -> Option<ContextId> {
    context.apply(state, op);
    if context.done() {
        Some(context.next_context())
    } else {
        None
    }
}

/// Move a board cursor one cell, staying inside the board.
pub(crate) fn step_cursor(cursor: Coordinate, direction: Direction, height: i32, width: i32) -> Coordinate {
    let next = cursor.step(direction);
    Coordinate::new(next.row.clamp(0, height - 1), next.column.clamp(0, width - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_direction() {
        assert_eq!(Operation::Up.direction(), Some(Direction::Up));
        assert_eq!(Operation::Left.direction(), Some(Direction::Left));
        assert_eq!(Operation::Primary.direction(), None);
        assert_eq!(Operation::Back.direction(), None);
    }

    #[test]
    fn test_step_cursor_clamps() {
        let corner = Coordinate::new(0, 0);
        assert_eq!(step_cursor(corner, Direction::Up, 5, 5), corner);
        assert_eq!(step_cursor(corner, Direction::Left, 5, 5), corner);
        assert_eq!(step_cursor(corner, Direction::Down, 5, 5), Coordinate::new(1, 0));
        assert_eq!(step_cursor(Coordinate::new(4, 4), Direction::Right, 5, 5), Coordinate::new(4, 4));
    }
}
