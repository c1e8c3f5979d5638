use tracing::{debug, trace};

use super::{step_cursor, Context, ContextId};
use crate::core::{Coordinate, Direction};
use crate::game::GameState;

/// Rotates the single tile under the cursor.
#[derive(Clone, Debug)]
pub struct RotationContext {
    cursor: Coordinate,
    height: i32,
    width: i32,
    done: bool,
}

impl RotationContext {
    pub fn new(height: i32, width: i32) -> Self {
        Self {
            cursor: Coordinate::new(0, 0),
            height,
            width,
            done: false,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    #[must_use]
    pub fn selected_tiles(&self) -> Vec<Coordinate> {
        vec![self.cursor]
    }

    pub(crate) fn reset(&mut self) {
        self.done = false;
    }

    fn step(&mut self, direction: Direction) {
        self.cursor = step_cursor(self.cursor, direction, self.height, self.width);
        trace!(cursor = %self.cursor, "rotator cursor moved");
    }
}

impl Context for RotationContext {
    fn up(&mut self, _state: &mut GameState) {
        self.step(Direction::Up);
    }

    fn down(&mut self, _state: &mut GameState) {
        self.step(Direction::Down);
    }

    fn left(&mut self, _state: &mut GameState) {
        self.step(Direction::Left);
    }

    fn right(&mut self, _state: &mut GameState) {
        self.step(Direction::Right);
    }

    fn primary(&mut self, state: &mut GameState) {
        if state.board.rotate_tile(self.cursor) {
            debug!(cursor = %self.cursor, "tile rotated");
            self.done = true;
        }
    }

    fn done(&self) -> bool {
        self.done
    }

    fn next_context(&mut self) -> ContextId {
        self.done = false;
        ContextId::Turn
    }
}
