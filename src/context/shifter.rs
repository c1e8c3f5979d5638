use tracing::{debug, trace};

use super::{step_cursor, Context, ContextId};
use crate::board::{Line, LineCoords};
use crate::core::{Coordinate, Direction};
use crate::game::GameState;

/// Shifts a whole row or column by one cell.
///
/// Each directional key moves the cursor one cell and sets the shift
/// direction. Horizontal directions select the cursor's row, vertical ones
/// its column. `primary` pushes the selected line; the tile falling off one
/// end re-enters at the other, carrying any player standing on it.
#[derive(Clone, Debug)]
pub struct ShifterContext {
    cursor: Coordinate,
    direction: Direction,
    height: i32,
    width: i32,
    done: bool,
}

impl ShifterContext {
    pub fn new(height: i32, width: i32) -> Self {
        Self {
            cursor: Coordinate::new(0, 0),
            direction: Direction::Right,
            height,
            width,
            done: false,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Direction the selected line will be pushed.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn selected_line(&self) -> Line {
        Line::through(self.cursor, self.direction)
    }

    /// Coordinates of the selected line.
    #[must_use]
    pub fn selected_tiles(&self) -> LineCoords {
        self.selected_line().coordinates(self.height, self.width)
    }

    pub(crate) fn reset(&mut self) {
        self.done = false;
    }

    fn steer(&mut self, direction: Direction) {
        self.cursor = step_cursor(self.cursor, direction, self.height, self.width);
        self.direction = direction;
        trace!(cursor = %self.cursor, %direction, "shifter cursor moved");
    }
}

impl Context for ShifterContext {
    fn up(&mut self, _state: &mut GameState) {
        self.steer(Direction::Up);
    }

    fn down(&mut self, _state: &mut GameState) {
        self.steer(Direction::Down);
    }

    fn left(&mut self, _state: &mut GameState) {
        self.steer(Direction::Left);
    }

    fn right(&mut self, _state: &mut GameState) {
        self.steer(Direction::Right);
    }

    fn primary(&mut self, state: &mut GameState) {
        let line = self.selected_line();
        if !state.board.shift_line(line, self.direction) {
            trace!(?line, "line is blocked");
            return;
        }

        let (height, width) = (state.board.height(), state.board.width());
        for player in state.players.players_mut() {
            if line.contains(player.coord()) {
                player.set_coord(line.wrap_step(player.coord(), self.direction, height, width));
            }
        }
        debug!(?line, direction = %self.direction, "line shifted");
        self.done = true;
    }

    fn done(&self) -> bool {
        self.done
    }

    fn next_context(&mut self) -> ContextId {
        self.done = false;
        ContextId::Turn
    }
}
