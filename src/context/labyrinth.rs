use smallvec::SmallVec;
use tracing::debug;

use super::{Context, ContextId, Operation, RotationContext, ShifterContext};
use crate::core::Coordinate;
use crate::game::GameState;

/// Which board manipulation is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Shifter,
    Rotator,
}

/// Lets the active player either shift a line or rotate a tile.
///
/// `secondary` switches between the two without ending the phase. All other
/// operations go to the active sub-context. Whichever one finishes, the
/// turn owner comes next.
#[derive(Clone, Debug)]
pub struct LabyrinthContext {
    shifter: ShifterContext,
    rotator: RotationContext,
    mode: Mode,
}

impl LabyrinthContext {
    pub fn new(height: i32, width: i32) -> Self {
        Self {
            shifter: ShifterContext::new(height, width),
            rotator: RotationContext::new(height, width),
            mode: Mode::Shifter,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn shifter(&self) -> &ShifterContext {
        &self.shifter
    }

    #[must_use]
    pub fn rotator(&self) -> &RotationContext {
        &self.rotator
    }

    /// Coordinates highlighted by the active sub-context.
    #[must_use]
    pub fn selected(&self) -> SmallVec<[Coordinate; 16]> {
        match self.mode {
            Mode::Shifter => self.shifter.selected_tiles(),
            Mode::Rotator => self.rotator.selected_tiles().into_iter().collect(),
        }
    }

    fn delegate(&mut self, state: &mut GameState, op: Operation) {
        match self.mode {
            Mode::Shifter => self.shifter.apply(state, op),
            Mode::Rotator => self.rotator.apply(state, op),
        }
    }
}

impl Context for LabyrinthContext {
    fn up(&mut self, state: &mut GameState) {
        self.delegate(state, Operation::Up);
    }

    fn down(&mut self, state: &mut GameState) {
        self.delegate(state, Operation::Down);
    }

    fn left(&mut self, state: &mut GameState) {
        self.delegate(state, Operation::Left);
    }

    fn right(&mut self, state: &mut GameState) {
        self.delegate(state, Operation::Right);
    }

    fn primary(&mut self, state: &mut GameState) {
        self.delegate(state, Operation::Primary);
    }

    fn secondary(&mut self, _state: &mut GameState) {
        self.mode = match self.mode {
            Mode::Shifter => {
                self.rotator.reset();
                Mode::Rotator
            }
            Mode::Rotator => {
                self.shifter.reset();
                Mode::Shifter
            }
        };
        debug!(mode = ?self.mode, "labyrinth mode switched");
    }

    fn back(&mut self, state: &mut GameState) {
        self.delegate(state, Operation::Back);
    }

    fn done(&self) -> bool {
        match self.mode {
            Mode::Shifter => self.shifter.done(),
            Mode::Rotator => self.rotator.done(),
        }
    }

    fn next_context(&mut self) -> ContextId {
        match self.mode {
            Mode::Shifter => self.shifter.next_context(),
            Mode::Rotator => self.rotator.next_context(),
        };
        ContextId::Turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_state;

    #[test]
    fn test_secondary_toggles_without_finishing() {
        let mut state = test_state();
        let mut labyrinth = LabyrinthContext::new(5, 5);

        assert_eq!(labyrinth.mode(), Mode::Shifter);
        labyrinth.secondary(&mut state);
        assert_eq!(labyrinth.mode(), Mode::Rotator);
        assert!(!labyrinth.done());
        labyrinth.secondary(&mut state);
        assert_eq!(labyrinth.mode(), Mode::Shifter);
        assert!(!labyrinth.done());
    }

    #[test]
    fn test_selected_follows_mode() {
        let mut state = test_state();
        let mut labyrinth = LabyrinthContext::new(5, 5);

        assert_eq!(labyrinth.selected().len(), 5);
        labyrinth.secondary(&mut state);
        labyrinth.down(&mut state);
        assert_eq!(labyrinth.selected().as_slice(), &[Coordinate::new(1, 0)]);
        // the shifter cursor did not move
        assert_eq!(labyrinth.shifter().cursor(), Coordinate::new(0, 0));
    }

    #[test]
    fn test_rotator_finish_returns_turn_owner() {
        let mut state = test_state();
        let mut labyrinth = LabyrinthContext::new(5, 5);

        labyrinth.secondary(&mut state);
        labyrinth.primary(&mut state);
        assert!(labyrinth.done());
        assert_eq!(labyrinth.next_context(), ContextId::Turn);
        assert!(!labyrinth.done());
    }

    #[test]
    fn test_shifter_finish_returns_turn_owner() {
        let mut state = test_state();
        let mut labyrinth = LabyrinthContext::new(5, 5);

        labyrinth.right(&mut state);
        labyrinth.primary(&mut state);
        assert!(labyrinth.done());
        assert_eq!(labyrinth.next_context(), ContextId::Turn);
    }
}
