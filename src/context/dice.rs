use tracing::debug;

use super::{Context, ContextId};
use crate::core::GameRng;
use crate::game::GameState;
use crate::players::Subphase;

/// Rolls the movement budget for the active player.
#[derive(Clone, Debug)]
pub struct DiceContext {
    rng: GameRng,
    faces: u32,
    done: bool,
}

impl DiceContext {
    /// A die with `faces` faces (1..=faces).
    pub fn new(faces: u32, rng: GameRng) -> Self {
        assert!(faces > 0, "Dice needs at least one face");
        Self { rng, faces, done: false }
    }

    #[must_use]
    pub fn faces(&self) -> u32 {
        self.faces
    }
}

impl Context for DiceContext {
    fn primary(&mut self, state: &mut GameState) {
        let roll = self.rng.gen_range(1..self.faces + 1);
        state.players.set_dice_value(roll);
        state.players.set_turn_subphase(Subphase::Labyrinth);
        debug!(player = state.players.active_player_index(), roll, "dice rolled");
        self.done = true;
    }

    fn done(&self) -> bool {
        self.done
    }

    fn next_context(&mut self) -> ContextId {
        self.done = false;
        ContextId::Labyrinth
    }
}
