use tracing::debug;

use super::{Context, ContextId};
use crate::game::GameState;
use crate::players::{PlayersManager, Subphase};

/// End-of-turn interstitial: ticks the sources and hands the turn over.
///
/// The game opens in this context, showing whose turn is first. From then
/// on every `primary` first passes the turn to the next player, then ticks
/// every source tile once. The hand-over is armed by the first `primary`.
#[derive(Clone, Debug, Default)]
pub struct UpdateBoardContext {
    entered: bool,
    advance_player: bool,
}

impl UpdateBoardContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The player whose turn the interstitial announces.
    ///
    /// Once armed this is the upcoming player, before the switch happens.
    #[must_use]
    pub fn visual_player_index(&self, players: &PlayersManager) -> usize {
        if self.advance_player {
            players.next_player_index()
        } else {
            players.active_player_index()
        }
    }
}

impl Context for UpdateBoardContext {
    fn primary(&mut self, state: &mut GameState) {
        if self.advance_player {
            let next = state.players.next_player_index();
            state.players.set_active_player(next);
            state.players.set_turn_subphase(Subphase::Dice);
            state.players.set_dice_value(0);
            debug!(player = next, "turn passed");
        }
        state.board.tick_sources();
        self.advance_player = true;
        self.entered = true;
    }

    fn done(&self) -> bool {
        self.entered
    }

    fn next_context(&mut self) -> ContextId {
        self.entered = false;
        ContextId::Dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinate;
    use crate::game::test_state;

    fn source_quantity(state: &GameState) -> u32 {
        state.board.tile(Coordinate::new(1, 1)).unwrap().as_source().unwrap().quantity()
    }

    #[test]
    fn test_first_primary_only_ticks() {
        let mut state = test_state();
        let mut update = UpdateBoardContext::new();
        let quantity = source_quantity(&state);

        assert_eq!(update.visual_player_index(&state.players), 0);
        update.primary(&mut state);

        assert!(update.done());
        assert_eq!(state.players.active_player_index(), 0);
        assert_eq!(source_quantity(&state), quantity + 1);
        assert_eq!(update.visual_player_index(&state.players), 1);
        assert_eq!(update.next_context(), ContextId::Dice);
        assert!(!update.done());
    }

    #[test]
    fn test_second_primary_advances() {
        let mut state = test_state();
        let mut update = UpdateBoardContext::new();
        state.players.set_turn_subphase(Subphase::End);
        state.players.set_dice_value(4);

        update.primary(&mut state);
        update.next_context();
        update.primary(&mut state);

        assert_eq!(state.players.active_player_index(), 1);
        assert_eq!(state.players.turn_subphase(), Subphase::Dice);
        assert_eq!(state.players.dice_value(), 0);
        assert_eq!(update.visual_player_index(&state.players), 0);
    }

    #[test]
    fn test_wraps_to_first_player() {
        let mut state = test_state();
        state.players = PlayersManager::at_corners(4, 5, 5);
        state.players.set_active_player(3);
        let mut update = UpdateBoardContext::new();

        update.primary(&mut state);
        assert_eq!(state.players.active_player_index(), 3);
        assert_eq!(update.visual_player_index(&state.players), 0);
        update.next_context();

        update.primary(&mut state);
        assert_eq!(state.players.active_player_index(), 0);
    }

    #[test]
    fn test_ignores_navigation() {
        let mut state = test_state();
        let mut update = UpdateBoardContext::new();
        update.up(&mut state);
        update.back(&mut state);
        assert!(!update.done());
    }
}
