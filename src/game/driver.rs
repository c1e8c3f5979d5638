use tracing::{debug, info};

use super::{GameResult, GameState};
use crate::board::Board;
use crate::context::{
    self, ContextId, DiceContext, GuildContext, LabyrinthContext, Operation, TurnContext,
    UpdateBoardContext,
};
use crate::core::{GameConfig, GameRng, Material};
use crate::missions::Item;
use crate::players::PlayersManager;

/// A running game: the shared state plus one instance of every context.
///
/// Input arrives as [`Operation`]s through [`Game::dispatch`]. Only the
/// active context sees them; when it reports completion the driver asks it
/// for its successor and switches.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    active: ContextId,
    turn: TurnContext,
    dice: DiceContext,
    labyrinth: LabyrinthContext,
    guild: GuildContext,
    update: UpdateBoardContext,
}

impl Game {
    pub(crate) fn new(
        config: GameConfig,
        state: GameState,
        missions: Vec<Item>,
        materials_present: Vec<Material>,
        dice_rng: GameRng,
    ) -> Self {
        let (height, width) = (state.board.height(), state.board.width());
        Self {
            dice: DiceContext::new(config.dice_faces, dice_rng),
            labyrinth: LabyrinthContext::new(height, width),
            guild: GuildContext::new(missions, materials_present),
            turn: TurnContext::new(),
            update: UpdateBoardContext::new(),
            active: ContextId::UpdateBoard,
            config,
            state,
        }
    }

    /// Feed one operation to the active context.
    ///
    /// Returns the new active context when a switch happened. Once the game
    /// is finished every operation is ignored.
    pub fn dispatch(&mut self, op: Operation) -> Option<ContextId> {
        if self.is_finished() {
            return None;
        }

        let state = &mut self.state;
        let next = match self.active {
            ContextId::Turn => context::dispatch(&mut self.turn, state, op),
            ContextId::Dice => context::dispatch(&mut self.dice, state, op),
            ContextId::Labyrinth => context::dispatch(&mut self.labyrinth, state, op),
            ContextId::Guild => context::dispatch(&mut self.guild, state, op),
            ContextId::UpdateBoard => context::dispatch(&mut self.update, state, op),
        }?;

        debug!(from = ?self.active, to = ?next, ?op, "context switch");
        self.active = next;
        if let Some(result) = self.result() {
            info!(?result, "game finished");
        }
        Some(next)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayersManager {
        &self.state.players
    }

    #[must_use]
    pub fn active_context(&self) -> ContextId {
        self.active
    }

    #[must_use]
    pub fn guild(&self) -> &GuildContext {
        &self.guild
    }

    #[must_use]
    pub fn labyrinth(&self) -> &LabyrinthContext {
        &self.labyrinth
    }

    #[must_use]
    pub fn update_board(&self) -> &UpdateBoardContext {
        &self.update
    }

    /// The player the update-board interstitial announces.
    #[must_use]
    pub fn visual_player_index(&self) -> usize {
        self.update.visual_player_index(&self.state.players)
    }

    /// All missions have been fulfilled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.guild.is_exhausted()
    }

    /// Final ranking, or `None` while missions remain.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_finished() {
            return None;
        }
        GameResult::from_points(self.state.players.players().iter().map(|p| p.points()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameBuilder;
    use crate::context::Context;
    use crate::players::Subphase;

    fn game() -> Game {
        GameBuilder::new().player_count(2).build(11).unwrap()
    }

    #[test]
    fn test_opening_turn() {
        let mut game = game();
        assert_eq!(game.visual_player_index(), 0);

        assert_eq!(game.dispatch(Operation::Up), None);
        assert_eq!(game.dispatch(Operation::Primary), Some(ContextId::Dice));
        assert_eq!(game.players().active_player_index(), 0);

        assert_eq!(game.dispatch(Operation::Primary), Some(ContextId::Labyrinth));
        assert!((1..=6).contains(&game.players().dice_value()));
        assert_eq!(game.players().turn_subphase(), Subphase::Labyrinth);
    }

    #[test]
    fn test_only_active_context_reacts() {
        let mut game = game();
        game.dispatch(Operation::Primary);
        game.dispatch(Operation::Primary);

        // in the labyrinth, back is ignored by the shifter
        assert_eq!(game.dispatch(Operation::Back), None);
        assert_eq!(game.active_context(), ContextId::Labyrinth);
        assert_eq!(game.players().turn_subphase(), Subphase::Labyrinth);
    }

    #[test]
    fn test_ending_turn_hands_over() {
        let mut game = game();
        game.dispatch(Operation::Primary);
        game.dispatch(Operation::Primary);

        // rotate the tile under the rotator cursor
        game.dispatch(Operation::Secondary);
        assert_eq!(game.dispatch(Operation::Primary), Some(ContextId::Turn));

        assert_eq!(game.dispatch(Operation::Back), Some(ContextId::UpdateBoard));
        assert_eq!(game.players().turn_subphase(), Subphase::End);
        assert_eq!(game.visual_player_index(), 1);

        assert_eq!(game.dispatch(Operation::Primary), Some(ContextId::Dice));
        assert_eq!(game.players().active_player_index(), 1);
        assert_eq!(game.players().turn_subphase(), Subphase::Dice);
        assert_eq!(game.players().dice_value(), 0);
    }

    #[test]
    fn test_finishes_when_guild_is_empty() {
        let mut game = game();
        for material in Material::ALL {
            game.state.players.players_mut()[1].increase_quantity_material(material, 100);
        }
        game.state.players.set_active_player(1);

        while !game.guild.is_exhausted() {
            game.guild.primary(&mut game.state);
        }

        assert!(game.is_finished());
        assert_eq!(game.result(), Some(GameResult::Winner(1)));
        assert_eq!(game.dispatch(Operation::Primary), None);
        assert_eq!(game.active_context(), ContextId::UpdateBoard);
    }

    #[test]
    fn test_not_finished_at_start() {
        let game = game();
        assert!(!game.is_finished());
        assert_eq!(game.result(), None);
    }
}
