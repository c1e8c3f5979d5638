use tracing::{debug, trace};

use super::{Context, ContextId};
use crate::core::Direction;
use crate::game::GameState;
use crate::players::Subphase;

/// The turn owner: walks the active player around and collects materials.
///
/// What each key does depends on the active player's [`Subphase`]. While
/// moving, every step spends one point of the dice budget and needs both
/// tiles to be open towards each other.
#[derive(Clone, Debug)]
pub struct TurnContext {
    done: bool,
    next: ContextId,
}

impl Default for TurnContext {
    fn default() -> Self {
        Self {
            done: false,
            next: ContextId::UpdateBoard,
        }
    }
}

impl TurnContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn finish(&mut self, next: ContextId) {
        self.done = true;
        self.next = next;
    }

    fn walk(&mut self, state: &mut GameState, direction: Direction) {
        if !matches!(state.players.turn_subphase(), Subphase::Labyrinth | Subphase::Guild) {
            return;
        }
        if state.players.dice_value() == 0 {
            trace!("no movement left");
            return;
        }

        let GameState { board, players } = state;
        let from = players.active_player().coord();
        if !board.can_move(from, direction) {
            trace!(%from, %direction, "path closed");
            return;
        }

        let (height, width) = (board.height(), board.width());
        let player = players.active_player_mut();
        if let Some(tile) = board.tile_mut(from) {
            tile.on_exit(player);
        }
        player.move_towards(direction, height, width);
        let to = player.coord();
        if let Some(tile) = board.tile_mut(to) {
            tile.on_enter(player);
        }
        players.set_dice_value(players.dice_value() - 1);
        trace!(%from, %to, remaining = players.dice_value(), "player moved");
    }

    fn interact(&mut self, state: &mut GameState) {
        let GameState { board, players } = state;
        let coord = players.active_player().coord();
        let Some(tile) = board.tile_mut(coord) else {
            return;
        };

        if tile.is_guild() {
            players.set_turn_subphase(Subphase::Guild);
            debug!(player = players.active_player_index(), "entering guild");
            self.finish(ContextId::Guild);
        } else if let Some(source) = tile.as_source_mut() {
            let material = source.material();
            let amount = source.collect();
            if amount > 0 {
                players.active_player_mut().increase_quantity_material(material, amount);
                debug!(player = players.active_player_index(), %material, amount, "collected");
            }
        }
    }
}

impl Context for TurnContext {
    fn up(&mut self, state: &mut GameState) {
        self.walk(state, Direction::Up);
    }

    fn down(&mut self, state: &mut GameState) {
        self.walk(state, Direction::Down);
    }

    fn left(&mut self, state: &mut GameState) {
        self.walk(state, Direction::Left);
    }

    fn right(&mut self, state: &mut GameState) {
        self.walk(state, Direction::Right);
    }

    fn primary(&mut self, state: &mut GameState) {
        match state.players.turn_subphase() {
            Subphase::Dice => self.finish(ContextId::Dice),
            Subphase::Labyrinth | Subphase::Guild => self.interact(state),
            Subphase::End => self.finish(ContextId::UpdateBoard),
        }
    }

    fn back(&mut self, state: &mut GameState) {
        match state.players.turn_subphase() {
            Subphase::Dice => {}
            Subphase::Labyrinth | Subphase::Guild => {
                state.players.set_turn_subphase(Subphase::End);
                debug!(player = state.players.active_player_index(), "turn ended");
                self.finish(ContextId::UpdateBoard);
            }
            Subphase::End => self.finish(ContextId::UpdateBoard),
        }
    }

    fn done(&self) -> bool {
        self.done
    }

    fn next_context(&mut self) -> ContextId {
        self.done = false;
        self.next
    }
}
