use tracing::{debug, trace};

use super::{Context, ContextId};
use crate::core::Material;
use crate::game::GameState;
use crate::missions::Item;

/// The guild menu: browse pending missions and redeem them.
///
/// The cursor is clamped to the pending list; it never wraps around.
#[derive(Clone, Debug)]
pub struct GuildContext {
    missions: Vec<Item>,
    completed: Vec<Item>,
    materials_present: Vec<Material>,
    menu_index: usize,
    done: bool,
}

impl GuildContext {
    pub fn new(missions: Vec<Item>, materials_present: Vec<Material>) -> Self {
        Self {
            missions,
            completed: Vec::new(),
            materials_present,
            menu_index: 0,
            done: false,
        }
    }

    /// Missions still waiting to be fulfilled.
    #[must_use]
    pub fn missions(&self) -> &[Item] {
        &self.missions
    }

    /// Missions already fulfilled, in completion order.
    #[must_use]
    pub fn completed(&self) -> &[Item] {
        &self.completed
    }

    #[must_use]
    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// Materials the missions ask for.
    #[must_use]
    pub fn materials_present(&self) -> &[Material] {
        &self.materials_present
    }

    /// Every mission has been fulfilled.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.missions.is_empty()
    }
}

impl Context for GuildContext {
    fn up(&mut self, _state: &mut GameState) {
        self.menu_index = self.menu_index.saturating_sub(1);
        trace!(index = self.menu_index, "guild cursor");
    }

    fn down(&mut self, _state: &mut GameState) {
        if self.menu_index + 1 < self.missions.len() {
            self.menu_index += 1;
        }
        trace!(index = self.menu_index, "guild cursor");
    }

    fn left(&mut self, state: &mut GameState) {
        self.up(state);
    }

    fn right(&mut self, state: &mut GameState) {
        self.down(state);
    }

    fn primary(&mut self, state: &mut GameState) {
        let Some(mission) = self.missions.get(self.menu_index).copied() else {
            return;
        };
        let player = state.players.active_player_mut();
        if player.quantity_material(mission.material) < mission.quantity {
            return;
        }

        player.decrease_quantity_material(mission.material, mission.quantity);
        player.increase_points(mission.points);
        self.completed.push(self.missions.remove(self.menu_index));
        self.menu_index = self.menu_index.min(self.missions.len().saturating_sub(1));
        debug!(
            player = state.players.active_player_index(),
            %mission,
            remaining = self.missions.len(),
            "mission completed"
        );
    }

    fn back(&mut self, _state: &mut GameState) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use crate::game::test_state;

    fn mission(material: Material, quantity: u32, points: u32) -> Item {
        Item {
            category: Category::Tool,
            material,
            quantity,
            points,
        }
    }

    fn guild() -> GuildContext {
        GuildContext::new(
            vec![
                mission(Material::Iron, 7, 8),
                mission(Material::Wood, 5, 3),
                mission(Material::Silk, 9, 10),
            ],
            vec![Material::Iron, Material::Wood, Material::Silk],
        )
    }

    #[test]
    fn test_cursor_clamps() {
        let mut state = test_state();
        let mut guild = guild();

        guild.up(&mut state);
        assert_eq!(guild.menu_index(), 0);

        for _ in 0..5 {
            guild.down(&mut state);
        }
        assert_eq!(guild.menu_index(), 2);

        guild.left(&mut state);
        assert_eq!(guild.menu_index(), 1);
        guild.right(&mut state);
        guild.right(&mut state);
        assert_eq!(guild.menu_index(), 2);
    }

    #[test]
    fn test_fulfil_mission() {
        let mut state = test_state();
        let mut guild = guild();
        state.players.active_player_mut().increase_quantity_material(Material::Wood, 10);

        guild.down(&mut state);
        guild.primary(&mut state);

        let player = state.players.active_player();
        assert_eq!(player.quantity_material(Material::Wood), 5);
        assert_eq!(player.points(), 3);
        assert_eq!(guild.missions().len(), 2);
        assert_eq!(guild.completed(), &[mission(Material::Wood, 5, 3)]);
        assert!(!guild.done());
    }

    #[test]
    fn test_insufficient_inventory_is_noop() {
        let mut state = test_state();
        let mut guild = guild();
        state.players.active_player_mut().increase_quantity_material(Material::Iron, 6);

        guild.primary(&mut state);

        assert_eq!(state.players.active_player().quantity_material(Material::Iron), 6);
        assert_eq!(state.players.active_player().points(), 0);
        assert_eq!(guild.missions().len(), 3);
        assert!(guild.completed().is_empty());
    }

    #[test]
    fn test_cursor_reclamped_after_last_removed() {
        let mut state = test_state();
        let mut guild = guild();
        state.players.active_player_mut().increase_quantity_material(Material::Silk, 9);

        guild.down(&mut state);
        guild.down(&mut state);
        guild.primary(&mut state);

        assert_eq!(guild.menu_index(), 1);
        assert_eq!(guild.missions().len(), 2);
    }

    #[test]
    fn test_back_returns_to_turn_owner() {
        let mut state = test_state();
        let mut guild = guild();

        guild.back(&mut state);
        assert!(guild.done());
        assert_eq!(guild.next_context(), ContextId::Turn);
        assert!(!guild.done());
    }

    #[test]
    fn test_empty_guild() {
        let mut state = test_state();
        let mut guild = GuildContext::new(Vec::new(), Vec::new());
        guild.down(&mut state);
        guild.primary(&mut state);
        assert_eq!(guild.menu_index(), 0);
        assert!(guild.is_exhausted());
    }
}
