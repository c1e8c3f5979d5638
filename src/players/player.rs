//! A single player: board position, points, and material inventory.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, Direction, Material};

/// Player state.
///
/// Points only ever grow. Inventory counts never go below zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    coord: Coordinate,
    points: u32,
    inventory: FxHashMap<Material, u32>,
}

impl Player {
    /// Create a player standing on `coord` with nothing collected.
    #[must_use]
    pub fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            points: 0,
            inventory: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn set_coord(&mut self, coord: Coordinate) {
        self.coord = coord;
    }

    /// Step one cell towards `direction`, staying inside a `height` x `width` board.
    ///
    /// Returns `false` when the step would leave the board.
    pub fn move_towards(&mut self, direction: Direction, height: i32, width: i32) -> bool {
        let target = self.coord.step(direction);
        let inside = (0..height).contains(&target.row) && (0..width).contains(&target.column);
        if inside {
            self.coord = target;
        }
        inside
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn increase_points(&mut self, points: u32) {
        self.points += points;
    }

    /// How much of `material` the player holds.
    #[must_use]
    pub fn quantity_material(&self, material: Material) -> u32 {
        self.inventory.get(&material).copied().unwrap_or(0)
    }

    pub fn increase_quantity_material(&mut self, material: Material, amount: u32) {
        *self.inventory.entry(material).or_insert(0) += amount;
    }

    /// Remove up to `amount` of `material`, stopping at zero.
    pub fn decrease_quantity_material(&mut self, material: Material, amount: u32) {
        let entry = self.inventory.entry(material).or_insert(0);
        *entry = entry.saturating_sub(amount);
    }

    /// Iterate over held materials (in no particular order).
    pub fn inventory(&self) -> impl Iterator<Item = (Material, u32)> + '_ {
        self.inventory.iter().map(|(&m, &q)| (m, q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: i32 = 11;
    const WIDTH: i32 = 11;

    #[test]
    fn test_move_up_clamped() {
        let mut player = Player::new(Coordinate::new(0, 0));
        assert!(!player.move_towards(Direction::Up, HEIGHT, WIDTH));
        assert_eq!(player.coord(), Coordinate::new(0, 0));
    }

    #[test]
    fn test_move_right_until_edge() {
        let mut player = Player::new(Coordinate::new(0, 0));
        assert!(player.move_towards(Direction::Right, HEIGHT, WIDTH));
        assert_eq!(player.coord(), Coordinate::new(0, 1));
        for _ in 0..WIDTH {
            player.move_towards(Direction::Right, HEIGHT, WIDTH);
        }
        assert_eq!(player.coord(), Coordinate::new(0, WIDTH - 1));
    }

    #[test]
    fn test_move_down_until_edge() {
        let mut player = Player::new(Coordinate::new(0, 0));
        for _ in 0..HEIGHT + 3 {
            player.move_towards(Direction::Down, HEIGHT, WIDTH);
        }
        assert_eq!(player.coord(), Coordinate::new(HEIGHT - 1, 0));
        assert!(!player.move_towards(Direction::Left, HEIGHT, WIDTH));
    }

    #[test]
    fn test_points() {
        let mut player = Player::default();
        assert_eq!(player.points(), 0);
        player.increase_points(4);
        player.increase_points(4);
        assert_eq!(player.points(), 8);
    }

    #[test]
    fn test_inventory() {
        let mut player = Player::default();
        assert_eq!(player.quantity_material(Material::Wood), 0);

        player.increase_quantity_material(Material::Wood, 10);
        player.increase_quantity_material(Material::Iron, 4);
        player.decrease_quantity_material(Material::Wood, 8);
        player.decrease_quantity_material(Material::Iron, 3);

        assert_eq!(player.quantity_material(Material::Wood), 2);
        assert_eq!(player.quantity_material(Material::Iron), 1);

        player.decrease_quantity_material(Material::Iron, 5);
        assert_eq!(player.quantity_material(Material::Iron), 0);
    }

    #[test]
    fn test_set_coord() {
        let mut player = Player::default();
        player.set_coord(Coordinate::new(4, 2));
        assert_eq!(player.coord(), Coordinate::new(4, 2));
    }
}
