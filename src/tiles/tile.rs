//! Board tiles.
//!
//! A [`Tile`] couples a connectivity [`Pattern`] and a discovery flag with a
//! [`TileKind`] payload. Behaviour that differs per kind (what happens when a
//! player steps on the tile) is dispatched by matching on the kind.

use serde::{Deserialize, Serialize};

use super::pattern::Pattern;
use super::source::SourceTile;
use crate::core::{Direction, Material};
use crate::players::Player;

/// Bonus material lying on a standard tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonus {
    pub material: Material,
    pub amount: u32,
}

/// An ordinary corridor tile, possibly holding a one-off bonus.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardTile {
    bonus: Option<Bonus>,
}

impl StandardTile {
    /// A tile with no bonus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A tile holding `amount` of `material`.
    #[must_use]
    pub fn with_bonus(material: Material, amount: u32) -> Self {
        Self {
            bonus: Some(Bonus { material, amount }),
        }
    }

    #[must_use]
    pub fn bonus(&self) -> Option<Bonus> {
        self.bonus
    }
}

/// The guild at the centre of the board, where missions are redeemed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildTile {
    max_points: u32,
    materials: Vec<Material>,
}

impl GuildTile {
    #[must_use]
    pub fn new(max_points: u32, materials: Vec<Material>) -> Self {
        Self { max_points, materials }
    }

    /// Total points the guild's missions are worth.
    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    /// Materials the guild's missions ask for.
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }
}

/// Variant-specific tile data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Standard(StandardTile),
    Source(SourceTile),
    Guild(GuildTile),
}

/// A single board cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pattern: Pattern,
    discovered: bool,
    kind: TileKind,
}

impl Tile {
    /// Create an undiscovered tile.
    #[must_use]
    pub fn new(kind: TileKind, pattern: Pattern) -> Self {
        Self {
            pattern,
            discovered: false,
            kind,
        }
    }

    #[must_use]
    pub fn standard(tile: StandardTile, pattern: Pattern) -> Self {
        Self::new(TileKind::Standard(tile), pattern)
    }

    #[must_use]
    pub fn source(tile: SourceTile, pattern: Pattern) -> Self {
        Self::new(TileKind::Source(tile), pattern)
    }

    #[must_use]
    pub fn guild(tile: GuildTile, pattern: Pattern) -> Self {
        Self::new(TileKind::Guild(tile), pattern)
    }

    #[must_use]
    pub fn is_open(&self, direction: Direction) -> bool {
        self.pattern.is_open(direction)
    }

    /// Overwrite the given sides of the pattern.
    pub fn set_pattern(&mut self, entries: impl IntoIterator<Item = (Direction, bool)>) {
        self.pattern.merge(entries);
    }

    /// A copy of the current pattern.
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Rotate the tile one step clockwise.
    pub fn rotate(&mut self) {
        self.pattern = self.pattern.rotated();
    }

    #[must_use]
    pub fn is_discovered(&self) -> bool {
        self.discovered
    }

    pub fn discover(&mut self) {
        self.discovered = true;
    }

    #[must_use]
    pub fn kind(&self) -> &TileKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut TileKind {
        &mut self.kind
    }

    /// The source payload, if this is a source tile.
    #[must_use]
    pub fn as_source(&self) -> Option<&SourceTile> {
        match &self.kind {
            TileKind::Source(source) => Some(source),
            _ => None,
        }
    }

    pub fn as_source_mut(&mut self) -> Option<&mut SourceTile> {
        match &mut self.kind {
            TileKind::Source(source) => Some(source),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_guild(&self) -> bool {
        matches!(self.kind, TileKind::Guild(_))
    }

    /// A player steps onto this tile.
    ///
    /// Standard tiles hand over their bonus on the first entry. Sources and
    /// the guild only reveal themselves; their interaction is explicit.
    pub fn on_enter(&mut self, player: &mut Player) {
        self.discover();
        match &mut self.kind {
            TileKind::Standard(standard) => {
                if let Some(bonus) = standard.bonus.take() {
                    player.increase_quantity_material(bonus.material, bonus.amount);
                }
            }
            TileKind::Source(_) | TileKind::Guild(_) => {}
        }
    }

    /// A player leaves this tile.
    pub fn on_exit(&mut self, _player: &mut Player) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinate;
    use crate::tiles::Shape;

    #[test]
    fn test_bonus_granted_once() {
        let mut tile = Tile::standard(StandardTile::with_bonus(Material::Copper, 1), Shape::Elbow.pattern());
        let mut player = Player::new(Coordinate::new(0, 0));

        assert!(!tile.is_discovered());
        tile.on_enter(&mut player);
        assert!(tile.is_discovered());
        assert_eq!(player.quantity_material(Material::Copper), 1);

        tile.on_enter(&mut player);
        assert_eq!(player.quantity_material(Material::Copper), 1);
        match tile.kind() {
            TileKind::Standard(standard) => assert!(standard.bonus().is_none()),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_source_entry_does_not_collect() {
        let mut tile = Tile::source(SourceTile::new(Material::Wood, 2), Pattern::CROSS);
        let mut player = Player::new(Coordinate::new(0, 0));

        tile.on_enter(&mut player);
        assert!(tile.is_discovered());
        assert_eq!(player.quantity_material(Material::Wood), 0);
        assert!(tile.as_source().unwrap().is_active());
    }

    #[test]
    fn test_rotate_four_times() {
        let mut tile = Tile::standard(StandardTile::new(), Shape::ThreeWay.pattern());
        let original = tile.pattern();
        for _ in 0..4 {
            tile.rotate();
        }
        assert_eq!(tile.pattern(), original);
    }

    #[test]
    fn test_set_pattern_merges() {
        let mut tile = Tile::standard(StandardTile::new(), Pattern::CLOSED);
        tile.set_pattern([(Direction::Down, true)]);
        assert!(tile.is_open(Direction::Down));
        assert!(!tile.is_open(Direction::Up));
    }

    #[test]
    fn test_kind_queries() {
        let guild = Tile::guild(GuildTile::new(30, vec![Material::Iron]), Pattern::CROSS);
        assert!(guild.is_guild());
        assert!(guild.as_source().is_none());
    }
}
