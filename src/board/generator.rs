//! Procedural board generation.
//!
//! The layout follows a fixed skeleton with a randomized fill:
//!
//! 1. The guild sits at the exact centre, open on all four sides.
//! 2. Source tiles are placed on rings around the guild (see
//!    [`placement`](super::placement)), one per entry of a round-robin
//!    material list.
//! 3. Every remaining cell receives a standard tile, some carrying a bonus.
//!
//! Every non-guild tile gets one of the four canonical shapes rotated a
//! uniformly random number of times, so every rotation of every shape is
//! equally likely.
//!
//! ## Remainder sources
//!
//! Each material gets `source_count / material_count` sources (floor
//! division). When the division is not exact the leftover slots stay
//! standard tiles.

use tracing::debug;

use super::board::Board;
use super::placement;
use crate::core::{Coordinate, EngineError, GameRng, Material, Result};
use crate::players::PlayersManager;
use crate::tiles::{GuildTile, Pattern, Shape, SourceTile, StandardTile, Tile};

/// Empty bonus slots added to the bonus list per material.
pub const EMPTY_BONUS_SLOTS_PER_MATERIAL: usize = 4;

/// Quantity of material lying on a bonus tile.
pub const BONUS_AMOUNT: u32 = 1;

/// Builds a populated [`Board`] from the game parameters.
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    height: i32,
    width: i32,
    source_count: usize,
    player_count: usize,
    materials: Vec<Material>,
    source_materials: Vec<Material>,
    bonuses: Vec<Option<Material>>,
    rng: GameRng,
}

impl BoardGenerator {
    /// Prepare a generator.
    ///
    /// `materials` are the materials in play (normally those the guild's
    /// missions ask for). Fails when the list is empty or too short to give
    /// every material at least one source.
    pub fn new(
        height: i32,
        width: i32,
        source_count: usize,
        player_count: usize,
        materials: &[Material],
        rng: GameRng,
    ) -> Result<Self> {
        if materials.is_empty() {
            return Err(EngineError::EmptyMaterials);
        }
        let per_material = source_count / materials.len();
        if per_material == 0 {
            return Err(EngineError::NoSourceSlots {
                sources: source_count,
                materials: materials.len(),
            });
        }

        let source_materials = (0..per_material).flat_map(|_| materials.iter().copied()).collect();

        let mut bonuses: Vec<Option<Material>> = materials.iter().copied().map(Some).collect();
        bonuses.extend(std::iter::repeat(None).take(materials.len() * EMPTY_BONUS_SLOTS_PER_MATERIAL));

        Ok(Self {
            height,
            width,
            source_count,
            player_count,
            materials: materials.to_vec(),
            source_materials,
            bonuses,
            rng,
        })
    }

    /// Materials assigned to source tiles, one entry per source.
    #[must_use]
    pub fn source_materials(&self) -> &[Material] {
        &self.source_materials
    }

    /// Generate the board. `max_points` is stored on the guild tile.
    pub fn generate(&mut self, max_points: u32) -> Result<Board> {
        let mut board = Board::new(self.height, self.width);
        let center = board.center();
        let corners = PlayersManager::corners(self.height, self.width);

        board.insert_tile(center, Tile::guild(GuildTile::new(max_points, self.materials.clone()), Pattern::CROSS))?;
        board.add_blocked(center);

        let slots = placement::source_coordinates(center, self.source_count, self.height, self.width, |c| {
            !board.map().contains_key(&c) && !board.is_blocked(c) && !corners.contains(&c)
        })?;

        for (coord, material) in slots.iter().zip(self.source_materials.clone()) {
            let pattern = self.random_pattern();
            board.insert_tile(*coord, Tile::source(SourceTile::new(material, self.player_count), pattern))?;
            board.add_blocked(*coord);
        }

        let mut bonus_tiles = 0usize;
        for row in 0..self.height {
            for column in 0..self.width {
                let coord = Coordinate::new(row, column);
                if board.map().contains_key(&coord) {
                    continue;
                }
                let pattern = self.random_pattern();
                let standard = match self.pick_bonus() {
                    Some(material) if !corners.contains(&coord) => {
                        bonus_tiles += 1;
                        StandardTile::with_bonus(material, BONUS_AMOUNT)
                    }
                    _ => StandardTile::new(),
                };
                board.insert_tile(coord, Tile::standard(standard, pattern))?;
            }
        }

        debug!(
            height = self.height,
            width = self.width,
            sources = self.source_materials.len(),
            dropped_slots = self.source_count - self.source_materials.len(),
            bonus_tiles,
            "generated board"
        );
        Ok(board)
    }

    fn pick_bonus(&mut self) -> Option<Material> {
        self.rng.choose(&self.bonuses).copied().flatten()
    }

    /// A canonical shape rotated 0-3 times.
    fn random_pattern(&mut self) -> Pattern {
        let shape = Shape::ALL[self.rng.gen_range_usize(0..Shape::ALL.len())];
        let rotations = self.rng.gen_range(0..4);
        (0..rotations).fold(shape.pattern(), |pattern, _| pattern.rotated())
    }
}
