//! Game configuration.
//!
//! `GameConfig` collects every value the engine needs at construction:
//! board size, number of source tiles, players, the material pool used by
//! the mission generator, and the mission reward ranges.
//!
//! ```
//! use labyrinth_engine::core::{GameConfig, Material};
//!
//! let config = GameConfig::default()
//!     .with_board_size(9, 9)
//!     .with_player_count(2)
//!     .with_materials(vec![Material::Wood, Material::Iron]);
//!
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::material::Material;

/// Players start in the four board corners, so at most four can play.
pub const MAX_PLAYERS: usize = 4;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows on the board.
    pub height: i32,

    /// Number of columns on the board.
    pub width: i32,

    /// Number of source tile slots placed around the guild.
    pub source_tiles: usize,

    /// Number of players (1-4).
    pub player_count: usize,

    /// Materials the mission generator may ask for.
    pub materials: Vec<Material>,

    /// Missions generated per player at game start.
    pub missions_per_player: usize,

    /// Required mission quantity, drawn from `min_required..max_required`.
    pub min_required: u32,
    pub max_required: u32,

    /// Mission reward, drawn from `min_points..max_points`.
    pub min_points: u32,
    pub max_points: u32,

    /// Number of faces on the movement die.
    pub dice_faces: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 11,
            width: 11,
            source_tiles: 12,
            player_count: 4,
            materials: Material::ALL.to_vec(),
            missions_per_player: 2,
            min_required: 5,
            max_required: 10,
            min_points: 6,
            max_points: 11,
            dice_faces: 6,
        }
    }
}

impl GameConfig {
    /// Set the board dimensions.
    #[must_use]
    pub fn with_board_size(mut self, height: i32, width: i32) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// Set the number of source tile slots.
    #[must_use]
    pub fn with_source_tiles(mut self, count: usize) -> Self {
        self.source_tiles = count;
        self
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the material pool for missions.
    #[must_use]
    pub fn with_materials(mut self, materials: Vec<Material>) -> Self {
        self.materials = materials;
        self
    }

    /// Set how many missions each player adds to the guild.
    #[must_use]
    pub fn with_missions_per_player(mut self, count: usize) -> Self {
        self.missions_per_player = count;
        self
    }

    /// Total number of missions offered by the guild.
    #[must_use]
    pub fn mission_count(&self) -> usize {
        self.missions_per_player * self.player_count
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.height < 3 || self.width < 3 {
            return Err(EngineError::InvalidConfig(format!(
                "board must be at least 3x3, got {}x{}",
                self.height, self.width
            )));
        }
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(EngineError::InvalidConfig(format!(
                "player count must be 1-{}, got {}",
                MAX_PLAYERS, self.player_count
            )));
        }
        if self.materials.is_empty() {
            return Err(EngineError::EmptyMaterials);
        }
        if self.missions_per_player == 0 {
            return Err(EngineError::InvalidConfig("at least one mission per player".into()));
        }
        if self.min_required == 0 || self.min_required >= self.max_required {
            return Err(EngineError::InvalidConfig(format!(
                "empty required range {}..{}",
                self.min_required, self.max_required
            )));
        }
        if self.min_points >= self.max_points {
            return Err(EngineError::InvalidConfig(format!(
                "empty points range {}..{}",
                self.min_points, self.max_points
            )));
        }
        if self.dice_faces == 0 {
            return Err(EngineError::InvalidConfig("dice needs at least one face".into()));
        }
        Ok(())
    }
}
