use tracing::debug;

use super::{Game, GameState};
use crate::board::BoardGenerator;
use crate::core::{GameConfig, GameRng, Material, Result};
use crate::missions::MissionGenerator;
use crate::players::PlayersManager;

/// Builder for creating a [`Game`].
///
/// ```
/// use labyrinth_engine::{GameBuilder, GameConfig};
///
/// let game = GameBuilder::new()
///     .config(GameConfig::default().with_player_count(2))
///     .build(42)
///     .unwrap();
/// assert_eq!(game.players().player_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn board_size(mut self, height: i32, width: i32) -> Self {
        self.config.height = height;
        self.config.width = width;
        self
    }

    pub fn source_tiles(mut self, count: usize) -> Self {
        self.config.source_tiles = count;
        self
    }

    pub fn materials(mut self, materials: Vec<Material>) -> Self {
        self.config.materials = materials;
        self
    }

    /// Generate missions and board, place the players, and open the game
    /// on the first update-board interstitial.
    ///
    /// Every random consumer gets its own stream derived from `seed`, so
    /// the same seed and configuration always produce the same game.
    pub fn build(self, seed: u64) -> Result<Game> {
        let config = self.config;
        config.validate()?;
        let rng = GameRng::new(seed);

        let mut missions = MissionGenerator::new(&config.materials, rng.for_context("missions"))?
            .with_required(config.min_required..config.max_required)
            .with_points(config.min_points..config.max_points);
        let items = missions.generate(config.mission_count());
        let materials_present = missions.materials_present().to_vec();
        let max_points = items.iter().map(|item| item.points).sum();

        let mut board = BoardGenerator::new(
            config.height,
            config.width,
            config.source_tiles,
            config.player_count,
            &materials_present,
            rng.for_context("board"),
        )?
        .generate(max_points)?;

        let players = PlayersManager::at_corners(config.player_count, config.height, config.width);
        for player in players.players() {
            if let Some(tile) = board.tile_mut(player.coord()) {
                tile.discover();
            }
        }

        debug!(
            seed,
            players = config.player_count,
            missions = items.len(),
            max_points,
            "game built"
        );

        Ok(Game::new(
            config,
            GameState::new(board, players),
            items,
            materials_present,
            rng.for_context("dice"),
        ))
    }
}
