//! Ordered players plus turn bookkeeping.
//!
//! ## Subphase
//!
//! Each turn walks through the same stages:
//!
//! ```text
//! Dice ──► Labyrinth (shift or rotate, then move/collect) ──► Guild ──► End
//!  ▲                                                                    │
//!  └──────────────────────── next player ◄──────────────────────────────┘
//! ```
//!
//! Visiting the guild is optional: a player may end the turn from the
//! labyrinth stage directly.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::core::Coordinate;

/// Stage of the active player's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subphase {
    #[default]
    Dice,
    Labyrinth,
    Guild,
    End,
}

/// Owns the players and tracks whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayersManager {
    players: Vec<Player>,
    active_index: usize,
    subphase: Subphase,
    dice_value: u32,
}

impl PlayersManager {
    /// Create a manager over the given players, player 0 active.
    pub fn new(players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");

        Self {
            players,
            active_index: 0,
            subphase: Subphase::Dice,
            dice_value: 0,
        }
    }

    /// Place `player_count` players on the corners of a `height` x `width` board.
    ///
    /// Corners are used in order: top-left, top-right, bottom-left, bottom-right.
    pub fn at_corners(player_count: usize, height: i32, width: i32) -> Self {
        let corners = Self::corners(height, width);
        assert!(
            player_count <= corners.len(),
            "At most {} players supported",
            corners.len()
        );
        Self::new(corners[..player_count].iter().map(|&c| Player::new(c)).collect())
    }

    /// The four player starting corners.
    #[must_use]
    pub fn corners(height: i32, width: i32) -> [Coordinate; 4] {
        [
            Coordinate::new(0, 0),
            Coordinate::new(0, width - 1),
            Coordinate::new(height - 1, 0),
            Coordinate::new(height - 1, width - 1),
        ]
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn active_player_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active_index]
    }

    pub fn active_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.active_index]
    }

    /// Make `index` the active player.
    ///
    /// Callers reduce the index modulo the player count first.
    pub fn set_active_player(&mut self, index: usize) {
        assert!(
            index < self.players.len(),
            "Player index {} out of range for {} players",
            index,
            self.players.len()
        );
        self.active_index = index;
    }

    /// Index of the player after the active one.
    #[must_use]
    pub fn next_player_index(&self) -> usize {
        (self.active_index + 1) % self.players.len()
    }

    /// Remaining movement budget from the last dice roll.
    #[must_use]
    pub fn dice_value(&self) -> u32 {
        self.dice_value
    }

    pub fn set_dice_value(&mut self, value: u32) {
        self.dice_value = value;
    }

    #[must_use]
    pub fn turn_subphase(&self) -> Subphase {
        self.subphase
    }

    pub fn set_turn_subphase(&mut self, subphase: Subphase) {
        self.subphase = subphase;
    }
}
