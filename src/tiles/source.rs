//! Resource source state machine.
//!
//! A source is either **active** (accumulating material every board tick)
//! or **cooling down** (just collected, waiting to reactivate).
//!
//! ```text
//!            collect()                 COOLDOWN_TURNS x update_tile()
//!   active ───────────► cooling-down ─────────────────────────────► active
//!     │ update_tile(): quantity + 1, capped at max     (quantity = min)
//!     └──────┘
//! ```
//!
//! Quantities scale with the number of players: a four player game has
//! four times the per-player constants.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Material;

/// Quantity a source holds when it reactivates, per player.
pub const MIN_QUANTITY_PER_PLAYER: u32 = 1;

/// Quantity a freshly generated source holds, per player.
pub const STARTING_QUANTITY_PER_PLAYER: u32 = 2;

/// Upper bound on accumulated quantity, per player.
pub const MAX_QUANTITY_PER_PLAYER: u32 = 4;

/// Board ticks a source stays inactive after being collected.
pub const COOLDOWN_TURNS: u32 = 6;

/// A tile producing one material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTile {
    material: Material,
    quantity: u32,
    active: bool,
    cooldown_remaining: u32,
    min_quantity: u32,
    max_quantity: u32,
}

impl SourceTile {
    /// Create an active source holding the starting quantity.
    #[must_use]
    pub fn new(material: Material, player_count: usize) -> Self {
        let players = player_count as u32;
        Self {
            material,
            quantity: Self::starting_quantity(player_count),
            active: true,
            cooldown_remaining: 0,
            min_quantity: MIN_QUANTITY_PER_PLAYER * players,
            max_quantity: MAX_QUANTITY_PER_PLAYER * players,
        }
    }

    /// Quantity a new source holds for a game with `player_count` players.
    #[must_use]
    pub fn starting_quantity(player_count: usize) -> u32 {
        STARTING_QUANTITY_PER_PLAYER * player_count as u32
    }

    /// Advance the source by one board tick.
    pub fn update_tile(&mut self) {
        if self.active {
            self.quantity = (self.quantity + 1).min(self.max_quantity);
            return;
        }

        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
        if self.cooldown_remaining == 0 {
            self.active = true;
            self.quantity = self.min_quantity;
            trace!(material = %self.material, "source reactivated");
        }
    }

    /// Take everything the source holds.
    ///
    /// Returns 0 and changes nothing while cooling down.
    pub fn collect(&mut self) -> u32 {
        if !self.active {
            return 0;
        }
        let collected = self.quantity;
        self.quantity = 0;
        self.active = false;
        self.cooldown_remaining = COOLDOWN_TURNS;
        collected
    }

    #[must_use]
    pub fn material(&self) -> Material {
        self.material
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ticks left before reactivation (0 while active).
    #[must_use]
    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    #[must_use]
    pub fn min_quantity(&self) -> u32 {
        self.min_quantity
    }

    #[must_use]
    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }
}
