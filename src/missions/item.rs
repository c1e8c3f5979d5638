use serde::{Deserialize, Serialize};

use crate::core::{Category, Material};

/// A guild mission: deliver `quantity` of `material` to earn `points`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub category: Category,
    pub material: Material,
    pub quantity: u32,
    pub points: u32,
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x{} {} ({} pts)",
            self.category, self.quantity, self.material, self.points
        )
    }
}
