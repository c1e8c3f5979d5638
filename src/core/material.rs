//! Materials collected on the board and mission categories.

use serde::{Deserialize, Serialize};

/// A collectable resource.
///
/// Source tiles produce one material each; missions ask for a quantity of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Material {
    Wood,
    Coal,
    Iron,
    Copper,
    Diamond,
    Silk,
}

impl Material {
    /// Every material, in declaration order.
    pub const ALL: [Material; 6] = [
        Material::Wood,
        Material::Coal,
        Material::Iron,
        Material::Copper,
        Material::Diamond,
        Material::Silk,
    ];
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Material::Wood => "WOOD",
            Material::Coal => "COAL",
            Material::Iron => "IRON",
            Material::Copper => "COPPER",
            Material::Diamond => "DIAMOND",
            Material::Silk => "SILK",
        };
        f.write_str(name)
    }
}

/// What kind of goods a guild mission asks to be crafted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Weapon,
    Armor,
    Tool,
    Jewel,
    Garment,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Weapon,
        Category::Armor,
        Category::Tool,
        Category::Jewel,
        Category::Garment,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Weapon => "Weapon",
            Category::Armor => "Armor",
            Category::Tool => "Tool",
            Category::Jewel => "Jewel",
            Category::Garment => "Garment",
        };
        f.write_str(name)
    }
}
