//! Procedural mission generation with local diversity.
//!
//! The first mission picks its category and material freely. After that,
//! draws alternate between two kinds of step:
//!
//! - **diversify category**: a new category different from the previous
//!   one, material unchanged;
//! - **diversify material**: a new material different from the previous
//!   one, category unchanged.
//!
//! The previous value is excluded for that single draw only. If excluding
//! it would leave nothing to draw from, the pool is used as is.

use std::ops::Range;

use tracing::trace;

use super::item::Item;
use crate::core::{Category, EngineError, GameRng, Material, Result};

/// Default required quantity range (upper bound exclusive).
pub const DEFAULT_REQUIRED: Range<u32> = 5..10;

/// Default reward range (upper bound exclusive).
pub const DEFAULT_POINTS: Range<u32> = 6..11;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Fresh,
    DiversifyCategory,
    DiversifyMaterial,
}

/// Generates guild missions.
#[derive(Clone, Debug)]
pub struct MissionGenerator {
    materials: Vec<Material>,
    required: Range<u32>,
    points: Range<u32>,
    step: Step,
    category: Category,
    material: Material,
    materials_present: Vec<Material>,
    rng: GameRng,
}

impl MissionGenerator {
    /// Create a generator drawing materials from `materials`.
    pub fn new(materials: &[Material], rng: GameRng) -> Result<Self> {
        let first = *materials.first().ok_or(EngineError::EmptyMaterials)?;

        Ok(Self {
            materials: materials.to_vec(),
            required: DEFAULT_REQUIRED,
            points: DEFAULT_POINTS,
            step: Step::Fresh,
            category: Category::ALL[0],
            material: first,
            materials_present: Vec::new(),
            rng,
        })
    }

    /// Set the required quantity range.
    #[must_use]
    pub fn with_required(mut self, range: Range<u32>) -> Self {
        assert!(!range.is_empty(), "Required range must not be empty");
        self.required = range;
        self
    }

    /// Set the reward range.
    #[must_use]
    pub fn with_points(mut self, range: Range<u32>) -> Self {
        assert!(!range.is_empty(), "Points range must not be empty");
        self.points = range;
        self
    }

    /// Generate the next mission.
    pub fn generate_mission(&mut self) -> Item {
        match self.step {
            Step::Fresh => {
                self.category = pick(&mut self.rng, &Category::ALL, None);
                self.material = pick(&mut self.rng, &self.materials, None);
                self.step = Step::DiversifyCategory;
            }
            Step::DiversifyCategory => {
                self.category = pick(&mut self.rng, &Category::ALL, Some(self.category));
                self.step = Step::DiversifyMaterial;
            }
            Step::DiversifyMaterial => {
                self.material = pick(&mut self.rng, &self.materials, Some(self.material));
                self.step = Step::DiversifyCategory;
            }
        }

        if !self.materials_present.contains(&self.material) {
            self.materials_present.push(self.material);
        }

        let item = Item {
            category: self.category,
            material: self.material,
            quantity: self.rng.gen_range(self.required.clone()),
            points: self.rng.gen_range(self.points.clone()),
        };
        trace!(%item, "generated mission");
        item
    }

    /// Generate `count` missions in a row.
    pub fn generate(&mut self, count: usize) -> Vec<Item> {
        (0..count).map(|_| self.generate_mission()).collect()
    }

    /// Distinct materials assigned so far, in first-use order.
    #[must_use]
    pub fn materials_present(&self) -> &[Material] {
        &self.materials_present
    }
}

/// Draw uniformly from `pool`, skipping `excluded` unless that empties the pool.
fn pick<T: Copy + PartialEq>(rng: &mut GameRng, pool: &[T], excluded: Option<T>) -> T {
    let candidates: Vec<T> = pool.iter().copied().filter(|v| Some(*v) != excluded).collect();
    let candidates = if candidates.is_empty() { pool } else { &candidates[..] };
    candidates[rng.gen_range_usize(0..candidates.len())]
}
