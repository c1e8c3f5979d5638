//! Engine error type.
//!
//! Only construction can fail. Interactive operations (navigation, shifting,
//! collecting, fulfilling missions) are silent no-ops when they cannot apply.

use thiserror::Error;

use super::coord::Coordinate;

/// Errors raised while configuring or generating a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No materials were supplied, so neither sources nor bonuses can be assigned.
    #[error("the materials list is empty")]
    EmptyMaterials,

    /// Fewer source tiles than materials: floor division leaves no source slot.
    #[error("{sources} source tiles cannot hold {materials} materials")]
    NoSourceSlots { sources: usize, materials: usize },

    /// A tile was inserted where one already exists.
    #[error("coordinate {0} is already occupied")]
    DuplicateCoordinate(Coordinate),

    /// The board has fewer free cells than requested source tiles.
    #[error("only {available} free cells for {requested} source tiles")]
    InsufficientSpace { requested: usize, available: usize },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used by fallible engine constructors.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(EngineError::EmptyMaterials.to_string(), "the materials list is empty");
        assert_eq!(
            EngineError::DuplicateCoordinate(Coordinate::new(1, 2)).to_string(),
            "coordinate (1, 2) is already occupied"
        );
        assert_eq!(
            EngineError::NoSourceSlots { sources: 2, materials: 3 }.to_string(),
            "2 source tiles cannot hold 3 materials"
        );
    }
}
