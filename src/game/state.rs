use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::players::PlayersManager;

/// Everything the contexts mutate: the board and the players.
///
/// The driver owns exactly one `GameState` and lends it to the active
/// context for the duration of a single operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub players: PlayersManager,
}

impl GameState {
    pub fn new(board: Board, players: PlayersManager) -> Self {
        Self { board, players }
    }
}

/// A hand-built 5x5 board shared by the unit tests.
///
/// ```text
///      0   1   2   3   4
///  0   P0  ─i          P1     ─i: horizontal straight with one iron
///  1   └   W                  W:  wood source (blocked)
///  2           G              G:  guild (blocked)
///  3
///  4
/// ```
///
/// Every other cell is an open crossroads without bonus.
#[cfg(test)]
pub(crate) fn test_state() -> GameState {
    use crate::core::{Coordinate, Material};
    use crate::tiles::{GuildTile, Pattern, Shape, SourceTile, StandardTile, Tile};

    let mut board = Board::new(5, 5);
    let special = [
        (
            Coordinate::new(0, 1),
            Tile::standard(StandardTile::with_bonus(Material::Iron, 1), Shape::Straight.pattern().rotated()),
        ),
        (Coordinate::new(1, 0), Tile::standard(StandardTile::new(), Shape::Elbow.pattern())),
        (Coordinate::new(1, 1), Tile::source(SourceTile::new(Material::Wood, 2), Pattern::CROSS)),
        (
            Coordinate::new(2, 2),
            Tile::guild(GuildTile::new(20, vec![Material::Iron, Material::Wood]), Pattern::CROSS),
        ),
    ];
    for (coord, tile) in special {
        board.insert_tile(coord, tile).unwrap();
    }
    board.add_blocked(Coordinate::new(1, 1));
    board.add_blocked(Coordinate::new(2, 2));

    for row in 0..5 {
        for column in 0..5 {
            let coord = Coordinate::new(row, column);
            if board.tile(coord).is_none() {
                board.insert_tile(coord, Tile::standard(StandardTile::new(), Pattern::CROSS)).unwrap();
            }
        }
    }

    GameState::new(board, PlayersManager::at_corners(2, 5, 5))
}
