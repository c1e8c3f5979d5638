//! Walking to a source, collecting, and redeeming a mission at the guild.

mod common;

use labyrinth_engine::{
    Board, Category, Context, ContextId, Coordinate, GameState, GuildContext, GuildTile, Item,
    Material, Pattern, PlayersManager, SourceTile, StandardTile, Subphase, Tile, TurnContext,
};

/// 3x3 board, single player in the top-left corner.
///
/// ```text
///  P  W  .
///  .  G  .
///  .  .  .
/// ```
fn scene() -> GameState {
    let mut board = Board::new(3, 3);
    board
        .insert_tile(Coordinate::new(1, 1), Tile::guild(GuildTile::new(5, vec![Material::Wood]), Pattern::CROSS))
        .unwrap();
    board.add_blocked(Coordinate::new(1, 1));
    board
        .insert_tile(Coordinate::new(0, 1), Tile::source(SourceTile::new(Material::Wood, 1), Pattern::CROSS))
        .unwrap();
    board.add_blocked(Coordinate::new(0, 1));
    for row in 0..3 {
        for column in 0..3 {
            let coord = Coordinate::new(row, column);
            if board.tile(coord).is_none() {
                board.insert_tile(coord, Tile::standard(StandardTile::new(), Pattern::CROSS)).unwrap();
            }
        }
    }

    let mut players = PlayersManager::at_corners(1, 3, 3);
    players.set_turn_subphase(Subphase::Labyrinth);
    players.set_dice_value(4);
    GameState::new(board, players)
}

fn wood_mission(quantity: u32, points: u32) -> Item {
    Item {
        category: Category::Armor,
        material: Material::Wood,
        quantity,
        points,
    }
}

#[test]
fn test_collect_and_redeem() {
    common::init_logging();
    let mut state = scene();
    let mut turn = TurnContext::new();
    let mut guild = GuildContext::new(vec![wood_mission(2, 5), wood_mission(3, 7)], vec![Material::Wood]);

    turn.right(&mut state);
    turn.primary(&mut state);
    assert_eq!(state.players.active_player().quantity_material(Material::Wood), 2);

    turn.down(&mut state);
    assert_eq!(state.players.active_player().coord(), Coordinate::new(1, 1));
    assert_eq!(state.players.dice_value(), 2);

    turn.primary(&mut state);
    assert!(turn.done());
    assert_eq!(turn.next_context(), ContextId::Guild);
    assert_eq!(state.players.turn_subphase(), Subphase::Guild);

    // the 3-wood mission is out of reach, the 2-wood one is not
    guild.down(&mut state);
    guild.primary(&mut state);
    assert_eq!(guild.missions().len(), 2);
    guild.up(&mut state);
    guild.primary(&mut state);

    let player = state.players.active_player();
    assert_eq!(player.points(), 5);
    assert_eq!(player.quantity_material(Material::Wood), 0);
    assert_eq!(guild.missions(), &[wood_mission(3, 7)]);
    assert_eq!(guild.completed(), &[wood_mission(2, 5)]);

    guild.back(&mut state);
    assert_eq!(guild.next_context(), ContextId::Turn);

    // still in the guild subphase: the remaining budget can be walked
    turn.left(&mut state);
    assert_eq!(state.players.active_player().coord(), Coordinate::new(1, 0));

    turn.back(&mut state);
    assert_eq!(turn.next_context(), ContextId::UpdateBoard);
    assert_eq!(state.players.turn_subphase(), Subphase::End);
}

#[test]
fn test_points_only_grow() {
    let mut state = scene();
    let mut guild = GuildContext::new(
        (0..4).map(|i| wood_mission(1, i + 1)).collect(),
        vec![Material::Wood],
    );
    state.players.active_player_mut().increase_quantity_material(Material::Wood, 3);

    let mut last = 0;
    for _ in 0..4 {
        guild.primary(&mut state);
        let points = state.players.active_player().points();
        assert!(points >= last);
        last = points;
    }
    // three redeemed, the fourth needs wood the player no longer has
    assert_eq!(guild.completed().len(), 3);
    assert_eq!(last, 1 + 2 + 3);
    assert!(!guild.is_exhausted());
}
