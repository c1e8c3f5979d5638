//! Shared helpers for the integration tests.

use std::sync::Once;

use labyrinth_engine::{Game, GameBuilder, GameConfig, Operation};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test-captured subscriber once per test binary.
///
/// Level comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A small two-player game on a 7x7 board.
#[allow(dead_code)]
pub fn small_game(seed: u64) -> Game {
    init_logging();
    GameBuilder::new()
        .config(
            GameConfig::default()
                .with_board_size(7, 7)
                .with_player_count(2)
                .with_source_tiles(4),
        )
        .build(seed)
        .expect("small game builds")
}

/// Feed a sequence of operations to the game.
#[allow(dead_code)]
pub fn play(game: &mut Game, ops: &[Operation]) {
    for &op in ops {
        game.dispatch(op);
    }
}
