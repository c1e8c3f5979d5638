use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner (player index).
    Winner(usize),
    /// Several players share the top score.
    Winners(Vec<usize>),
}

impl GameResult {
    /// Rank players by points.
    ///
    /// Everyone tied on the highest score wins.
    pub fn from_points(points: impl IntoIterator<Item = u32>) -> Option<Self> {
        let points: Vec<u32> = points.into_iter().collect();
        let best = *points.iter().max()?;
        let mut winners: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|(_, &p)| p == best)
            .map(|(index, _)| index)
            .collect();

        if winners.len() == 1 {
            winners.pop().map(GameResult::Winner)
        } else {
            Some(GameResult::Winners(winners))
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: usize) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}
