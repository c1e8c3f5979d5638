//! Ring placement of source tiles around the guild.
//!
//! Sources sit on square rings (Chebyshev distance 1, 2, ...) around the
//! centre. Each ring is walked clockwise from its top-left corner. A first
//! sweep takes every other cell of every ring so sources spread out and the
//! guild keeps open neighbours; a second sweep fills the skipped cells if
//! more sources are needed.

use crate::core::{Coordinate, EngineError, Result};

/// Cells of the ring at `radius` around `center`, clockwise from the top-left corner.
///
/// May include cells outside the board.
#[must_use]
pub fn ring(center: Coordinate, radius: i32) -> Vec<Coordinate> {
    if radius == 0 {
        return vec![center];
    }
    let top = center.row - radius;
    let bottom = center.row + radius;
    let left = center.column - radius;
    let right = center.column + radius;

    let mut cells = Vec::with_capacity((8 * radius) as usize);
    cells.extend((left..right).map(|c| Coordinate::new(top, c)));
    cells.extend((top..bottom).map(|r| Coordinate::new(r, right)));
    cells.extend((left + 1..=right).rev().map(|c| Coordinate::new(bottom, c)));
    cells.extend((top + 1..=bottom).rev().map(|r| Coordinate::new(r, left)));
    cells
}

/// Choose `count` distinct coordinates on rings around `center`.
///
/// `is_free` rejects cells that are occupied, blocked, or reserved (player
/// corners). Cells outside the `height` x `width` board are skipped.
pub fn source_coordinates(
    center: Coordinate,
    count: usize,
    height: i32,
    width: i32,
    is_free: impl Fn(Coordinate) -> bool,
) -> Result<Vec<Coordinate>> {
    let max_radius = height.max(width);
    let on_board = |c: &Coordinate| (0..height).contains(&c.row) && (0..width).contains(&c.column);

    let mut chosen = Vec::with_capacity(count);
    for parity in [0, 1] {
        for radius in 1..=max_radius {
            let cells = ring(center, radius);
            let candidates = cells
                .iter()
                .enumerate()
                .filter(|(i, _)| i % 2 == parity)
                .map(|(_, c)| *c)
                .filter(|c| on_board(c) && is_free(*c));
            for coord in candidates {
                if chosen.len() == count {
                    return Ok(chosen);
                }
                chosen.push(coord);
            }
        }
    }

    if chosen.len() == count {
        Ok(chosen)
    } else {
        Err(EngineError::InsufficientSpace {
            requested: count,
            available: chosen.len(),
        })
    }
}
