//! # Corridor Carving
//!
//! Wide L-shaped corridors: two axis-aligned segments meeting at a corner,
//! stamped with a square block at every step.

use crate::grid::{Cell, FloorSet};
use crate::utils::step_toward;
use rand::Rng;

/// Carves an L-shaped corridor from `a` to `b`.
///
/// One uniform draw picks the bend: below 0.5 the corridor runs horizontally
/// first through `(b.x, a.y)`, otherwise vertically first through
/// `(a.x, b.y)`.
pub fn carve_corridor<R: Rng>(a: Cell, b: Cell, half_width: u32, rng: &mut R, floor: &mut FloorSet) {
    let horizontal_first = rng.gen::<f64>() < 0.5;
    let corner = if horizontal_first {
        Cell::new(b.x, a.y)
    } else {
        Cell::new(a.x, b.y)
    };

    carve_line(a, corner, half_width, floor);
    carve_line(corner, b, half_width, floor);
}

/// Stamps a block on every cell from `from` to `to`, both ends included.
///
/// The endpoints must share a row, a column, or both.
pub fn carve_line(from: Cell, to: Cell, half_width: u32, floor: &mut FloorSet) {
    debug_assert!(from.x == to.x || from.y == to.y, "carve_line needs an axis-aligned segment");

    let half_width = half_width as i32;
    let step = step_toward(from, to);
    let mut current = from;

    while current != to {
        floor.insert_block(current, half_width);
        current = current + step;
    }
    floor.insert_block(to, half_width);
}
