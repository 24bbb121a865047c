//! # Grid Math
//!
//! Axis selection and unit steps shared by door placement and corridor
//! carving.

use crate::grid::Cell;

/// A grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Picks the axis along which `delta` is longest.
///
/// Equal lengths resolve to [`Axis::Horizontal`].
///
/// # Examples
///
/// ```
/// use delve::{dominant_axis, Axis, Cell};
///
/// assert_eq!(dominant_axis(Cell::new(3, -5)), Axis::Vertical);
/// assert_eq!(dominant_axis(Cell::new(-4, 4)), Axis::Horizontal);
/// ```
pub fn dominant_axis(delta: Cell) -> Axis {
    if delta.x.abs() >= delta.y.abs() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

/// Sign of `value` as a unit step: -1, 0 or 1.
pub fn unit_step(value: i32) -> i32 {
    value.signum()
}

/// Unit step along each axis from `from` toward `to`.
pub fn step_toward(from: Cell, to: Cell) -> Cell {
    Cell::new(unit_step(to.x - from.x), unit_step(to.y - from.y))
}
