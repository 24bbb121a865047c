//! # Grid Module
//!
//! The dungeon as a set of occupied integer coordinates, with no notion of
//! rendering or world units.
//!
//! - [`Cell`]: an integer grid coordinate
//! - [`FloorSet`]: every walkable cell of a layout
//! - [`TileLayers`]: floor and wall classification derived from a `FloorSet`
//! - [`TileTarget`]: a paintable tile layer bound by the caller

pub mod floor;
pub mod tiles;

pub use floor::*;
pub use tiles::*;

use serde::{Deserialize, Serialize};

/// An integer coordinate on the dungeon grid.
///
/// Cells compare and hash by coordinate pair. The grid is unbounded and
/// centered on the origin, so negative coordinates are common.
///
/// # Examples
///
/// ```
/// use delve::Cell;
///
/// let cell = Cell::new(10, -5);
/// assert_eq!(cell.x, 10);
/// assert_eq!(cell.y, -5);
/// assert_eq!(cell.cardinal_neighbors().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the four orthogonal neighbors, in up, right, down, left order.
pub const CARDINAL_OFFSETS: [Cell; 4] = [
    Cell { x: 0, y: 1 },
    Cell { x: 1, y: 0 },
    Cell { x: 0, y: -1 },
    Cell { x: -1, y: 0 },
];

impl Cell {
    /// Creates a new cell with the given coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin cell (0, 0).
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Calculates the Euclidean distance to another cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::Cell;
    ///
    /// assert_eq!(Cell::new(0, 0).euclidean_distance(Cell::new(3, 4)), 5.0);
    /// ```
    pub fn euclidean_distance(self, other: Cell) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the 4 orthogonal neighbors (no diagonals).
    pub fn cardinal_neighbors(self) -> [Cell; 4] {
        CARDINAL_OFFSETS.map(|offset| self + offset)
    }
}

impl std::ops::Add for Cell {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Cell {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cell_arithmetic() {
        let a = Cell::new(3, -2);
        let b = Cell::new(-1, 5);
        assert_eq!(a + b, Cell::new(2, 3));
        assert_eq!(a - b, Cell::new(4, -7));
        assert_eq!(Cell::origin(), Cell::new(0, 0));
    }

    #[test]
    fn test_cardinal_neighbors() {
        let neighbors = Cell::new(0, 0).cardinal_neighbors();
        assert_eq!(
            neighbors,
            [
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(0, -1),
                Cell::new(-1, 0)
            ]
        );
    }

    #[test]
    fn test_cell_hashes_by_coordinates() {
        let mut set = HashSet::new();
        set.insert(Cell::new(1, 2));
        set.insert(Cell::new(1, 2));
        set.insert(Cell::new(2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_euclidean_distance_is_symmetric() {
        let a = Cell::new(-4, 7);
        let b = Cell::new(2, -1);
        assert_eq!(a.euclidean_distance(b), b.euclidean_distance(a));
        assert_eq!(a.euclidean_distance(b), 10.0);
    }
}
