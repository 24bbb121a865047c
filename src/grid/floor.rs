//! # Floor Set
//!
//! The set of walkable cells built up during one generation pass.

use super::Cell;
use crate::generation::Room;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Every walkable cell of a layout.
///
/// The set only grows while a layout is generated: rooms first, then door
/// points, then corridors. Insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorSet {
    cells: HashSet<Cell>,
}

impl FloorSet {
    /// Creates an empty floor set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a cell as floor. Returns `true` if the cell was not floor before.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Marks every cell inside the room's bounds as floor.
    pub fn insert_room(&mut self, room: &Room) {
        self.cells.extend(room.cells());
    }

    /// Marks the square block of side `2 * half_width + 1` centered on `center`.
    pub fn insert_block(&mut self, center: Cell, half_width: i32) {
        for dx in -half_width..=half_width {
            for dy in -half_width..=half_width {
                self.cells.insert(Cell::new(center.x + dx, center.y + dy));
            }
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Returns `true` if every cell of `self` is also floor in `other`.
    pub fn is_subset(&self, other: &FloorSet) -> bool {
        self.cells.is_subset(&other.cells)
    }

    /// Smallest inclusive `(min, max)` corners enclosing every floor cell.
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let mut cells = self.iter();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(min, max), cell| {
            (
                Cell::new(min.x.min(cell.x), min.y.min(cell.y)),
                Cell::new(max.x.max(cell.x), max.y.max(cell.y)),
            )
        }))
    }
}

impl FromIterator<Cell> for FloorSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for FloorSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
