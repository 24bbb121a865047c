//! # Tile Layers
//!
//! Floor/wall classification of a finished [`FloorSet`] and the paintable
//! targets that receive it.

use super::{Cell, FloorSet};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Opaque identifier of a tile, chosen by whoever binds the tile layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

/// A tile layer the generator paints into.
pub trait TileTarget {
    /// Occupies `cell` with `tile`, replacing whatever was there.
    fn set_tile(&mut self, cell: Cell, tile: TileId);

    /// Removes every tile from the layer.
    fn clear_all(&mut self);
}

/// In-memory tile layer keyed by cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTilemap {
    tiles: HashMap<Cell, TileId>,
}

impl MemoryTilemap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tile_at(&self, cell: Cell) -> Option<TileId> {
        self.tiles.get(&cell).copied()
    }

    pub fn has_tile(&self, cell: Cell) -> bool {
        self.tiles.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All occupied cells, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.tiles.keys().copied()
    }
}

impl TileTarget for MemoryTilemap {
    fn set_tile(&mut self, cell: Cell, tile: TileId) {
        self.tiles.insert(cell, tile);
    }

    fn clear_all(&mut self) {
        self.tiles.clear();
    }
}

/// Disjoint floor and wall layers derived from a floor set.
///
/// A wall is any non-floor cell with at least one floor cell among its four
/// orthogonal neighbors. Both layers are recomputed from scratch, never
/// patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayers {
    pub floor: HashSet<Cell>,
    pub wall: HashSet<Cell>,
}

impl TileLayers {
    /// Classifies every floor cell and its orthogonal boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Cell, FloorSet, TileLayers};
    ///
    /// let floor: FloorSet = [Cell::new(0, 0)].into_iter().collect();
    /// let layers = TileLayers::derive(&floor);
    /// assert_eq!(layers.floor.len(), 1);
    /// assert_eq!(layers.wall.len(), 4);
    /// ```
    pub fn derive(floor: &FloorSet) -> Self {
        let floor_cells: HashSet<Cell> = floor.iter().collect();
        let mut wall = HashSet::new();

        for cell in floor.iter() {
            for neighbor in cell.cardinal_neighbors() {
                if !floor.contains(neighbor) {
                    wall.insert(neighbor);
                }
            }
        }

        Self {
            floor: floor_cells,
            wall,
        }
    }

    pub fn is_floor(&self, cell: Cell) -> bool {
        self.floor.contains(&cell)
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.wall.contains(&cell)
    }

    /// Paints both layers into their targets: every floor cell first, then
    /// every wall cell.
    pub fn paint<F, W>(
        &self,
        floor_target: &mut F,
        floor_tile: TileId,
        wall_target: &mut W,
        wall_tile: TileId,
    ) where
        F: TileTarget + ?Sized,
        W: TileTarget + ?Sized,
    {
        for &cell in &self.floor {
            floor_target.set_tile(cell, floor_tile);
        }
        for &cell in &self.wall {
            wall_target.set_tile(cell, wall_tile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Room;

    #[test]
    fn test_single_room_boundary() {
        let mut floor = FloorSet::new();
        floor.insert_room(&Room::new(Cell::new(0, 0), 3, 2));
        let layers = TileLayers::derive(&floor);

        assert_eq!(layers.floor.len(), 6);
        // 3 above, 3 below, 2 left, 2 right; corners are not 4-adjacent
        assert_eq!(layers.wall.len(), 10);
        assert!(layers.is_wall(Cell::new(-1, 0)));
        assert!(layers.is_wall(Cell::new(1, 2)));
        assert!(!layers.is_wall(Cell::new(-1, -1)));
        assert!(layers.floor.is_disjoint(&layers.wall));
    }

    #[test]
    fn test_empty_floor_has_no_walls() {
        let layers = TileLayers::derive(&FloorSet::new());
        assert!(layers.floor.is_empty());
        assert!(layers.wall.is_empty());
    }

    #[test]
    fn test_enclosed_gap_is_wall() {
        // Ring of floor around (0, 0)
        let floor: FloorSet = (-1..=1)
            .flat_map(|x| (-1..=1).map(move |y| Cell::new(x, y)))
            .filter(|&cell| cell != Cell::origin())
            .collect();
        let layers = TileLayers::derive(&floor);

        assert!(layers.is_wall(Cell::origin()));
        assert!(!layers.is_floor(Cell::origin()));
    }

    #[test]
    fn test_paint_fills_targets() {
        let floor: FloorSet = [Cell::new(2, 2), Cell::new(3, 2)].into_iter().collect();
        let layers = TileLayers::derive(&floor);

        let mut floor_map = MemoryTilemap::new();
        let mut wall_map = MemoryTilemap::new();
        layers.paint(&mut floor_map, TileId(1), &mut wall_map, TileId(2));

        assert_eq!(floor_map.len(), 2);
        assert_eq!(floor_map.tile_at(Cell::new(3, 2)), Some(TileId(1)));
        assert_eq!(wall_map.len(), layers.wall.len());
        assert_eq!(wall_map.tile_at(Cell::new(4, 2)), Some(TileId(2)));
        assert!(!wall_map.has_tile(Cell::new(2, 2)));

        floor_map.clear_all();
        assert!(floor_map.is_empty());
    }
}
