//! # Floor Reachability
//!
//! Breadth-first reachability over 4-connected floor cells.

use crate::grid::{Cell, FloorSet};
use ::pathfinding::prelude::bfs_reach;
use std::collections::HashSet;

/// Every floor cell reachable from `start` through orthogonal steps.
///
/// Returns an empty set when `start` is not floor.
pub fn reachable_floor(floor: &FloorSet, start: Cell) -> HashSet<Cell> {
    if !floor.contains(start) {
        return HashSet::new();
    }

    bfs_reach(start, |&cell| {
        cell.cardinal_neighbors()
            .into_iter()
            .filter(|&neighbor| floor.contains(neighbor))
            .collect::<Vec<_>>()
    })
    .collect()
}
