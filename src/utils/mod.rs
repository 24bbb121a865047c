//! # Utilities Module
//!
//! Small data structures and helpers shared by the generation stages:
//! a disjoint-set forest, axis selection math and floor reachability.

pub mod disjoint_set;
pub mod math;
pub mod pathfinding;

pub use disjoint_set::*;
pub use math::*;
pub use pathfinding::*;
