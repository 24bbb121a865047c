//! # Delve
//!
//! Seeded, deterministic dungeon layout generation on an unbounded integer grid.
//!
//! ## Architecture Overview
//!
//! Generation is a strictly sequential pipeline. Each stage consumes the output
//! of the previous one and only ever adds floor:
//!
//! - **Grid Model**: the set of floor cells plus the derived floor/wall layers
//! - **Room Placer**: rejection-sampled, padded, non-overlapping rectangles
//! - **Connectivity Builder**: Kruskal spanning tree over room centers plus
//!   random extra loops, with door points facing the connected room
//! - **Corridor Carver**: wide L-shaped corridors between door points
//! - **Orchestrator**: binds tile targets, runs the pipeline, paints tiles and
//!   notifies the spawn listener
//!
//! Every randomized step draws from an explicit, seedable generator, so a seed
//! and a [`GenerationConfig`] fully determine the output.

pub mod generation;
pub mod grid;
pub mod rendering;
pub mod spawn;
pub mod utils;

pub use generation::*;
pub use grid::*;
pub use rendering::*;
pub use spawn::*;
pub use utils::*;

// Explicit re-exports for the types most callers need
pub use generation::{
    generate_layout, validate_layout, Connection, DungeonGenerator, DungeonLayout,
    GenerationConfig, GenerationPhase, Generator, LayoutGenerator, LayoutNotice, Room, RoomSize,
};

pub use grid::{Cell, FloorSet, MemoryTilemap, TileId, TileLayers, TileTarget};

/// Core error type for the Delve generator.
#[derive(thiserror::Error, Debug)]
pub enum DelveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Missing bindings or invalid configuration values
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generated layout failed validation
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Delve codebase.
pub type DelveResult<T> = Result<T, DelveError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation defaults.
pub mod config {
    /// Default map width in cells
    pub const DEFAULT_MAP_WIDTH: u32 = 220;

    /// Default map height in cells
    pub const DEFAULT_MAP_HEIGHT: u32 = 220;

    /// Default number of rooms requested per layout
    pub const DEFAULT_ROOM_COUNT: u32 = 35;

    /// Largest accepted map width or height, keeping coordinates well inside `i32`
    pub const MAX_MAP_EXTENT: u32 = 1 << 16;

    /// Placement attempts allowed per requested room
    pub const PLACEMENT_ATTEMPTS_PER_ROOM: u32 = 60;

    /// Upper bound for the extra connection probability
    pub const MAX_EXTRA_CONNECTION_CHANCE: f64 = 0.5;

    /// Offset from a cell's corner to its center in world units
    pub const TILE_CENTER_OFFSET: (f32, f32) = (0.5, 0.5);
}
