//! # Generation Module
//!
//! Procedural layout generation: room placement, connectivity, corridor
//! carving and the orchestrator that runs them in order.
//!
//! The stages are exposed individually so callers and tests can observe the
//! floor set between steps, but [`generate_layout`] and [`DungeonGenerator`]
//! are the intended entry points.

pub mod connectivity;
pub mod corridors;
pub mod dungeon;
pub mod rooms;

pub use connectivity::*;
pub use corridors::*;
pub use dungeon::*;
pub use rooms::*;

use crate::config;
use crate::grid::Cell;
use crate::{DelveError, DelveResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Width and height of a room, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSize {
    pub width: u32,
    pub height: u32,
}

impl RoomSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Configuration for one layout generation.
///
/// All sizes are in cells. The map spans `[-width / 2, width / 2)` by
/// `[-height / 2, height / 2)` around the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Map width
    pub width: u32,
    /// Map height
    pub height: u32,
    /// Number of rooms to try to place
    pub room_count: u32,
    /// Smallest room size, inclusive per axis
    pub room_min: RoomSize,
    /// Largest room size, inclusive per axis
    pub room_max: RoomSize,
    /// Empty cells enforced between rooms
    pub room_padding: u32,
    /// Corridor radius: 1 carves 3-wide corridors, 2 carves 5-wide
    pub corridor_half_width: u32,
    /// Chance, rolled once per sorted room pair, that the pair gets a corridor
    /// if it is not connected yet (0.0 to 0.5)
    pub extra_connection_chance: f64,
}

impl GenerationConfig {
    /// Creates a configuration with the default map and room settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(7);
    /// assert_eq!(config.seed, 7);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: config::DEFAULT_MAP_WIDTH,
            height: config::DEFAULT_MAP_HEIGHT,
            room_count: config::DEFAULT_ROOM_COUNT,
            room_min: RoomSize::new(10, 8),
            room_max: RoomSize::new(22, 16),
            room_padding: 3,
            corridor_half_width: 1,
            extra_connection_chance: 0.15,
        }
    }

    /// Creates a configuration for testing with a smaller, quicker map.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            width: 80,
            height: 60,
            room_count: 6,
            room_min: RoomSize::new(4, 4),
            room_max: RoomSize::new(8, 6),
            room_padding: 2,
            corridor_half_width: 1,
            extra_connection_chance: 0.1,
        }
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json_str(json: &str) -> DelveResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> DelveResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Half extents of the map, `(width / 2, height / 2)`.
    pub fn half_extents(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Checks that every value can drive a generation pass.
    pub fn validate(&self) -> DelveResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DelveError::Configuration(format!(
                "map size must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if self.width > config::MAX_MAP_EXTENT || self.height > config::MAX_MAP_EXTENT {
            return Err(DelveError::Configuration(format!(
                "map size {}x{} exceeds the {} cell limit",
                self.width,
                self.height,
                config::MAX_MAP_EXTENT
            )));
        }

        if self.room_min.width == 0 || self.room_min.height == 0 {
            return Err(DelveError::Configuration(format!(
                "minimum room size must be positive, got {}x{}",
                self.room_min.width, self.room_min.height
            )));
        }

        if self.room_min.width > self.room_max.width || self.room_min.height > self.room_max.height {
            return Err(DelveError::Configuration(format!(
                "minimum room size {}x{} exceeds maximum {}x{}",
                self.room_min.width, self.room_min.height, self.room_max.width, self.room_max.height
            )));
        }

        let (half_w, half_h) = self.half_extents();
        if self.room_max.width as i64 >= 2 * half_w as i64 || self.room_max.height as i64 >= 2 * half_h as i64 {
            return Err(DelveError::Configuration(format!(
                "maximum room size {}x{} does not fit a {}x{} map",
                self.room_max.width, self.room_max.height, self.width, self.height
            )));
        }

        if self.room_padding >= self.width.max(self.height) {
            return Err(DelveError::Configuration(format!(
                "room padding {} does not fit a {}x{} map",
                self.room_padding, self.width, self.height
            )));
        }

        let max_half_width = half_w.min(half_h) as u32;
        if self.corridor_half_width >= max_half_width {
            return Err(DelveError::Configuration(format!(
                "corridor half width must be below {}, got {}",
                max_half_width, self.corridor_half_width
            )));
        }

        if !self.extra_connection_chance.is_finite()
            || !(0.0..=config::MAX_EXTRA_CONNECTION_CHANCE).contains(&self.extra_connection_chance)
        {
            return Err(DelveError::Configuration(format!(
                "extra connection chance must be within [0, {}], got {}",
                config::MAX_EXTRA_CONNECTION_CHANCE,
                self.extra_connection_chance
            )));
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// An axis-aligned rectangular room.
///
/// `origin` is the minimum corner; the room covers `width` by `height` cells
/// starting there. Rooms are immutable once accepted into a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Minimum corner of the room
    pub origin: Cell,
    /// Width of the room
    pub width: u32,
    /// Height of the room
    pub height: u32,
}

impl Room {
    /// Creates a new room with the given parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Cell, Room};
    ///
    /// let room = Room::new(Cell::new(5, 5), 10, 8);
    /// assert_eq!(room.width, 10);
    /// assert_eq!(room.center(), Cell::new(10, 9));
    /// ```
    pub fn new(origin: Cell, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn x_min(&self) -> i32 {
        self.origin.x
    }

    pub fn y_min(&self) -> i32 {
        self.origin.y
    }

    /// Exclusive maximum x.
    pub fn x_max(&self) -> i32 {
        self.origin.x + self.width as i32
    }

    /// Exclusive maximum y.
    pub fn y_max(&self) -> i32 {
        self.origin.y + self.height as i32
    }

    /// Gets the center cell, truncating half sizes.
    pub fn center(&self) -> Cell {
        Cell::new(
            self.origin.x + self.width as i32 / 2,
            self.origin.y + self.height as i32 / 2,
        )
    }

    /// Gets the area of the room in cells.
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Checks if a cell is inside this room.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.x_min() && cell.y >= self.y_min() && cell.x < self.x_max() && cell.y < self.y_max()
    }

    /// Checks if a cell lies on the outermost ring of this room.
    pub fn is_perimeter(&self, cell: Cell) -> bool {
        self.contains(cell)
            && (cell.x == self.x_min()
                || cell.y == self.y_min()
                || cell.x == self.x_max() - 1
                || cell.y == self.y_max() - 1)
    }

    /// Checks if this room shares at least one cell with another room.
    ///
    /// Rooms that merely touch edges do not overlap.
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x_min() < other.x_max()
            && other.x_min() < self.x_max()
            && self.y_min() < other.y_max()
            && other.y_min() < self.y_max()
    }

    /// Returns this room grown by `margin` cells on every side.
    ///
    /// Growth saturates instead of wrapping for margins beyond the `i32`
    /// coordinate range.
    pub fn padded(&self, margin: u32) -> Room {
        let margin_i = i32::try_from(margin).unwrap_or(i32::MAX);
        let grow = margin.saturating_mul(2);
        Room::new(
            Cell::new(
                self.origin.x.saturating_sub(margin_i),
                self.origin.y.saturating_sub(margin_i),
            ),
            self.width.saturating_add(grow),
            self.height.saturating_add(grow),
        )
    }

    /// Iterates every cell inside the room.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (x_min, x_max, y_min, y_max) = (self.x_min(), self.x_max(), self.y_min(), self.y_max());
        (x_min..x_max).flat_map(move |x| (y_min..y_max).map(move |y| Cell::new(x, y)))
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> DelveResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(12345);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.width, 220);
        assert!(config.room_min.width <= config.room_max.width);
        assert!(config.validate().is_ok());
        assert!(GenerationConfig::for_testing(1).validate().is_ok());
        assert_eq!(GenerationConfig::default().seed, 42);
    }

    #[test]
    fn test_config_rejects_inverted_room_range() {
        let mut config = GenerationConfig::for_testing(1);
        config.room_min = RoomSize::new(9, 4);
        config.room_max = RoomSize::new(8, 6);
        assert!(matches!(config.validate(), Err(DelveError::Configuration(_))));
    }

    #[test]
    fn test_config_rejects_rooms_larger_than_map() {
        let mut config = GenerationConfig::for_testing(1);
        config.width = 9;
        config.room_max = RoomSize::new(8, 6);
        assert!(matches!(config.validate(), Err(DelveError::Configuration(_))));

        config.width = 18;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_extra_chance_out_of_range() {
        let mut config = GenerationConfig::for_testing(1);
        for chance in [-0.1, 0.51, f64::NAN, f64::INFINITY] {
            config.extra_connection_chance = chance;
            assert!(config.validate().is_err(), "accepted {chance}");
        }
        config.extra_connection_chance = 0.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_sizes() {
        let mut config = GenerationConfig::for_testing(1);
        config.height = 0;
        assert!(config.validate().is_err());

        let mut config = GenerationConfig::for_testing(1);
        config.room_min = RoomSize::new(0, 4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_padding_wider_than_map() {
        let mut config = GenerationConfig::for_testing(1);
        config.room_padding = 3_000_000_000;
        assert!(matches!(config.validate(), Err(DelveError::Configuration(_))));

        config.room_padding = 80;
        assert!(config.validate().is_err());

        config.room_padding = 79;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_wide_corridors() {
        let mut config = GenerationConfig::for_testing(1);
        for half_width in [3_000_000_000, 100_000, 30] {
            config.corridor_half_width = half_width;
            assert!(
                matches!(config.validate(), Err(DelveError::Configuration(_))),
                "accepted half width {half_width}"
            );
        }

        // 80x60 map: the narrower half extent is 30
        config.corridor_half_width = 29;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_oversized_map() {
        let mut config = GenerationConfig::for_testing(1);
        config.width = config::MAX_MAP_EXTENT + 1;
        assert!(matches!(config.validate(), Err(DelveError::Configuration(_))));

        config.width = config::MAX_MAP_EXTENT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GenerationConfig::new(99);
        let json = serde_json::to_string(&config).unwrap();
        let parsed = GenerationConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_json_invalid() {
        assert!(matches!(
            GenerationConfig::from_json_str("{\"seed\": 1}"),
            Err(DelveError::Serde(_))
        ));
    }

    #[test]
    fn test_room_geometry() {
        let room = Room::new(Cell::new(5, 5), 10, 8);

        assert_eq!(room.x_max(), 15);
        assert_eq!(room.y_max(), 13);
        assert_eq!(room.center(), Cell::new(10, 9));
        assert_eq!(room.area(), 80);

        assert!(room.contains(Cell::new(5, 5)));
        assert!(room.contains(Cell::new(14, 12)));
        assert!(!room.contains(Cell::new(15, 12)));
        assert!(!room.contains(Cell::new(4, 5)));

        assert!(room.is_perimeter(Cell::new(5, 7)));
        assert!(room.is_perimeter(Cell::new(14, 12)));
        assert!(!room.is_perimeter(Cell::new(7, 7)));
    }

    #[test]
    fn test_room_center_truncates() {
        let room = Room::new(Cell::new(-7, -3), 5, 3);
        assert_eq!(room.center(), Cell::new(-5, -2));
    }

    #[test]
    fn test_room_overlap() {
        let room1 = Room::new(Cell::new(5, 5), 10, 8);
        let room2 = Room::new(Cell::new(10, 8), 6, 6);
        let room3 = Room::new(Cell::new(20, 20), 5, 5);
        let touching = Room::new(Cell::new(15, 5), 3, 3);

        assert!(room1.overlaps(&room2));
        assert!(room2.overlaps(&room1));
        assert!(!room1.overlaps(&room3));
        assert!(!room1.overlaps(&touching));
        assert!(room1.padded(1).overlaps(&touching));
    }

    #[test]
    fn test_room_cells() {
        let room = Room::new(Cell::new(-1, -1), 3, 2);
        let cells: Vec<Cell> = room.cells().collect();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|&cell| room.contains(cell)));
    }

    #[test]
    fn test_padded_room() {
        let padded = Room::new(Cell::new(0, 0), 4, 3).padded(2);
        assert_eq!(padded.origin, Cell::new(-2, -2));
        assert_eq!(padded.width, 8);
        assert_eq!(padded.height, 7);
    }

    #[test]
    fn test_padded_room_saturates() {
        let padded = Room::new(Cell::new(-5, 5), 4, 3).padded(u32::MAX);
        assert_eq!(padded.origin, Cell::new(i32::MIN, 5 - i32::MAX));
        assert_eq!(padded.width, u32::MAX);
        assert_eq!(padded.height, u32::MAX);
    }
}
