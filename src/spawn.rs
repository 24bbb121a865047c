//! # Spawn Notification
//!
//! The orchestrator announces a ready spawn cell once per successful
//! generation. Consumers (player placement, camera or minimap followers)
//! receive it as a [`SpawnEvent`] instead of querying the generator.

use crate::config::TILE_CENTER_OFFSET;
use crate::grid::Cell;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;

/// A spawn cell ready to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnEvent {
    /// Cell the player should start on
    pub cell: Cell,
    /// Whether the cell is floor in the generated layout
    pub on_floor: bool,
}

/// Receiver of the post-generation spawn notification.
pub trait SpawnListener {
    fn on_spawn_ready(&mut self, event: &SpawnEvent);
}

impl SpawnListener for Sender<SpawnEvent> {
    fn on_spawn_ready(&mut self, event: &SpawnEvent) {
        if self.send(*event).is_err() {
            log::warn!("Spawn event for {} dropped: receiver disconnected", event.cell);
        }
    }
}

/// A position in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

/// Places the player at each announced spawn cell.
///
/// The first event creates the player, later events move it.
#[derive(Debug, Clone)]
pub struct PlayerSpawner {
    /// Offset added to a cell's corner, centering the player on the tile
    pub world_offset: (f32, f32),
    position: Option<WorldPoint>,
    spawn_count: u32,
}

impl PlayerSpawner {
    pub fn new() -> Self {
        Self::with_offset(TILE_CENTER_OFFSET)
    }

    pub fn with_offset(world_offset: (f32, f32)) -> Self {
        Self {
            world_offset,
            position: None,
            spawn_count: 0,
        }
    }

    /// Current player position, if one has been spawned.
    pub fn position(&self) -> Option<WorldPoint> {
        self.position
    }

    /// How many spawn events have been handled.
    pub fn spawn_count(&self) -> u32 {
        self.spawn_count
    }

    /// Converts a cell to the world position of its offset point.
    pub fn cell_to_world(&self, cell: Cell) -> WorldPoint {
        WorldPoint {
            x: cell.x as f32 + self.world_offset.0,
            y: cell.y as f32 + self.world_offset.1,
        }
    }

    /// Spawns or moves the player to the event's cell.
    pub fn spawn(&mut self, event: &SpawnEvent) -> WorldPoint {
        if !event.on_floor {
            log::warn!(
                "Spawn cell {} has no floor tile; generation may not have run",
                event.cell
            );
        }

        let point = self.cell_to_world(event.cell);
        match self.position {
            None => log::info!("Player spawned at {:?}", point),
            Some(previous) => log::debug!("Player moved from {:?} to {:?}", previous, point),
        }

        self.position = Some(point);
        self.spawn_count += 1;
        point
    }
}

impl Default for PlayerSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnListener for PlayerSpawner {
    fn on_spawn_ready(&mut self, event: &SpawnEvent) {
        self.spawn(event);
    }
}
