//! # Dungeon Generation
//!
//! Runs the layout pipeline in its fixed order:
//!
//! 1. Place rooms
//! 2. Pick the spawn cell
//! 3. Connect rooms (spanning tree plus extra loops) and carve corridors
//! 4. Derive floor and wall tiles
//!
//! [`generate_layout`] is the pure form of the pipeline. [`DungeonGenerator`]
//! wraps it with the caller's tile layers, tile ids and spawn listener, and
//! paints the result.

use super::connectivity::connect_rooms;
use super::rooms::{place_rooms, select_spawn};
use super::Connection;
use crate::grid::{Cell, FloorSet, MemoryTilemap, TileId, TileLayers, TileTarget};
use crate::spawn::{SpawnEvent, SpawnListener};
use crate::utils::reachable_floor;
use crate::{generation::utils, DelveError, DelveResult, GenerationConfig, Generator, Room};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Non-fatal conditions observed while generating a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutNotice {
    /// The attempt budget ran out before every requested room was placed
    UnderProvisioned { placed: usize, requested: usize },
    /// Fewer than two rooms were placed, so nothing was connected
    Degenerate { rooms: usize },
}

/// Everything one generation pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonLayout {
    /// Every walkable cell
    pub floor: FloorSet,
    /// Accepted rooms, in acceptance order
    pub rooms: Vec<Room>,
    /// Spanning-tree connections first, then extras
    pub connections: Vec<Connection>,
    /// How many leading entries of `connections` form the spanning tree
    pub spanning_connections: usize,
    /// Player start cell
    pub spawn: Cell,
    /// Floor and wall classification of `floor`
    pub tiles: TileLayers,
    /// Rooms the configuration asked for
    pub requested_rooms: u32,
    /// Placement attempts spent
    pub placement_attempts: u32,
    pub notices: Vec<LayoutNotice>,
}

impl DungeonLayout {
    pub fn extra_connections(&self) -> usize {
        self.connections.len() - self.spanning_connections
    }

    pub fn is_under_provisioned(&self) -> bool {
        self.notices
            .iter()
            .any(|notice| matches!(notice, LayoutNotice::UnderProvisioned { .. }))
    }

    pub fn is_degenerate(&self) -> bool {
        self.notices
            .iter()
            .any(|notice| matches!(notice, LayoutNotice::Degenerate { .. }))
    }
}

/// Pipeline stages of the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenerationPhase {
    /// No generation in progress
    #[default]
    Idle,
    /// Rooms are being placed
    Placing,
    /// The spawn cell has been chosen
    SpawnSelected,
    /// Connections are being chosen and carved
    Connecting,
    /// All corridors are carved
    Carved,
    /// Tiles have been painted into the bound layers
    Painted,
}

/// Runs the pipeline on an already validated configuration, reporting each
/// phase as it is entered.
fn build_layout<R: Rng>(
    config: &GenerationConfig,
    rng: &mut R,
    mut enter: impl FnMut(GenerationPhase),
) -> DungeonLayout {
    let mut floor = FloorSet::new();
    let mut notices = Vec::new();

    enter(GenerationPhase::Placing);
    let placement = place_rooms(config, rng, &mut floor);
    let rooms = placement.rooms;
    if rooms.len() < config.room_count as usize {
        notices.push(LayoutNotice::UnderProvisioned {
            placed: rooms.len(),
            requested: config.room_count as usize,
        });
    }

    let spawn = select_spawn(&rooms);
    enter(GenerationPhase::SpawnSelected);

    enter(GenerationPhase::Connecting);
    if rooms.len() < 2 {
        log::warn!("Only {} room(s) placed; no corridors carved", rooms.len());
        notices.push(LayoutNotice::Degenerate { rooms: rooms.len() });
    }
    let plan = connect_rooms(
        &rooms,
        config.extra_connection_chance,
        config.corridor_half_width,
        rng,
        &mut floor,
    );
    enter(GenerationPhase::Carved);

    let tiles = TileLayers::derive(&floor);

    DungeonLayout {
        floor,
        rooms,
        connections: plan.connections,
        spanning_connections: plan.spanning,
        spawn,
        tiles,
        requested_rooms: config.room_count,
        placement_attempts: placement.attempts,
        notices,
    }
}

/// Generates a complete layout from `config`, drawing only from `rng`.
///
/// The same configuration and generator state always produce the same
/// layout.
///
/// # Examples
///
/// ```
/// use delve::{generate_layout, generation::utils, GenerationConfig};
///
/// let config = GenerationConfig::for_testing(12345);
/// let layout = generate_layout(&config, &mut utils::create_rng(&config)).unwrap();
/// assert!(layout.floor.contains(layout.spawn));
/// ```
pub fn generate_layout<R: Rng>(config: &GenerationConfig, rng: &mut R) -> DelveResult<DungeonLayout> {
    config.validate()?;
    Ok(build_layout(config, rng, |_| {}))
}

/// Checks structural guarantees of a layout.
///
/// With `ensure_connectivity`, every room center must be reachable from the
/// spawn cell over orthogonally connected floor.
pub fn validate_layout(layout: &DungeonLayout, ensure_connectivity: bool) -> DelveResult<()> {
    if layout.rooms.is_empty() {
        return Ok(());
    }

    if layout.floor.is_empty() {
        return Err(DelveError::GenerationFailed(
            "Layout has rooms but no floor cells".to_string(),
        ));
    }

    if !layout.floor.contains(layout.spawn) {
        return Err(DelveError::GenerationFailed(format!(
            "Spawn cell {} is not floor",
            layout.spawn
        )));
    }

    if layout.tiles.floor.len() != layout.floor.len() {
        return Err(DelveError::GenerationFailed(
            "Floor tile layer does not match the floor set".to_string(),
        ));
    }

    if ensure_connectivity {
        let reached = reachable_floor(&layout.floor, layout.spawn);
        if let Some(index) = layout
            .rooms
            .iter()
            .position(|room| !reached.contains(&room.center()))
        {
            return Err(DelveError::GenerationFailed(format!(
                "Room {} is not connected to the spawn room",
                index
            )));
        }
    }

    Ok(())
}

/// Pure layout generator behind the [`Generator`] trait.
#[derive(Debug, Clone)]
pub struct LayoutGenerator {
    /// Whether to reject layouts with unreachable rooms
    pub ensure_connectivity: bool,
}

impl LayoutGenerator {
    pub fn new() -> Self {
        Self {
            ensure_connectivity: true,
        }
    }
}

impl Default for LayoutGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<DungeonLayout> for LayoutGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<DungeonLayout> {
        let layout = generate_layout(config, rng)?;
        self.validate(&layout, config)?;
        Ok(layout)
    }

    fn validate(&self, layout: &DungeonLayout, _config: &GenerationConfig) -> DelveResult<()> {
        validate_layout(layout, self.ensure_connectivity)
    }

    fn generator_type(&self) -> &'static str {
        "LayoutGenerator"
    }
}

/// Orchestrator that generates layouts into caller-bound tile layers.
///
/// Floor and wall layers, both tile ids and (optionally) a spawn listener
/// are bound before generating. Every call to [`generate`](Self::generate)
/// starts over from [`GenerationPhase::Idle`], clears both layers and
/// replaces the previous layout. A failed call leaves layers and layout
/// untouched.
pub struct DungeonGenerator<F: TileTarget, W: TileTarget> {
    floor_layer: Option<F>,
    wall_layer: Option<W>,
    floor_tile: Option<TileId>,
    wall_tile: Option<TileId>,
    spawn_listener: Option<Box<dyn SpawnListener>>,
    /// Whether to reject layouts with unreachable rooms
    pub ensure_connectivity: bool,
    phase: GenerationPhase,
    layout: Option<DungeonLayout>,
}

/// Orchestrator painting into in-memory tile maps.
pub type MemoryDungeonGenerator = DungeonGenerator<MemoryTilemap, MemoryTilemap>;

impl<F: TileTarget, W: TileTarget> DungeonGenerator<F, W> {
    /// Creates an orchestrator with nothing bound.
    pub fn new() -> Self {
        Self {
            floor_layer: None,
            wall_layer: None,
            floor_tile: None,
            wall_tile: None,
            spawn_listener: None,
            ensure_connectivity: true,
            phase: GenerationPhase::Idle,
            layout: None,
        }
    }

    pub fn with_floor_layer(mut self, layer: F) -> Self {
        self.floor_layer = Some(layer);
        self
    }

    pub fn with_wall_layer(mut self, layer: W) -> Self {
        self.wall_layer = Some(layer);
        self
    }

    pub fn with_tiles(mut self, floor_tile: TileId, wall_tile: TileId) -> Self {
        self.floor_tile = Some(floor_tile);
        self.wall_tile = Some(wall_tile);
        self
    }

    pub fn with_spawn_listener(mut self, listener: impl SpawnListener + 'static) -> Self {
        self.spawn_listener = Some(Box::new(listener));
        self
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn floor_layer(&self) -> Option<&F> {
        self.floor_layer.as_ref()
    }

    pub fn wall_layer(&self) -> Option<&W> {
        self.wall_layer.as_ref()
    }

    /// The layout of the last successful generation.
    pub fn layout(&self) -> Option<&DungeonLayout> {
        self.layout.as_ref()
    }

    /// The spawn cell of the last successful generation.
    pub fn spawn_cell(&self) -> Option<Cell> {
        self.layout.as_ref().map(|layout| layout.spawn)
    }

    /// Names of required bindings that are still missing.
    fn missing_bindings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.floor_layer.is_none() {
            missing.push("floor layer");
        }
        if self.wall_layer.is_none() {
            missing.push("wall layer");
        }
        if self.floor_tile.is_none() {
            missing.push("floor tile");
        }
        if self.wall_tile.is_none() {
            missing.push("wall tile");
        }
        missing
    }

    /// Generates a fresh layout, paints it and notifies the spawn listener.
    pub fn generate(&mut self, config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<&DungeonLayout> {
        self.phase = GenerationPhase::Idle;

        let missing = self.missing_bindings();
        if !missing.is_empty() {
            let message = format!("missing bindings: {}", missing.join(", "));
            log::error!("Dungeon generation aborted: {}", message);
            return Err(DelveError::Configuration(message));
        }

        if let Err(err) = config.validate() {
            log::error!("Dungeon generation aborted: {}", err);
            return Err(err);
        }

        let phase = &mut self.phase;
        let layout = build_layout(config, rng, |next| {
            log::debug!("Generation phase {:?} -> {:?}", *phase, next);
            *phase = next;
        });

        if let Err(err) = validate_layout(&layout, self.ensure_connectivity) {
            log::error!("Generated layout rejected: {}", err);
            self.phase = GenerationPhase::Idle;
            return Err(err);
        }

        let (Some(floor_layer), Some(wall_layer), Some(floor_tile), Some(wall_tile)) = (
            self.floor_layer.as_mut(),
            self.wall_layer.as_mut(),
            self.floor_tile,
            self.wall_tile,
        ) else {
            return Err(DelveError::Configuration("missing bindings".to_string()));
        };

        floor_layer.clear_all();
        wall_layer.clear_all();
        layout.tiles.paint(floor_layer, floor_tile, wall_layer, wall_tile);
        log::debug!("Generation phase {:?} -> {:?}", self.phase, GenerationPhase::Painted);
        self.phase = GenerationPhase::Painted;

        log::info!(
            "Generated layout: {} rooms, {} connections, {} floor / {} wall tiles, spawn {}",
            layout.rooms.len(),
            layout.connections.len(),
            layout.tiles.floor.len(),
            layout.tiles.wall.len(),
            layout.spawn
        );

        let event = SpawnEvent {
            cell: layout.spawn,
            on_floor: layout.floor.contains(layout.spawn),
        };
        let layout = &*self.layout.insert(layout);
        if let Some(listener) = self.spawn_listener.as_mut() {
            listener.on_spawn_ready(&event);
        }
        self.phase = GenerationPhase::Idle;

        Ok(layout)
    }

    /// Generates with a fresh generator seeded from `config.seed`.
    pub fn generate_seeded(&mut self, config: &GenerationConfig) -> DelveResult<&DungeonLayout> {
        let mut rng = utils::create_rng(config);
        self.generate(config, &mut rng)
    }
}

impl<F: TileTarget, W: TileTarget> Default for DungeonGenerator<F, W> {
    fn default() -> Self {
        Self::new()
    }
}
