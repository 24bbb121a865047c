//! # Room Connectivity
//!
//! Builds the set of room pairs that get corridors: a Kruskal minimum
//! spanning tree over room centers, plus randomly chosen extra edges that
//! introduce loops. Each connection is then carved between door points on the
//! facing sides of its two rooms.

use super::corridors::carve_corridor;
use crate::grid::{Cell, FloorSet};
use crate::utils::{dominant_axis, Axis, DisjointSet};
use crate::Room;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A candidate room pair weighted by center-to-center distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomEdge {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

/// An accepted pair of room indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
}

impl Connection {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Whether this connection joins `a` and `b`, in either order.
    pub fn joins(&self, a: usize, b: usize) -> bool {
        (self.a == a && self.b == b) || (self.a == b && self.b == a)
    }
}

/// Connections chosen for a layout.
///
/// The first `spanning` entries form the spanning tree, the rest are extras.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionPlan {
    pub connections: Vec<Connection>,
    pub spanning: usize,
}

impl ConnectionPlan {
    pub fn extra(&self) -> usize {
        self.connections.len() - self.spanning
    }
}

/// Every room pair `(i, j)` with `i < j`, sorted by ascending center distance.
///
/// The sort is stable, so equal distances keep `(i, j)` enumeration order.
pub fn room_edges(rooms: &[Room]) -> Vec<RoomEdge> {
    let centers: Vec<Cell> = rooms.iter().map(Room::center).collect();

    let mut edges = Vec::with_capacity(rooms.len() * rooms.len().saturating_sub(1) / 2);
    for (a, &center_a) in centers.iter().enumerate() {
        for (offset, &center_b) in centers[a + 1..].iter().enumerate() {
            edges.push(RoomEdge {
                a,
                b: a + 1 + offset,
                distance: center_a.euclidean_distance(center_b),
            });
        }
    }

    edges.sort_by(|x, y| x.distance.total_cmp(&y.distance));
    edges
}

/// Kruskal selection over pre-sorted `edges`.
///
/// Stops as soon as `room_count - 1` edges are accepted.
pub fn spanning_tree(edges: &[RoomEdge], room_count: usize) -> Vec<Connection> {
    let wanted = room_count.saturating_sub(1);
    let mut sets = DisjointSet::new(room_count);
    let mut chosen = Vec::with_capacity(wanted);

    for edge in edges {
        if chosen.len() >= wanted {
            break;
        }
        if sets.union(edge.a, edge.b) {
            chosen.push(Connection::new(edge.a, edge.b));
        }
    }

    chosen
}

/// Rolls once per edge, in sorted order, and appends edges whose roll falls
/// below `chance` and which are not connected yet.
pub fn add_extra_connections<R: Rng>(
    edges: &[RoomEdge],
    chance: f64,
    rng: &mut R,
    connections: &mut Vec<Connection>,
) {
    for edge in edges {
        let roll: f64 = rng.gen();
        if roll >= chance {
            continue;
        }
        if connections.iter().any(|c| c.joins(edge.a, edge.b)) {
            continue;
        }
        connections.push(Connection::new(edge.a, edge.b));
    }
}

/// Chooses spanning and extra connections for `rooms`.
///
/// Fewer than two rooms yields an empty plan and draws nothing.
pub fn plan_connections<R: Rng>(rooms: &[Room], extra_chance: f64, rng: &mut R) -> ConnectionPlan {
    if rooms.len() < 2 {
        return ConnectionPlan::default();
    }

    let edges = room_edges(rooms);
    let mut connections = spanning_tree(&edges, rooms.len());
    let spanning = connections.len();
    add_extra_connections(&edges, extra_chance, rng, &mut connections);

    log::info!(
        "Connections: {} spanning + {} extra over {} candidate edges",
        spanning,
        connections.len() - spanning,
        edges.len()
    );

    ConnectionPlan {
        connections,
        spanning,
    }
}

/// Picks a cell on the side of `room` that faces `target`.
///
/// When the horizontal offset from the room center dominates (ties
/// included) the door sits on the left or right column, at `target.y`
/// clamped into the room. Otherwise it sits on the bottom or top row at
/// `target.x` clamped into the room.
pub fn door_point_facing(room: &Room, target: Cell) -> Cell {
    let delta = target - room.center();

    match dominant_axis(delta) {
        Axis::Horizontal => {
            let x = if delta.x >= 0 { room.x_max() - 1 } else { room.x_min() };
            let y = target.y.clamp(room.y_min(), room.y_max() - 1);
            Cell::new(x, y)
        }
        Axis::Vertical => {
            let y = if delta.y >= 0 { room.y_max() - 1 } else { room.y_min() };
            let x = target.x.clamp(room.x_min(), room.x_max() - 1);
            Cell::new(x, y)
        }
    }
}

/// Steps one cell from `door` along the dominant axis toward `toward`.
///
/// A zero offset steps right; ties step horizontally.
pub fn step_outside(door: Cell, toward: Cell) -> Cell {
    let delta = toward - door;
    if delta == Cell::origin() {
        return door + Cell::new(1, 0);
    }

    let step = match dominant_axis(delta) {
        Axis::Horizontal => Cell::new(if delta.x >= 0 { 1 } else { -1 }, 0),
        Axis::Vertical => Cell::new(0, if delta.y >= 0 { 1 } else { -1 }),
    };
    door + step
}

/// Carves every connection in order.
///
/// Both door cells become floor before the corridor between the two
/// outward-stepped cells is carved.
pub fn carve_connections<R: Rng>(
    rooms: &[Room],
    connections: &[Connection],
    half_width: u32,
    rng: &mut R,
    floor: &mut FloorSet,
) {
    for connection in connections {
        let room_a = &rooms[connection.a];
        let room_b = &rooms[connection.b];
        let center_a = room_a.center();
        let center_b = room_b.center();

        let door_a = door_point_facing(room_a, center_b);
        let door_b = door_point_facing(room_b, center_a);
        let start = step_outside(door_a, center_b);
        let end = step_outside(door_b, center_a);

        floor.insert(door_a);
        floor.insert(door_b);

        log::debug!(
            "Carving {} -> {}: doors {} / {}, corridor {} -> {}",
            connection.a,
            connection.b,
            door_a,
            door_b,
            start,
            end
        );
        carve_corridor(start, end, half_width, rng, floor);
    }
}

/// Plans and carves all connections between `rooms`.
pub fn connect_rooms<R: Rng>(
    rooms: &[Room],
    extra_chance: f64,
    half_width: u32,
    rng: &mut R,
    floor: &mut FloorSet,
) -> ConnectionPlan {
    let plan = plan_connections(rooms, extra_chance, rng);
    carve_connections(rooms, &plan.connections, half_width, rng, floor);
    plan
}
