//! # Room Placement
//!
//! Rejection sampling of padded, non-overlapping rooms and selection of the
//! spawn cell.

use crate::config::PLACEMENT_ATTEMPTS_PER_ROOM;
use crate::grid::{Cell, FloorSet};
use crate::{GenerationConfig, Room};
use rand::Rng;

/// Rooms accepted by [`place_rooms`] and the attempts it spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPlacement {
    pub rooms: Vec<Room>,
    pub attempts: u32,
}

/// Places up to `config.room_count` rooms inside the map bounds.
///
/// Each attempt draws a width, a height, then an origin x and y, in that
/// order. A candidate is rejected when its padded bounds overlap any accepted
/// room. Accepted rooms are carved into `floor` immediately. Gives up after
/// `room_count * 60` attempts and returns whatever was accepted.
pub fn place_rooms<R: Rng>(config: &GenerationConfig, rng: &mut R, floor: &mut FloorSet) -> RoomPlacement {
    let target = config.room_count as usize;
    let max_attempts = config.room_count.saturating_mul(PLACEMENT_ATTEMPTS_PER_ROOM);
    let (half_w, half_h) = config.half_extents();

    let mut rooms: Vec<Room> = Vec::new();
    let mut attempts = 0;

    while rooms.len() < target && attempts < max_attempts {
        attempts += 1;

        let width = rng.gen_range(config.room_min.width..=config.room_max.width);
        let height = rng.gen_range(config.room_min.height..=config.room_max.height);
        let x = rng.gen_range(-half_w..half_w - width as i32);
        let y = rng.gen_range(-half_h..half_h - height as i32);

        let candidate = Room::new(Cell::new(x, y), width, height);
        let padded = candidate.padded(config.room_padding);
        if rooms.iter().any(|room| padded.overlaps(room)) {
            continue;
        }

        floor.insert_room(&candidate);
        rooms.push(candidate);
    }

    log::info!("Rooms placed: {}/{} (attempts: {})", rooms.len(), target, attempts);
    if rooms.len() < target {
        log::warn!(
            "Placement budget exhausted: {} of {} requested rooms accepted",
            rooms.len(),
            target
        );
    }

    RoomPlacement { rooms, attempts }
}

/// Center of the first accepted room, or the origin when there are none.
pub fn select_spawn(rooms: &[Room]) -> Cell {
    rooms.first().map(Room::center).unwrap_or_else(Cell::origin)
}
