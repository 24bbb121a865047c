//! Property tests for layout generation invariants.

use delve::generation::utils;
use delve::{
    carve_connections, door_point_facing, generate_layout, place_rooms, plan_connections,
    validate_layout, Cell, FloorSet, GenerationConfig, RoomSize,
};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = GenerationConfig> {
    (
        any::<u64>(),
        60u32..160,
        60u32..160,
        0u32..12,
        (3u32..8, 3u32..8),
        (0u32..8, 0u32..8),
        0u32..4,
        0u32..3,
        0.0f64..=0.5,
    )
        .prop_map(
            |(seed, width, height, room_count, (min_w, min_h), (grow_w, grow_h), padding, half_width, chance)| {
                GenerationConfig {
                    seed,
                    width,
                    height,
                    room_count,
                    room_min: RoomSize::new(min_w, min_h),
                    room_max: RoomSize::new(min_w + grow_w, min_h + grow_h),
                    room_padding: padding,
                    corridor_half_width: half_width,
                    extra_connection_chance: chance,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_padded_rooms_never_overlap(config in config_strategy()) {
        let layout = generate_layout(&config, &mut utils::create_rng(&config)).unwrap();
        for (i, a) in layout.rooms.iter().enumerate() {
            for b in &layout.rooms[i + 1..] {
                prop_assert!(!a.padded(config.room_padding).overlaps(b));
                prop_assert!(!b.padded(config.room_padding).overlaps(a));
            }
        }
    }

    #[test]
    fn prop_walls_are_exact_floor_boundary(config in config_strategy()) {
        let layout = generate_layout(&config, &mut utils::create_rng(&config)).unwrap();
        let Some((min, max)) = layout.floor.bounds() else {
            prop_assert!(layout.tiles.wall.is_empty());
            return Ok(());
        };

        for x in min.x - 2..=max.x + 2 {
            for y in min.y - 2..=max.y + 2 {
                let cell = Cell::new(x, y);
                let expected = !layout.floor.contains(cell)
                    && cell.cardinal_neighbors().iter().any(|&n| layout.floor.contains(n));
                prop_assert_eq!(layout.tiles.is_wall(cell), expected, "cell {}", cell);
            }
        }
        prop_assert!(layout.tiles.floor.is_disjoint(&layout.tiles.wall));
    }

    #[test]
    fn prop_all_rooms_reachable(config in config_strategy()) {
        let layout = generate_layout(&config, &mut utils::create_rng(&config)).unwrap();
        prop_assert!(validate_layout(&layout, true).is_ok());
    }

    #[test]
    fn prop_connection_counts_bounded(config in config_strategy()) {
        let layout = generate_layout(&config, &mut utils::create_rng(&config)).unwrap();
        let n = layout.rooms.len();
        if n < 2 {
            prop_assert!(layout.connections.is_empty());
        } else {
            prop_assert_eq!(layout.spanning_connections, n - 1);
            prop_assert!(layout.connections.len() >= n - 1);
            prop_assert!(layout.connections.len() <= n * (n - 1) / 2);
        }
    }

    #[test]
    fn prop_generation_is_deterministic(config in config_strategy()) {
        let first = generate_layout(&config, &mut utils::create_rng(&config)).unwrap();
        let second = generate_layout(&config, &mut utils::create_rng(&config)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_floor_only_grows(config in config_strategy()) {
        let mut rng = utils::create_rng(&config);
        let mut floor = FloorSet::new();

        let placement = place_rooms(&config, &mut rng, &mut floor);
        let after_rooms = floor.clone();

        let plan = plan_connections(&placement.rooms, config.extra_connection_chance, &mut rng);
        carve_connections(
            &placement.rooms,
            &plan.connections,
            config.corridor_half_width,
            &mut rng,
            &mut floor,
        );

        prop_assert!(after_rooms.is_subset(&floor));
        for connection in &plan.connections {
            let a = &placement.rooms[connection.a];
            let b = &placement.rooms[connection.b];
            prop_assert!(floor.contains(door_point_facing(a, b.center())));
            prop_assert!(floor.contains(door_point_facing(b, a.center())));
        }

        // Staged run matches the one-shot pipeline
        let layout = generate_layout(&config, &mut utils::create_rng(&config)).unwrap();
        prop_assert_eq!(layout.floor, floor);
    }
}
