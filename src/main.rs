//! # Delve Command Line
//!
//! Generates a dungeon layout and prints it as ASCII, JSON or a short summary.

use clap::{Parser, ValueEnum};
use delve::{
    render_ascii, DelveResult, GenerationConfig, MemoryDungeonGenerator, MemoryTilemap,
    PlayerSpawner, TileId,
};
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::mpsc;

/// Output formats for a generated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Text map: '.' floor, '#' wall, '@' spawn
    Ascii,
    /// Full layout as JSON
    Json,
    /// Room, connection and tile counts
    Summary,
}

/// Command line arguments for the dungeon generator.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "Seeded room-and-corridor dungeon layout generator")]
#[command(version)]
struct Args {
    /// Random seed for layout generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file; other flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Map width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Map height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Number of rooms to place
    #[arg(short, long)]
    rooms: Option<u32>,

    /// Corridor radius (1 = 3 wide, 2 = 5 wide)
    #[arg(long)]
    corridor_half_width: Option<u32>,

    /// Probability of extra loop connections (0.0 to 0.5)
    #[arg(long)]
    extra_connection_chance: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    rooms_placed: usize,
    rooms_requested: u32,
    placement_attempts: u32,
    spanning_connections: usize,
    extra_connections: usize,
    floor_tiles: usize,
    wall_tiles: usize,
    spawn: delve::Cell,
}

fn main() -> DelveResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    info!("Starting delve v{}", delve::VERSION);

    let config = build_config(&args)?;
    info!("Generating layout with seed: {}", config.seed);

    let (tx, rx) = mpsc::channel();
    let mut generator = MemoryDungeonGenerator::new()
        .with_floor_layer(MemoryTilemap::new())
        .with_wall_layer(MemoryTilemap::new())
        .with_tiles(TileId(0), TileId(1))
        .with_spawn_listener(tx);

    let layout = generator.generate_seeded(&config)?;

    let mut spawner = PlayerSpawner::new();
    for event in rx.try_iter() {
        let point = spawner.spawn(&event);
        info!("Player placed at world ({}, {})", point.x, point.y);
    }

    match args.format {
        OutputFormat::Ascii => print!("{}", render_ascii(&layout.tiles, Some(layout.spawn))),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(layout)?),
        OutputFormat::Summary => {
            let summary = Summary {
                seed: config.seed,
                rooms_placed: layout.rooms.len(),
                rooms_requested: layout.requested_rooms,
                placement_attempts: layout.placement_attempts,
                spanning_connections: layout.spanning_connections,
                extra_connections: layout.extra_connections(),
                floor_tiles: layout.tiles.floor.len(),
                wall_tiles: layout.tiles.wall.len(),
                spawn: layout.spawn,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

/// Initializes env_logger; `RUST_LOG` takes precedence over `log_level`.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Starts from the config file (or defaults) and applies flag overrides.
fn build_config(args: &Args) -> DelveResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_json_file(path)?,
        None => GenerationConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(rooms) = args.rooms {
        config.room_count = rooms;
    }
    if let Some(half_width) = args.corridor_half_width {
        config.corridor_half_width = half_width;
    }
    if let Some(chance) = args.extra_connection_chance {
        config.extra_connection_chance = chance;
    }

    config.validate()?;
    Ok(config)
}
