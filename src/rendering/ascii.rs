//! # ASCII Rendering
//!
//! Dumps derived tile layers as text, one character per cell.

use crate::grid::{Cell, TileLayers};

/// Character for floor cells.
pub const FLOOR_GLYPH: char = '.';
/// Character for wall cells.
pub const WALL_GLYPH: char = '#';
/// Character for the spawn cell.
pub const SPAWN_GLYPH: char = '@';
/// Character for cells that are neither floor nor wall.
pub const EMPTY_GLYPH: char = ' ';

/// Renders the bounding box of all floor and wall cells.
///
/// The first line is the highest `y`. Trailing blanks are trimmed from each
/// line. Returns an empty string for empty layers.
///
/// # Examples
///
/// ```
/// use delve::{render_ascii, Cell, FloorSet, TileLayers};
///
/// let floor: FloorSet = [Cell::new(0, 0), Cell::new(1, 0)].into_iter().collect();
/// let text = render_ascii(&TileLayers::derive(&floor), Some(Cell::new(0, 0)));
/// assert_eq!(text, " ##\n#@.#\n ##\n");
/// ```
pub fn render_ascii(layers: &TileLayers, spawn: Option<Cell>) -> String {
    let Some((min, max)) = bounds(layers) else {
        return String::new();
    };

    let width = (max.x - min.x + 1) as usize;
    let mut output = String::with_capacity((width + 1) * (max.y - min.y + 1) as usize);

    for y in (min.y..=max.y).rev() {
        let mut line = String::with_capacity(width);
        for x in min.x..=max.x {
            line.push(glyph_at(layers, spawn, Cell::new(x, y)));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

fn glyph_at(layers: &TileLayers, spawn: Option<Cell>, cell: Cell) -> char {
    if spawn == Some(cell) {
        SPAWN_GLYPH
    } else if layers.is_floor(cell) {
        FLOOR_GLYPH
    } else if layers.is_wall(cell) {
        WALL_GLYPH
    } else {
        EMPTY_GLYPH
    }
}

fn bounds(layers: &TileLayers) -> Option<(Cell, Cell)> {
    layers
        .floor
        .iter()
        .chain(layers.wall.iter())
        .fold(None, |acc: Option<(Cell, Cell)>, &cell| {
            Some(match acc {
                None => (cell, cell),
                Some((min, max)) => (
                    Cell::new(min.x.min(cell.x), min.y.min(cell.y)),
                    Cell::new(max.x.max(cell.x), max.y.max(cell.y)),
                ),
            })
        })
}
