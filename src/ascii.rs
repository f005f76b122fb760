//! ASCII rendering and export module for dungeon maps
//!
//! Provides functions to render the visible tiles of a map as bordered ASCII
//! text and to export that rendering with a header and legend to a file.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::error::MapError;
use crate::map::Map;
use crate::tile::Tile;

/// Horizontal frame line: `+` then `-` per column then `+`
fn frame_line(width: usize) -> String {
    format!("+{}+", "-".repeat(width))
}

/// Render the visible tiles inside a `+-|` frame, one map row per line.
/// A map with no rows renders as nothing, frame included.
pub fn render_ascii_map(map: &Map) -> Result<String, MapError> {
    if map.height == 0 {
        return Ok(String::new());
    }
    let mut output = String::with_capacity((map.width + 3) * (map.height + 2));
    output.push_str(&frame_line(map.width));
    output.push('\n');

    for y in 0..map.height {
        output.push('|');
        for x in 0..map.width {
            output.push(map.resolve_visible(x as i32, y as i32)?.to_char());
        }
        output.push('|');
        output.push('\n');
    }

    output.push_str(&frame_line(map.width));
    output.push('\n');
    Ok(output)
}

/// Print the map to stdout.
pub fn print_map(map: &Map) -> Result<(), MapError> {
    print!("{}", render_ascii_map(map)?);
    Ok(())
}

/// Legend of the tiles present in the map, with counts.
pub fn tile_legend(map: &Map) -> Result<String, MapError> {
    let mut counts: BTreeMap<Tile, usize> = BTreeMap::new();
    for cell in map.visible_tiles() {
        let (_, _, tile) = cell?;
        *counts.entry(tile).or_insert(0) += 1;
    }

    let mut legend = String::from("=== LEGEND ===\n");
    for (tile, count) in counts {
        legend.push_str(&format!("  '{}' {:<12} {}\n", tile.to_char(), tile.name(), count));
    }
    Ok(legend)
}

/// Export the map as an annotated ASCII file.
pub fn export_ascii_file(map: &Map, seed: Option<u64>, path: impl AsRef<Path>) -> io::Result<()> {
    let to_io = |e: MapError| io::Error::new(io::ErrorKind::InvalidData, e);
    let mut file = File::create(path)?;

    writeln!(file, "=== DUNGEON MAP ===")?;
    if let Some(seed) = seed {
        writeln!(file, "Seed: {}", seed)?;
    }
    writeln!(file, "Size: {}x{}", map.width, map.height)?;
    let names: Vec<_> = map.layers().iter().map(|l| l.name()).collect();
    writeln!(file, "Layers: {}", names.join(", "))?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;

    write!(file, "{}", render_ascii_map(map).map_err(to_io)?)?;
    writeln!(file)?;
    write!(file, "{}", tile_legend(map).map_err(to_io)?)?;
    Ok(())
}
