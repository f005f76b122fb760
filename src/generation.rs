//! Room-and-corridor dungeon generation
//!
//! A small generator built only on the grid API: rooms are placed at random
//! where both layers are still clear, walled in on the `Structures`
//! layer with their floor on the `Ground` layer, then joined in placement
//! order by L-shaped corridors. Since the lowest non-empty layer is the one
//! shown, corridor floor on the ground punches through walls; the first wall
//! crossed by each corridor leg becomes a door.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::MapError;
use crate::geometry::Rect;
use crate::map::{Map, GROUND, STRUCTURES};
use crate::tile::Tile;

/// Parameters for room placement
#[derive(Clone, Debug)]
pub struct RoomsConfig {
    /// Stop once this many rooms are placed
    pub max_rooms: usize,
    /// Smallest room side, walls included
    pub min_size: i32,
    /// Largest room side, walls included
    pub max_size: i32,
    /// Placement attempts before giving up
    pub attempts: usize,
    /// Put up/down stairs in the first and last rooms
    pub stairs: bool,
}

impl Default for RoomsConfig {
    fn default() -> Self {
        Self {
            max_rooms: 8,
            min_size: 5,
            max_size: 11,
            attempts: 200,
            stairs: false,
        }
    }
}

/// A generated map and the rooms placed in it (outer wall rectangles)
pub struct Dungeon {
    pub map: Map,
    pub rooms: Vec<Rect>,
}

/// Generate a dungeon of rooms joined by corridors.
pub fn generate_rooms(
    width: usize,
    height: usize,
    config: &RoomsConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Dungeon, MapError> {
    let mut map = Map::new(width, height);
    let mut rooms: Vec<Rect> = Vec::new();
    let (map_w, map_h) = (width as i32, height as i32);

    for _ in 0..config.attempts {
        if rooms.len() >= config.max_rooms {
            break;
        }
        let w = rng.gen_range(config.min_size..=config.max_size);
        let h = rng.gen_range(config.min_size..=config.max_size);
        // Keep one empty cell between a room and the map edge
        if w + 2 > map_w || h + 2 > map_h {
            continue;
        }
        let area = Rect::new(rng.gen_range(1..=map_w - w - 1), rng.gen_range(1..=map_h - h - 1), w, h);
        let padded = area.expand(1);
        if !map.layer(STRUCTURES).is_clear(padded) || !map.layer(GROUND).is_clear(padded) {
            continue;
        }

        let (wall, floor) = if rng.gen_bool(0.25) {
            (Tile::Wall2, Tile::Room2)
        } else {
            (Tile::Wall, Tile::Room)
        };
        map.layer(STRUCTURES).rectangle(area, wall, false)?;
        map.layer(GROUND).rectangle(area.expand(-1), floor, true)?;
        debug!(x = area.x, y = area.y, w, h, "Placed room");
        rooms.push(area);
    }

    for pair in rooms.windows(2) {
        let (from, to) = (pair[0].center(), pair[1].center());
        let corner = (to.0, from.1);
        dig_corridor(&mut map, from, corner)?;
        dig_corridor(&mut map, corner, to)?;
    }

    if config.stairs {
        if let (Some(first), Some(last)) = (rooms.first(), rooms.last()) {
            let (ux, uy) = first.center();
            map.layer(GROUND).set(ux, uy, Tile::StairsUp)?;
            if rooms.len() > 1 {
                let (dx, dy) = last.center();
                map.layer(GROUND).set(dx, dy, Tile::StairsDown)?;
            }
        }
    }

    Ok(Dungeon { map, rooms })
}

/// Dig a straight corridor between two cells sharing a row or column.
fn dig_corridor(map: &mut Map, from: (i32, i32), to: (i32, i32)) -> Result<(), MapError> {
    let cells: Vec<(i32, i32)> = if from.1 == to.1 {
        (from.0.min(to.0)..=from.0.max(to.0)).map(|x| (x, from.1)).collect()
    } else {
        (from.1.min(to.1)..=from.1.max(to.1)).map(|y| (from.0, y)).collect()
    };

    let mut door_placed = false;
    for (x, y) in cells {
        if map.layer(GROUND).get(x, y)? != Tile::Nothing {
            continue;
        }
        let tile = if map.layer(STRUCTURES).get(x, y)?.is_wall() && !door_placed {
            door_placed = true;
            Tile::Door
        } else {
            Tile::Floor
        };
        map.layer(GROUND).set(x, y, tile)?;
    }
    Ok(())
}
