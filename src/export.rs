//! Autotile export engine
//!
//! Converts the visible tiles of a map into tile-set ids for a TMX document:
//! - empty cells use the template's nothing id
//! - doors pick a horizontal or vertical id from their left neighbour
//! - terrain either uses its centre id or an autotile variant chosen from
//!   its four orthogonal neighbours
//!
//! Export only reads the map, so rows are classified in parallel.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::autotile::{classify, Neighbors};
use crate::error::ExportError;
use crate::map::Map;
use crate::error::TemplateError;
use crate::template::{TmxTemplate, VARIANT_COUNT};
use crate::tile::Tile;

/// Separator between ids in the exported CSV
pub const CSV_SEPARATOR: &str = ",";

/// Output of an export: map dimensions and the row-major tile ids
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TmxExport {
    pub width: usize,
    pub height: usize,
    pub csv: String,
}

impl TmxExport {
    /// The exported ids, row-major.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.csv.split(CSV_SEPARATOR)
    }
}

/// Tile id for the visible tile at `(x, y)`.
pub fn tile_id<'a>(map: &Map, template: &'a TmxTemplate, x: i32, y: i32) -> Result<&'a str, ExportError> {
    let tile = map.resolve_visible(x, y)?;
    match tile {
        Tile::Nothing => Ok(template.nothing_id.as_str()),
        Tile::Door => {
            // A wall (or the map edge) on the left means the door spans a horizontal wall
            let horizontal = map.resolve_visible(x - 1, y).map_or(true, |left| left.is_wall());
            Ok(if horizontal { template.door_h.as_str() } else { template.door_v.as_str() })
        }
        _ => {
            let terrain = template.terrain(tile).ok_or(ExportError::MissingTerrain(tile))?;
            if terrain.ids.len() != VARIANT_COUNT {
                return Err(TemplateError::WrongVariantCount { terrain: tile, found: terrain.ids.len() }.into());
            }
            if !terrain.autotile {
                return Ok(terrain.center());
            }
            let slot = classify(Neighbors::of(map, x, y, tile))?;
            Ok(terrain.id(slot))
        }
    }
}

/// Export every visible tile of the map through `template`.
///
/// The template is validated first, so a malformed terrain fails the export
/// even when no cell uses it.
pub fn populate(map: &Map, template: &TmxTemplate) -> Result<TmxExport, ExportError> {
    template.validate()?;
    info!(width = map.width, height = map.height, template = %template.name, "Exporting map");

    let rows = (0..map.height)
        .into_par_iter()
        .map(|y| {
            (0..map.width)
                .map(|x| tile_id(map, template, x as i32, y as i32))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, ExportError>>()?;

    let ids: Vec<&str> = rows.into_iter().flatten().collect();
    debug!(tiles = ids.len(), "Classified tiles");

    Ok(TmxExport {
        width: map.width,
        height: map.height,
        csv: ids.join(CSV_SEPARATOR),
    })
}
