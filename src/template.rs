//! Tile-set templates for TMX export
//!
//! A template maps tiles to the tile ids of a particular tile set. Terrain
//! tiles carry 16 ids, one per autotile slot (see `autotile::AutotileSlot`):
//! centre, the 8 edges/corners clockwise from the top, horizontal, vertical,
//! the 4 end caps clockwise from the top, then isolated.
//!
//! Templates are plain values; load one from JSON or use a built-in preset.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::autotile::AutotileSlot;
use crate::error::TemplateError;
use crate::tile::Tile;

/// Number of autotile variants per terrain
pub const VARIANT_COUNT: usize = 16;

/// Tile ids for one terrain type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainIds {
    /// 16 ids in autotile slot order
    pub ids: Vec<String>,
    /// Pick a variant from the neighbours; otherwise always use the centre id
    #[serde(default = "default_autotile")]
    pub autotile: bool,
}

fn default_autotile() -> bool {
    true
}

impl TerrainIds {
    pub fn new(ids: [&str; VARIANT_COUNT], autotile: bool) -> Self {
        Self {
            ids: ids.iter().map(|s| s.to_string()).collect(),
            autotile,
        }
    }

    pub fn id(&self, slot: AutotileSlot) -> &str {
        &self.ids[slot.index()]
    }

    pub fn center(&self) -> &str {
        self.id(AutotileSlot::Center)
    }
}

/// Configuration for TMX export with a particular tile set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmxTemplate {
    /// Name of the tile set; also the asset directory name
    pub name: String,
    /// Id written for empty cells
    pub nothing_id: String,
    /// Door with walls to its left and right
    pub door_h: String,
    /// Door with walls above and below
    pub door_v: String,
    pub terrains: BTreeMap<Tile, TerrainIds>,
}

impl TmxTemplate {
    /// The DawnLike 16x16 tile set.
    pub fn dawnlike() -> Self {
        let mut terrains = BTreeMap::new();
        terrains.insert(Tile::Floor, TerrainIds::new(
            ["1421", "1400", "1401", "1422", "1443", "1442", "1441", "1420", "1399", "1425", "1423", "1402", "1426", "1444", "1424", "1404"],
            false,
        ));
        terrains.insert(Tile::Floor2, TerrainIds::new(
            ["1176", "1155", "1156", "1177", "1198", "1197", "1196", "1175", "1154", "1180", "1178", "1157", "1181", "1199", "1179", "1159"],
            true,
        ));
        terrains.insert(Tile::Wall, TerrainIds::new(
            ["92", "72", "70", "93", "110", "112", "108", "91", "68", "69", "88", "88", "110", "89", "108", "71"],
            true,
        ));
        terrains.insert(Tile::Wall2, TerrainIds::new(
            ["85", "65", "63", "86", "103", "105", "101", "84", "61", "62", "81", "81", "103", "82", "101", "64"],
            true,
        ));
        terrains.insert(Tile::Room, TerrainIds::new(
            ["1428", "1407", "1408", "1429", "1450", "1449", "1448", "1427", "1406", "1432", "1430", "1409", "1433", "1451", "1431", "1411"],
            true,
        ));
        terrains.insert(Tile::Room2, TerrainIds::new(
            ["1232", "1211", "1212", "1233", "1254", "1253", "1252", "1231", "1210", "1236", "1234", "1213", "1237", "1255", "1235", "1215"],
            true,
        ));

        Self {
            name: "dawnlike".to_string(),
            nothing_id: "1031".to_string(),
            door_h: "2096".to_string(),
            door_v: "2097".to_string(),
            terrains,
        }
    }

    /// Load and validate a template from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate a template from JSON text.
    pub fn from_json(text: &str) -> Result<Self, TemplateError> {
        let template: TmxTemplate = serde_json::from_str(text)?;
        template.validate()?;
        Ok(template)
    }

    /// Check every terrain has exactly one id per autotile slot.
    pub fn validate(&self) -> Result<(), TemplateError> {
        for (&terrain, ids) in &self.terrains {
            if ids.ids.len() != VARIANT_COUNT {
                return Err(TemplateError::WrongVariantCount {
                    terrain,
                    found: ids.ids.len(),
                });
            }
        }
        Ok(())
    }

    pub fn terrain(&self, tile: Tile) -> Option<&TerrainIds> {
        self.terrains.get(&tile)
    }
}

impl Default for TmxTemplate {
    fn default() -> Self {
        Self::dawnlike()
    }
}
