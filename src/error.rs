//! Error types for grid access, template loading and TMX export.

use std::io;

use crate::tile::Tile;

/// Errors raised by bounds-checked grid access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("tile ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// Errors raised while loading or validating a tile-set template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("template parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("terrain {terrain:?} has {found} tile ids, expected 16")]
    WrongVariantCount { terrain: Tile, found: usize },

    #[error("document template is missing placeholder {0}")]
    MissingPlaceholder(&'static str),
}

/// Errors raised by the export engine and the TMX writer.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("grid error: {0}")]
    Map(#[from] MapError),

    /// The 4-neighbour mask did not match any autotile slot.
    #[error("unmapped neighbour classification {0:#06b}")]
    UnmappedClassification(u8),

    #[error("template has no tile ids for {0:?}")]
    MissingTerrain(Tile),

    #[error("export I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}
