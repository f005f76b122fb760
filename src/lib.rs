//! Layered dungeon tile maps with TMX export
//!
//! Re-exports modules for use by the binary and tools.

pub mod ascii;
pub mod autotile;
pub mod error;
pub mod export;
pub mod generation;
pub mod geometry;
pub mod layer;
pub mod map;
pub mod template;
pub mod tile;
pub mod tmx;

pub use error::{ExportError, MapError, TemplateError};
pub use geometry::Rect;
pub use layer::Layer;
pub use map::Map;
pub use template::TmxTemplate;
pub use tile::{is_wall, Tile};
