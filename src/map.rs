//! Layered tile map
//!
//! A `Map` is an ordered stack of equally sized layers, bottom first. Layers are
//! looked up by name and created on first use; callers are expected to use
//! consistent names, since two layers sharing a name would shadow each other.

use crate::error::MapError;
use crate::layer::Layer;
use crate::tile::Tile;

/// Name of the bottom layer created by `Map::new`
pub const GROUND: &str = "Ground";
/// Name of the layer above the ground created by `Map::new`
pub const STRUCTURES: &str = "Structures";

/// A rectangular tile map made of stacked layers
#[derive(Clone, Debug)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    layers: Vec<Layer>,
}

impl Map {
    /// Create a map with the standard `Ground` and `Structures` layers.
    pub fn new(width: usize, height: usize) -> Self {
        let mut map = Self::empty(width, height);
        map.layer(GROUND);
        map.layer(STRUCTURES);
        map
    }

    /// Create a map without any layers.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
        }
    }

    /// Get a layer by name, appending a new empty one on top if it doesn't exist.
    pub fn layer(&mut self, name: &str) -> &mut Layer {
        let idx = match self.layers.iter().position(|l| l.name() == name) {
            Some(idx) => idx,
            None => {
                self.layers.push(Layer::new(name, self.width, self.height));
                self.layers.len() - 1
            }
        };
        &mut self.layers[idx]
    }

    /// Layers from bottom to top.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// The tile visible at `(x, y)`.
    ///
    /// Layers are scanned bottom to top and the first non-empty tile wins; the
    /// topmost layer's tile is returned when every layer is empty there. A map
    /// with no layers shows `Tile::Nothing` everywhere.
    pub fn resolve_visible(&self, x: i32, y: i32) -> Result<Tile, MapError> {
        if !self.in_bounds(x, y) {
            return Err(MapError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let last = self.layers.len().saturating_sub(1);
        for (index, layer) in self.layers.iter().enumerate() {
            let tile = layer.get(x, y)?;
            if index == last || tile != Tile::Nothing {
                return Ok(tile);
            }
        }
        Ok(Tile::Nothing)
    }

    /// Iterate over every visible tile in row-major order.
    pub fn visible_tiles(&self) -> impl Iterator<Item = Result<(usize, usize, Tile), MapError>> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| {
                self.resolve_visible(x as i32, y as i32).map(|t| (x, y, t))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_has_standard_layers() {
        let map = Map::new(4, 4);
        let names: Vec<_> = map.layers().iter().map(|l| l.name()).collect();
        assert_eq!(names, vec![GROUND, STRUCTURES]);
    }

    #[test]
    fn test_layer_get_or_create() {
        let mut map = Map::new(6, 5);
        map.layer("Ground").set(1, 1, Tile::Floor).unwrap();
        assert_eq!(map.layers().len(), 2);

        let furniture = map.layer("Furniture");
        assert_eq!((furniture.width(), furniture.height()), (6, 5));
        assert_eq!(furniture.count(Tile::Nothing), 30);
        assert_eq!(map.layers().len(), 3);
        assert_eq!(map.layers()[2].name(), "Furniture");

        // Existing layers are returned, not recreated
        assert_eq!(map.layer("Ground").get(1, 1).unwrap(), Tile::Floor);
        assert_eq!(map.layers().len(), 3);
    }

    #[test]
    fn test_single_layer_fill_resolves() {
        let mut map = Map::empty(3, 4);
        map.layer("Ground").fill(Tile::Grass);
        for y in 0..4 {
            for x in 0..3 {
                assert_eq!(map.resolve_visible(x, y).unwrap(), Tile::Grass);
            }
        }
    }

    #[test]
    fn test_lowest_non_empty_tile_wins() {
        let mut map = Map::new(3, 1);
        map.layer(GROUND).set(0, 0, Tile::Floor).unwrap();
        map.layer(STRUCTURES).set(0, 0, Tile::Wall).unwrap();
        map.layer(STRUCTURES).set(1, 0, Tile::Door).unwrap();

        assert_eq!(map.resolve_visible(0, 0).unwrap(), Tile::Floor);
        assert_eq!(map.resolve_visible(1, 0).unwrap(), Tile::Door);
        assert_eq!(map.resolve_visible(2, 0).unwrap(), Tile::Nothing);
    }

    #[test]
    fn test_topmost_layer_is_fallback() {
        let mut map = Map::new(2, 1);
        map.layer("Top").set(0, 0, Tile::Player).unwrap();
        assert_eq!(map.resolve_visible(0, 0).unwrap(), Tile::Player);
        assert_eq!(map.resolve_visible(1, 0).unwrap(), Tile::Nothing);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut map = Map::new(3, 3);
        map.layer(STRUCTURES).set(1, 1, Tile::Wall).unwrap();
        let first: Vec<_> = map.visible_tiles().collect();
        let second: Vec<_> = map.visible_tiles().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
    }

    #[test]
    fn test_resolve_out_of_bounds() {
        let map = Map::new(3, 2);
        assert!(map.resolve_visible(-1, 0).is_err());
        assert!(map.resolve_visible(3, 0).is_err());
        assert!(map.resolve_visible(0, 2).is_err());

        let empty = Map::empty(3, 2);
        assert_eq!(empty.resolve_visible(0, 0).unwrap(), Tile::Nothing);
        assert!(empty.resolve_visible(0, 5).is_err());
    }
}
