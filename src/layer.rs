use crate::error::MapError;
use crate::tile::Tile;

/// A named, rectangular grid of tiles. Does not wrap at any edge and keeps
/// the size it was created with.
#[derive(Clone, Debug)]
pub struct Layer {
    name: String,
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Layer {
    /// Create a layer with every cell set to `Tile::Nothing`.
    pub fn new(name: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            tiles: vec![Tile::Nothing; width * height],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies inside the layer.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Storage slot for `(x, y)`, or `OutOfBounds`.
    fn index(&self, x: i32, y: i32) -> Result<usize, MapError> {
        if !self.in_bounds(x, y) {
            return Err(MapError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x as usize + y as usize * self.width)
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Tile, MapError> {
        Ok(self.tiles[self.index(x, y)?])
    }

    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> Result<(), MapError> {
        let idx = self.index(x, y)?;
        self.tiles[idx] = tile;
        Ok(())
    }

    /// Fill the entire layer with a single tile type.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}
