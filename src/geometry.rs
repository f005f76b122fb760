//! Rectangle drawing and neighbourhood queries over a single layer
//!
//! These are the primitives generators build rooms and corridors from:
//! - `rectangle` draws a filled or outlined box
//! - `is_clear` checks an area is untouched before placing something in it
//! - `count_tiles` counts matching tiles in a square neighbourhood, treating
//!   the map edge as a match

use crate::error::MapError;
use crate::layer::Layer;
use crate::tile::Tile;

/// An axis-aligned rectangle of cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn area(&self) -> usize {
        (self.w.max(0) * self.h.max(0)) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Grow the rectangle by `amount` cells on every side.
    pub fn expand(&self, amount: i32) -> Self {
        Self::new(self.x - amount, self.y - amount, self.w + amount * 2, self.h + amount * 2)
    }

    /// Whether `(x, y)` lies on the outer ring of the rectangle.
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        x == self.x || y == self.y || x == self.x + self.w - 1 || y == self.y + self.h - 1
    }

    /// All cells covered by the rectangle, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let r = *self;
        (r.y..r.y + r.h).flat_map(move |y| (r.x..r.x + r.w).map(move |x| (x, y)))
    }
}

impl Layer {
    /// Draw a rectangle, optionally filled. Outlines set each corner once.
    ///
    /// The whole area is bounds-checked before any cell is written, so a
    /// failed call leaves the layer unchanged.
    pub fn rectangle(&mut self, area: Rect, tile: Tile, filled: bool) -> Result<(), MapError> {
        if area.is_empty() {
            return Ok(());
        }
        for (x, y) in [(area.x, area.y), (area.x + area.w - 1, area.y + area.h - 1)] {
            if !self.in_bounds(x, y) {
                return Err(MapError::OutOfBounds { x, y, width: self.width(), height: self.height() });
            }
        }
        for (x, y) in area.cells() {
            if filled || area.is_border(x, y) {
                self.set(x, y, tile)?;
            }
        }
        Ok(())
    }

    /// Check if an area only contains `Tile::Nothing`.
    /// Areas reaching outside the layer are never clear.
    pub fn is_clear(&self, area: Rect) -> bool {
        area.cells().all(|(x, y)| matches!(self.get(x, y), Ok(Tile::Nothing)))
    }

    /// Count the tiles within `radius` of `(x, y)` (a square, centre included)
    /// that equal `tile`. Cells outside the layer always count.
    pub fn count_tiles(&self, x: i32, y: i32, radius: i32, tile: Tile) -> usize {
        let area = Rect::new(x - radius, y - radius, radius * 2 + 1, radius * 2 + 1);
        area.cells()
            .filter(|&(xi, yi)| self.get(xi, yi).map_or(true, |t| t == tile))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_rectangle_sets_area() {
        let mut layer = Layer::new("Ground", 10, 10);
        let area = Rect::new(2, 3, 4, 5);
        layer.rectangle(area, Tile::Room, true).unwrap();
        assert_eq!(layer.count(Tile::Room), area.area());
        assert_eq!(layer.get(2, 3).unwrap(), Tile::Room);
        assert_eq!(layer.get(5, 7).unwrap(), Tile::Room);
        assert_eq!(layer.get(6, 7).unwrap(), Tile::Nothing);
    }

    #[test]
    fn test_outline_sets_perimeter_only() {
        let mut layer = Layer::new("Ground", 10, 10);
        let (w, h) = (5, 4);
        layer.rectangle(Rect::new(1, 1, w, h), Tile::Wall, false).unwrap();
        assert_eq!(layer.count(Tile::Wall) as i32, 2 * (w + h) - 4);
        assert_eq!(layer.get(2, 2).unwrap(), Tile::Nothing);
        assert_eq!(layer.get(1, 1).unwrap(), Tile::Wall);
        assert_eq!(layer.get(5, 4).unwrap(), Tile::Wall);
    }

    #[test]
    fn test_outline_of_thin_rectangle() {
        let mut layer = Layer::new("Ground", 10, 10);
        layer.rectangle(Rect::new(0, 0, 6, 1), Tile::Wall, false).unwrap();
        assert_eq!(layer.count(Tile::Wall), 6);
    }

    #[test]
    fn test_rectangle_out_of_bounds_is_atomic() {
        let mut layer = Layer::new("Ground", 5, 5);
        let err = layer.rectangle(Rect::new(3, 3, 4, 4), Tile::Wall, true);
        assert!(matches!(err, Err(MapError::OutOfBounds { x: 6, y: 6, .. })));
        assert_eq!(layer.count(Tile::Wall), 0);
    }

    #[test]
    fn test_is_clear() {
        let mut layer = Layer::new("Ground", 8, 8);
        let area = Rect::new(1, 1, 3, 3);
        assert!(layer.is_clear(area));

        layer.set(3, 3, Tile::Floor).unwrap();
        assert!(!layer.is_clear(area));
        assert!(layer.is_clear(Rect::new(4, 4, 3, 3)));
        assert_eq!(layer.count(Tile::Floor), 1);
    }

    #[test]
    fn test_is_clear_outside_layer() {
        let layer = Layer::new("Ground", 4, 4);
        assert!(!layer.is_clear(Rect::new(2, 2, 3, 3)));
        assert!(!layer.is_clear(Rect::new(-1, 0, 2, 2)));
    }

    #[test]
    fn test_count_tiles_edges_count() {
        let mut layer = Layer::new("Ground", 1, 1);
        assert_eq!(layer.count_tiles(0, 0, 1, Tile::Wall), 8);
        layer.set(0, 0, Tile::Wall).unwrap();
        assert_eq!(layer.count_tiles(0, 0, 1, Tile::Wall), 9);
    }

    #[test]
    fn test_count_tiles_interior() {
        let mut layer = Layer::new("Ground", 5, 5);
        layer.set(1, 2, Tile::Wall).unwrap();
        layer.set(3, 3, Tile::Wall).unwrap();
        layer.set(0, 0, Tile::Wall).unwrap();
        assert_eq!(layer.count_tiles(2, 2, 1, Tile::Wall), 2);
        assert_eq!(layer.count_tiles(2, 2, 2, Tile::Wall), 3);
        assert_eq!(layer.count_tiles(2, 2, 0, Tile::Wall), 0);
    }

    #[test]
    fn test_count_tiles_corner() {
        let layer = Layer::new("Ground", 3, 3);
        // 5 of the 9 cells around the corner lie outside the layer
        assert_eq!(layer.count_tiles(0, 0, 1, Tile::Wall), 5);
        assert_eq!(layer.count_tiles(0, 0, 1, Tile::Nothing), 9);
    }

    #[test]
    fn test_rect_helpers() {
        let r = Rect::new(2, 2, 4, 3);
        assert_eq!(r.center(), (4, 3));
        assert_eq!(r.expand(1), Rect::new(1, 1, 6, 5));
        assert_eq!(r.cells().count(), 12);
        assert!(Rect::new(0, 0, 0, 3).is_empty());
    }
}
