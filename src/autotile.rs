//! 16-way autotile classification
//!
//! A terrain tile picks its art from 16 variants depending on which of its four
//! orthogonal neighbours are the same tile. Slot order is fixed by the tile-set
//! convention: centre, then the 8 edges/corners clockwise from the top,
//! horizontal, vertical, the 4 end caps clockwise from the top, and isolated.

use crate::error::ExportError;
use crate::map::Map;
use crate::tile::Tile;

/// Which orthogonal neighbours match the tile being classified
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Neighbors {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl Neighbors {
    pub fn new(up: bool, right: bool, down: bool, left: bool) -> Self {
        Self { up, right, down, left }
    }

    /// Sample the visible neighbours of `(x, y)` against `tile`.
    /// Neighbours outside the map never match.
    pub fn of(map: &Map, x: i32, y: i32, tile: Tile) -> Self {
        let same = |nx: i32, ny: i32| matches!(map.resolve_visible(nx, ny), Ok(t) if t == tile);
        Self {
            up: same(x, y - 1),
            right: same(x + 1, y),
            down: same(x, y + 1),
            left: same(x - 1, y),
        }
    }

    /// Pack as a 4-bit mask: up, right, down, left from the high bit.
    pub fn mask(&self) -> u8 {
        (self.up as u8) << 3 | (self.right as u8) << 2 | (self.down as u8) << 1 | self.left as u8
    }

    pub fn from_mask(mask: u8) -> Self {
        Self::new(mask & 0b1000 != 0, mask & 0b0100 != 0, mask & 0b0010 != 0, mask & 0b0001 != 0)
    }
}

/// One of the 16 autotile variants, in tile-set slot order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AutotileSlot {
    Center,
    TopEdge,
    TopRightCorner,
    RightEdge,
    BottomRightCorner,
    BottomEdge,
    BottomLeftCorner,
    LeftEdge,
    TopLeftCorner,
    Horizontal,
    Vertical,
    TopEnd,
    RightEnd,
    BottomEnd,
    LeftEnd,
    Isolated,
}

impl AutotileSlot {
    pub const ALL: [AutotileSlot; 16] = [
        AutotileSlot::Center,
        AutotileSlot::TopEdge,
        AutotileSlot::TopRightCorner,
        AutotileSlot::RightEdge,
        AutotileSlot::BottomRightCorner,
        AutotileSlot::BottomEdge,
        AutotileSlot::BottomLeftCorner,
        AutotileSlot::LeftEdge,
        AutotileSlot::TopLeftCorner,
        AutotileSlot::Horizontal,
        AutotileSlot::Vertical,
        AutotileSlot::TopEnd,
        AutotileSlot::RightEnd,
        AutotileSlot::BottomEnd,
        AutotileSlot::LeftEnd,
        AutotileSlot::Isolated,
    ];

    /// Position in a terrain's 16-entry id array
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Classify a neighbour pattern into its autotile slot.
///
/// Edges are named after the missing side, end caps after the end that has
/// no neighbour (a top end only connects downwards).
pub fn classify(neighbors: Neighbors) -> Result<AutotileSlot, ExportError> {
    use AutotileSlot::*;

    let slot = match neighbors.mask() {
        //    URDL
        0b1111 => Center,
        0b0111 => TopEdge,
        0b0011 => TopRightCorner,
        0b1011 => RightEdge,
        0b1001 => BottomRightCorner,
        0b1101 => BottomEdge,
        0b1100 => BottomLeftCorner,
        0b1110 => LeftEdge,
        0b0110 => TopLeftCorner,
        0b0101 => Horizontal,
        0b1010 => Vertical,
        0b0010 => TopEnd,
        0b0001 => RightEnd,
        0b1000 => BottomEnd,
        0b0100 => LeftEnd,
        0b0000 => Isolated,
        other => return Err(ExportError::UnmappedClassification(other)),
    };
    Ok(slot)
}
