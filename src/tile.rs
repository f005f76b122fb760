//! Tile vocabulary for dungeon maps
//!
//! Every cell of a layer holds one `Tile`. Each tile has a fixed single-character
//! code used for console output; terrain tiles may also be exported through a
//! tile-set template, decoration tiles are flavour placed by generators.

use serde::{Deserialize, Serialize};

/// A single tile symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tile {
    /// Empty cell (transparent when layers are composited)
    #[default]
    Nothing,
    Floor,
    Floor2,
    Road,
    Wall,
    Wall2,
    Room,
    Room2,
    Door,
    StairsUp,
    StairsDown,
    Tree,
    Grass,

    // Flavour
    Sign,
    /// Stuff that goes on indoor walls
    Hanging,
    Window,
    Counter,
    Shopkeeper,
    Shelf,
    Stock,
    Table,
    Chair,
    Rug,
    Pot,
    Assistant,
    Player,
}

impl Tile {
    /// Every tile, in declaration order
    pub const ALL: [Tile; 26] = [
        Tile::Nothing,
        Tile::Floor,
        Tile::Floor2,
        Tile::Road,
        Tile::Wall,
        Tile::Wall2,
        Tile::Room,
        Tile::Room2,
        Tile::Door,
        Tile::StairsUp,
        Tile::StairsDown,
        Tile::Tree,
        Tile::Grass,
        Tile::Sign,
        Tile::Hanging,
        Tile::Window,
        Tile::Counter,
        Tile::Shopkeeper,
        Tile::Shelf,
        Tile::Stock,
        Tile::Table,
        Tile::Chair,
        Tile::Rug,
        Tile::Pot,
        Tile::Assistant,
        Tile::Player,
    ];

    /// Console character for this tile
    pub fn to_char(self) -> char {
        match self {
            Tile::Nothing => ' ',
            Tile::Floor => 'f',
            Tile::Floor2 => 'F',
            Tile::Road => 'r',
            Tile::Wall => 'w',
            Tile::Wall2 => 'W',
            Tile::Room => '.',
            Tile::Room2 => '#',
            Tile::Door => '+',
            Tile::StairsUp => '<',
            Tile::StairsDown => '>',
            Tile::Tree => 'T',
            Tile::Grass => 'g',
            Tile::Sign => 's',
            Tile::Hanging => 'h',
            Tile::Window => 'o',
            Tile::Counter => '_',
            Tile::Shopkeeper => 'A',
            Tile::Shelf => 'S',
            Tile::Stock => ')',
            Tile::Table => 't',
            Tile::Chair => 'c',
            Tile::Rug => '~',
            Tile::Pot => '(',
            Tile::Assistant => 'a',
            Tile::Player => '@',
        }
    }

    /// Human-readable name, used in legends
    pub fn name(self) -> &'static str {
        match self {
            Tile::Nothing => "Nothing",
            Tile::Floor => "Floor",
            Tile::Floor2 => "Floor2",
            Tile::Road => "Road",
            Tile::Wall => "Wall",
            Tile::Wall2 => "Wall2",
            Tile::Room => "Room",
            Tile::Room2 => "Room2",
            Tile::Door => "Door",
            Tile::StairsUp => "StairsUp",
            Tile::StairsDown => "StairsDown",
            Tile::Tree => "Tree",
            Tile::Grass => "Grass",
            Tile::Sign => "Sign",
            Tile::Hanging => "Hanging",
            Tile::Window => "Window",
            Tile::Counter => "Counter",
            Tile::Shopkeeper => "Shopkeeper",
            Tile::Shelf => "Shelf",
            Tile::Stock => "Stock",
            Tile::Table => "Table",
            Tile::Chair => "Chair",
            Tile::Rug => "Rug",
            Tile::Pot => "Pot",
            Tile::Assistant => "Assistant",
            Tile::Player => "Player",
        }
    }

    /// Check if this tile is one of the wall types
    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall | Tile::Wall2)
    }
}

/// Whether a tile is a wall type
pub fn is_wall(tile: Tile) -> bool {
    tile.is_wall()
}
