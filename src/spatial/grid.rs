//! Sparse tile storage over an unbounded integer plane
//!
//! Only lit positions are stored. A position missing from the map is unlit and
//! carries neither color nor intensity, so an intensity of zero is never kept.

use std::collections::HashMap;
use std::collections::hash_map;

/// Integer coordinates of a cell on the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Horizontal coordinate, growing eastwards
    pub x: i32,
    /// Vertical coordinate, growing northwards
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position displaced by `(dx, dy)`, or `None` past the `i32` range
    ///
    /// The plane has no edges to wrap around: a displacement that leaves the
    /// representable range names no position at all.
    pub const fn checked_shifted(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A lit cell: a color label and a strictly positive intensity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Color label
    pub color: String,
    /// Brightness, always at least 1 while stored in a [`Grid`]
    pub intensity: u32,
}

impl Tile {
    /// Create a tile
    pub fn new(color: impl Into<String>, intensity: u32) -> Self {
        Self {
            color: color.into(),
            intensity,
        }
    }
}

/// Position to tile map with no implicit bounds
#[derive(Debug, Clone, Default)]
pub struct Grid {
    tiles: HashMap<Position, Tile>,
}

impl Grid {
    /// Create an empty (fully unlit) grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Light `pos` with the given color and intensity, replacing any previous tile
    ///
    /// An intensity of 0 switches the position off instead.
    pub fn set(&mut self, pos: Position, color: impl Into<String>, intensity: u32) {
        if intensity == 0 {
            self.erase(pos);
            return;
        }
        self.tiles.insert(pos, Tile::new(color, intensity));
    }

    /// Switch `pos` off, returning the removed tile; no-op when already unlit
    pub fn erase(&mut self, pos: Position) -> Option<Tile> {
        self.tiles.remove(&pos)
    }

    /// Tile at `pos`, or `None` when unlit
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    /// Change only the color of a lit tile, keeping its intensity
    ///
    /// Lights the position with intensity 1 when it was unlit. Returns whether the
    /// position was lit beforehand.
    pub fn recolor(&mut self, pos: Position, color: impl Into<String>) -> bool {
        match self.tiles.entry(pos) {
            hash_map::Entry::Occupied(mut entry) => {
                entry.get_mut().color = color.into();
                true
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(Tile::new(color, 1));
                false
            }
        }
    }

    /// Whether a tile is stored at `pos`
    pub fn is_lit(&self, pos: Position) -> bool {
        self.tiles.contains_key(&pos)
    }

    /// Color of the tile at `pos`, if lit
    pub fn color_at(&self, pos: Position) -> Option<&str> {
        self.get(pos).map(|tile| tile.color.as_str())
    }

    /// Number of lit positions
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no position is lit
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over lit positions and their tiles in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.tiles.iter().map(|(&pos, tile)| (pos, tile))
    }
}
