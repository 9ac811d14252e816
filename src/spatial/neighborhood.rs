//! Fixed 8-direction adjacency shared by every traversal

use std::fmt;

use crate::spatial::grid::Position;

/// One of the eight unit moves on the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (0, 1)
    North,
    /// (1, 1)
    NorthEast,
    /// (1, 0)
    East,
    /// (1, -1)
    SouthEast,
    /// (0, -1)
    South,
    /// (-1, -1)
    SouthWest,
    /// (-1, 0)
    West,
    /// (-1, 1)
    NorthWest,
}

impl Direction {
    /// All eight directions: axis-aligned moves first, then diagonals
    pub const ALL: [Self; 8] = [
        Self::West,
        Self::East,
        Self::South,
        Self::North,
        Self::SouthWest,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
    ];

    /// Unit offset `(dx, dy)` of this move
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::NorthEast => (1, 1),
            Self::East => (1, 0),
            Self::SouthEast => (1, -1),
            Self::South => (0, -1),
            Self::SouthWest => (-1, -1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, 1),
        }
    }

    /// Two-letter token used by the command language
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "NN",
            Self::NorthEast => "NE",
            Self::East => "EE",
            Self::SouthEast => "SE",
            Self::South => "SS",
            Self::SouthWest => "SO",
            Self::West => "OO",
            Self::NorthWest => "NO",
        }
    }

    /// Parse a two-letter token
    ///
    /// Accepts the `O` (ovest) spelling for west as well as the English `W`.
    pub fn from_token(token: &str) -> Option<Self> {
        let direction = match token {
            "NN" => Self::North,
            "NE" => Self::NorthEast,
            "EE" => Self::East,
            "SE" => Self::SouthEast,
            "SS" => Self::South,
            "SO" | "SW" => Self::SouthWest,
            "OO" | "WW" => Self::West,
            "NO" | "NW" => Self::NorthWest,
            _ => return None,
        };
        Some(direction)
    }

    /// Apply this move to `pos`; `None` when it leaves the coordinate range
    pub const fn step(self, pos: Position) -> Option<Position> {
        let (dx, dy) = self.offset();
        pos.checked_shifted(dx, dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The adjacent positions of `pos`, lit or not
///
/// Eight positions, fewer on the outermost rows and columns of the coordinate
/// range.
pub fn neighbors(pos: Position) -> impl Iterator<Item = Position> {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| direction.step(pos))
}
