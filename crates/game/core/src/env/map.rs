//! Fixed arena geometry and the named regions used as candidate pools.
//!
//! The arena is a diamond inscribed in a 28x28 square. Each player owns one
//! half (rows `0..14` for the bottom player) and deploys mobile units from the
//! two diagonal edges of that half.

use crate::config::GameConfig;
use crate::state::Coordinate;

/// One of the four diagonal arena edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Edge {
    /// Edges the bottom player deploys mobile units from.
    pub const FRIENDLY: [Edge; 2] = [Edge::BottomLeft, Edge::BottomRight];

    /// Edge diagonally across the arena.
    pub const fn opposite(self) -> Self {
        match self {
            Self::TopRight => Self::BottomLeft,
            Self::TopLeft => Self::BottomRight,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }
}

/// Static arena bounds and region pools.
#[derive(Clone, Copy, Debug, Default)]
pub struct MapBounds;

impl MapBounds {
    const SIZE: i32 = GameConfig::ARENA_SIZE;
    const HALF: i32 = GameConfig::HALF_ARENA;

    /// Returns true if `location` lies inside the diamond.
    pub fn in_arena(location: Coordinate) -> bool {
        let Coordinate { x, y } = location;
        if !(0..Self::SIZE).contains(&y) {
            return false;
        }
        // Distance of the row from the nearer horizontal border.
        let row = if y < Self::HALF { y } else { Self::SIZE - 1 - y };
        let start = Self::HALF - 1 - row;
        let end = Self::HALF + row;
        (start..=end).contains(&x)
    }

    /// Returns true if `location` is inside the bottom player's half.
    pub fn in_bottom_half(location: Coordinate) -> bool {
        location.y < Self::HALF && Self::in_arena(location)
    }

    /// Tiles of a single edge, ordered from the arena corner outward.
    pub fn edge(edge: Edge) -> Vec<Coordinate> {
        (0..Self::HALF)
            .map(|i| match edge {
                Edge::TopRight => Coordinate::new(Self::HALF + i, Self::SIZE - 1 - i),
                Edge::TopLeft => Coordinate::new(Self::HALF - 1 - i, Self::SIZE - 1 - i),
                Edge::BottomLeft => Coordinate::new(Self::HALF - 1 - i, i),
                Edge::BottomRight => Coordinate::new(Self::HALF + i, i),
            })
            .collect()
    }

    /// Bottom-left edge tiles followed by bottom-right edge tiles.
    pub fn bottom_edges() -> Vec<Coordinate> {
        Edge::FRIENDLY.into_iter().flat_map(Self::edge).collect()
    }

    /// Every arena tile in the bottom half, row by row.
    pub fn bottom_grid() -> Vec<Coordinate> {
        (0..Self::HALF)
            .flat_map(|y| (0..Self::SIZE).map(move |x| Coordinate::new(x, y)))
            .filter(|&location| Self::in_arena(location))
            .collect()
    }

    /// Returns true if `location` is one of the tiles of `edge`.
    pub fn is_on_edge(location: Coordinate, edge: Edge) -> bool {
        Self::edge(edge).contains(&location)
    }

    /// Edge a walker deployed at `start` heads for.
    ///
    /// Walkers head for the edge diagonally across from the quadrant they
    /// start in.
    pub fn target_edge(start: Coordinate) -> Edge {
        let left = start.x < Self::HALF;
        let bottom = start.y < Self::HALF;
        let quadrant = match (left, bottom) {
            (true, true) => Edge::BottomLeft,
            (false, true) => Edge::BottomRight,
            (true, false) => Edge::TopLeft,
            (false, false) => Edge::TopRight,
        };
        quadrant.opposite()
    }
}
