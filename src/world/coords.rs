//! Hierarchical coordinate addressing
//!
//! A place address nests its parent area address, which nests its parent
//! region address. "Parent" navigation is therefore a field projection
//! and needs no back-pointers.

use serde::{Deserialize, Serialize};

/// Address of a region within the world grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionCoord {
    pub x: i32,
    pub y: i32,
}

impl RegionCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Address of an area within a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaCoord {
    pub region: RegionCoord,
    pub x: i32,
    pub y: i32,
}

impl AreaCoord {
    pub fn new(region: RegionCoord, x: i32, y: i32) -> Self {
        Self { region, x, y }
    }
}

/// Address of a place within an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceCoord {
    pub area: AreaCoord,
    pub x: i32,
    pub y: i32,
}

impl PlaceCoord {
    pub fn new(area: AreaCoord, x: i32, y: i32) -> Self {
        Self { area, x, y }
    }

    pub fn region(&self) -> RegionCoord {
        self.area.region
    }
}

/// Cardinal travel direction; the only steps movement accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Grid delta, with y growing southward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}
