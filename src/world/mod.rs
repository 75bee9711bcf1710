//! The spatial hierarchy: World > Region > Area > Place
//!
//! Nodes are arena-stored in nested square grids and addressed by
//! coordinate. Parent links are address projections, child links are
//! grid lookups, so no node holds an owning pointer to another. The
//! hierarchy is append-only during generation and frozen afterward;
//! only place kinds (unique-room promotion) and occupancy mutate later.

pub mod area;
pub mod coords;
pub mod names;
pub mod place;
pub mod region;

pub use area::{Area, Setting};
pub use coords::{AreaCoord, Direction, PlaceCoord, RegionCoord};
pub use place::{Place, PlaceKind};
pub use region::{Biome, Region};

use serde::{Deserialize, Serialize};

/// Discrete world-size selector controlling grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    VerySmall, // 4x4 regions
    Small,     // 8x8
    Medium,    // 16x16
    Large,     // 32x32, larger would not fit in memory
}

impl Tier {
    /// Side length of the region grid; each tier doubles the side.
    pub fn region_side(&self) -> i32 {
        1 << (*self as i32 + 2)
    }

    /// Faces of the settlement count die used by density blueprints.
    pub fn count_die_faces(&self) -> i32 {
        match self {
            Tier::VerySmall | Tier::Small => 2,
            Tier::Medium => 3,
            Tier::Large => 4,
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "very-small" | "verysmall" => Ok(Tier::VerySmall),
            "small" => Ok(Tier::Small),
            "medium" => Ok(Tier::Medium),
            "large" => Ok(Tier::Large),
            other => Err(format!("unknown world size: {}", other)),
        }
    }
}

/// The world owns the square grid of regions.
///
/// The area grid inside every region shares the world's region-grid side
/// length, so one `side` value describes both levels.
pub struct World {
    tier: Tier,
    side: i32,
    regions: Vec<Region>,
}

impl World {
    pub(crate) fn new(tier: Tier, regions: Vec<Region>) -> Self {
        let side = tier.region_side();
        debug_assert_eq!(regions.len() as i32, side * side);
        Self {
            tier,
            side,
            regions,
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Side length of the region grid (and of every region's area grid).
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Region at (x, y), or None when out of range. Absent lookups are
    /// the edge-detection mechanism for movement, never an error.
    pub fn region(&self, x: i32, y: i32) -> Option<&Region> {
        if x < 0 || y < 0 || x >= self.side || y >= self.side {
            return None;
        }
        self.regions.get((y * self.side + x) as usize)
    }

    pub(crate) fn region_mut(&mut self, x: i32, y: i32) -> Option<&mut Region> {
        if x < 0 || y < 0 || x >= self.side || y >= self.side {
            return None;
        }
        self.regions.get_mut((y * self.side + x) as usize)
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub(crate) fn regions_mut(&mut self) -> impl Iterator<Item = &mut Region> {
        self.regions.iter_mut()
    }

    /// Resolve an area address.
    pub fn area(&self, coord: AreaCoord) -> Option<&Area> {
        self.region(coord.region.x, coord.region.y)?
            .area(coord.x, coord.y)
    }

    /// Resolve a place address.
    pub fn place(&self, coord: PlaceCoord) -> Option<&Place> {
        self.area(coord.area)?.place(coord.x, coord.y)
    }

    pub(crate) fn place_mut(&mut self, coord: PlaceCoord) -> Option<&mut Place> {
        self.region_mut(coord.area.region.x, coord.area.region.y)?
            .area_mut(coord.area.x, coord.area.y)?
            .place_mut(coord.x, coord.y)
    }
}
