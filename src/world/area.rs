//! Areas: the middle tier where settlements live

use serde::{Deserialize, Serialize};

use crate::world::coords::AreaCoord;
use crate::world::place::Place;

/// Archetype of an area, decides the place grid side and which
/// place-seeding rule applies
///
/// Wilds are dangerous ground with no community; a safezone is wilds
/// tamed by a nearby settlement. The remaining settings are communities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Setting {
    Wilds,
    Safezone,
    Dungeon,
    Hamlet,
    Village,
    Town,
    Castle,
}

impl Setting {
    /// Fixed place-grid side length for this archetype.
    pub fn place_side(&self) -> i32 {
        match self {
            Setting::Wilds | Setting::Safezone | Setting::Village => 5,
            Setting::Dungeon | Setting::Hamlet | Setting::Castle => 4,
            Setting::Town => 6,
        }
    }

    /// Hamlets, villages and towns: the areas that seed work places,
    /// a graveyard, and a general population.
    pub fn is_community(&self) -> bool {
        matches!(self, Setting::Hamlet | Setting::Village | Setting::Town)
    }
}

/// An area owns a square grid of places.
pub struct Area {
    name: String,
    coord: AreaCoord,
    setting: Setting,
    side: i32,
    places: Vec<Place>,
}

impl Area {
    pub(crate) fn new(name: String, coord: AreaCoord, setting: Setting, places: Vec<Place>) -> Self {
        let side = setting.place_side();
        debug_assert_eq!(places.len() as i32, side * side);
        Self {
            name,
            coord,
            setting,
            side,
            places,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coord(&self) -> AreaCoord {
        self.coord
    }

    pub fn setting(&self) -> Setting {
        self.setting
    }

    /// Side length of the place grid.
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Place at (x, y), or None when out of range.
    pub fn place(&self, x: i32, y: i32) -> Option<&Place> {
        if x < 0 || y < 0 || x >= self.side || y >= self.side {
            return None;
        }
        self.places.get((y * self.side + x) as usize)
    }

    pub(crate) fn place_mut(&mut self, x: i32, y: i32) -> Option<&mut Place> {
        if x < 0 || y < 0 || x >= self.side || y >= self.side {
            return None;
        }
        self.places.get_mut((y * self.side + x) as usize)
    }

    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }
}
