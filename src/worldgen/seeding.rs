//! Place-type seeding inside a freshly laid-out area
//!
//! Each area setting maps to a seeding rule; communities additionally
//! consult a biome-specific table, kept as static data rather than
//! branching code. After seeding, every community receives exactly one
//! graveyard on an outdoor cell.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::dice::{Dice, D20};
use crate::world::names;
use crate::world::{Area, AreaCoord, Biome, Place, PlaceCoord, PlaceKind, Setting};

/// How a community cell resolves its place kind after the d20 roll
enum SeedTable {
    /// Above the threshold the cell is developed and a uniform pick
    /// from the list decides the kind; otherwise it stays outdoors.
    Picks {
        threshold: i32,
        picks: &'static [PlaceKind],
    },
    /// Descending roll bands, first match wins; below all bands the
    /// cell stays outdoors.
    Bands { bands: &'static [(i32, PlaceKind)] },
}

// Plains and hills support every work place.
static PLAINS_HILLS: SeedTable = SeedTable::Picks {
    threshold: 10,
    picks: &[
        PlaceKind::Reserve,
        PlaceKind::Fishery,
        PlaceKind::Farm,
        PlaceKind::Trader,
        PlaceKind::Mine,
        PlaceKind::Blacksmith,
        PlaceKind::Woodland,
        PlaceKind::Lodging,
    ],
};

// Mountains lack farms and forestry.
static MOUNTAIN: SeedTable = SeedTable::Picks {
    threshold: 10,
    picks: &[
        PlaceKind::Reserve,
        PlaceKind::Fishery,
        PlaceKind::Trader,
        PlaceKind::Mine,
        PlaceKind::Blacksmith,
        PlaceKind::Lodging,
    ],
};

// Forests lack mines and smithies.
static FOREST: SeedTable = SeedTable::Picks {
    threshold: 10,
    picks: &[
        PlaceKind::Reserve,
        PlaceKind::Fishery,
        PlaceKind::Farm,
        PlaceKind::Trader,
        PlaceKind::Lodging,
        PlaceKind::Woodland,
    ],
};

// Deserts produce nothing but game; tundras nothing but fish.
static DESERT: SeedTable = SeedTable::Bands {
    bands: &[(16, PlaceKind::Reserve), (12, PlaceKind::Lodging)],
};

static TUNDRA: SeedTable = SeedTable::Bands {
    bands: &[(16, PlaceKind::Fishery), (12, PlaceKind::Lodging)],
};

fn community_table(biome: Biome) -> &'static SeedTable {
    match biome {
        Biome::Plains | Biome::Hills => &PLAINS_HILLS,
        Biome::Mountain => &MOUNTAIN,
        Biome::Forest => &FOREST,
        Biome::Desert => &DESERT,
        Biome::Tundra => &TUNDRA,
    }
}

fn roll_community_kind(biome: Biome, rng: &mut ChaCha8Rng) -> PlaceKind {
    let roll = D20.roll(rng);
    match community_table(biome) {
        SeedTable::Picks { threshold, picks } => {
            if roll > *threshold {
                let pick = Dice::new(picks.len() as i32).roll(rng) - 1;
                picks[pick as usize]
            } else {
                PlaceKind::Outdoors
            }
        }
        SeedTable::Bands { bands } => bands
            .iter()
            .find(|(min, _)| roll > *min)
            .map(|(_, kind)| *kind)
            .unwrap_or(PlaceKind::Outdoors),
    }
}

fn roll_place_kind(setting: Setting, biome: Biome, rng: &mut ChaCha8Rng) -> PlaceKind {
    match setting {
        Setting::Wilds | Setting::Safezone => PlaceKind::Outdoors,
        // Castles are all politics, no services.
        Setting::Castle => PlaceKind::Indoors,
        Setting::Dungeon => {
            if D20.roll(rng) > 10 {
                PlaceKind::Cave
            } else {
                PlaceKind::Indoors
            }
        }
        Setting::Hamlet | Setting::Village | Setting::Town => roll_community_kind(biome, rng),
    }
}

/// Build an area of the given setting with a freshly seeded place grid.
pub(crate) fn build_area(
    coord: AreaCoord,
    setting: Setting,
    biome: Biome,
    rng: &mut ChaCha8Rng,
) -> Area {
    let side = setting.place_side();
    let name = names::place_name(rng);
    let mut places = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            let kind = roll_place_kind(setting, biome, rng);
            places.push(Place::new(
                names::place_name(rng),
                PlaceCoord::new(coord, x, y),
                kind,
            ));
        }
    }
    let mut area = Area::new(name, coord, setting, places);
    if setting.is_community() {
        assign_graveyard(&mut area, rng);
    }
    area
}

/// Convert one outdoor cell to the area's unique graveyard.
fn assign_graveyard(area: &mut Area, rng: &mut ChaCha8Rng) {
    let outdoors: Vec<PlaceCoord> = area
        .places()
        .filter(|p| p.kind() == PlaceKind::Outdoors)
        .map(|p| p.coord())
        .collect();
    let target = if outdoors.is_empty() {
        // Every cell came up developed; sacrifice a random one so the
        // one-graveyard-per-community invariant still holds.
        tracing::warn!(area = area.name(), "no outdoor cell for graveyard");
        let side = area.side();
        (rng.gen_range(0..side), rng.gen_range(0..side))
    } else {
        let pick = outdoors[rng.gen_range(0..outdoors.len())];
        (pick.x, pick.y)
    };
    if let Some(place) = area.place_mut(target.0, target.1) {
        place.set_kind(PlaceKind::Graveyard);
    }
}
