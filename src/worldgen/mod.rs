//! The generation pipeline
//!
//! Builds the spatial hierarchy once: biomes per region, settlement
//! layout per region, place seeding per area, then nations and the
//! general population. Everything rolls against the session RNG, so a
//! seed reproduces the whole world.

pub mod blueprints;
pub mod population;
pub mod seeding;
pub mod stats;

pub use blueprints::Blueprint;
pub use stats::GenStats;

use rand_chacha::ChaCha8Rng;

use crate::core::config::WorldConfig;
use crate::core::dice::D20;
use crate::world::names;
use crate::world::{AreaCoord, Biome, Region, RegionCoord, Setting, World};

/// Biome from a d20: rare extremes at the top, temperate bulk below.
fn roll_biome(rng: &mut ChaCha8Rng) -> Biome {
    match D20.roll(rng) {
        20 => Biome::Tundra,
        19 => Biome::Desert,
        17..=18 => Biome::Mountain,
        11..=16 => Biome::Plains,
        6..=10 => Biome::Forest,
        _ => Biome::Hills,
    }
}

/// Build the world grid and lay out every region.
pub(crate) fn generate(
    config: &WorldConfig,
    rng: &mut ChaCha8Rng,
    stats: &mut GenStats,
) -> World {
    let side = config.tier.region_side();
    let mut regions = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            regions.push(build_wild_region(RegionCoord::new(x, y), side, rng));
        }
    }
    let mut world = World::new(config.tier, regions);

    for region in world.regions_mut() {
        blueprints::layout_region(region, config, rng, stats);
    }

    tracing::info!(
        tier = ?config.tier,
        regions = side * side,
        "world grid generated"
    );
    world
}

/// A region starts as nothing but wilds; blueprints carve it up after.
fn build_wild_region(coord: RegionCoord, side: i32, rng: &mut ChaCha8Rng) -> Region {
    let biome = roll_biome(rng);
    let mut areas = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            areas.push(seeding::build_area(
                AreaCoord::new(coord, x, y),
                Setting::Wilds,
                biome,
                rng,
            ));
        }
    }
    Region::new(names::place_name(rng), coord, biome, side, areas)
}
