//! Populating the finished hierarchy with agents
//!
//! Walks the world once for castles (nations, rulers, retainers) and
//! once for communities (one resident per work place). Dungeons are
//! left unpopulated at generation time; `spawn_npc` still understands
//! cave and dungeon-room spawns for callers that want them.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::agent::profession::spawn_loadout;
use crate::agent::{Agent, AgentId, AgentKind, AgentRegistry, Attributes, Mode, Nation};
use crate::core::calendar::{DAYS_PER_MONTH, MONTHS_PER_YEAR};
use crate::core::dice::Dice;
use crate::world::names;
use crate::world::{AreaCoord, PlaceCoord, PlaceKind, Setting, World};

/// NPCs start aged d20+20 and die 10d6 years later.
const STARTING_AGE: Dice = Dice::set(1, 20, 20);
const LIFESPAN: Dice = Dice::set(10, 6, 0);

pub(crate) fn populate(
    world: &mut World,
    agents: &mut AgentRegistry,
    rng: &mut ChaCha8Rng,
) -> Vec<Nation> {
    let nations = seed_nations(world, agents, rng);
    seed_communities(world, agents, rng);
    nations
}

/// Every castle founds a nation: a throne room with a ruler, and a
/// retainer in each remaining room.
fn seed_nations(
    world: &mut World,
    agents: &mut AgentRegistry,
    rng: &mut ChaCha8Rng,
) -> Vec<Nation> {
    let castles: Vec<AreaCoord> = world
        .regions()
        .flat_map(|region| region.areas())
        .filter(|area| area.setting() == Setting::Castle)
        .map(|area| area.coord())
        .collect();

    let mut nations = Vec::with_capacity(castles.len());
    for castle in castles {
        let side = match world.area(castle) {
            Some(area) => area.side(),
            None => continue,
        };
        let throne = PlaceCoord::new(castle, rng.gen_range(0..side), rng.gen_range(0..side));
        if let Some(place) = world.place_mut(throne) {
            place.set_kind(PlaceKind::ThroneRoom);
        }
        let ruler = match spawn_npc(world, agents, throne, rng) {
            Some(id) => id,
            None => continue,
        };
        let dynasty = agents
            .get(ruler)
            .map(|r| r.last_name.clone())
            .unwrap_or_default();
        let mut nation = Nation::new(format!("Kingdom of {}", dynasty), ruler, castle);

        let rooms: Vec<PlaceCoord> = match world.area(castle) {
            Some(area) => area
                .places()
                .filter(|p| p.kind() != PlaceKind::ThroneRoom)
                .map(|p| p.coord())
                .collect(),
            None => Vec::new(),
        };
        for room in rooms {
            if let Some(retainer) = spawn_npc(world, agents, room, rng) {
                nation.add_citizen(retainer);
            }
        }
        nations.push(nation);
    }
    nations
}

/// One resident NPC per work place in every hamlet, village and town.
fn seed_communities(world: &mut World, agents: &mut AgentRegistry, rng: &mut ChaCha8Rng) {
    let work_places: Vec<PlaceCoord> = world
        .regions()
        .flat_map(|region| region.areas())
        .filter(|area| area.setting().is_community())
        .flat_map(|area| area.places())
        .filter(|place| place.kind().spawns_worker())
        .map(|place| place.coord())
        .collect();

    for coord in work_places {
        spawn_npc(world, agents, coord, rng);
    }
}

/// Spawn one NPC at the place, home and profession bound to it.
///
/// Returns None when the place does not exist or its kind hosts no
/// spawn (outdoors, community interiors).
pub(crate) fn spawn_npc(
    world: &mut World,
    agents: &mut AgentRegistry,
    coord: PlaceCoord,
    rng: &mut ChaCha8Rng,
) -> Option<AgentId> {
    let kind = world.place(coord)?.kind();
    let setting = world.area(coord.area)?.setting();
    let loadout = spawn_loadout(kind, setting, rng)?;
    let purse = loadout.roll_purse(rng);

    let age = STARTING_AGE.roll(rng);
    let max_age = age + LIFESPAN.roll(rng);
    let id = agents.spawn(|id| Agent {
        id,
        kind: AgentKind::Npc,
        first_name: names::person_name(rng),
        last_name: names::person_name(rng),
        home: coord,
        place: coord,
        age,
        max_age,
        birth_day: Dice::new(DAYS_PER_MONTH).roll(rng),
        birth_month: Dice::new(MONTHS_PER_YEAR).roll(rng),
        attributes: Attributes::roll(rng),
        profession: Some(loadout.profession),
        weapon: loadout.weapon,
        armor: loadout.armor,
        purse,
        provisions: 1,
        mode: Mode::Idle,
        alive: true,
        relationships: Default::default(),
    });
    if let Some(place) = world.place_mut(coord) {
        place.add_occupant(id);
    }
    Some(id)
}
