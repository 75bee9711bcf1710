//! Hierarchical movement resolution
//!
//! One cardinal step, resolved at the deepest level that has a
//! neighbor: place within the area, else area within the region, else
//! region within the world. Crossing a boundary re-enters on the
//! opposite edge of the destination, and the hour cost climbs with the
//! level crossed. Off the world edge there is no move and no cost.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::agent::{AgentId, AgentRegistry};
use crate::world::{Area, Direction, PlaceCoord, World};

/// Hour costs per crossing level
pub const PLACE_STEP_HOURS: u32 = 1;
pub const AREA_CROSSING_HOURS: u32 = 3;
pub const REGION_CROSSING_HOURS: u32 = 5;

/// Result of an attempted step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The agent moved; `hours` is the time cost the caller should
    /// bill. NPC steps ride the tick that invoked them.
    Moved { hours: u32 },
    /// No neighbor in that direction (world edge) or the agent cannot
    /// move; nothing changed and no time passed.
    Blocked,
}

/// Try to move the agent one step in the given direction.
pub(crate) fn attempt_move(
    world: &mut World,
    agents: &mut AgentRegistry,
    id: AgentId,
    direction: Direction,
    rng: &mut ChaCha8Rng,
) -> MoveOutcome {
    let from = match agents.get(id) {
        Some(agent) if agent.is_active() => agent.place,
        _ => return MoveOutcome::Blocked, // dead agents do not move
    };
    let (dx, dy) = direction.delta();

    // Step within the current area.
    let in_area = world
        .area(from.area)
        .and_then(|area| area.place(from.x + dx, from.y + dy))
        .map(|place| place.coord());
    if let Some(dest) = in_area {
        relocate(world, agents, id, dest);
        return MoveOutcome::Moved {
            hours: PLACE_STEP_HOURS,
        };
    }

    // Cross into the neighboring area of the same region.
    let area_c = from.area;
    let in_region = world
        .region(area_c.region.x, area_c.region.y)
        .and_then(|region| region.area(area_c.x + dx, area_c.y + dy))
        .map(|area| entry_place(area, direction, rng));
    if let Some(dest) = in_region {
        relocate(world, agents, id, dest);
        return MoveOutcome::Moved {
            hours: AREA_CROSSING_HOURS,
        };
    }

    // Cross into the neighboring region: enter on its opposite edge at
    // the same row/column the agent is leaving from.
    let region_c = area_c.region;
    let in_world = world
        .region(region_c.x + dx, region_c.y + dy)
        .and_then(|region| {
            let side = region.side();
            let (ax, ay) = match direction {
                Direction::East => (0, area_c.y),
                Direction::West => (side - 1, area_c.y),
                Direction::South => (area_c.x, 0),
                Direction::North => (area_c.x, side - 1),
            };
            region.area(ax, ay).map(|area| entry_place(area, direction, rng))
        });
    if let Some(dest) = in_world {
        relocate(world, agents, id, dest);
        return MoveOutcome::Moved {
            hours: REGION_CROSSING_HOURS,
        };
    }

    MoveOutcome::Blocked
}

/// Entry place on the edge opposite the travel direction, at a
/// uniformly random position along it.
fn entry_place(area: &Area, direction: Direction, rng: &mut ChaCha8Rng) -> PlaceCoord {
    let side = area.side();
    let along = rng.gen_range(0..side);
    let (x, y) = match direction {
        Direction::East => (0, along),
        Direction::West => (side - 1, along),
        Direction::South => (along, 0),
        Direction::North => (along, side - 1),
    };
    PlaceCoord::new(area.coord(), x, y)
}

/// Move the agent between places, keeping the occupant lists and the
/// agent's current-place reference mutually consistent.
pub(crate) fn relocate(world: &mut World, agents: &mut AgentRegistry, id: AgentId, dest: PlaceCoord) {
    let Some(agent) = agents.get_mut(id) else {
        return;
    };
    if let Some(old) = world.place_mut(agent.place) {
        old.remove_occupant(id);
    }
    agent.place = dest;
    if let Some(new) = world.place_mut(dest) {
        new.add_occupant(id);
    }
}
