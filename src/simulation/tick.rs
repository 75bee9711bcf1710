//! The hourly agent update
//!
//! Each simulated hour every agent ages on its birthday, then every
//! living NPC runs the schedule for the current day phase: sleep at
//! home by night, work at home by day, wander and talk in between. The
//! player ages but is driven externally.

use rand_chacha::ChaCha8Rng;

use crate::agent::{AgentId, AgentKind, AgentRegistry, Attribute, Mode, Profession};
use crate::core::calendar::{Calendar, DayPhase};
use crate::core::dice::{Dice, D10, D2, D4};
use crate::simulation::movement::attempt_move;
use crate::world::{Direction, PlaceCoord, World};

/// Farmers gain 2d2-2 (0-2) provisions per working hour.
const HARVEST: Dice = Dice::set(2, 2, -2);

/// Run one hour of agent updates in registry order.
pub(crate) fn run_agent_hour(
    world: &mut World,
    agents: &mut AgentRegistry,
    calendar: &Calendar,
    rng: &mut ChaCha8Rng,
) {
    for id in agents.ids().collect::<Vec<_>>() {
        age_on_birthday(agents, id, calendar);

        let (active, kind) = match agents.get(id) {
            Some(agent) => (agent.is_active(), agent.kind),
            None => continue,
        };
        if !active || kind == AgentKind::Player {
            continue;
        }

        match calendar.phase() {
            DayPhase::Rest => rest_phase(world, agents, id, rng),
            DayPhase::Work => work_phase(world, agents, id, rng),
            DayPhase::Social => {
                wander(world, agents, id, rng);
                socialize(world, agents, id, rng);
            }
        }
    }
}

/// Age up on hour 1 of the agent's birthday; at max age the agent dies
/// and drops out of the simulation.
fn age_on_birthday(agents: &mut AgentRegistry, id: AgentId, calendar: &Calendar) {
    let Some(agent) = agents.get_mut(id) else {
        return;
    };
    if !agent.alive
        || calendar.month() != agent.birth_month
        || calendar.day() != agent.birth_day
        || calendar.hour() != 1
    {
        return;
    }
    agent.age += 1;
    if agent.age >= agent.max_age {
        agent.alive = false;
        tracing::debug!(
            first = %agent.first_name,
            last = %agent.last_name,
            age = agent.age,
            "died of old age"
        );
    }
}

/// Night: head home, then sleep.
fn rest_phase(world: &mut World, agents: &mut AgentRegistry, id: AgentId, rng: &mut ChaCha8Rng) {
    let (at_home, home) = match agents.get(id) {
        Some(agent) => (agent.is_at_home(), agent.home),
        None => return,
    };
    if !at_home {
        step_toward(world, agents, id, home, rng);
    } else if let Some(agent) = agents.get_mut(id) {
        agent.mode = Mode::Sleeping;
    }
}

/// Day: head home, then work the home place.
fn work_phase(world: &mut World, agents: &mut AgentRegistry, id: AgentId, rng: &mut ChaCha8Rng) {
    let (at_home, home) = match agents.get(id) {
        Some(agent) => (agent.is_at_home(), agent.home),
        None => return,
    };
    if !at_home {
        step_toward(world, agents, id, home, rng);
        return;
    }
    if let Some(agent) = agents.get_mut(id) {
        agent.mode = Mode::Working;
        if agent.profession == Some(Profession::Farmer) {
            agent.provisions += HARVEST.roll(rng);
        }
    }
}

/// One greedy step toward the target: compare at the deepest hierarchy
/// level the two positions share, y axis before x.
fn step_toward(
    world: &mut World,
    agents: &mut AgentRegistry,
    id: AgentId,
    target: PlaceCoord,
    rng: &mut ChaCha8Rng,
) {
    let here = match agents.get_mut(id) {
        Some(agent) => {
            agent.mode = Mode::Idle;
            agent.place
        }
        None => return,
    };

    let (from, to) = if here.area == target.area {
        ((here.x, here.y), (target.x, target.y))
    } else if here.region() == target.region() {
        ((here.area.x, here.area.y), (target.area.x, target.area.y))
    } else {
        let (hr, tr) = (here.region(), target.region());
        ((hr.x, hr.y), (tr.x, tr.y))
    };

    let direction = if from.1 < to.1 {
        Direction::South
    } else if from.1 > to.1 {
        Direction::North
    } else if from.0 < to.0 {
        Direction::East
    } else if from.0 > to.0 {
        Direction::West
    } else {
        return; // same cell at this level, nothing to do this hour
    };
    attempt_move(world, agents, id, direction, rng);
}

/// One random cardinal step.
fn wander(world: &mut World, agents: &mut AgentRegistry, id: AgentId, rng: &mut ChaCha8Rng) {
    if let Some(agent) = agents.get_mut(id) {
        agent.mode = Mode::Idle;
    }
    let direction = match D4.roll(rng) {
        1 => Direction::South,
        2 => Direction::North,
        3 => Direction::East,
        _ => Direction::West,
    };
    attempt_move(world, agents, id, direction, rng);
}

/// Talk with everyone sharing the place who is awake and off duty.
/// Both sides adjust their opinion of the other.
fn socialize(world: &mut World, agents: &mut AgentRegistry, id: AgentId, rng: &mut ChaCha8Rng) {
    let here = match agents.get(id) {
        Some(agent) => agent.place,
        None => return,
    };
    let occupants: Vec<AgentId> = world
        .place(here)
        .map(|place| place.occupants().to_vec())
        .unwrap_or_default();

    for other in occupants {
        if other == id {
            continue;
        }
        let receptive = agents
            .get(other)
            .map(|o| o.is_active() && o.mode == Mode::Idle)
            .unwrap_or(false);
        if !receptive {
            continue;
        }
        talk(agents, id, other, rng);
        talk(agents, other, id, rng);
    }
}

/// Adjust `a`'s opinion of `b` by a signed d10 shaded by `b`'s charisma.
fn talk(agents: &mut AgentRegistry, a: AgentId, b: AgentId, rng: &mut ChaCha8Rng) {
    let Some(charisma) = agents
        .get(b)
        .map(|o| o.attributes.modifier(Attribute::Charisma))
    else {
        return;
    };
    let mut roll = D10.roll(rng);
    if D2.roll(rng) == 1 {
        roll = -roll;
    }
    roll += charisma;
    if let Some(agent) = agents.get_mut(a) {
        agent.adjust_relation(b, roll);
    }
}
