//! Integration tests for the scheduler, the NPC day cycle and
//! player-facing session operations.

use sekai::agent::Mode;
use sekai::core::config::WorldConfig;
use sekai::simulation::{MoveOutcome, Session};
use sekai::world::{Direction, Tier};

fn session_with_npcs() -> Session {
    for seed in 0..64 {
        let session =
            Session::generate(WorldConfig::new(Tier::VerySmall, seed)).expect("generation");
        if session.agents().npc_count() > 0 {
            return session;
        }
    }
    panic!("no seed in 0..64 produced any NPCs");
}

#[test]
fn test_clock_rolls_over_day_month_year() {
    let mut session = Session::generate(WorldConfig::new(Tier::VerySmall, 42)).unwrap();
    assert_eq!(session.date_string(), "Year: 0001 Month:  1 Day:  1 Hour:  1");

    session.tick_hours(24);
    assert_eq!(session.calendar().hour(), 1);
    assert_eq!(session.calendar().day(), 2);

    // finish the month: 29 more days
    session.tick_hours(29 * 24);
    assert_eq!(session.calendar().day(), 1);
    assert_eq!(session.calendar().month(), 2);

    // finish the year: 11 more months
    session.tick_hours(11 * 30 * 24);
    assert_eq!(session.calendar().month(), 1);
    assert_eq!(session.calendar().year(), 2);
}

#[test]
fn test_npcs_follow_the_daily_schedule() {
    let mut session = session_with_npcs();

    // Hour 2: the rest window. Everyone spawned at home, so they sleep.
    session.tick();
    assert_eq!(session.calendar().hour(), 2);
    for agent in session.agents().iter() {
        if agent.is_active() && agent.kind == sekai::agent::AgentKind::Npc {
            assert_eq!(agent.mode, Mode::Sleeping, "{} should sleep", agent.first_name);
        }
    }

    // Hour 7: the work window starts; still at home, so they work.
    session.tick_hours(5);
    assert_eq!(session.calendar().hour(), 7);
    for agent in session.agents().iter() {
        if agent.is_active() && agent.kind == sekai::agent::AgentKind::Npc {
            assert_eq!(agent.mode, Mode::Working, "{} should work", agent.first_name);
        }
    }

    // Hour 15: the social window clears duty flags.
    session.tick_hours(8);
    assert_eq!(session.calendar().hour(), 15);
    for agent in session.agents().iter() {
        if agent.is_active() && agent.kind == sekai::agent::AgentKind::Npc {
            assert_eq!(agent.mode, Mode::Idle, "{} should be off duty", agent.first_name);
        }
    }
}

#[test]
fn test_player_spawns_into_a_home() {
    let mut session = session_with_npcs();
    let player = session.spawn_player("Hiro", "Tanaka");

    let agent = session.agent(player).expect("player registered");
    assert_eq!(agent.home, agent.place, "spawn place doubles as home");
    assert_eq!(agent.age, 20);
    assert!((31..=70).contains(&agent.max_age), "max age is d40+30");

    let place = session.place_of(player).expect("player stands somewhere");
    assert!(place.occupants().contains(&player));
}

#[test]
fn test_player_walks_to_the_world_edge_and_stops() {
    let mut session = session_with_npcs();
    let player = session.spawn_player("Hiro", "Tanaka");

    // March east; the world is finite so the horizon arrives within
    // regions * areas * places steps.
    let mut steps = 0;
    loop {
        match session.attempt_move(player, Direction::East) {
            MoveOutcome::Moved { hours } => {
                assert!(matches!(hours, 1 | 3 | 5), "unexpected cost {}", hours);
                steps += 1;
                assert!(steps < 500, "never reached the world edge");
            }
            MoveOutcome::Blocked => break,
        }
    }

    // At the edge: repeated attempts change nothing and cost nothing.
    let at_edge = session.agent(player).unwrap().place;
    let date = session.date_string();
    assert_eq!(session.attempt_move(player, Direction::East), MoveOutcome::Blocked);
    assert_eq!(session.agent(player).unwrap().place, at_edge);
    assert_eq!(session.date_string(), date);

    // The world's easternmost column is underneath the player.
    let world_side = session.world().side();
    assert_eq!(at_edge.region().x, world_side - 1);
}

#[test]
fn test_player_ages_and_dies_on_birthday() {
    let mut session = session_with_npcs();
    let player = session.spawn_player("Hiro", "Tanaka");
    {
        let agent = session.agent_mut(player).unwrap();
        agent.birth_month = 1;
        agent.birth_day = 2;
        agent.age = 30;
        agent.max_age = 31;
    }

    session.tick_hours(24); // to hour 1 of day 2, the birthday
    let agent = session.agent(player).unwrap();
    assert_eq!(agent.age, 31);
    assert!(!agent.alive, "max age reached");

    // Dead agents are no-ops for movement.
    let place = agent.place;
    assert_eq!(session.attempt_move(player, Direction::South), MoveOutcome::Blocked);
    assert_eq!(session.agent(player).unwrap().place, place);
}

#[test]
fn test_relationships_form_during_social_hours() {
    let mut session = session_with_npcs();

    // Run a few full days so social windows have fired repeatedly.
    session.tick_hours(5 * 24);

    let relations: usize = session
        .agents()
        .iter()
        .map(|a| a.relationships.len())
        .sum();
    let occupied_pairs = session
        .agents()
        .iter()
        .filter(|a| a.is_active())
        .count();
    // With castle retainers packed into adjacent rooms this is
    // effectively certain whenever more than a handful of NPCs exist.
    if occupied_pairs > 20 {
        assert!(relations > 0, "no one talked to anyone in five days");
    }
}
