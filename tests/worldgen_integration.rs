//! Integration tests for the generation pipeline
//!
//! These verify the structural invariants of a fully generated world:
//! grid dimensions per tier, parent/child addressing, unique rooms,
//! and the population seeded into castles and communities.

use sekai::agent::Profession;
use sekai::core::config::WorldConfig;
use sekai::simulation::Session;
use sekai::world::{PlaceKind, Setting, Tier};

fn small_session(seed: u64) -> Session {
    Session::generate(WorldConfig::new(Tier::VerySmall, seed)).expect("generation succeeds")
}

/// A very-small session that actually rolled at least one castle.
fn session_with_castle() -> Session {
    for seed in 0..64 {
        let session = small_session(seed);
        if session.stats().castles > 0 {
            return session;
        }
    }
    panic!("no seed in 0..64 produced a castle");
}

#[test]
fn test_region_grid_side_matches_tier() {
    assert_eq!(Tier::VerySmall.region_side(), 4);
    assert_eq!(Tier::Small.region_side(), 8);
    assert_eq!(Tier::Medium.region_side(), 16);
    assert_eq!(Tier::Large.region_side(), 32);

    let session = Session::generate(WorldConfig::new(Tier::Small, 42)).expect("generation");
    let world = session.world();
    assert_eq!(world.side(), 8);
    assert_eq!(world.regions().count(), 64);
    // every region's area grid shares the world's side length
    for region in world.regions() {
        assert_eq!(region.side(), 8);
    }
}

#[test]
fn test_parent_child_addressing_round_trips() {
    let session = small_session(42);
    let world = session.world();

    for region in world.regions() {
        let rc = region.coord();
        assert_eq!(world.region(rc.x, rc.y).unwrap().name(), region.name());
        for area in region.areas() {
            let ac = area.coord();
            assert_eq!(ac.region, rc, "area points back to its region");
            assert_eq!(world.area(ac).unwrap().name(), area.name());
            for place in area.places() {
                let pc = place.coord();
                assert_eq!(pc.area, ac, "place points back to its area");
                assert_eq!(world.place(pc).unwrap().name(), place.name());
            }
        }
    }
}

#[test]
fn test_out_of_range_lookups_are_absent() {
    let session = small_session(42);
    let world = session.world();
    assert!(world.region(-1, 0).is_none());
    assert!(world.region(0, world.side()).is_none());
    let region = world.region(0, 0).unwrap();
    assert!(region.area(region.side(), 0).is_none());
    let area = region.area(0, 0).unwrap();
    assert!(area.place(-1, -1).is_none());
    assert!(area.place(area.side(), 0).is_none());
}

#[test]
fn test_every_community_has_exactly_one_graveyard() {
    let session = small_session(42);
    for region in session.world().regions() {
        for area in region.areas() {
            let graveyards = area
                .places()
                .filter(|p| p.kind() == PlaceKind::Graveyard)
                .count();
            if area.setting().is_community() {
                assert_eq!(graveyards, 1, "{} ({:?})", area.name(), area.setting());
            } else {
                assert_eq!(graveyards, 0, "{} ({:?})", area.name(), area.setting());
            }
        }
    }
}

#[test]
fn test_castles_found_nations_with_rulers_and_retainers() {
    let session = session_with_castle();
    let world = session.world();

    let castles: Vec<_> = world
        .regions()
        .flat_map(|r| r.areas())
        .filter(|a| a.setting() == Setting::Castle)
        .collect();
    assert!(!castles.is_empty());
    assert_eq!(session.nations().len(), castles.len());

    for castle in castles {
        let thrones = castle
            .places()
            .filter(|p| p.kind() == PlaceKind::ThroneRoom)
            .count();
        assert_eq!(thrones, 1, "one throne room per castle");

        for place in castle.places() {
            let occupants = place.occupants();
            assert_eq!(
                occupants.len(),
                1,
                "every castle room holds exactly one agent"
            );
            let agent = session.agent(occupants[0]).unwrap();
            if place.kind() == PlaceKind::ThroneRoom {
                assert_eq!(agent.profession, Some(Profession::Daimyo));
            } else {
                assert_eq!(agent.profession, Some(Profession::Samurai));
            }
        }
    }

    for nation in session.nations() {
        let ruler = session.agent(nation.ruler).unwrap();
        assert_eq!(ruler.profession, Some(Profession::Daimyo));
        assert!(nation.name.starts_with("Kingdom of "));
    }
}

#[test]
fn test_work_places_spawn_matching_professions() {
    let session = small_session(42);
    let world = session.world();

    for area in world.regions().flat_map(|r| r.areas()) {
        if !area.setting().is_community() {
            continue;
        }
        for place in area.places() {
            if !place.kind().spawns_worker() {
                continue;
            }
            assert_eq!(place.occupants().len(), 1, "one resident per work place");
            let agent = session.agent(place.occupants()[0]).unwrap();
            let expected_kind = place.kind();
            let profession = agent.profession.expect("workers have a trade");
            let matches = match expected_kind {
                PlaceKind::Lodging => {
                    matches!(profession, Profession::Innkeeper | Profession::Builder)
                }
                PlaceKind::Trader => profession == Profession::Trader,
                PlaceKind::Blacksmith => profession == Profession::Blacksmith,
                PlaceKind::Farm => profession == Profession::Farmer,
                PlaceKind::Fishery => profession == Profession::Fisher,
                PlaceKind::Reserve => profession == Profession::Hunter,
                PlaceKind::Woodland => profession == Profession::Lumberjack,
                PlaceKind::Mine => profession == Profession::Miner,
                _ => false,
            };
            assert!(
                matches,
                "{:?} place held a {:?}",
                expected_kind, profession
            );
            assert_eq!(agent.home, place.coord(), "workers live where they work");
        }
    }
}

#[test]
fn test_occupancy_lists_match_agent_positions() {
    let session = session_with_castle();
    let world = session.world();

    for agent in session.agents().iter() {
        let place = world.place(agent.place).expect("agent stands somewhere");
        assert!(
            place.occupants().contains(&agent.id),
            "agent {:?} missing from its place's occupant list",
            agent.id
        );
    }
    for region in world.regions() {
        for area in region.areas() {
            for place in area.places() {
                for &id in place.occupants() {
                    let agent = session.agent(id).unwrap();
                    assert_eq!(agent.place, place.coord());
                }
            }
        }
    }
}

#[test]
fn test_generation_stats_match_world_contents() {
    let session = small_session(42);
    let world = session.world();
    let stats = session.stats();

    let count = |setting: Setting| {
        world
            .regions()
            .flat_map(|r| r.areas())
            .filter(|a| a.setting() == setting)
            .count() as u32
    };
    assert_eq!(stats.castles, count(Setting::Castle));
    assert_eq!(stats.towns, count(Setting::Town));
    assert_eq!(stats.villages, count(Setting::Village));
    assert_eq!(stats.hamlets, count(Setting::Hamlet));
    assert_eq!(stats.dungeons, count(Setting::Dungeon));
}

#[test]
fn test_same_seed_reproduces_the_world() {
    let a = small_session(7);
    let b = small_session(7);

    assert_eq!(a.agents().len(), b.agents().len());
    assert_eq!(a.nations().len(), b.nations().len());
    for (ra, rb) in a.world().regions().zip(b.world().regions()) {
        assert_eq!(ra.biome(), rb.biome());
        for (aa, ab) in ra.areas().zip(rb.areas()) {
            assert_eq!(aa.setting(), ab.setting());
            assert_eq!(aa.name(), ab.name());
        }
    }
    for (agent_a, agent_b) in a.agents().iter().zip(b.agents().iter()) {
        assert_eq!(agent_a.first_name, agent_b.first_name);
        assert_eq!(agent_a.profession, agent_b.profession);
        assert_eq!(agent_a.home, agent_b.home);
    }
}
