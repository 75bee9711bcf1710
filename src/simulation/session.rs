//! The session: one world, its agents, and the shared clock
//!
//! A single session object owns all mutable state; generation, the
//! scheduler and every query go through it. There are no process-wide
//! statics, so independent sessions can coexist (and tests rely on
//! that).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::agent::{
    Agent, AgentId, AgentKind, AgentRegistry, ArmorKind, Attributes, Mode, Nation, Purse,
    WeaponKind,
};
use crate::core::calendar::{Calendar, DAYS_PER_MONTH, MONTHS_PER_YEAR};
use crate::core::config::WorldConfig;
use crate::core::dice::Dice;
use crate::core::error::{Result, SekaiError};
use crate::simulation::movement::{self, MoveOutcome};
use crate::simulation::tick;
use crate::world::{
    Area, AreaCoord, Direction, Place, PlaceCoord, PlaceKind, Region, RegionCoord, World,
};
use crate::worldgen::{self, GenStats};

/// Players start aged 20 and die of old age at d40+30 (31-70).
const PLAYER_MAX_AGE: Dice = Dice::set(1, 40, 30);

pub struct Session {
    world: World,
    agents: AgentRegistry,
    nations: Vec<Nation>,
    calendar: Calendar,
    rng: ChaCha8Rng,
    stats: GenStats,
    player: Option<AgentId>,
}

impl Session {
    /// Generate a world and its population in one shot. Long-running
    /// for large tiers; callers should treat it as blocking.
    pub fn generate(config: WorldConfig) -> Result<Self> {
        config.validate().map_err(SekaiError::InvalidConfig)?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut stats = GenStats::default();

        let mut world = worldgen::generate(&config, &mut rng, &mut stats);
        let mut agents = AgentRegistry::new();
        let nations = worldgen::population::populate(&mut world, &mut agents, &mut rng);

        stats.log_summary();
        tracing::info!(
            agents = agents.len(),
            nations = nations.len(),
            "world populated"
        );

        Ok(Self {
            world,
            agents,
            nations,
            calendar: Calendar::new(),
            rng,
            stats,
            player: None,
        })
    }

    /// Spawn the player into a random community, preferring a lodging
    /// there; the spawn place doubles as home. Falls back to the
    /// north-western corner of the world when no community exists.
    pub fn spawn_player(&mut self, first_name: &str, last_name: &str) -> AgentId {
        let spawn = self.pick_player_spawn();
        let rng = &mut self.rng;
        let id = self.agents.spawn(|id| Agent {
            id,
            kind: AgentKind::Player,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            home: spawn,
            place: spawn,
            age: 20,
            max_age: PLAYER_MAX_AGE.roll(rng),
            birth_day: Dice::new(DAYS_PER_MONTH).roll(rng),
            birth_month: Dice::new(MONTHS_PER_YEAR).roll(rng),
            attributes: Attributes::roll(rng),
            profession: None,
            weapon: WeaponKind::Bo,
            armor: ArmorKind::Cloth,
            purse: Purse::new(0, 0, 1, 10),
            provisions: 1,
            mode: Mode::Idle,
            alive: true,
            relationships: Default::default(),
        });
        if let Some(place) = self.world.place_mut(spawn) {
            place.add_occupant(id);
        }
        self.player = Some(id);
        id
    }

    fn pick_player_spawn(&mut self) -> PlaceCoord {
        use rand::Rng;

        let communities: Vec<AreaCoord> = self
            .world
            .regions()
            .flat_map(|region| region.areas())
            .filter(|area| area.setting().is_community())
            .map(|area| area.coord())
            .collect();

        let fallback = PlaceCoord::new(AreaCoord::new(RegionCoord::new(0, 0), 0, 0), 0, 0);
        if communities.is_empty() {
            tracing::warn!("no community generated, player starts at the world corner");
            return fallback;
        }
        let community = communities[self.rng.gen_range(0..communities.len())];
        let Some(area) = self.world.area(community) else {
            return fallback;
        };
        let lodgings: Vec<PlaceCoord> = area
            .places()
            .filter(|p| p.kind() == PlaceKind::Lodging)
            .map(|p| p.coord())
            .collect();
        if lodgings.is_empty() {
            let all: Vec<PlaceCoord> = area.places().map(|p| p.coord()).collect();
            all[self.rng.gen_range(0..all.len())]
        } else {
            lodgings[self.rng.gen_range(0..lodgings.len())]
        }
    }

    /// Advance the clock one hour, then update every agent.
    pub fn tick(&mut self) {
        self.calendar.advance();
        tick::run_agent_hour(
            &mut self.world,
            &mut self.agents,
            &self.calendar,
            &mut self.rng,
        );
    }

    /// n sequential single-hour ticks; side effects fire every hour.
    pub fn tick_hours(&mut self, hours: u32) {
        for _ in 0..hours {
            self.tick();
        }
    }

    /// One cardinal step for the agent. The returned cost is not billed
    /// here; callers advance the clock for player moves.
    pub fn attempt_move(&mut self, id: AgentId, direction: Direction) -> MoveOutcome {
        movement::attempt_move(
            &mut self.world,
            &mut self.agents,
            id,
            direction,
            &mut self.rng,
        )
    }

    /// `Year: YYYY Month: MM Day: DD Hour: HH`
    pub fn date_string(&self) -> String {
        self.calendar.date_string()
    }

    // Query surface for collaborators (UI, combat, inventory).

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agents(&self) -> &AgentRegistry {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Mutable agent access for collaborators that own agent state
    /// changes (combat damage, trading). Current-place updates must
    /// still go through `attempt_move`.
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id)
    }

    pub fn nations(&self) -> &[Nation] {
        &self.nations
    }

    pub fn stats(&self) -> &GenStats {
        &self.stats
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn player(&self) -> Option<AgentId> {
        self.player
    }

    /// The place an agent is standing in.
    pub fn place_of(&self, id: AgentId) -> Option<&Place> {
        self.world.place(self.agents.get(id)?.place)
    }

    /// The area around an agent.
    pub fn area_of(&self, id: AgentId) -> Option<&Area> {
        self.world.area(self.agents.get(id)?.place.area)
    }

    /// The region around an agent.
    pub fn region_of(&self, id: AgentId) -> Option<&Region> {
        let region = self.agents.get(id)?.place.region();
        self.world.region(region.x, region.y)
    }

    /// Agents currently standing in the addressed place.
    pub fn occupants(&self, coord: PlaceCoord) -> &[AgentId] {
        self.world
            .place(coord)
            .map(|place| place.occupants())
            .unwrap_or(&[])
    }
}
