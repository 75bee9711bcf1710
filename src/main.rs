//! Sekai - Entry Point
//!
//! Generates a world, drops a player into it and runs the simulation
//! for the requested number of hours, reporting where everyone ended
//! up. Interactive control lives with external front ends; this binary
//! exists to exercise the core end to end.

use clap::Parser;

use sekai::core::config::WorldConfig;
use sekai::core::error::Result;
use sekai::simulation::Session;
use sekai::world::Tier;

#[derive(Parser)]
#[command(name = "sekai", about = "Procedural world simulation core")]
struct Args {
    /// World size tier: very-small, small, medium or large
    #[arg(long, default_value = "small")]
    size: Tier,

    /// RNG seed; omit for a random world
    #[arg(long)]
    seed: Option<u64>,

    /// Hours of simulation to run after generation
    #[arg(long, default_value_t = 72)]
    hours: u32,

    /// Player name
    #[arg(long, default_value = "Hiro")]
    name: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sekai=info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, size = ?args.size, "generating world");

    let mut session = Session::generate(WorldConfig::new(args.size, seed))?;
    let player = session.spawn_player(&args.name, "Tanaka");

    println!("=== SEKAI ===");
    println!(
        "{} regions, {} nations, {} agents",
        session.world().side() * session.world().side(),
        session.nations().len(),
        session.agents().len()
    );
    println!("{}", session.date_string());

    session.tick_hours(args.hours);

    println!("--- after {} hours ---", args.hours);
    println!("{}", session.date_string());
    if let (Some(place), Some(area), Some(region)) = (
        session.place_of(player),
        session.area_of(player),
        session.region_of(player),
    ) {
        println!(
            "You are at {} a {:?} in {} a {:?} of {} a {:?} region",
            place.name(),
            place.kind(),
            area.name(),
            area.setting(),
            region.name(),
            region.biome()
        );
    }
    println!(
        "{} of {} agents still living",
        session.agents().active_count(),
        session.agents().len()
    );

    Ok(())
}
