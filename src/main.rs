//! Dao Engine - Entry Point
//!
//! Seeded end-to-end demonstration of the rule engine: one practitioner
//! cultivates, mines, conquers and develops a world, and consults the
//! advisor, over a configurable number of simulated days.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::runtime::Runtime;

use dao_engine::advisor::{self, AdvisorClient};
use dao_engine::conflict::{estimate_war, GuildSnapshot};
use dao_engine::core::config::EngineConfig;
use dao_engine::core::error::Result;
use dao_engine::core::types::{GuildId, PractitionerId, WorldId};
use dao_engine::progression::advance::cultivate;
use dao_engine::progression::practitioner::Practitioner;
use dao_engine::resources::{explore, harvest, mine};
use dao_engine::stages::StageTable;
use dao_engine::world::{apply_upgrade, conquer, open_free_world, upgrade_cost, UpgradeKind, WorldState};

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Parser, Debug)]
#[command(name = "dao-engine", about = "Cultivation rule engine demo")]
struct Args {
    /// RNG seed for a reproducible run
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Simulated days to run
    #[arg(long, default_value_t = 30)]
    days: u32,

    /// Optional TOML file overriding engine constants
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dao_engine=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_toml_file(path)?,
        None => EngineConfig::new(),
    };

    let rt = Runtime::new()?;
    let advisor_client = AdvisorClient::from_env().ok();
    if advisor_client.is_none() {
        tracing::warn!("ADVISOR_API_KEY not set - running with the local oracle only");
    }

    let table = StageTable::new();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut practitioner = Practitioner::new(PractitionerId::new());

    println!("=== DAO ENGINE ===");
    println!(
        "Practitioner begins at {} with {} spiritual power",
        practitioner.level, practitioner.spiritual_power
    );
    println!();

    // Every practitioner gets one free world
    let mut world = open_free_world(
        "Thanh Vân Giới",
        "Linh Giới",
        practitioner.id,
        practitioner.free_world_opening_used,
        &mut rng,
    )?;
    practitioner.free_world_opening_used = true;
    println!(
        "Opened {} (density {}, production {})",
        world.name, world.spiritual_density, world.production
    );

    for day in 1..=args.days {
        let now = day as i64 * SECONDS_PER_DAY;

        // Morning cultivation
        let session = cultivate(
            &table,
            &config,
            &practitioner.level,
            practitioner.spiritual_power,
            &mut rng,
        );
        practitioner.spiritual_power = session.new_power;
        practitioner.cultivation_points += session.points_gained;
        if let Some(new_level) = session.new_level {
            practitioner.level = new_level;
        }
        if let Some(achievement) = &session.achievement {
            println!("Day {day}: {} ({})", achievement.title, achievement.rarity.as_str());
        }

        // Mining, whenever the cooldown allows
        match mine(
            &config,
            now,
            practitioner.last_mining,
            practitioner.mining_level,
            practitioner.mining_experience,
            practitioner.mining_exempt(),
            &mut rng,
        ) {
            Ok(haul) => {
                practitioner.spiritual_stones += haul.stones_mined;
                practitioner.mining_level = haul.new_level;
                practitioner.mining_experience = haul.new_experience;
                practitioner.last_mining = Some(haul.mined_at);
                if haul.leveled_up {
                    println!("Day {day}: mining level reached {}", haul.new_level);
                }
            }
            Err(e) => tracing::debug!(error = %e, "mining skipped"),
        }

        // Reinvest in the world when the density upgrade is affordable
        let kind = UpgradeKind::SpiritualDensity;
        if practitioner.spiritual_stones >= upgrade_cost(&world, kind) {
            match apply_upgrade(&config, &mut world, kind, practitioner.spiritual_stones, now) {
                Ok(outcome) => {
                    practitioner.spiritual_stones -= outcome.cost;
                    if outcome.world_leveled_up {
                        println!("Day {day}: {} reached level {}", world.name, world.world_level);
                    }
                }
                Err(e) => tracing::debug!(error = %e, "upgrade skipped"),
            }
        }

        // Weekly exploration and harvest
        if day % 7 == 0 {
            match explore(
                &config,
                &mut world,
                practitioner.id,
                practitioner.spiritual_power,
                now,
                &mut rng,
            ) {
                Ok(trip) => {
                    practitioner.spiritual_power -= trip.energy_cost;
                    practitioner.spiritual_stones += trip.stones_gained;
                }
                Err(e) => tracing::debug!(error = %e, "exploration skipped"),
            }
            if let Ok(take) = harvest(&mut world, practitioner.id, &mut rng) {
                practitioner.spiritual_stones += take.stones_gained;
            }
        }
    }

    println!();
    println!(
        "After {} days: {} | power {} | {} stones | mining level {}",
        args.days,
        practitioner.level,
        practitioner.spiritual_power,
        practitioner.spiritual_stones,
        practitioner.mining_level
    );
    println!(
        "{}: level {} | power {} | {} upgrades",
        world.name,
        world.world_level,
        world.total_power(),
        world.total_upgrades
    );

    // With a month of savings, try to take a wild world by force
    let mut wild = WorldState::new(WorldId::new(), "Hoang Vực", "Ma Cảnh");
    match conquer(
        &config,
        &mut wild,
        practitioner.id,
        practitioner.spiritual_stones,
        practitioner.spiritual_power,
        args.days as i64 * SECONDS_PER_DAY,
    ) {
        Ok(outcome) => {
            practitioner.spiritual_stones -= outcome.cost_stones;
            practitioner.spiritual_power -= outcome.power_spent;
            println!(
                "Conquered {} for {} stones ({})",
                wild.name, outcome.cost_stones, outcome.achievement.title
            );
        }
        Err(e) => println!("Conquest of {} failed: {e}", wild.name),
    }

    // Consult the oracle
    let day_of_month = (args.days % 30) + 1;
    println!();
    println!(
        "Fortune: {}",
        advisor::fortune(
            practitioner.spiritual_power,
            practitioner.karma,
            practitioner.reputation,
            day_of_month,
        )
    );
    for line in advisor::cultivation_advice(&table, &practitioner) {
        println!("Advice: {line}");
    }
    let forecast = advisor::weather_forecast(&mut rng);
    println!("Weather: {} / ngày mai: {}", forecast.current, forecast.tomorrow);

    // Size up a rival sect
    let mut own_guild = GuildSnapshot::new(GuildId::new(), "Thanh Vân Môn");
    own_guild.treasury = practitioner.spiritual_stones / 2;
    let mut rival = GuildSnapshot::new(GuildId::new(), "Huyết Ma Tông");
    rival.level = 2;
    rival.treasury = 4_000;
    let prediction = estimate_war(
        own_guild.aggregate_power(),
        rival.aggregate_power(),
        &mut rng,
    );
    println!();
    println!(
        "War forecast vs {}: {:.1}% win, ~{} days, casualties {}",
        rival.name,
        prediction.win_probability_1,
        prediction.duration_days,
        prediction.casualty_estimate.display_name()
    );

    // Remote advisor, when configured
    if let Some(client) = &advisor_client {
        let advice = rt.block_on(client.cultivation_advice(&practitioner));
        println!();
        println!("Tiên sư: {advice}");
    }

    Ok(())
}
