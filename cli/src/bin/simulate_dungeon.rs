use anyhow::Context;
use clap::Parser;
use dungeon_engine::api::simulate_many;
use dungeon_engine::content::load_world;
use dungeon_engine::Difficulty;

#[derive(Parser)]
#[command(name = "simulate-dungeon")]
#[command(about = "Monte Carlo sim: many fights against one dungeon")]
struct Args {
    /// Built-in world id or path to a world script
    #[arg(long, default_value = "starter")]
    world: String,

    /// Dungeon to fight
    #[arg(long)]
    dungeon: String,

    /// Number of trials
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// Difficulty level 0-10
    #[arg(long, default_value_t = 0)]
    difficulty: i64,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let session = load_world(&args.world)?;
    let player = session
        .player
        .as_ref()
        .with_context(|| format!("world '{}' sets up no player", args.world))?;
    let difficulty = Difficulty::new(args.difficulty);

    let stats = simulate_many(
        &session.world,
        player,
        &args.dungeon,
        difficulty,
        args.seed,
        args.trials,
    )?;

    println!("simulate-dungeon results");
    println!("------------------------");
    println!("trials:             {}", stats.samples);
    println!("dungeon:            {}", args.dungeon);
    println!("difficulty:         {}", difficulty.level());
    println!();
    println!("win rate:           {:.1}%", stats.win_rate() * 100.0);
    println!("avg rounds (wins):  {:.2}", stats.avg_rounds_on_win);
    println!("median rounds:      {}", stats.median_rounds_on_win);

    Ok(())
}
