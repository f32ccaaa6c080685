use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use dungeon_engine::api::fight;
use dungeon_engine::config::GameConfig;
use dungeon_engine::content::load_world;
use dungeon_engine::script::{run_dir, world_lines};
use dungeon_engine::{Dice, Difficulty, DungeonKind};
use tracing::debug;

#[derive(Subcommand)]
enum Cmd {
    /// Run DIR/in.txt in test mode and write its output files into DIR
    Script {
        /// Directory holding in.txt
        dir: PathBuf,
    },
    /// Fight one dungeon with the world's player
    Fight {
        /// YAML or JSON settings; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        /// Built-in world id or path to a world script
        #[arg(long)]
        world: Option<String>,
        /// Dungeon to enter
        #[arg(long)]
        dungeon: Option<String>,
        /// Comma separated deck, replacing the world's deck
        #[arg(long, value_delimiter = ',')]
        deck: Vec<String>,
        /// Difficulty level 0-10 (out of range values are clamped)
        #[arg(long)]
        difficulty: Option<i64>,
        /// RNG seed for determinism
        #[arg(long)]
        seed: Option<u64>,
        /// Print the whole report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the world catalog in export format
    World {
        #[arg(long, default_value = "starter")]
        world: String,
    },
}

#[derive(Parser)]
#[command(name = "dungeon-cli")]
#[command(about = "Card dungeon crawler harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Script { dir } => {
            for path in run_dir(&dir)? {
                println!("{}", path.display());
            }
        }
        Cmd::Fight {
            config,
            world,
            dungeon,
            deck,
            difficulty,
            seed,
            json,
        } => {
            let mut cfg = match config {
                Some(path) => GameConfig::load(&path)?,
                None => GameConfig::default(),
            };
            if world.is_some() {
                cfg.world = world;
            }
            if dungeon.is_some() {
                cfg.dungeon = dungeon;
            }
            if !deck.is_empty() {
                cfg.deck = deck;
            }
            if let Some(level) = difficulty {
                cfg.difficulty = Difficulty::new(level);
            }
            if seed.is_some() {
                cfg.seed = seed;
            }

            let world_id = cfg.world.as_deref().unwrap_or("starter");
            let mut session = load_world(world_id)?;
            let player = session
                .player
                .as_mut()
                .with_context(|| format!("world '{}' sets up no player", world_id))?;
            if !cfg.deck.is_empty() {
                player.set_deck(cfg.deck.as_slice())?;
            }
            let dungeon_name = cfg.dungeon.as_deref().context("no dungeon given (use --dungeon)")?;
            let dungeon = session.world.dungeon(dungeon_name)?;
            if dungeon.kind == DungeonKind::Large && session.world.first_unowned_card(player).is_none() {
                bail!("'{}' has nothing left to grant: every catalog card is already owned", dungeon_name);
            }
            debug!(world = world_id, dungeon = dungeon_name, difficulty = cfg.difficulty.level(), "live fight");

            let mut dice: Dice = cfg.dice();
            let report = fight(&session.world, player, dungeon_name, cfg.difficulty, &mut dice)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for line in &report.lines {
                    println!("{}", line);
                }
            }
        }
        Cmd::World { world } => {
            let session = load_world(&world)?;
            for line in world_lines(&session.world) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
