use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use funhouse::audio::AudioContext;
use funhouse::config::GameConfig;
use funhouse::game::Game;
use funhouse::host;
use funhouse::input::KeyBindings;
use funhouse::level::JsonLevelLoader;
use funhouse::physics::Platformer;

#[derive(Debug, Parser)]
#[command(name = "funhouse", about = "Side-scrolling platformer")]
struct Cli {
    /// JSON config file; unspecified values keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding `funhouse_level_<n>.json` files.
    #[arg(long)]
    levels: Option<PathBuf>,
    /// Level to start on.
    #[arg(long, default_value_t = 1)]
    level: u32,
    /// Run without opening an audio device.
    #[arg(long)]
    mute: bool,
    /// Sound effect volume (linear amplitude, 0.0 to 2.0).
    #[arg(long)]
    volume: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("funhouse=info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(dir) = cli.levels {
        config.assets.levels_dir = dir;
    }
    if let Some(volume) = cli.volume {
        config.assets.sound_volume = volume;
    }

    let loader = JsonLevelLoader::from_config(&config);
    let sounds = if cli.mute { AudioContext::muted() } else { AudioContext::from_assets(&config.assets) };
    let physics = Platformer::new(config.movement.gravity);

    let game = Game::new(config, physics, loader, sounds, cli.level)
        .with_context(|| format!("could not start on level {}", cli.level))?;

    tracing::info!("starting funhouse");
    host::run(game, KeyBindings::default())
}
