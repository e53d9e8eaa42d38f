//! Replays a gesture script through an input adapter and the intent router,
//! printing what each event did to the scroll targets.

mod config;
mod replay;
mod scene;
mod script;

use anyhow::Context;
use clap::Parser;
use config::ReplayConfig;
use replay::Replay;
use script::Script;
use std::path::PathBuf;
use swerve_app_shell::InputCapabilities;

#[derive(Debug, Parser)]
#[command(
    name = "gesture-replay",
    version,
    about = "Replay scripted drags through the gesture router"
)]
struct Cli {
    /// Gesture script to replay.
    script: PathBuf,

    /// TOML file with a `[gesture]` table.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the intent deadband from the config file.
    #[arg(long)]
    deadband: Option<f32>,

    /// Feed events through the touch adapter instead of the pointer adapter.
    #[arg(long)]
    touch: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ReplayConfig::load(path)?,
        None => ReplayConfig::default(),
    };
    if let Some(deadband) = cli.deadband {
        config.gesture = config.gesture.with_intent_deadband(deadband);
    }
    config.touch |= cli.touch;

    let source = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("failed to read script {}", cli.script.display()))?;
    let script: Script = source
        .parse()
        .with_context(|| format!("invalid script {}", cli.script.display()))?;

    let capabilities = if config.touch {
        InputCapabilities::touch()
    } else {
        InputCapabilities::pointer()
    };
    let mut replay = Replay::new(&script, config.gesture, capabilities);
    log::info!(
        "replaying {} events through the {} adapter, deadband {}",
        script.steps.len(),
        replay.adapter_name(),
        config.gesture.intent_deadband
    );

    for record in replay.run(&script.steps) {
        println!("{record}");
    }
    let summary: Vec<String> = replay
        .scene()
        .offsets()
        .into_iter()
        .map(|(name, offset)| format!("{name}={offset}"))
        .collect();
    println!("final: {}", summary.join(" "));
    Ok(())
}
