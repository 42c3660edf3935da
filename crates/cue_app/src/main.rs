//! Cue - headless billiards scene animation loop

use anyhow::Result;
use clap::Parser;
use cue_app::{App, CueConfig, HeadlessRenderer, HeadlessRunConfig, Pacing};
use cue_core::ScriptedInput;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Drive the billiards scene's animation loop without a window
#[derive(Parser, Debug)]
#[command(name = "cue")]
#[command(about = "Headless billiards scene animation loop")]
#[command(version)]
struct Args {
    /// Configuration file, or a directory containing cue.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to run (overrides [run].frames)
    #[arg(long)]
    frames: Option<u32>,

    /// Milliseconds per frame (overrides [run].tick_ms)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Simulated panel input, e.g. `120:bounce=3000` or `300:rate=0.05`
    #[arg(short, long = "input", value_name = "FRAME:PARAM=VALUE")]
    inputs: Vec<ScriptedInput>,

    /// Pace frames against the wall clock instead of virtual time
    #[arg(long)]
    realtime: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = load_config(args.config.as_deref())?;
    let run = HeadlessRunConfig {
        max_frames: args.frames.unwrap_or(config.run.frames),
        tick_ms: args.tick_ms.unwrap_or(config.run.tick_ms),
        pacing: if args.realtime {
            Pacing::Realtime
        } else {
            Pacing::Virtual
        },
        ..HeadlessRunConfig::default()
    };

    tracing::info!(
        frames = run.max_frames,
        tick_ms = run.tick_ms,
        pacing = ?run.pacing,
        inputs = args.inputs.len(),
        "Starting Cue"
    );

    let mut app = App::new(&config, HeadlessRenderer::new())?;
    let summary = app.run(run, &args.inputs)?;

    tracing::info!(
        frames = summary.frames,
        elapsed_ms = summary.elapsed_ms,
        accumulator = summary.rotate_accumulator,
        active_tweens = summary.active_tweens,
        skipped_inputs = summary.skipped_inputs,
        "run finished"
    );
    if let Some(frame) = app.renderer().last_frame() {
        tracing::info!(stick = ?frame.stick, balls = ?frame.balls, "final frame");
    }

    Ok(())
}

/// An explicit path must load; otherwise `./cue.toml` is used when present.
fn load_config(path: Option<&Path>) -> Result<CueConfig> {
    match path {
        Some(path) => CueConfig::load(path),
        None => {
            let local = Path::new("cue.toml");
            if local.is_file() {
                CueConfig::load(local)
            } else {
                tracing::debug!("no cue.toml found, using defaults");
                Ok(CueConfig::default())
            }
        }
    }
}
