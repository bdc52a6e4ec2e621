//! Command line front end: load a scene, render it, write a PNG.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use glint_renderer::{render, Scene};

/// Command line arguments.
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A Whitted-style ray tracer")]
struct Args {
    /// Scene description file (JSON)
    scene: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let description = glint_core::load_scene(&args.scene)
        .with_context(|| format!("failed to load scene {}", args.scene.display()))?;

    let scene = Scene::from_description(description);

    info!("Tracing {}x{}...", args.width, args.height);
    let start = Instant::now();
    let image = render(&scene, args.width, args.height);
    info!("Traced in {:.2?}", start.elapsed());

    image
        .write_png(&args.output)
        .with_context(|| format!("failed to write image {}", args.output.display()))?;
    info!("Wrote {}", args.output.display());

    Ok(())
}
