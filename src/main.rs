// main.rs
use anyhow::Context;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use grid_raycaster::{FileSink, FrameSequencer, ImageFormat, RenderConfig};

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    // Reference scene: 16x16 map, 1024x512, ten one-degree turns
    let sequencer = FrameSequencer::new(RenderConfig::default())
        .context("invalid render configuration")?;

    let mut sink = FileSink::new("map", "map", ImageFormat::Ppm);
    sink.create_dir_all()?;

    let frames = sequencer
        .run(&mut sink)
        .with_context(|| format!("rendering into {}", sink.dir().display()))?;
    tracing::info!(frames, dir = %sink.dir().display(), "frames written");
    Ok(())
}
