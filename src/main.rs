//! Headless Voxel Craft driver
//! Usage: voxel-craft [voxel|tiles] [config.toml]

use voxel_craft::{run_tiles, run_voxel, GameConfig, Mode};

const DEFAULT_CONFIG: &str = "voxel-craft.toml";
const VOXEL_FRAMES: u64 = 300;
const TILE_TICKS: u64 = 50;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mode = match args.next().as_deref() {
        None | Some("voxel") => Mode::Voxel,
        Some("tiles") => Mode::Tiles,
        Some(other) => anyhow::bail!("unknown mode {other:?}, expected `voxel` or `tiles`"),
    };
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = GameConfig::load(&config_path)?;

    log::info!("Starting Voxel Craft in {:?} mode", mode);
    match mode {
        Mode::Voxel => {
            let summary = run_voxel(&config, VOXEL_FRAMES).await?;
            for event in &summary.events {
                log::info!("{:?}", event);
            }
        }
        Mode::Tiles => {
            run_tiles(&config, TILE_TICKS).await?;
        }
    }
    Ok(())
}
