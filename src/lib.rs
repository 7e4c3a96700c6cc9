pub mod config;
pub mod constants;
pub mod crafting;
pub mod game;
pub mod input;
pub mod inventory;
pub mod network;
pub mod physics;
pub mod renderer;
pub mod tiles;
pub mod world;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use winit::event::{ElementState, MouseButton};

pub use config::{ConfigError, GameConfig};
pub use game::{GameEvent, Session};
pub use input::{InputState, KeyCode};
pub use network::{HttpTransport, LocalRelay, SyncHandle};
pub use renderer::{Frame, FrameRenderer, HeadlessRenderer};
pub use tiles::TileSession;
pub use world::{BlockId, ChunkPos, VoxelMap, VoxelPos};

/// Which sandbox the demo driver runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Voxel,
    Tiles,
}

/// What a demo run did, for logging and tests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub voxels: usize,
    pub events: Vec<GameEvent>,
    pub remote_players: usize,
}

const FRAME_TIME: f32 = 1.0 / 60.0;

/// Drive a voxel session headlessly: settle, walk forward, dig and build
///
/// Syncs through the configured HTTP endpoint when sync is enabled.
pub async fn run_voxel(config: &GameConfig, frames: u64) -> Result<RunSummary> {
    let mut session = Session::new(config);
    log::info!(
        "Voxel session ready: {} voxels, player {} at {:?}",
        session.world().len(),
        session.player().username,
        session.player().position
    );

    if config.sync.enabled {
        let transport = HttpTransport::new(config.sync.endpoint.clone(), config.sync.timeout())
            .context("failed to create multiplayer transport")?;
        log::info!("Syncing with {}", transport.endpoint());
        session.attach_sync(SyncHandle::spawn(
            transport,
            session.player().pose(),
            config.sync.interval(),
        ));
    }

    let mut renderer = HeadlessRenderer::new();
    let mut input = InputState::new();
    input.set_cursor_locked(true);
    let mut summary = RunSummary::default();

    for frame in 0..frames {
        script_frame(&mut input, frame);
        session.update(&input, FRAME_TIME);
        input.end_frame();

        renderer
            .render(&Frame::capture(&session))
            .context("headless render failed")?;
        summary.events.extend(session.drain_events());

        if session.is_syncing() {
            tokio::time::sleep(Duration::from_secs_f32(FRAME_TIME)).await;
        }
    }

    session.shutdown().await.context("failed to stop multiplayer sync")?;

    summary.frames = renderer.stats().frames;
    summary.voxels = session.world().len();
    summary.remote_players = session.remote_players().count();
    log::info!(
        "Voxel run finished: {} frames, {} events, {} voxels",
        summary.frames,
        summary.events.len(),
        summary.voxels
    );
    Ok(summary)
}

/// Scripted input: fall for a second, walk, look down, break, place
fn script_frame(input: &mut InputState, frame: u64) {
    match frame {
        60 => input.process_key(KeyCode::KeyW, ElementState::Pressed),
        90 => input.process_key(KeyCode::KeyW, ElementState::Released),
        100 => input.process_mouse_motion((0.0, 400.0)),
        110 => input.process_mouse_button(MouseButton::Left, ElementState::Pressed),
        111 => input.process_mouse_button(MouseButton::Left, ElementState::Released),
        120 => input.process_key(KeyCode::Digit3, ElementState::Pressed),
        121 => input.process_key(KeyCode::Digit3, ElementState::Released),
        130 => input.process_mouse_button(MouseButton::Right, ElementState::Pressed),
        131 => input.process_mouse_button(MouseButton::Right, ElementState::Released),
        _ => {}
    }
}

/// Drive a tile session for `ticks` timer ticks, printing the grid at the end
///
/// Ticks are paced by `tiles.tick_ms`.
pub async fn run_tiles(config: &GameConfig, ticks: u64) -> Result<TileSession> {
    let mut rng = match config.tiles.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = TileSession::new(&mut rng);
    session.start();

    for key in [KeyCode::KeyA, KeyCode::KeyA, KeyCode::KeyS] {
        session.handle_key(key);
    }
    let (x, y) = session.player();
    if let Some(edit) = session.click(x, y, false) {
        log::info!("Tile edit: {:?}", edit);
    }
    if session.craft("Инструменты") {
        log::info!("Crafted tools");
    }
    let mut ticker = tokio::time::interval(config.tiles.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    for _ in 0..ticks {
        ticker.tick().await;
        session.tick();
    }

    log::info!("{}", tiles::status_line(&session));
    println!("{}", tiles::render_text(&session));
    Ok(session)
}
