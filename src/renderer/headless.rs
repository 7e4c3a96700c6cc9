use super::{Frame, FrameRenderer, RenderBatches, RenderError};

/// Counters kept by the headless renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames: u64,
    pub last_instances: usize,
    pub last_batches: usize,
    pub last_remote_players: usize,
}

/// Batches frames without drawing anything
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    stats: RenderStats,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }
}

impl FrameRenderer for HeadlessRenderer {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        let batches = RenderBatches::from_instances(&frame.blocks);
        self.stats.frames += 1;
        self.stats.last_instances = batches.instance_count();
        self.stats.last_batches = batches.batches().len();
        self.stats.last_remote_players = frame.remote_players.len();
        log::debug!(
            "Frame {}: {} instances in {} batches, {} remote players",
            self.stats.frames,
            self.stats.last_instances,
            self.stats.last_batches,
            self.stats.last_remote_players
        );
        Ok(())
    }
}
