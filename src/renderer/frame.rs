use crate::game::Session;
use crate::world::{BlockId, VoxelPos};
use glam::Vec3;
use std::collections::BTreeMap;

/// One cube to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInstance {
    pub position: VoxelPos,
    pub block: BlockId,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// Everything a renderer needs for one frame, detached from the session
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub camera: CameraPose,
    pub blocks: Vec<BlockInstance>,
    pub remote_players: Vec<Vec3>,
    /// Block under the crosshair, for a selection outline
    pub target: Option<VoxelPos>,
}

impl Frame {
    pub fn capture(session: &Session) -> Self {
        let player = session.player();
        Self {
            camera: CameraPose {
                position: player.position,
                yaw: player.yaw,
                pitch: player.pitch,
            },
            blocks: session
                .world()
                .iter()
                .map(|(position, block)| BlockInstance { position, block })
                .collect(),
            remote_players: session.remote_players().map(|remote| remote.position()).collect(),
            target: session.target().map(|hit| hit.position),
        }
    }
}

/// Instances of one block type, drawn with one colour
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBatch {
    pub block: BlockId,
    pub color: u32,
    pub positions: Vec<VoxelPos>,
}

/// Frame instances grouped per block type, in block id order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderBatches {
    batches: Vec<RenderBatch>,
}

impl RenderBatches {
    pub fn from_instances(instances: &[BlockInstance]) -> Self {
        let mut grouped: BTreeMap<BlockId, Vec<VoxelPos>> = BTreeMap::new();
        for instance in instances.iter().filter(|instance| !instance.block.is_air()) {
            grouped.entry(instance.block).or_default().push(instance.position);
        }
        Self {
            batches: grouped
                .into_iter()
                .map(|(block, positions)| RenderBatch {
                    block,
                    color: block.color(),
                    positions,
                })
                .collect(),
        }
    }

    pub fn batches(&self) -> &[RenderBatch] {
        &self.batches
    }

    pub fn instance_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.positions.len()).sum()
    }
}
