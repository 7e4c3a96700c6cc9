use crate::world::{BlockId, VoxelPos};

/// Things that happened during a session update, drained by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    BlockBroken { position: VoxelPos, block: BlockId },
    BlockPlaced { position: VoxelPos, block: BlockId },
    /// A broken block went into the hotbar
    BlockCollected { block: BlockId },
    SlotSelected { slot: usize },
    /// The host should grab the pointer
    CaptureRequested,
    PlayerJoined { id: String },
    PlayerLeft { id: String },
}
