//! JSON wire protocol of the multiplayer endpoint
//!
//! Every request is a POST body tagged by `action`. Replies are decoded
//! leniently: unknown fields are ignored and missing lists are empty.

use crate::constants::player::SPAWN_POSITION;
use crate::world::{BlockId, VoxelPos};
use serde::{Deserialize, Serialize};

/// Position and look direction of one player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPose {
    pub position: [f32; 3],
    /// Yaw and pitch in radians
    pub rotation: [f32; 2],
}

impl Default for PlayerPose {
    fn default() -> Self {
        Self {
            position: SPAWN_POSITION,
            rotation: [0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    GetPlayers,
    UpdatePosition {
        position: [f32; 3],
        rotation: [f32; 2],
    },
    PlaceBlock {
        x: i32,
        y: i32,
        z: i32,
        #[serde(rename = "type")]
        block: BlockId,
    },
    RemoveBlock {
        x: i32,
        y: i32,
        z: i32,
    },
}

impl From<PlayerPose> for Request {
    fn from(pose: PlayerPose) -> Self {
        Request::UpdatePosition {
            position: pose.position,
            rotation: pose.rotation,
        }
    }
}

/// A local world edit forwarded to the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEdit {
    Placed { position: VoxelPos, block: BlockId },
    Removed { position: VoxelPos },
}

impl From<BlockEdit> for Request {
    fn from(edit: BlockEdit) -> Self {
        match edit {
            BlockEdit::Placed { position, block } => Request::PlaceBlock {
                x: position.x,
                y: position.y,
                z: position.z,
                block,
            },
            BlockEdit::Removed { position } => Request::RemoveBlock {
                x: position.x,
                y: position.y,
                z: position.z,
            },
        }
    }
}

/// One entry of a players listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 2],
}

impl PlayerState {
    pub fn pose(&self) -> PlayerPose {
        PlayerPose {
            position: self.position,
            rotation: self.rotation,
        }
    }
}

/// Body of a `getPlayers` reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayersResponse {
    #[serde(default)]
    pub players: Vec<PlayerState>,
}

/// Replies the relay produces, tagged like requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Reply {
    PlayerUpdate {
        players: Vec<PlayerState>,
    },
    BlockPlaced {
        x: i32,
        y: i32,
        z: i32,
        #[serde(rename = "type")]
        block: BlockId,
    },
    BlockRemoved {
        x: i32,
        y: i32,
        z: i32,
    },
    PlayersData {
        players: Vec<PlayerState>,
    },
}
