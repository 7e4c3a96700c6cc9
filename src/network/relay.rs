//! In-process multiplayer relay
//!
//! Mirrors the endpoint's behaviour: connections register at the spawn pose,
//! position updates are stored per connection, block edits are kept in a
//! shared world overlay, and any unrecognised body is answered with `OK`.

use super::client::Transport;
use super::error::SyncResult;
use super::protocol::{PlayerPose, PlayerState, Reply, Request};
use crate::world::{BlockId, VoxelMap, VoxelPos};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared relay state: connected players and edited blocks
#[derive(Debug, Default)]
pub struct RelayState {
    players: BTreeMap<String, PlayerPose>,
    edits: VoxelMap,
}

impl RelayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, connection_id: &str) {
        self.players.insert(connection_id.to_string(), PlayerPose::default());
        log::info!("Relay: {} connected", connection_id);
    }

    pub fn disconnect(&mut self, connection_id: &str) {
        if self.players.remove(connection_id).is_some() {
            log::info!("Relay: {} disconnected", connection_id);
        }
    }

    pub fn player(&self, connection_id: &str) -> Option<PlayerPose> {
        self.players.get(connection_id).copied()
    }

    pub fn edits(&self) -> &VoxelMap {
        &self.edits
    }

    fn listing(&self, exclude: Option<&str>) -> Vec<PlayerState> {
        self.players
            .iter()
            .filter(|(id, _)| Some(id.as_str()) != exclude)
            .map(|(id, pose)| PlayerState {
                id: id.clone(),
                position: pose.position,
                rotation: pose.rotation,
            })
            .collect()
    }

    /// Apply one typed request from `connection_id`
    pub fn handle(&mut self, connection_id: &str, request: Request) -> Reply {
        match request {
            Request::UpdatePosition { position, rotation } => {
                // Unknown connections are not registered implicitly
                if let Some(pose) = self.players.get_mut(connection_id) {
                    *pose = PlayerPose { position, rotation };
                }
                Reply::PlayerUpdate {
                    players: self.listing(Some(connection_id)),
                }
            }
            Request::PlaceBlock { x, y, z, block } => {
                self.edits.set(VoxelPos::new(x, y, z), block);
                Reply::BlockPlaced { x, y, z, block }
            }
            Request::RemoveBlock { x, y, z } => {
                self.edits.remove(VoxelPos::new(x, y, z));
                Reply::BlockRemoved { x, y, z }
            }
            Request::GetPlayers => Reply::PlayersData {
                players: self.listing(None),
            },
        }
    }

    /// Apply a raw JSON body the way the endpoint would
    pub fn handle_value(&mut self, connection_id: &str, body: Value) -> Value {
        match serde_json::from_value::<Request>(body) {
            Ok(request) => {
                let reply = self.handle(connection_id, request);
                serde_json::to_value(reply).unwrap_or_else(|_| json!({ "message": "OK" }))
            }
            Err(_) => json!({ "message": "OK" }),
        }
    }
}

/// One connection to a shared in-process relay
#[derive(Debug, Clone)]
pub struct LocalRelay {
    state: Arc<Mutex<RelayState>>,
    connection_id: String,
}

impl LocalRelay {
    /// A fresh relay with nobody connected
    pub fn shared() -> Arc<Mutex<RelayState>> {
        Arc::new(Mutex::new(RelayState::new()))
    }

    /// Register `connection_id` on `state` and return its transport
    pub async fn connect(state: Arc<Mutex<RelayState>>, connection_id: impl Into<String>) -> Self {
        let connection_id = connection_id.into();
        state.lock().await.connect(&connection_id);
        Self {
            state,
            connection_id,
        }
    }

    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    pub async fn disconnect(&self) {
        self.state.lock().await.disconnect(&self.connection_id);
    }

    /// Block stored in the relay's edit overlay
    pub async fn edited_block(&self, position: VoxelPos) -> BlockId {
        self.state.lock().await.edits().get(position)
    }
}

impl Transport for LocalRelay {
    async fn exchange(&self, request: Request) -> SyncResult<Value> {
        let body = serde_json::to_value(&request)?;
        let mut state = self.state.lock().await;
        Ok(state.handle_value(&self.connection_id, body))
    }
}
