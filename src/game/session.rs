//! Voxel sandbox session
//!
//! Owns the world, the local player, the hotbar and the remote player mirrors.
//! All mutation goes through `Session` on the caller's thread; the optional
//! sync task only exchanges messages with it.

use super::controller::step_player;
use super::events::GameEvent;
use super::player::{Player, RemotePlayer};
use crate::config::{GameConfig, PlayerConfig};
use crate::input::{movement_intent, voxel_actions, InputState, MoveIntent, VoxelAction};
use crate::inventory::Hotbar;
use crate::network::{BlockEdit, Snapshot, SyncHandle, SyncResult};
use crate::world::{self, generate_spawn_area, RaycastHit, VoxelMap, VoxelPos};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, VecDeque};

pub struct Session {
    world: VoxelMap,
    player: Player,
    hotbar: Hotbar,
    remote_players: BTreeMap<String, RemotePlayer>,
    events: VecDeque<GameEvent>,
    last_snapshot: u64,
    sync: Option<SyncHandle>,
    mouse_sensitivity: f32,
    reach: f32,
}

impl Session {
    /// Fresh session with the spawn area generated
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = match config.world.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut map = VoxelMap::new();
        generate_spawn_area(
            &mut map,
            &config.world.terrain,
            config.world.spawn_chunk_radius,
            &mut rng,
        );
        Self::with_world(map, &config.player)
    }

    /// Session over an existing world, without generating anything
    pub fn with_world(world: VoxelMap, config: &PlayerConfig) -> Self {
        Self {
            world,
            player: Player::new(config.id.clone(), config.username.clone()),
            hotbar: Hotbar::new(),
            remote_players: BTreeMap::new(),
            events: VecDeque::new(),
            last_snapshot: 0,
            sync: None,
            mouse_sensitivity: config.mouse_sensitivity,
            reach: config.reach,
        }
    }

    pub fn world(&self) -> &VoxelMap {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut VoxelMap {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn hotbar(&self) -> &Hotbar {
        &self.hotbar
    }

    pub fn hotbar_mut(&mut self) -> &mut Hotbar {
        &mut self.hotbar
    }

    pub fn remote_players(&self) -> impl Iterator<Item = &RemotePlayer> {
        self.remote_players.values()
    }

    pub fn remote_player(&self, id: &str) -> Option<&RemotePlayer> {
        self.remote_players.get(id)
    }

    /// One frame: look, discrete actions, movement, then sync
    pub fn update(&mut self, input: &InputState, dt: f32) {
        if input.is_cursor_locked() {
            let (dx, dy) = input.get_mouse_delta();
            self.player.look(dx, dy, self.mouse_sensitivity);
        }

        for action in voxel_actions(input) {
            self.apply_action(action);
        }

        self.step(&movement_intent(input), dt);
        self.poll_sync();
    }

    pub fn apply_action(&mut self, action: VoxelAction) {
        match action {
            VoxelAction::RequestCapture => self.events.push_back(GameEvent::CaptureRequested),
            VoxelAction::Break => {
                self.break_block();
            }
            VoxelAction::Place => {
                self.place_block();
            }
            VoxelAction::SelectSlot(slot) => {
                self.hotbar.select(slot);
                self.events.push_back(GameEvent::SlotSelected {
                    slot: self.hotbar.selected_index(),
                });
            }
            VoxelAction::CycleSlot { forward } => {
                self.hotbar.cycle(forward);
                self.events.push_back(GameEvent::SlotSelected {
                    slot: self.hotbar.selected_index(),
                });
            }
        }
    }

    /// Advance the local player by `dt` seconds
    pub fn step(&mut self, intent: &MoveIntent, dt: f32) -> bool {
        step_player(&mut self.player, &self.world, intent, dt)
    }

    /// Block under the crosshair
    pub fn target(&self) -> Option<RaycastHit> {
        world::break_target(&self.world, &self.player.eye_ray(), self.reach)
    }

    /// Where a block would go if placed now
    pub fn place_target(&self) -> Option<VoxelPos> {
        world::place_target(&self.world, &self.player.eye_ray(), self.reach)
    }

    /// Remove the targeted block, collecting it unless it is bedrock
    pub fn break_block(&mut self) -> Option<RaycastHit> {
        let hit = self.target()?;
        self.world.remove(hit.position);
        log::debug!("Broke {} at {:?}", hit.block, hit.position);
        self.events.push_back(GameEvent::BlockBroken {
            position: hit.position,
            block: hit.block,
        });

        if hit.block.is_collectable() && self.hotbar.add(hit.block) {
            self.events.push_back(GameEvent::BlockCollected { block: hit.block });
        }
        self.forward_edit(BlockEdit::Removed {
            position: hit.position,
        });
        Some(hit)
    }

    /// Place the selected hotbar block at the place target. The slot is kept.
    pub fn place_block(&mut self) -> Option<VoxelPos> {
        let block = self.hotbar.selected_block();
        if block.is_air() {
            return None;
        }
        let position = self.place_target()?;
        self.world.set(position, block);
        log::debug!("Placed {} at {:?}", block, position);
        self.events.push_back(GameEvent::BlockPlaced { position, block });
        self.forward_edit(BlockEdit::Placed { position, block });
        Some(position)
    }

    fn forward_edit(&self, edit: BlockEdit) {
        if let Some(sync) = &self.sync {
            sync.push_edit(edit);
        }
    }

    /// Start mirroring remote players through a running sync task
    ///
    /// A previously attached task is stopped. Sequence numbers restart with
    /// every task, so ordering starts over as well.
    pub fn attach_sync(&mut self, handle: SyncHandle) {
        handle.publish_pose(self.player.pose());
        self.last_snapshot = 0;
        self.sync = Some(handle);
    }

    pub fn is_syncing(&self) -> bool {
        self.sync.is_some()
    }

    /// Publish the current pose and apply the newest snapshot, if any
    pub fn poll_sync(&mut self) {
        let Some(sync) = self.sync.as_mut() else {
            return;
        };
        sync.publish_pose(self.player.pose());
        if let Some(snapshot) = sync.latest_snapshot() {
            self.apply_snapshot(snapshot);
        }
    }

    /// Replace the remote player set with a snapshot newer than the last applied one
    ///
    /// Returns false for stale snapshots, which are ignored.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) -> bool {
        if snapshot.sequence <= self.last_snapshot {
            log::debug!(
                "Ignoring stale snapshot {} (have {})",
                snapshot.sequence,
                self.last_snapshot
            );
            return false;
        }
        self.last_snapshot = snapshot.sequence;

        let mut next = BTreeMap::new();
        for state in snapshot.players {
            if state.id == self.player.id {
                continue;
            }
            if !self.remote_players.contains_key(&state.id) {
                self.events.push_back(GameEvent::PlayerJoined {
                    id: state.id.clone(),
                });
            }
            let remote = RemotePlayer {
                id: state.id.clone(),
                pose: state.pose(),
            };
            next.insert(state.id, remote);
        }

        for id in self.remote_players.keys() {
            if !next.contains_key(id) {
                self.events.push_back(GameEvent::PlayerLeft { id: id.clone() });
            }
        }
        self.remote_players = next;
        true
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Stop the sync task and wait for it; no snapshot is applied afterwards
    pub async fn shutdown(&mut self) -> SyncResult<()> {
        match self.sync.take() {
            Some(handle) => handle.shutdown().await,
            None => Ok(()),
        }
    }
}
