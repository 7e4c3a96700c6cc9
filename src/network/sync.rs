//! Supervised background sync task
//!
//! The session never talks to the network directly. It publishes its pose on
//! a watch channel and queues block edits; the task pushes both on every tick
//! and then pulls the player listing, stamping each listing with a sequence
//! number before handing it back. A failed push never holds back the pull.
//! Ticks that fire while a cycle is still in flight are skipped, so cycles
//! never overlap.

use super::client::Transport;
use super::error::{SyncError, SyncResult};
use super::protocol::{BlockEdit, PlayerPose, PlayerState, PlayersResponse, Request};
use crate::constants::network::{EDIT_QUEUE, SNAPSHOT_QUEUE};
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Player listing pulled in one sync cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Strictly increasing per sync task
    pub sequence: u64,
    pub players: Vec<PlayerState>,
}

/// Session-side end of a running sync task
#[derive(Debug)]
pub struct SyncHandle {
    pose_tx: watch::Sender<PlayerPose>,
    edit_tx: mpsc::Sender<BlockEdit>,
    snapshot_rx: mpsc::Receiver<Snapshot>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl SyncHandle {
    /// Start syncing through `transport` every `interval`
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T: Transport>(transport: T, initial_pose: PlayerPose, interval: Duration) -> Self {
        let (pose_tx, pose_rx) = watch::channel(initial_pose);
        let (edit_tx, edit_rx) = mpsc::channel(EDIT_QUEUE);
        let (snapshot_tx, snapshot_rx) = mpsc::channel(SNAPSHOT_QUEUE);
        let cancel = CancellationToken::new();

        let task = tokio::spawn(run_sync(
            transport,
            pose_rx,
            edit_rx,
            snapshot_tx,
            cancel.clone(),
            interval,
        ));
        log::info!("Multiplayer sync started ({} ms interval)", interval.as_millis());

        Self {
            pose_tx,
            edit_tx,
            snapshot_rx,
            cancel,
            task,
        }
    }

    /// Replace the pose the next cycle will push
    pub fn publish_pose(&self, pose: PlayerPose) {
        self.pose_tx.send_replace(pose);
    }

    /// Queue a block edit for the next cycle. Dropped when the queue is full.
    pub fn push_edit(&self, edit: BlockEdit) {
        if let Err(e) = self.edit_tx.try_send(edit) {
            log::warn!("Dropping block edit {:?}: {}", edit, e);
        }
    }

    /// Newest snapshot received since the last call, if any
    pub fn latest_snapshot(&mut self) -> Option<Snapshot> {
        let mut latest = None;
        while let Ok(snapshot) = self.snapshot_rx.try_recv() {
            latest = Some(snapshot);
        }
        latest
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Cancel the task and wait for it to exit
    pub async fn shutdown(mut self) -> SyncResult<()> {
        self.cancel.cancel();
        let result = (&mut self.task).await.map_err(|e| SyncError::TaskFailed {
            message: e.to_string(),
        });
        log::info!("Multiplayer sync shut down");
        result
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        // A handle dropped without shutdown still stops its task
        self.cancel.cancel();
    }
}

async fn run_sync<T: Transport>(
    transport: T,
    mut pose_rx: watch::Receiver<PlayerPose>,
    mut edit_rx: mpsc::Receiver<BlockEdit>,
    snapshot_tx: mpsc::Sender<Snapshot>,
    cancel: CancellationToken,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut sequence = 0u64;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let result = tokio::select! {
            _ = cancel.cancelled() => break,
            result = sync_cycle(&transport, &mut pose_rx, &mut edit_rx) => result,
        };

        if let Some(players) = result {
            sequence += 1;
            match snapshot_tx.try_send(Snapshot { sequence, players }) {
                Ok(()) => {}
                Err(TrySendError::Full(snapshot)) => {
                    log::debug!("Session lagging, dropped snapshot {}", snapshot.sequence);
                }
                Err(TrySendError::Closed(_)) => break,
            }
        }
    }

    log::debug!("Multiplayer sync loop exited after {} snapshots", sequence);
}

/// Push pose, push queued edits, pull players
///
/// Every step is attempted regardless of the ones before it. Returns the
/// listing when the pull succeeded.
async fn sync_cycle<T: Transport>(
    transport: &T,
    pose_rx: &mut watch::Receiver<PlayerPose>,
    edit_rx: &mut mpsc::Receiver<BlockEdit>,
) -> Option<Vec<PlayerState>> {
    let pose = *pose_rx.borrow_and_update();
    if let Err(e) = transport.exchange(Request::from(pose)).await {
        log::warn!("Position update failed: {}", e);
    }

    while let Ok(edit) = edit_rx.try_recv() {
        if let Err(e) = transport.exchange(Request::from(edit)).await {
            log::warn!("Dropping block edit {:?}: {}", edit, e);
        }
    }

    match pull_players(transport).await {
        Ok(players) => Some(players),
        Err(e) => {
            log::warn!("Player list pull failed: {}", e);
            None
        }
    }
}

async fn pull_players<T: Transport>(transport: &T) -> SyncResult<Vec<PlayerState>> {
    let reply = transport.exchange(Request::GetPlayers).await?;
    let listing: PlayersResponse = serde_json::from_value(reply)?;
    Ok(listing.players)
}
