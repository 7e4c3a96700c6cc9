// Two sessions syncing through a shared in-process relay.

use glam::Vec3;
use serde_json::Value;
use std::time::Duration;
use voxel_craft::config::PlayerConfig;
use voxel_craft::game::GameEvent;
use voxel_craft::network::{
    LocalRelay, PlayerState, Request, Snapshot, SyncError, SyncHandle, SyncResult, Transport,
};
use voxel_craft::{BlockId, Session, VoxelMap, VoxelPos};

const INTERVAL: Duration = Duration::from_millis(10);

fn player(id: &str) -> PlayerConfig {
    PlayerConfig {
        id: id.to_string(),
        username: id.to_string(),
        ..PlayerConfig::default()
    }
}

async fn wait_until(sessions: &mut [&mut Session], mut done: impl FnMut(&[&mut Session]) -> bool) -> bool {
    for _ in 0..300 {
        for session in sessions.iter_mut() {
            session.poll_sync();
        }
        if done(sessions) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    false
}

#[tokio::test]
async fn test_players_see_each_other_move() {
    let relay = LocalRelay::shared();
    let mut alice = Session::with_world(VoxelMap::new(), &player("alice"));
    let mut bob = Session::with_world(VoxelMap::new(), &player("bob"));

    let alice_link = LocalRelay::connect(relay.clone(), "alice").await;
    let bob_link = LocalRelay::connect(relay.clone(), "bob").await;
    alice.attach_sync(SyncHandle::spawn(alice_link, alice.player().pose(), INTERVAL));
    bob.attach_sync(SyncHandle::spawn(bob_link, bob.player().pose(), INTERVAL));

    alice.player_mut().position = Vec3::new(7.0, 30.0, -4.0);

    let seen = wait_until(&mut [&mut alice, &mut bob], |sessions| {
        sessions[1]
            .remote_player("alice")
            .map_or(false, |remote| remote.position() == Vec3::new(7.0, 30.0, -4.0))
    })
    .await;
    assert!(seen, "bob never saw alice's new position");

    // Nobody mirrors themselves
    assert!(alice.remote_player("alice").is_none());
    assert!(bob.remote_player("bob").is_none());
    assert!(bob
        .drain_events()
        .contains(&GameEvent::PlayerJoined { id: "alice".into() }));

    alice.shutdown().await.unwrap();
    bob.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_disconnected_player_leaves() {
    let relay = LocalRelay::shared();
    let mut bob = Session::with_world(VoxelMap::new(), &player("bob"));
    let carol_link = LocalRelay::connect(relay.clone(), "carol").await;
    let bob_link = LocalRelay::connect(relay.clone(), "bob").await;
    bob.attach_sync(SyncHandle::spawn(bob_link, bob.player().pose(), INTERVAL));

    assert!(wait_until(&mut [&mut bob], |s| s[0].remote_player("carol").is_some()).await);

    carol_link.disconnect().await;
    assert!(wait_until(&mut [&mut bob], |s| s[0].remote_player("carol").is_none()).await);
    assert!(bob
        .drain_events()
        .contains(&GameEvent::PlayerLeft { id: "carol".into() }));

    bob.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_block_edits_reach_the_relay() {
    let relay = LocalRelay::shared();
    let mut map = VoxelMap::new();
    map.set(VoxelPos::new(0, 10, -3), BlockId::STONE);
    let mut session = Session::with_world(map, &player("alice"));
    session.player_mut().position = Vec3::new(0.5, 10.5, 0.5);

    let link = LocalRelay::connect(relay.clone(), "alice").await;
    let observer = link.clone();
    session.attach_sync(SyncHandle::spawn(link, session.player().pose(), INTERVAL));

    session.hotbar_mut().select(5);
    assert_eq!(session.place_block(), Some(VoxelPos::new(0, 10, -2)));

    let mut forwarded = false;
    for _ in 0..300 {
        if observer.edited_block(VoxelPos::new(0, 10, -2)).await == BlockId::COBBLESTONE {
            forwarded = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(forwarded, "placed block never reached the relay");

    session.shutdown().await.unwrap();
    assert!(!session.is_syncing());
}

#[tokio::test]
async fn test_no_snapshot_applied_after_shutdown() {
    let relay = LocalRelay::shared();
    let mut bob = Session::with_world(VoxelMap::new(), &player("bob"));
    let bob_link = LocalRelay::connect(relay.clone(), "bob").await;
    bob.attach_sync(SyncHandle::spawn(bob_link, bob.player().pose(), INTERVAL));
    bob.shutdown().await.unwrap();

    let _dave = LocalRelay::connect(relay.clone(), "dave").await;
    tokio::time::sleep(INTERVAL * 5).await;
    bob.poll_sync();
    assert!(bob.remote_player("dave").is_none());
}

#[tokio::test]
async fn test_reattached_sync_is_not_treated_as_stale() {
    let relay = LocalRelay::shared();
    let mut bob = Session::with_world(VoxelMap::new(), &player("bob"));
    let _alice = LocalRelay::connect(relay.clone(), "alice").await;

    let link = LocalRelay::connect(relay.clone(), "bob").await;
    bob.attach_sync(SyncHandle::spawn(link.clone(), bob.player().pose(), INTERVAL));
    // Let the first task run up a sequence count of about forty
    for _ in 0..80 {
        bob.poll_sync();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(bob.remote_player("alice").is_some());
    bob.shutdown().await.unwrap();

    let _carol = LocalRelay::connect(relay.clone(), "carol").await;
    bob.attach_sync(SyncHandle::spawn(link, bob.player().pose(), INTERVAL));

    // Far fewer cycles than the first task ran
    let mut seen = false;
    for _ in 0..12 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        bob.poll_sync();
        if bob.remote_player("carol").is_some() {
            seen = true;
            break;
        }
    }
    assert!(seen, "snapshots from the new sync task were ignored");
    bob.shutdown().await.unwrap();
}

/// Endpoint that never answers
struct Unreachable;

impl Transport for Unreachable {
    async fn exchange(&self, _request: Request) -> SyncResult<Value> {
        Err(SyncError::RequestFailed {
            endpoint: "http://unreachable".into(),
            message: "connection refused".into(),
        })
    }
}

#[tokio::test]
async fn test_failing_sync_leaves_session_untouched() {
    let mut map = VoxelMap::new();
    map.set(VoxelPos::new(0, 10, -3), BlockId::STONE);
    let mut session = Session::with_world(map, &player("bob"));
    session.player_mut().position = Vec3::new(0.5, 10.5, 0.5);
    session.apply_snapshot(Snapshot {
        sequence: 1,
        players: vec![PlayerState {
            id: "alice".into(),
            position: [3.0, 20.0, 3.0],
            rotation: [0.0, 0.0],
        }],
    });
    session.drain_events();

    session.attach_sync(SyncHandle::spawn(Unreachable, session.player().pose(), INTERVAL));
    assert_eq!(session.break_block().map(|hit| hit.block), Some(BlockId::STONE));
    session.drain_events();
    let world_before = session.world().len();
    let hotbar_before = session.hotbar().clone();

    for _ in 0..20 {
        session.poll_sync();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert!(session.is_syncing());
    assert_eq!(
        session.remote_player("alice").map(|remote| remote.position()),
        Some(Vec3::new(3.0, 20.0, 3.0))
    );
    assert!(session.drain_events().is_empty());
    assert_eq!(session.world().len(), world_before);
    assert_eq!(session.hotbar(), &hotbar_before);
    session.shutdown().await.unwrap();
}
