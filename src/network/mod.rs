//! Best-effort multiplayer position sync
//!
//! Remote players are mirrors of whatever the endpoint last reported. There is
//! no authority, prediction or conflict resolution.

pub mod client;
pub mod error;
pub mod protocol;
pub mod relay;
pub mod sync;

pub use client::{HttpTransport, Transport};
pub use error::{SyncError, SyncResult};
pub use protocol::{BlockEdit, PlayerPose, PlayerState, PlayersResponse, Reply, Request};
pub use relay::{LocalRelay, RelayState};
pub use sync::{Snapshot, SyncHandle};
