//! Voxel sandbox game state and rules

pub mod controller;
pub mod events;
pub mod player;
pub mod session;

pub use controller::{step_player, walk_direction};
pub use events::GameEvent;
pub use player::{Player, RemotePlayer};
pub use session::Session;
