pub mod hotbar;
pub mod stock;

pub use crate::constants::inventory::HOTBAR_SIZE;
pub use hotbar::{Hotbar, STARTING_HOTBAR};
pub use stock::BlockStock;
