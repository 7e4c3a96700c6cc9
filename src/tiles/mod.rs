//! 2D tile sandbox

pub mod render;
pub mod session;
pub mod world;

pub use render::{camera_offset, render_text, screen_to_tile, sky_color, status_line};
pub use session::{TileEdit, TileSession};
pub use world::{surface_row, TileWorld};
