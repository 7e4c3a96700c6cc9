//! Voxel World Module
//!
//! - **Block**: block ids, wire names and palettes
//! - **Position**: voxel and chunk coordinates, packed map keys
//! - **Storage**: sparse coordinate to block map, air is never stored
//! - **Generation**: heightmap columns, trees, chunk and spawn-area passes
//! - **Raycast**: fixed-step march for break and place targets

pub mod block;
pub mod generation;
pub mod position;
pub mod raycast;
pub mod storage;

pub use block::BlockId;
pub use generation::{
    column_block, column_height, generate_chunk, generate_column, generate_spawn_area,
    place_tree, TerrainParams,
};
pub use position::{ChunkPos, VoxelPos};
pub use raycast::{break_target, place_target, view_direction, Ray, RaycastHit};
pub use storage::VoxelMap;
