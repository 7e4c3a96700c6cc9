use crate::constants::world::CHUNK_SIZE;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Position of a chunk column in the world (chunk coordinates)
///
/// Chunks span the full height of the world, so only x and z are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Create ChunkPos from world column coordinates
    pub fn from_world_pos(world_x: i32, world_z: i32) -> Self {
        Self::new(world_x.div_euclid(CHUNK_SIZE), world_z.div_euclid(CHUNK_SIZE))
    }

    pub fn from_voxel_pos(voxel_pos: VoxelPos) -> Self {
        Self::from_world_pos(voxel_pos.x, voxel_pos.z)
    }

    /// World x/z of the chunk's first column
    pub fn origin(&self) -> (i32, i32) {
        (self.x * CHUNK_SIZE, self.z * CHUNK_SIZE)
    }

    /// All chunks in the square `-radius..=radius` around the origin, row by row
    pub fn square_around_origin(radius: i32) -> impl Iterator<Item = ChunkPos> {
        (-radius..=radius).flat_map(move |x| (-radius..=radius).map(move |z| ChunkPos::new(x, z)))
    }
}

/// Position of a voxel in the world (world coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create VoxelPos from a floating world position by flooring each axis
    pub fn from_world_pos(pos: Vec3) -> Self {
        Self {
            x: pos.x.floor() as i32,
            y: pos.y.floor() as i32,
            z: pos.z.floor() as i32,
        }
    }

    /// Pack into a single integer map key. Lossless for the full i32 range.
    pub fn pack(self) -> u128 {
        ((self.x as u32 as u128) << 64) | ((self.y as u32 as u128) << 32) | (self.z as u32 as u128)
    }

    pub fn unpack(key: u128) -> Self {
        Self {
            x: (key >> 64) as u32 as i32,
            y: (key >> 32) as u32 as i32,
            z: key as u32 as i32,
        }
    }

    pub fn to_chunk_pos(&self) -> ChunkPos {
        ChunkPos::from_voxel_pos(*self)
    }

    /// Centre of the voxel cell in world space
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x as f32 + 0.5, self.y as f32 + 0.5, self.z as f32 + 0.5)
    }
}

impl Add<(i32, i32, i32)> for VoxelPos {
    type Output = VoxelPos;

    fn add(self, offset: (i32, i32, i32)) -> Self::Output {
        VoxelPos::new(self.x + offset.0, self.y + offset.1, self.z + offset.2)
    }
}
