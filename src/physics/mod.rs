//! Column-scan ground collision
//!
//! There is no voxel AABB sweep here. The player is a point at eye height that
//! is kept above the highest solid voxel of the column it stands in.

use crate::constants::player::GROUND_SCAN_CEILING;
use crate::world::{VoxelMap, VoxelPos};
use glam::Vec3;

pub use crate::constants::player::{EYE_HEIGHT, GRAVITY};

/// Pure function - top surface of the highest solid voxel in the column under (x, z)
///
/// Scans from the ceiling down to y = 0. An empty column has its ground at 0.
pub fn ground_height(map: &VoxelMap, x: f32, z: f32) -> f32 {
    let (column_x, column_z) = (x.floor() as i32, z.floor() as i32);
    (0..=GROUND_SCAN_CEILING)
        .rev()
        .find(|&y| !map.is_air(VoxelPos::new(column_x, y, column_z)))
        .map_or(0.0, |y| (y + 1) as f32)
}

/// Function - snaps an eye position that sank into the ground back on top of it
///
/// Returns true when the position was corrected, in which case vertical
/// velocity has been zeroed.
pub fn resolve_ground(map: &VoxelMap, position: &mut Vec3, velocity: &mut Vec3) -> bool {
    let floor = ground_height(map, position.x, position.z) + EYE_HEIGHT;
    if position.y < floor {
        position.y = floor;
        velocity.y = 0.0;
        true
    } else {
        false
    }
}
