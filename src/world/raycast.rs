use super::{BlockId, VoxelMap, VoxelPos};
use crate::constants::interaction::RAY_STEP;
use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray looking along the camera's yaw and pitch
    pub fn from_camera(origin: Vec3, yaw: f32, pitch: f32) -> Self {
        Self::new(origin, view_direction(yaw, pitch))
    }

    /// Voxels sampled by a fixed-step march, advancing before the first sample
    fn samples(&self, max_distance: f32) -> impl Iterator<Item = VoxelPos> + '_ {
        let steps = (max_distance / RAY_STEP).round() as usize;
        (1..=steps).map(move |i| VoxelPos::from_world_pos(self.origin + self.direction * (RAY_STEP * i as f32)))
    }
}

/// Pure function - unit view vector for a yaw/pitch camera looking down -Z at rest
pub fn view_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaycastHit {
    pub position: VoxelPos,
    pub block: BlockId,
}

/// First solid voxel along the ray within `max_distance`
pub fn break_target(map: &VoxelMap, ray: &Ray, max_distance: f32) -> Option<RaycastHit> {
    ray.samples(max_distance).find_map(|position| {
        let block = map.get(position);
        (!block.is_air()).then_some(RaycastHit { position, block })
    })
}

/// Air voxel sampled right before the first solid voxel
///
/// Solid samples seen before any air (a camera buried in terrain) are skipped
/// and the march goes on.
pub fn place_target(map: &VoxelMap, ray: &Ray, max_distance: f32) -> Option<VoxelPos> {
    let mut last_air = None;
    for position in ray.samples(max_distance) {
        if map.get(position).is_air() {
            last_air = Some(position);
        } else if last_air.is_some() {
            return last_air;
        }
    }
    None
}
