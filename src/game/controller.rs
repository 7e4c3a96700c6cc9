//! First-person movement integration

use super::Player;
use crate::constants::player::{GRAVITY, GROUNDED_EPSILON, JUMP_VELOCITY, SNEAK_SPEED, WALK_SPEED};
use crate::input::MoveIntent;
use crate::physics::resolve_ground;
use crate::world::VoxelMap;
use glam::{EulerRot, Quat, Vec3};

/// Pure function - horizontal walk direction for an intent under the camera's rotation
///
/// The camera-space input is normalised first, then rotated, then flattened,
/// so looking up or down shortens the stride.
pub fn walk_direction(intent: &MoveIntent, yaw: f32, pitch: f32) -> Vec3 {
    let local = Vec3::new(intent.right, 0.0, -intent.forward).normalize_or_zero();
    let rotated = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0) * local;
    Vec3::new(rotated.x, 0.0, rotated.z)
}

/// Function - advances the player by `dt` seconds and resolves ground contact
///
/// Returns true when the player ended the step standing on the ground.
pub fn step_player(player: &mut Player, map: &VoxelMap, intent: &MoveIntent, dt: f32) -> bool {
    let speed = if intent.sneak { SNEAK_SPEED } else { WALK_SPEED };
    let direction = walk_direction(intent, player.yaw, player.pitch);
    player.velocity.x = direction.x * speed;
    player.velocity.z = direction.z * speed;

    if intent.jump && player.velocity.y.abs() < GROUNDED_EPSILON {
        player.velocity.y = JUMP_VELOCITY;
    }
    player.velocity.y += GRAVITY * dt;

    player.position += player.velocity * dt;
    resolve_ground(map, &mut player.position, &mut player.velocity)
}
