use crate::constants::player::{MAX_HEALTH, MAX_HUNGER, SPAWN_POSITION};
use crate::network::PlayerPose;
use crate::world::Ray;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// The locally controlled player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub username: String,
    /// Eye position
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
    pub hunger: f32,
}

impl Player {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            position: Vec3::from(SPAWN_POSITION),
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            health: MAX_HEALTH,
            hunger: MAX_HUNGER,
        }
    }

    pub fn pose(&self) -> PlayerPose {
        PlayerPose {
            position: self.position.to_array(),
            rotation: [self.yaw, self.pitch],
        }
    }

    /// Turn by a mouse delta; pitch stops at straight up and straight down
    pub fn look(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw -= dx * sensitivity;
        self.pitch = (self.pitch - dy * sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    pub fn eye_ray(&self) -> Ray {
        Ray::from_camera(self.position, self.yaw, self.pitch)
    }
}

/// Mirror of another player, updated only from sync snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct RemotePlayer {
    pub id: String,
    pub pose: PlayerPose,
}

impl RemotePlayer {
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.pose.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_at_spawn() {
        let player = Player::new("local", "Player");
        assert_eq!(player.position, Vec3::new(0.0, 32.0, 0.0));
        assert_eq!(player.health, 100.0);
        assert_eq!(player.hunger, 100.0);
        assert_eq!(player.pose().rotation, [0.0, 0.0]);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut player = Player::new("local", "Player");
        player.look(0.0, -10_000.0, 0.002);
        assert_eq!(player.pitch, FRAC_PI_2);
        player.look(100.0, 20_000.0, 0.002);
        assert_eq!(player.pitch, -FRAC_PI_2);
        assert!((player.yaw + 0.2).abs() < 1e-6);
    }
}
