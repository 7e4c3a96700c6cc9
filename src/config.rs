//! TOML configuration
//!
//! Every section and field is optional; anything left out takes the value
//! from `constants`.

use crate::constants::{interaction, network, player, tiles, world};
use crate::world::TerrainParams;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Invalid config value {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub sync: SyncConfig,
    pub tiles: TilesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Fixed seed for tree placement; entropy when absent
    pub seed: Option<u64>,
    pub spawn_chunk_radius: i32,
    pub terrain: TerrainParams,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            spawn_chunk_radius: world::SPAWN_CHUNK_RADIUS,
            terrain: TerrainParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub id: String,
    pub username: String,
    pub mouse_sensitivity: f32,
    pub reach: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            id: network::LOCAL_PLAYER_ID.to_string(),
            username: network::DEFAULT_USERNAME.to_string(),
            mouse_sensitivity: player::MOUSE_SENSITIVITY,
            reach: interaction::REACH_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub interval_ms: u64,
    pub timeout_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: network::DEFAULT_ENDPOINT.to_string(),
            interval_ms: network::SYNC_INTERVAL_MS,
            timeout_ms: network::REQUEST_TIMEOUT_MS,
        }
    }
}

impl SyncConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilesConfig {
    pub seed: Option<u64>,
    pub tick_ms: u64,
}

impl Default for TilesConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: tiles::TICK_MS,
        }
    }
}

impl TilesConfig {
    /// Time between vitals ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl GameConfig {
    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let config = Self::from_toml_str(&raw)?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(raw).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let terrain = &self.world.terrain;
        if !(0.0..=1.0).contains(&terrain.tree_chance) {
            return Err(ConfigError::Invalid {
                field: "world.terrain.tree_chance",
                reason: format!("{} is not a probability", terrain.tree_chance),
            });
        }
        if terrain.tree_min_height > terrain.tree_max_height {
            return Err(ConfigError::Invalid {
                field: "world.terrain.tree_min_height",
                reason: format!(
                    "{} exceeds tree_max_height {}",
                    terrain.tree_min_height, terrain.tree_max_height
                ),
            });
        }
        if self.world.spawn_chunk_radius < 0 {
            return Err(ConfigError::Invalid {
                field: "world.spawn_chunk_radius",
                reason: "must not be negative".to_string(),
            });
        }
        if self.sync.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "sync.interval_ms",
                reason: "must be positive".to_string(),
            });
        }
        if self.tiles.tick_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tiles.tick_ms",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
