// Voxel Craft Constants - SINGLE SOURCE OF TRUTH
//
// Every tunable number used by the sandbox lives here. Configuration
// defaults are derived from these values.

/// Voxel world layout
pub mod world {
    /// Columns per chunk edge
    pub const CHUNK_SIZE: i32 = 16;

    /// Spawn area generated at session start, in chunks on each side of origin
    pub const SPAWN_CHUNK_RADIUS: i32 = 2;
}

/// Column heightmap and tree placement
pub mod terrain {
    pub const BASE_HEIGHT: f64 = 20.0;
    pub const PRIMARY_FREQUENCY: f64 = 0.1;
    pub const PRIMARY_AMPLITUDE: f64 = 5.0;
    pub const DETAIL_FREQUENCY: f64 = 0.05;
    pub const DETAIL_AMPLITUDE: f64 = 8.0;

    /// Columns at or below this height are bare stone without trees
    pub const SURFACE_THRESHOLD: i32 = 18;
    /// Dirt layer thickness under the grass cap
    pub const DIRT_DEPTH: i32 = 4;

    pub const TREE_CHANCE: f64 = 0.03;
    pub const TREE_MIN_HEIGHT: i32 = 4;
    pub const TREE_MAX_HEIGHT: i32 = 6;
    pub const CANOPY_RADIUS: i32 = 2;
    pub const CANOPY_LAYERS: i32 = 3;
}

/// Player movement and collision
pub mod player {
    pub const SPAWN_POSITION: [f32; 3] = [0.0, 32.0, 0.0];
    pub const EYE_HEIGHT: f32 = 1.6;
    pub const WALK_SPEED: f32 = 4.3;
    pub const SNEAK_SPEED: f32 = 2.0;
    pub const GRAVITY: f32 = -20.0;
    pub const JUMP_VELOCITY: f32 = 8.0;
    /// Jumping is only allowed while vertical speed is under this
    pub const GROUNDED_EPSILON: f32 = 0.1;
    pub const MOUSE_SENSITIVITY: f32 = 0.002;
    pub const MAX_HEALTH: f32 = 100.0;
    pub const MAX_HUNGER: f32 = 100.0;

    /// Ground scans start here and walk down to zero
    pub const GROUND_SCAN_CEILING: i32 = 50;
}

/// Block targeting
pub mod interaction {
    pub const REACH_DISTANCE: f32 = 5.0;
    pub const RAY_STEP: f32 = 0.1;
}

/// Hotbar layout
pub mod inventory {
    pub const HOTBAR_SIZE: usize = 9;
}

/// Multiplayer sync loop
pub mod network {
    pub const SYNC_INTERVAL_MS: u64 = 100;
    pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/multiplayer";
    pub const REQUEST_TIMEOUT_MS: u64 = 2000;
    pub const LOCAL_PLAYER_ID: &str = "local";
    pub const DEFAULT_USERNAME: &str = "Player";
    pub const SNAPSHOT_QUEUE: usize = 16;
    pub const EDIT_QUEUE: usize = 256;
}

/// 2D tile sandbox
pub mod tiles {
    pub const GRID_WIDTH: i32 = 32;
    pub const GRID_HEIGHT: i32 = 20;
    pub const TILE_SIZE: u32 = 16;

    pub const BASE_HEIGHT: f64 = 10.0;
    pub const SINE_FREQUENCY: f64 = 0.3;
    pub const SINE_AMPLITUDE: f64 = 3.0;
    pub const COSINE_FREQUENCY: f64 = 0.5;
    pub const COSINE_AMPLITUDE: f64 = 2.0;

    /// Chance the surface tile is sand instead of grass
    pub const SAND_CHANCE: f64 = 0.2;
    /// Chance a wood tile sits just above the surface
    pub const WOOD_CHANCE: f64 = 0.15;
    /// Chance of leaves in the band above the wood tile
    pub const LEAVES_CHANCE: f64 = 0.3;
    /// Rows below the surface that stay dirt before stone begins
    pub const DIRT_DEPTH: i32 = 3;

    pub const SPAWN_X: i32 = 16;
    pub const SPAWN_Y: i32 = 10;

    pub const TICK_MS: u64 = 100;
    pub const DAY_LENGTH: u32 = 24000;
    pub const HUNGER_DECAY: f32 = 0.1;
    pub const STARVING_THRESHOLD: f32 = 20.0;
    pub const STARVATION_DAMAGE: f32 = 0.2;
    pub const REGENERATION: f32 = 0.1;
}
