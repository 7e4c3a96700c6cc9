//! Column-based terrain generation
//!
//! Heights come from a closed-form function of absolute world coordinates, so
//! neighbouring chunks always line up. Trees are the only random feature.

use super::{BlockId, ChunkPos, VoxelMap, VoxelPos};
use crate::constants::{terrain, world::CHUNK_SIZE};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tunable terrain parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    pub base_height: f64,
    pub primary_frequency: f64,
    pub primary_amplitude: f64,
    pub detail_frequency: f64,
    pub detail_amplitude: f64,
    pub surface_threshold: i32,
    pub dirt_depth: i32,
    /// Per-column probability of a tree; zero disables trees entirely
    pub tree_chance: f64,
    pub tree_min_height: i32,
    pub tree_max_height: i32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            base_height: terrain::BASE_HEIGHT,
            primary_frequency: terrain::PRIMARY_FREQUENCY,
            primary_amplitude: terrain::PRIMARY_AMPLITUDE,
            detail_frequency: terrain::DETAIL_FREQUENCY,
            detail_amplitude: terrain::DETAIL_AMPLITUDE,
            surface_threshold: terrain::SURFACE_THRESHOLD,
            dirt_depth: terrain::DIRT_DEPTH,
            tree_chance: terrain::TREE_CHANCE,
            tree_min_height: terrain::TREE_MIN_HEIGHT,
            tree_max_height: terrain::TREE_MAX_HEIGHT,
        }
    }
}

impl TerrainParams {
    /// Same terrain with trees switched off, which makes generation deterministic
    pub fn without_trees(mut self) -> Self {
        self.tree_chance = 0.0;
        self
    }
}

/// Pure function - surface height of the column at world (x, z)
pub fn column_height(params: &TerrainParams, x: i32, z: i32) -> i32 {
    let (x, z) = (x as f64, z as f64);
    let height = params.base_height
        + (x * params.primary_frequency).sin() * params.primary_amplitude
        + (z * params.primary_frequency).cos() * params.primary_amplitude
        + (x * params.detail_frequency).sin()
            * (z * params.detail_frequency).cos()
            * params.detail_amplitude;
    height.floor() as i32
}

/// Pure function - block type for layer `y` of a column whose surface is `height`
pub fn column_block(params: &TerrainParams, y: i32, height: i32) -> BlockId {
    let has_soil = height > params.surface_threshold;
    if y == 0 {
        BlockId::BEDROCK
    } else if y == height && has_soil {
        BlockId::GRASS
    } else if y > height - params.dirt_depth && has_soil {
        BlockId::DIRT
    } else {
        BlockId::STONE
    }
}

/// Function - writes one full column and maybe a tree on top of it
pub fn generate_column<R: Rng + ?Sized>(
    map: &mut VoxelMap,
    params: &TerrainParams,
    x: i32,
    z: i32,
    rng: &mut R,
) {
    let height = column_height(params, x, z);

    for y in 0..=height {
        map.set(VoxelPos::new(x, y, z), column_block(params, y, height));
    }

    // Drawn for every column, tall or not
    let roll = rng.gen::<f64>();
    if height > params.surface_threshold && roll < params.tree_chance {
        let trunk = rng.gen_range(params.tree_min_height..=params.tree_max_height.max(params.tree_min_height));
        place_tree(map, VoxelPos::new(x, height, z), trunk);
    }
}

/// Function - writes a trunk of `trunk_height` above `ground` and a canopy around its top
///
/// The canopy overwrites anything in its volume, including the top of the trunk.
/// The lowest canopy layer leaves out its four corners.
pub fn place_tree(map: &mut VoxelMap, ground: VoxelPos, trunk_height: i32) {
    for ty in 1..=trunk_height {
        map.set(ground + (0, ty, 0), BlockId::WOOD);
    }

    let radius = terrain::CANOPY_RADIUS;
    let canopy_base = trunk_height - 1;
    for lx in -radius..=radius {
        for lz in -radius..=radius {
            for ly in 0..terrain::CANOPY_LAYERS {
                if lx.abs() == radius && lz.abs() == radius && ly == 0 {
                    continue;
                }
                map.set(ground + (lx, canopy_base + ly, lz), BlockId::LEAVES);
            }
        }
    }
}

/// Function - fills every column of `chunk`
pub fn generate_chunk<R: Rng + ?Sized>(
    map: &mut VoxelMap,
    params: &TerrainParams,
    chunk: ChunkPos,
    rng: &mut R,
) {
    let (origin_x, origin_z) = chunk.origin();
    for i in 0..CHUNK_SIZE {
        for j in 0..CHUNK_SIZE {
            generate_column(map, params, origin_x + i, origin_z + j, rng);
        }
    }
}

/// Function - generates the square of chunks `-radius..=radius` around the origin
pub fn generate_spawn_area<R: Rng + ?Sized>(
    map: &mut VoxelMap,
    params: &TerrainParams,
    radius: i32,
    rng: &mut R,
) {
    for chunk in ChunkPos::square_around_origin(radius) {
        generate_chunk(map, params, chunk, rng);
    }
    log::info!(
        "Generated {} chunks around spawn ({} voxels)",
        (2 * radius + 1) * (2 * radius + 1),
        map.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_column_height_at_origin() {
        // 20 + sin(0)*5 + cos(0)*5 + sin(0)*cos(0)*8
        assert_eq!(column_height(&TerrainParams::default(), 0, 0), 25);
    }

    #[test]
    fn test_column_layers() {
        let params = TerrainParams::default();
        assert_eq!(column_block(&params, 0, 25), BlockId::BEDROCK);
        assert_eq!(column_block(&params, 25, 25), BlockId::GRASS);
        assert_eq!(column_block(&params, 22, 25), BlockId::DIRT);
        assert_eq!(column_block(&params, 21, 25), BlockId::STONE);
        // Low columns are bare stone
        assert_eq!(column_block(&params, 18, 18), BlockId::STONE);
        assert_eq!(column_block(&params, 17, 18), BlockId::STONE);
    }

    #[test]
    fn test_bedrock_floor_everywhere() {
        let params = TerrainParams::default();
        let mut map = VoxelMap::new();
        let mut rng = StdRng::seed_from_u64(7);
        generate_chunk(&mut map, &params, ChunkPos::new(-1, 2), &mut rng);

        for x in -16..0 {
            for z in 32..48 {
                assert_eq!(map.get(VoxelPos::new(x, 0, z)), BlockId::BEDROCK);
            }
        }
    }

    #[test]
    fn test_low_columns_still_draw_from_rng() {
        let params = TerrainParams {
            base_height: 5.0,
            ..TerrainParams::default()
        };
        assert!(column_height(&params, 0, 0) <= params.surface_threshold);

        let mut rng = StdRng::seed_from_u64(9);
        let mut untouched = rng.clone();
        generate_column(&mut VoxelMap::new(), &params, 0, 0, &mut rng);

        untouched.gen::<f64>();
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_generation_without_trees_is_deterministic() {
        let params = TerrainParams::default().without_trees();
        let chunk = ChunkPos::new(0, 0);

        let mut first = VoxelMap::new();
        generate_chunk(&mut first, &params, chunk, &mut StdRng::seed_from_u64(1));
        let mut second = VoxelMap::new();
        generate_chunk(&mut second, &params, chunk, &mut StdRng::seed_from_u64(99));

        assert_eq!(first.len(), second.len());
        for (pos, block) in first.iter() {
            assert_eq!(second.get(pos), block);
        }

        // Regenerating over the same chunk changes nothing
        let before = first.len();
        generate_chunk(&mut first, &params, chunk, &mut StdRng::seed_from_u64(5));
        assert_eq!(first.len(), before);
    }

    #[test]
    fn test_tree_shape() {
        let mut map = VoxelMap::new();
        let ground = VoxelPos::new(0, 20, 0);
        place_tree(&mut map, ground, 5);

        for ty in 1..=3 {
            assert_eq!(map.get(ground + (0, ty, 0)), BlockId::WOOD);
        }
        // Canopy starts at the trunk top and overwrites it
        assert_eq!(map.get(ground + (0, 4, 0)), BlockId::LEAVES);
        assert_eq!(map.get(ground + (0, 5, 0)), BlockId::LEAVES);
        assert_eq!(map.get(ground + (0, 6, 0)), BlockId::LEAVES);
        assert_eq!(map.get(ground + (0, 7, 0)), BlockId::AIR);

        // Corners are missing only on the lowest canopy layer
        assert_eq!(map.get(ground + (2, 4, 2)), BlockId::AIR);
        assert_eq!(map.get(ground + (-2, 4, 2)), BlockId::AIR);
        assert_eq!(map.get(ground + (2, 5, -2)), BlockId::LEAVES);
        assert_eq!(map.get(ground + (-2, 6, -2)), BlockId::LEAVES);
        assert_eq!(map.get(ground + (2, 4, 1)), BlockId::LEAVES);
    }

    #[test]
    fn test_certain_trees_only_on_soil() {
        let params = TerrainParams {
            tree_chance: 1.0,
            ..TerrainParams::default()
        };
        let mut map = VoxelMap::new();
        let mut rng = StdRng::seed_from_u64(3);
        generate_column(&mut map, &params, 0, 0, &mut rng);

        // Height 25 has soil, so a trunk starts right above the grass
        assert_eq!(map.get(VoxelPos::new(0, 26, 0)), BlockId::WOOD);
    }
}
