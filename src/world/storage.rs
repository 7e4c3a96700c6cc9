//! Sparse voxel storage
//!
//! Only non-air blocks are kept. Any coordinate without an entry reads as air.

use super::{BlockId, VoxelPos};
use rustc_hash::FxHashMap;

/// Sparse map from voxel coordinates to block types
#[derive(Debug, Clone, Default)]
pub struct VoxelMap {
    blocks: FxHashMap<u128, BlockId>,
}

impl VoxelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block at `pos`, air when nothing is stored there
    pub fn get(&self, pos: VoxelPos) -> BlockId {
        self.blocks.get(&pos.pack()).copied().unwrap_or(BlockId::AIR)
    }

    /// Overwrite the block at `pos`. Writing air removes the entry.
    pub fn set(&mut self, pos: VoxelPos, block: BlockId) {
        if block.is_air() {
            self.blocks.remove(&pos.pack());
        } else {
            self.blocks.insert(pos.pack(), block);
        }
    }

    /// Clear `pos` and return what was there
    pub fn remove(&mut self, pos: VoxelPos) -> BlockId {
        self.blocks.remove(&pos.pack()).unwrap_or(BlockId::AIR)
    }

    pub fn is_air(&self, pos: VoxelPos) -> bool {
        !self.blocks.contains_key(&pos.pack())
    }

    /// Number of stored (non-air) voxels
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Iterate stored voxels in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (VoxelPos, BlockId)> + '_ {
        self.blocks.iter().map(|(key, block)| (VoxelPos::unpack(*key), *block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_coordinates_read_as_air() {
        let map = VoxelMap::new();
        assert_eq!(map.get(VoxelPos::new(0, 0, 0)), BlockId::AIR);
        assert_eq!(map.get(VoxelPos::new(-40, 9000, 3)), BlockId::AIR);
        assert!(map.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut map = VoxelMap::new();
        let pos = VoxelPos::new(1, 2, 3);
        map.set(pos, BlockId::STONE);
        map.set(pos, BlockId::PLANKS);
        assert_eq!(map.get(pos), BlockId::PLANKS);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_setting_air_deletes_entry() {
        let mut map = VoxelMap::new();
        let pos = VoxelPos::new(-1, 0, 5);
        map.set(pos, BlockId::DIRT);
        map.set(pos, BlockId::AIR);
        assert!(map.is_empty());
        assert_eq!(map.get(pos), BlockId::AIR);
    }

    #[test]
    fn test_remove_returns_previous_block() {
        let mut map = VoxelMap::new();
        let pos = VoxelPos::new(4, 4, 4);
        map.set(pos, BlockId::SAND);
        assert_eq!(map.remove(pos), BlockId::SAND);
        assert_eq!(map.remove(pos), BlockId::AIR);
        assert!(map.is_air(pos));
    }

    #[test]
    fn test_iter_yields_original_positions() {
        let mut map = VoxelMap::new();
        map.set(VoxelPos::new(-3, 7, 11), BlockId::WOOD);
        let stored: Vec<_> = map.iter().collect();
        assert_eq!(stored, vec![(VoxelPos::new(-3, 7, 11), BlockId::WOOD)]);
    }
}
