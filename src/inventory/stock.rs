use crate::world::BlockId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-type block counts used by the tile sandbox
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStock {
    counts: BTreeMap<BlockId, u32>,
}

impl BlockStock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tile sandbox's starting counts
    pub fn starting() -> Self {
        [
            (BlockId::GRASS, 10),
            (BlockId::DIRT, 5),
            (BlockId::STONE, 3),
            (BlockId::WOOD, 8),
            (BlockId::SAND, 2),
        ]
        .into_iter()
        .collect()
    }

    pub fn count(&self, block: BlockId) -> u32 {
        self.counts.get(&block).copied().unwrap_or(0)
    }

    pub fn has(&self, block: BlockId, amount: u32) -> bool {
        self.count(block) >= amount
    }

    pub fn add(&mut self, block: BlockId, amount: u32) {
        *self.counts.entry(block).or_insert(0) += amount;
    }

    /// Take `amount` of `block` if there is enough, otherwise change nothing
    pub fn take(&mut self, block: BlockId, amount: u32) -> bool {
        if !self.has(block, amount) {
            return false;
        }
        if let Some(count) = self.counts.get_mut(&block) {
            *count -= amount;
        }
        true
    }

    /// Non-zero counts in block id order
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, u32)> + '_ {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(block, count)| (*block, *count))
    }
}

impl FromIterator<(BlockId, u32)> for BlockStock {
    fn from_iter<I: IntoIterator<Item = (BlockId, u32)>>(iter: I) -> Self {
        let mut stock = BlockStock::new();
        for (block, amount) in iter {
            stock.add(block, amount);
        }
        stock
    }
}
