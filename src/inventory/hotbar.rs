use crate::constants::inventory::HOTBAR_SIZE;
use crate::world::BlockId;
use serde::{Deserialize, Serialize};

/// Slots the player starts with
pub const STARTING_HOTBAR: [BlockId; HOTBAR_SIZE] = [
    BlockId::GRASS,
    BlockId::DIRT,
    BlockId::STONE,
    BlockId::WOOD,
    BlockId::PLANKS,
    BlockId::COBBLESTONE,
    BlockId::SAND,
    BlockId::LEAVES,
    BlockId::AIR,
];

/// Nine block slots with one selected. Air marks an empty slot.
///
/// Slots hold a block type, not a stack. Placing does not consume the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotbar {
    slots: [BlockId; HOTBAR_SIZE],
    selected: usize,
}

impl Default for Hotbar {
    fn default() -> Self {
        Self::from_slots(STARTING_HOTBAR)
    }
}

impl Hotbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: [BlockId; HOTBAR_SIZE]) -> Self {
        Self { slots, selected: 0 }
    }

    pub fn slots(&self) -> &[BlockId; HOTBAR_SIZE] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<BlockId> {
        self.slots.get(index).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_block(&self) -> BlockId {
        self.slots[self.selected]
    }

    /// Select a slot by index, ignoring indices past the end
    pub fn select(&mut self, index: usize) {
        if index < HOTBAR_SIZE {
            self.selected = index;
        }
    }

    /// Cycle selection by one slot, wrapping at either end
    pub fn cycle(&mut self, forward: bool) {
        self.selected = if forward {
            (self.selected + 1) % HOTBAR_SIZE
        } else {
            (self.selected + HOTBAR_SIZE - 1) % HOTBAR_SIZE
        };
    }

    /// Put `block` in the first empty slot. Does nothing when the bar is full.
    pub fn add(&mut self, block: BlockId) -> bool {
        match self.slots.iter().position(|slot| slot.is_air()) {
            Some(index) => {
                self.slots[index] = block;
                true
            }
            None => false,
        }
    }

    /// Empty a slot and return what it held
    pub fn remove(&mut self, index: usize) -> BlockId {
        match self.slots.get_mut(index) {
            Some(slot) => std::mem::replace(slot, BlockId::AIR),
            None => BlockId::AIR,
        }
    }
}
