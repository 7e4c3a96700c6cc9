use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unique identifier for a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct BlockId(pub u16);

impl Default for BlockId {
    fn default() -> Self {
        BlockId::AIR
    }
}

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const GRASS: BlockId = BlockId(1);
    pub const DIRT: BlockId = BlockId(2);
    pub const STONE: BlockId = BlockId(3);
    pub const WOOD: BlockId = BlockId(4);
    pub const PLANKS: BlockId = BlockId(5);
    pub const LEAVES: BlockId = BlockId(6);
    pub const SAND: BlockId = BlockId(7);
    pub const COBBLESTONE: BlockId = BlockId(8);
    pub const BEDROCK: BlockId = BlockId(9);
    pub const WATER: BlockId = BlockId(10);

    /// Every known block, in id order
    pub const ALL: [BlockId; 11] = [
        BlockId::AIR,
        BlockId::GRASS,
        BlockId::DIRT,
        BlockId::STONE,
        BlockId::WOOD,
        BlockId::PLANKS,
        BlockId::LEAVES,
        BlockId::SAND,
        BlockId::COBBLESTONE,
        BlockId::BEDROCK,
        BlockId::WATER,
    ];

    /// Blocks that exist in the 2D tile sandbox
    pub const TILE_SET: [BlockId; 8] = [
        BlockId::AIR,
        BlockId::GRASS,
        BlockId::DIRT,
        BlockId::STONE,
        BlockId::WOOD,
        BlockId::LEAVES,
        BlockId::SAND,
        BlockId::WATER,
    ];

    /// Lowercase name used on the wire and in config files
    pub fn name(self) -> &'static str {
        match self {
            BlockId::AIR => "air",
            BlockId::GRASS => "grass",
            BlockId::DIRT => "dirt",
            BlockId::STONE => "stone",
            BlockId::WOOD => "wood",
            BlockId::PLANKS => "planks",
            BlockId::LEAVES => "leaves",
            BlockId::SAND => "sand",
            BlockId::COBBLESTONE => "cobblestone",
            BlockId::BEDROCK => "bedrock",
            BlockId::WATER => "water",
            _ => "unknown",
        }
    }

    pub fn from_name(name: &str) -> Option<BlockId> {
        BlockId::ALL.iter().copied().find(|block| block.name() == name)
    }

    pub fn is_air(self) -> bool {
        self == BlockId::AIR
    }

    /// Whether breaking this block should hand it to the player
    pub fn is_collectable(self) -> bool {
        self != BlockId::AIR && self != BlockId::BEDROCK
    }

    /// Voxel palette colour as 0xRRGGBB
    pub fn color(self) -> u32 {
        match self {
            BlockId::GRASS => 0x7CB342,
            BlockId::DIRT => 0x8D6E63,
            BlockId::STONE => 0x757575,
            BlockId::WOOD => 0x6D4C41,
            BlockId::PLANKS => 0xA1887F,
            BlockId::LEAVES => 0x4CAF50,
            BlockId::SAND => 0xFDD835,
            BlockId::COBBLESTONE => 0x616161,
            BlockId::BEDROCK => 0x212121,
            BlockId::WATER => 0x2196F3,
            _ => 0x000000,
        }
    }

    /// Tile palette colour as 0xRRGGBB, `None` for transparent air
    pub fn tile_color(self) -> Option<u32> {
        match self {
            BlockId::GRASS => Some(0x7CB342),
            BlockId::DIRT => Some(0x8D6E63),
            BlockId::STONE => Some(0x616161),
            BlockId::WOOD => Some(0x795548),
            BlockId::LEAVES => Some(0x4CAF50),
            BlockId::SAND => Some(0xFFD54F),
            BlockId::WATER => Some(0x2196F3),
            BlockId::AIR => None,
            other => Some(other.color()),
        }
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockId::AIR => write!(f, "Air"),
            BlockId::GRASS => write!(f, "Grass"),
            BlockId::DIRT => write!(f, "Dirt"),
            BlockId::STONE => write!(f, "Stone"),
            BlockId::WOOD => write!(f, "Wood"),
            BlockId::PLANKS => write!(f, "Planks"),
            BlockId::LEAVES => write!(f, "Leaves"),
            BlockId::SAND => write!(f, "Sand"),
            BlockId::COBBLESTONE => write!(f, "Cobblestone"),
            BlockId::BEDROCK => write!(f, "Bedrock"),
            BlockId::WATER => write!(f, "Water"),
            _ => write!(f, "Block({})", self.0),
        }
    }
}

impl Serialize for BlockId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for BlockId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        BlockId::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown block type: {}", name)))
    }
}
