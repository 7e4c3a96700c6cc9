//! Fixed-size tile grid
//!
//! Rows grow downward: y = 0 is the top of the screen, so "below the
//! surface" means a larger y.

use crate::constants::tiles::{
    BASE_HEIGHT, COSINE_AMPLITUDE, COSINE_FREQUENCY, DIRT_DEPTH, GRID_HEIGHT, GRID_WIDTH,
    LEAVES_CHANCE, SAND_CHANCE, SINE_AMPLITUDE, SINE_FREQUENCY, WOOD_CHANCE,
};
use crate::world::BlockId;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileWorld {
    width: i32,
    height: i32,
    tiles: Vec<BlockId>,
}

impl TileWorld {
    /// An all-air grid of the standard size
    pub fn empty() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            tiles: vec![BlockId::AIR; (GRID_WIDTH * GRID_HEIGHT) as usize],
        }
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut world = Self::empty();
        for y in 0..world.height {
            for x in 0..world.width {
                let tile = generate_tile(y, surface_row(x), rng);
                world.set(x, y, tile);
            }
        }
        world
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y).then(|| (y * self.width + x) as usize)
    }

    /// Tile at (x, y), `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<BlockId> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Overwrite a tile; returns false outside the grid
    pub fn set(&mut self, x: i32, y: i32, block: BlockId) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = block;
                true
            }
            None => false,
        }
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[BlockId]> {
        self.tiles.chunks(self.width as usize)
    }
}

/// Pure function - row of the surface tile in column `x`
pub fn surface_row(x: i32) -> i32 {
    let x = x as f64;
    (BASE_HEIGHT + (x * SINE_FREQUENCY).sin() * SINE_AMPLITUDE + (x * COSINE_FREQUENCY).cos() * COSINE_AMPLITUDE)
        .floor() as i32
}

fn generate_tile<R: Rng + ?Sized>(y: i32, surface: i32, rng: &mut R) -> BlockId {
    if y > surface {
        if y > surface + DIRT_DEPTH {
            BlockId::STONE
        } else {
            BlockId::DIRT
        }
    } else if y == surface {
        if rng.gen_bool(SAND_CHANCE) {
            BlockId::SAND
        } else {
            BlockId::GRASS
        }
    } else if y == surface - 1 && rng.gen_bool(WOOD_CHANCE) {
        BlockId::WOOD
    } else if y < surface - 1 && y > surface - 4 && rng.gen_bool(LEAVES_CHANCE) {
        BlockId::LEAVES
    } else {
        BlockId::AIR
    }
}
