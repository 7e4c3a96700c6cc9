//! Tile sandbox session
//!
//! A fixed grid, a player that steps one cell at a time, click editing backed
//! by per-type counts, a vitals timer and the crafting panel.

use super::world::TileWorld;
use crate::constants::tiles::{
    DAY_LENGTH, GRID_HEIGHT, GRID_WIDTH, HUNGER_DECAY, REGENERATION, SPAWN_X, SPAWN_Y,
    STARVATION_DAMAGE, STARVING_THRESHOLD,
};
use crate::constants::player::{MAX_HEALTH, MAX_HUNGER};
use crate::crafting::{self, RecipeBook};
use crate::input::{tile_action_for_key, KeyCode, TileAction};
use crate::inventory::BlockStock;
use crate::world::BlockId;
use rand::Rng;

/// Result of a click on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEdit {
    Removed { x: i32, y: i32, block: BlockId },
    Placed { x: i32, y: i32, block: BlockId },
}

#[derive(Debug, Clone)]
pub struct TileSession {
    world: TileWorld,
    player: (i32, i32),
    stock: BlockStock,
    selected: BlockId,
    recipes: RecipeBook,
    health: f32,
    hunger: f32,
    time_of_day: u32,
    started: bool,
    menu_open: bool,
    inventory_open: bool,
}

impl TileSession {
    /// New session with a generated grid, waiting on the start menu
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_world(TileWorld::generate(rng))
    }

    pub fn with_world(world: TileWorld) -> Self {
        Self {
            world,
            player: (SPAWN_X, SPAWN_Y),
            stock: BlockStock::starting(),
            selected: BlockId::GRASS,
            recipes: RecipeBook::default(),
            health: MAX_HEALTH,
            hunger: MAX_HUNGER,
            time_of_day: 0,
            started: false,
            menu_open: true,
            inventory_open: false,
        }
    }

    pub fn world(&self) -> &TileWorld {
        &self.world
    }

    pub fn player(&self) -> (i32, i32) {
        self.player
    }

    pub fn stock(&self) -> &BlockStock {
        &self.stock
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn selected(&self) -> BlockId {
        self.selected
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn time_of_day(&self) -> u32 {
        self.time_of_day
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_inventory_open(&self) -> bool {
        self.inventory_open
    }

    /// Leave the menu; the first call also starts the clock
    pub fn start(&mut self) {
        if !self.started {
            log::info!("Tile sandbox started");
        }
        self.started = true;
        self.menu_open = false;
    }

    fn accepts_input(&self) -> bool {
        self.started && !self.menu_open
    }

    /// Choose which tile type clicks place. Air is not placeable.
    pub fn select(&mut self, block: BlockId) -> bool {
        if block.is_air() || !BlockId::TILE_SET.contains(&block) {
            return false;
        }
        self.selected = block;
        true
    }

    /// Step the player, clamped to the grid
    pub fn move_player(&mut self, dx: i32, dy: i32) {
        if !self.accepts_input() {
            return;
        }
        self.player = (
            (self.player.0 + dx).clamp(0, GRID_WIDTH - 1),
            (self.player.1 + dy).clamp(0, GRID_HEIGHT - 1),
        );
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        if !self.started {
            return;
        }
        match tile_action_for_key(key) {
            Some(TileAction::Move { dx, dy }) => self.move_player(dx, dy),
            Some(TileAction::ToggleInventory) => self.inventory_open = !self.inventory_open,
            Some(TileAction::OpenMenu) => self.menu_open = true,
            None => {}
        }
    }

    /// Shift-click collects a solid tile; a plain click on air places the selected type
    pub fn click(&mut self, x: i32, y: i32, shift: bool) -> Option<TileEdit> {
        if !self.accepts_input() {
            return None;
        }
        let current = self.world.get(x, y)?;

        if shift {
            if current.is_air() {
                return None;
            }
            self.world.set(x, y, BlockId::AIR);
            self.stock.add(current, 1);
            Some(TileEdit::Removed { x, y, block: current })
        } else {
            if !current.is_air() || !self.stock.take(self.selected, 1) {
                return None;
            }
            self.world.set(x, y, self.selected);
            Some(TileEdit::Placed {
                x,
                y,
                block: self.selected,
            })
        }
    }

    /// Craft a recipe by name; false when unknown or unaffordable
    pub fn craft(&mut self, name: &str) -> bool {
        match self.recipes.find(name) {
            Some(recipe) => crafting::craft(recipe, &mut self.stock),
            None => false,
        }
    }

    /// One timer tick: advance the clock, decay hunger, then heal or starve
    ///
    /// Health reacts to the hunger level from before this tick's decay.
    pub fn tick(&mut self) {
        if !self.started {
            return;
        }
        self.time_of_day = (self.time_of_day + 1) % DAY_LENGTH;
        let was_starving = self.hunger < STARVING_THRESHOLD;
        self.hunger = (self.hunger - HUNGER_DECAY).max(0.0);
        self.health = if was_starving {
            (self.health - STARVATION_DAMAGE).max(0.0)
        } else {
            (self.health + REGENERATION).min(MAX_HEALTH)
        };
    }

    /// Fraction of the day elapsed, in [0, 1)
    pub fn day_progress(&self) -> f32 {
        self.time_of_day as f32 / DAY_LENGTH as f32
    }
}
