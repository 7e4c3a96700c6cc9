use crate::inventory::BlockStock;
use crate::world::BlockId;
use serde::{Deserialize, Serialize};

/// A shapeless recipe producing one block from counted ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub result: BlockId,
    pub ingredients: Vec<(BlockId, u32)>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, result: BlockId, ingredients: Vec<(BlockId, u32)>) -> Self {
        Self {
            name: name.into(),
            result,
            ingredients,
        }
    }

    /// Amount of `block` this recipe consumes, summed over repeated entries
    fn required(&self, block: BlockId) -> u32 {
        self.ingredients
            .iter()
            .filter(|(ingredient, _)| *ingredient == block)
            .map(|(_, count)| *count)
            .sum()
    }
}

/// Pure function - whether `stock` covers every ingredient of `recipe`
pub fn can_craft(recipe: &Recipe, stock: &BlockStock) -> bool {
    recipe
        .ingredients
        .iter()
        .all(|(ingredient, _)| stock.has(*ingredient, recipe.required(*ingredient)))
}

/// Function - consumes the ingredients and adds one result block
///
/// Either the whole craft happens or the stock is left untouched.
pub fn craft(recipe: &Recipe, stock: &mut BlockStock) -> bool {
    if !can_craft(recipe, stock) {
        log::debug!("Cannot craft {}: missing ingredients", recipe.name);
        return false;
    }
    for (ingredient, count) in &recipe.ingredients {
        stock.take(*ingredient, *count);
    }
    stock.add(recipe.result, 1);
    log::info!("Crafted {} ({})", recipe.name, recipe.result);
    true
}

/// The set of recipes the crafting panel offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::new(vec![
            // Turns wood back into wood: the board recipe has no planks tile to produce
            Recipe::new("Доски", BlockId::WOOD, vec![(BlockId::WOOD, 1)]),
            Recipe::new(
                "Инструменты",
                BlockId::STONE,
                vec![(BlockId::WOOD, 2), (BlockId::STONE, 3)],
            ),
        ])
    }
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    /// Recipes that `stock` can currently afford
    pub fn craftable<'a>(&'a self, stock: &'a BlockStock) -> impl Iterator<Item = &'a Recipe> + 'a {
        self.recipes.iter().filter(move |recipe| can_craft(recipe, stock))
    }
}
