pub mod recipe;

pub use recipe::{can_craft, craft, Recipe, RecipeBook};
