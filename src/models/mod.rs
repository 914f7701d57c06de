mod ingredient;
mod problem;
mod recipe;
mod requirement;

pub use ingredient::Ingredient;
pub use problem::Problem;
pub use recipe::{Recipe, RecipeLine};
pub use requirement::{NutrientBound, NutrientRequirements};
