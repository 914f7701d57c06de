pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod optimizer;
pub mod sensitivity;
pub mod state;

pub use error::{OptimizerError, Result};
pub use models::{Ingredient, NutrientBound, NutrientRequirements, Problem, Recipe, RecipeLine};
pub use optimizer::RecipeOptimizer;
