pub mod constants;
pub mod diagnosis;
pub mod formulation;
pub mod validation;

pub use constants::*;
pub use diagnosis::unreachable_bounds;
pub use formulation::RecipeOptimizer;
pub use validation::{suggest_nutrient, validate_problem};
