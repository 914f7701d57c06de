pub mod render;

pub use render::{display_problem, display_recipe, display_sweep, recipe_report};
