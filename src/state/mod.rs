mod persistence;
mod sample;

pub use persistence::{load_or_sample, load_problem, save_problem};
pub use sample::{sample_ingredients, sample_problem, sensitivity_base_problem};
