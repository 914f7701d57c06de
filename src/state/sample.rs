use crate::models::{Ingredient, NutrientBound, Problem};
use crate::optimizer::constants::DEFAULT_BAR_WEIGHT;

/// Per-gram nutrient table: (name, cost per gram, protein, fat, fibre, salt, sugar).
const SAMPLE_TABLE: [(&str, f64, f64, f64, f64, f64, f64); 7] = [
    ("Chicken", 0.095, 0.100, 0.080, 0.001, 0.002, 0.000),
    ("Beef", 0.150, 0.200, 0.100, 0.005, 0.005, 0.000),
    ("Mutton", 0.100, 0.150, 0.110, 0.003, 0.007, 0.000),
    ("Rice", 0.002, 0.000, 0.010, 0.100, 0.002, 0.000),
    ("Wheat bran", 0.005, 0.040, 0.010, 0.150, 0.008, 0.000),
    ("Corn", 0.012, 0.033, 0.013, 0.028, 0.000, 0.045),
    ("Peanuts", 0.013, 0.258, 0.492, 0.085, 0.001, 0.047),
];

/// The seven meal bar ingredients with their nutrient content and price.
pub fn sample_ingredients() -> Vec<Ingredient> {
    SAMPLE_TABLE
        .iter()
        .map(|&(name, cost, protein, fat, fibre, salt, sugar)| {
            Ingredient::new(name, cost)
                .with_nutrient("Protein", protein)
                .with_nutrient("Fat", fat)
                .with_nutrient("Fibre", fibre)
                .with_nutrient("Salt", salt)
                .with_nutrient("Sugar", sugar)
        })
        .collect()
}

/// The 120 g meal bar scenario.
pub fn sample_problem() -> Problem {
    Problem::new(sample_ingredients(), DEFAULT_BAR_WEIGHT)
        .with_requirement("Protein", NutrientBound::at_least(20.0))
        .with_requirement("Fat", NutrientBound::at_most(30.0))
        .with_requirement("Fibre", NutrientBound::at_least(6.0))
        .with_requirement("Salt", NutrientBound::at_most(3.0))
        .with_requirement("Sugar", NutrientBound::at_most(20.0))
}

/// Base problem for the protein sweep: a 100 g bar with looser fat and fibre bounds.
pub fn sensitivity_base_problem() -> Problem {
    Problem::new(sample_ingredients(), 100.0)
        .with_requirement("Fat", NutrientBound::at_most(25.0))
        .with_requirement("Fibre", NutrientBound::at_least(5.0))
        .with_requirement("Salt", NutrientBound::at_most(3.0))
        .with_requirement("Sugar", NutrientBound::at_most(20.0))
}
