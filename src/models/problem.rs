use serde::{Deserialize, Serialize};

use crate::models::{Ingredient, NutrientBound, NutrientRequirements};

/// Everything a single optimizer run needs: ingredients, nutrient bounds and bar weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub requirements: NutrientRequirements,

    /// Total weight of the bar in grams.
    pub target_weight: f64,
}

impl Problem {
    pub fn new(ingredients: Vec<Ingredient>, target_weight: f64) -> Self {
        Self {
            ingredients,
            requirements: NutrientRequirements::new(),
            target_weight,
        }
    }

    /// Builder-style setter for one nutrient requirement.
    pub fn with_requirement(mut self, nutrient: impl Into<String>, bound: NutrientBound) -> Self {
        self.requirements.insert(nutrient.into(), bound);
        self
    }

    /// All nutrient names mentioned by any ingredient, sorted.
    pub fn nutrient_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .ingredients
            .iter()
            .flat_map(|i| i.nutrients.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
