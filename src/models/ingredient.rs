use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A raw ingredient with its price and nutrient content.
///
/// Nutrient content is grams of nutrient per gram of ingredient. Nutrients
/// missing from the map count as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    pub cost_per_gram: f64,

    #[serde(default)]
    pub nutrients: BTreeMap<String, f64>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, cost_per_gram: f64) -> Self {
        Self {
            name: name.into(),
            cost_per_gram,
            nutrients: BTreeMap::new(),
        }
    }

    /// Builder-style setter for one nutrient.
    pub fn with_nutrient(mut self, nutrient: impl Into<String>, grams_per_gram: f64) -> Self {
        self.nutrients.insert(nutrient.into(), grams_per_gram);
        self
    }

    /// Grams of `nutrient` per gram of this ingredient (0 when absent).
    #[inline]
    pub fn content(&self, nutrient: &str) -> f64 {
        self.nutrients.get(nutrient).copied().unwrap_or(0.0)
    }

    /// Cost of using `grams` of this ingredient.
    #[inline]
    pub fn cost_of(&self, grams: f64) -> f64 {
        self.cost_per_gram * grams
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        let nutrients: Vec<String> = self
            .nutrients
            .iter()
            .map(|(n, v)| format!("{}:{}", n, v))
            .collect();
        format!(
            "{}: {}/g, {}",
            self.name,
            self.cost_per_gram,
            nutrients.join(" ")
        )
    }
}
