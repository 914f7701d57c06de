use std::collections::BTreeMap;

use serde::Serialize;

/// Grams and cost of one ingredient in a solved recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeLine {
    pub ingredient: String,
    pub grams: f64,
    pub cost: f64,
}

/// A cost-minimal allocation of grams across ingredients.
///
/// Produced once per solve; there are no mutators.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    lines: Vec<RecipeLine>,
    total_cost: f64,
    target_weight: f64,
    nutrients: BTreeMap<String, f64>,
}

impl Recipe {
    pub(crate) fn new(
        lines: Vec<RecipeLine>,
        target_weight: f64,
        nutrients: BTreeMap<String, f64>,
    ) -> Self {
        let total_cost = lines.iter().map(|l| l.cost).sum();
        Self {
            lines,
            total_cost,
            target_weight,
            nutrients,
        }
    }

    /// One line per ingredient, in the order the ingredients were given.
    pub fn lines(&self) -> &[RecipeLine] {
        &self.lines
    }

    /// Lines with at least `min_grams` grams.
    pub fn used_lines(&self, min_grams: f64) -> impl Iterator<Item = &RecipeLine> {
        self.lines.iter().filter(move |l| l.grams >= min_grams)
    }

    /// Grams of the named ingredient (case-insensitive).
    pub fn grams(&self, ingredient: &str) -> Option<f64> {
        let key = ingredient.to_lowercase();
        self.lines
            .iter()
            .find(|l| l.ingredient.to_lowercase() == key)
            .map(|l| l.grams)
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn target_weight(&self) -> f64 {
        self.target_weight
    }

    /// Sum of grams across all lines.
    pub fn total_weight(&self) -> f64 {
        self.lines.iter().map(|l| l.grams).sum()
    }

    /// Achieved grams of every nutrient any ingredient carries.
    pub fn nutrients(&self) -> &BTreeMap<String, f64> {
        &self.nutrients
    }

    /// Achieved grams of one nutrient (0 when no ingredient carries it).
    pub fn nutrient(&self, name: &str) -> f64 {
        self.nutrients.get(name).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        let lines = vec![
            RecipeLine {
                ingredient: "Rice".to_string(),
                grams: 70.0,
                cost: 0.14,
            },
            RecipeLine {
                ingredient: "Corn".to_string(),
                grams: 0.0,
                cost: 0.0,
            },
            RecipeLine {
                ingredient: "Peanuts".to_string(),
                grams: 30.0,
                cost: 0.39,
            },
        ];
        Recipe::new(lines, 100.0, BTreeMap::from([("Fat".to_string(), 15.46)]))
    }

    #[test]
    fn test_totals() {
        let recipe = sample_recipe();
        assert!((recipe.total_cost() - 0.53).abs() < 1e-9);
        assert!((recipe.total_weight() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_used_lines_skips_zero() {
        let recipe = sample_recipe();
        let used: Vec<&str> = recipe
            .used_lines(0.01)
            .map(|l| l.ingredient.as_str())
            .collect();
        assert_eq!(used, vec!["Rice", "Peanuts"]);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let recipe = sample_recipe();
        assert_eq!(recipe.grams("peanuts"), Some(30.0));
        assert_eq!(recipe.grams("Beef"), None);
        assert_eq!(recipe.nutrient("Protein"), 0.0);
    }
}
