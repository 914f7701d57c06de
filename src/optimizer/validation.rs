use std::collections::HashSet;

use strsim::jaro_winkler;
use tracing::warn;

use crate::error::{OptimizerError, Result};
use crate::models::{NutrientBound, Problem};
use crate::optimizer::constants::SUGGESTION_THRESHOLD;

/// Reject malformed problems before any model is built.
pub fn validate_problem(problem: &Problem) -> Result<()> {
    if problem.ingredients.is_empty() {
        return Err(OptimizerError::InvalidInput(
            "at least one ingredient is required".to_string(),
        ));
    }

    if !problem.target_weight.is_finite() || problem.target_weight <= 0.0 {
        return Err(OptimizerError::InvalidInput(format!(
            "target weight must be positive, got {}",
            problem.target_weight
        )));
    }

    let mut seen = HashSet::new();
    for ingredient in &problem.ingredients {
        if ingredient.name.trim().is_empty() {
            return Err(OptimizerError::InvalidInput(
                "ingredient name must not be empty".to_string(),
            ));
        }

        if !seen.insert(ingredient.key()) {
            return Err(OptimizerError::InvalidInput(format!(
                "duplicate ingredient name: {}",
                ingredient.name
            )));
        }

        if !ingredient.cost_per_gram.is_finite() || ingredient.cost_per_gram < 0.0 {
            return Err(OptimizerError::InvalidInput(format!(
                "{} has invalid cost per gram {}",
                ingredient.name, ingredient.cost_per_gram
            )));
        }

        for (nutrient, &content) in &ingredient.nutrients {
            if !content.is_finite() || content < 0.0 {
                return Err(OptimizerError::InvalidInput(format!(
                    "{} has invalid {} content {}",
                    ingredient.name, nutrient, content
                )));
            }
        }
    }

    for (nutrient, bound) in &problem.requirements {
        validate_bound(nutrient, bound)?;
    }

    warn_unknown_nutrients(problem);
    Ok(())
}

fn validate_bound(nutrient: &str, bound: &NutrientBound) -> Result<()> {
    for value in [bound.min, bound.max].into_iter().flatten() {
        if !value.is_finite() || value < 0.0 {
            return Err(OptimizerError::InvalidInput(format!(
                "{} bound must be a non-negative number, got {}",
                nutrient, value
            )));
        }
    }

    if let (Some(min), Some(max)) = (bound.min, bound.max) {
        if min > max {
            return Err(OptimizerError::InvalidInput(format!(
                "{} minimum {} exceeds maximum {}",
                nutrient, min, max
            )));
        }
    }

    Ok(())
}

/// Warn about requirements on nutrients that no ingredient carries.
///
/// Such a nutrient always sums to zero, which is usually a typo.
fn warn_unknown_nutrients(problem: &Problem) {
    let known = problem.nutrient_names();

    for nutrient in problem.requirements.keys() {
        if known.contains(nutrient) {
            continue;
        }
        match suggest_nutrient(nutrient, &known) {
            Some(suggestion) => warn!(
                nutrient = %nutrient,
                "no ingredient carries this nutrient; did you mean {}?",
                suggestion
            ),
            None => warn!(nutrient = %nutrient, "no ingredient carries this nutrient"),
        }
    }
}

/// Closest known nutrient name by jaro-winkler similarity.
pub fn suggest_nutrient<'a>(name: &str, known: &'a [String]) -> Option<&'a str> {
    let needle = name.to_lowercase();
    known
        .iter()
        .map(|k| (k, jaro_winkler(&k.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k.as_str())
}
