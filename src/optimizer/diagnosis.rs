use crate::models::Problem;
use crate::optimizer::constants::FEASIBILITY_TOLERANCE;

/// Bounds that cannot be met by any `target_weight`-gram mix, one line each.
///
/// Each bound is checked on its own against the range of totals reachable
/// with exactly the target weight. An empty result means every bound is
/// reachable alone and the conflict is between constraints.
pub fn unreachable_bounds(problem: &Problem) -> Vec<String> {
    let weight = problem.target_weight;
    let tolerance = FEASIBILITY_TOLERANCE * weight.max(1.0);
    let mut violated = Vec::new();

    for (nutrient, bound) in &problem.requirements {
        let (lowest, highest) = content_range(problem, nutrient);
        let reachable_min = lowest * weight;
        let reachable_max = highest * weight;

        if let Some(min) = bound.min {
            if min > reachable_max + tolerance {
                violated.push(format!(
                    "{} >= {} g (at most {:.4} g reachable in {} g)",
                    nutrient, min, reachable_max, weight
                ));
            }
        }

        if let Some(max) = bound.max {
            if max < reachable_min - tolerance {
                violated.push(format!(
                    "{} <= {} g (at least {:.4} g unavoidable in {} g)",
                    nutrient, max, reachable_min, weight
                ));
            }
        }
    }

    violated
}

/// Lowest and highest per-gram content of `nutrient` across all ingredients.
fn content_range(problem: &Problem, nutrient: &str) -> (f64, f64) {
    problem
        .ingredients
        .iter()
        .map(|i| i.content(nutrient))
        .fold((f64::MAX, 0.0_f64), |(lo, hi), c| (lo.min(c), hi.max(c)))
}
