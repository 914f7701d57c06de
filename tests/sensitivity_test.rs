use assert_float_eq::assert_float_absolute_eq;

use meal_bar_optimizer::optimizer::{RecipeOptimizer, DEFAULT_SENSITIVITY_LEVELS};
use meal_bar_optimizer::sensitivity::{run_sweep, BoundSide, SolveStatus, SweepConfig};
use meal_bar_optimizer::state::sensitivity_base_problem;

fn protein_sweep() -> SweepConfig {
    SweepConfig {
        nutrient: "Protein".to_string(),
        side: BoundSide::Min,
        levels: DEFAULT_SENSITIVITY_LEVELS.to_vec(),
    }
}

#[test]
fn test_default_protein_sweep() {
    let points = run_sweep(
        &sensitivity_base_problem(),
        &protein_sweep(),
        &RecipeOptimizer::new(),
    );
    assert_eq!(points.len(), 7);

    let expected = [
        (15.0, Some(1.0730435)),
        (18.0, Some(4.6819130)),
        (20.0, Some(7.0878261)),
        (22.0, None),
        (25.0, None),
        (28.0, None),
        (30.0, None),
    ];

    for (point, (level, cost)) in points.iter().zip(expected) {
        assert_eq!(point.level, level);
        match cost {
            Some(cost) => {
                assert_eq!(point.status, SolveStatus::Optimal);
                assert_float_absolute_eq!(point.cost.unwrap(), cost, 1e-5);
            }
            None => {
                assert_eq!(point.status, SolveStatus::Infeasible);
                assert!(point.cost.is_none());
            }
        }
    }
}

#[test]
fn test_cost_grows_with_protein_minimum() {
    let points = run_sweep(
        &sensitivity_base_problem(),
        &protein_sweep(),
        &RecipeOptimizer::new(),
    );
    let costs: Vec<f64> = points.iter().filter_map(|p| p.cost).collect();
    assert!(costs.windows(2).all(|w| w[0] <= w[1]));
}
