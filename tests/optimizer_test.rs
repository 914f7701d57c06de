use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use meal_bar_optimizer::error::OptimizerError;
use meal_bar_optimizer::models::{Ingredient, NutrientBound, Problem, Recipe};
use meal_bar_optimizer::optimizer::RecipeOptimizer;
use meal_bar_optimizer::state::{sample_ingredients, sample_problem};

const TOL: f64 = 1e-6;

fn small_problem() -> Problem {
    Problem::new(
        vec![
            Ingredient::new("Rice", 0.002)
                .with_nutrient("Fibre", 0.10)
                .with_nutrient("Fat", 0.01),
            Ingredient::new("Beef", 0.150)
                .with_nutrient("Protein", 0.20)
                .with_nutrient("Fat", 0.10),
            Ingredient::new("Peanuts", 0.013)
                .with_nutrient("Protein", 0.258)
                .with_nutrient("Fat", 0.492)
                .with_nutrient("Fibre", 0.085),
        ],
        100.0,
    )
    .with_requirement("Protein", NutrientBound::at_least(10.0))
    .with_requirement("Fat", NutrientBound::at_most(20.0))
}

fn assert_invariants(problem: &Problem, recipe: &Recipe) {
    assert_float_absolute_eq!(recipe.total_weight(), problem.target_weight, TOL);

    for (nutrient, bound) in &problem.requirements {
        assert!(
            bound.contains(recipe.nutrient(nutrient), TOL),
            "{} = {} violates {}",
            nutrient,
            recipe.nutrient(nutrient),
            bound.describe()
        );
    }

    let cost: f64 = problem
        .ingredients
        .iter()
        .map(|i| i.cost_of(recipe.grams(&i.name).unwrap()))
        .sum();
    assert_float_absolute_eq!(recipe.total_cost(), cost, TOL);

    for line in recipe.lines() {
        assert!(line.grams >= 0.0);
    }
}

#[test]
fn test_small_problem_invariants() {
    let problem = small_problem();
    let recipe = RecipeOptimizer::new().solve(&problem).unwrap();
    assert_invariants(&problem, &recipe);
}

#[test]
fn test_optimum_beats_random_feasible_allocations() {
    let problem = small_problem();
    let recipe = RecipeOptimizer::new().solve(&problem).unwrap();

    let mut rng = StdRng::seed_from_u64(123);
    let mut feasible = 0;

    for _ in 0..5000 {
        let weights: Vec<f64> = problem
            .ingredients
            .iter()
            .map(|_| rng.gen_range(0.0..1.0))
            .collect();
        let total: f64 = weights.iter().sum();
        let grams: Vec<f64> = weights
            .iter()
            .map(|w| w / total * problem.target_weight)
            .collect();

        let meets_bounds = problem.requirements.iter().all(|(nutrient, bound)| {
            let amount: f64 = problem
                .ingredients
                .iter()
                .zip(&grams)
                .map(|(i, g)| i.content(nutrient) * g)
                .sum();
            bound.contains(amount, 0.0)
        });
        if !meets_bounds {
            continue;
        }

        feasible += 1;
        let cost: f64 = problem
            .ingredients
            .iter()
            .zip(&grams)
            .map(|(i, &g)| i.cost_of(g))
            .sum();
        assert!(
            recipe.total_cost() <= cost + TOL,
            "sampled allocation {:?} costs {} < optimum {}",
            grams,
            cost,
            recipe.total_cost()
        );
    }

    assert!(feasible > 100, "only {} feasible samples", feasible);
}

#[test]
fn test_single_free_ingredient_takes_whole_weight() {
    let problem = Problem::new(vec![Ingredient::new("Water", 0.0)], 120.0);
    let recipe = RecipeOptimizer::new().solve(&problem).unwrap();

    assert_float_absolute_eq!(recipe.grams("Water").unwrap(), 120.0, TOL);
    assert_float_absolute_eq!(recipe.total_cost(), 0.0, TOL);
}

#[test]
fn test_unreachable_minimum_is_infeasible() {
    // The richest protein source is peanuts at 0.258 g/g: at most 30.96 g in 120 g.
    let problem = Problem::new(sample_ingredients(), 120.0)
        .with_requirement("Protein", NutrientBound::at_least(40.0));

    match RecipeOptimizer::new().solve(&problem) {
        Err(OptimizerError::Infeasible { violated }) => {
            assert_eq!(violated.len(), 1);
            assert!(violated[0].starts_with("Protein"));
        }
        other => panic!("expected Infeasible, got {:?}", other),
    }
}

#[test]
fn test_strict_100g_bounds_are_infeasible() {
    // 100 g bar with protein >= 22, fat <= 22, fibre >= 6, salt <= 3, sugar <= 20.
    let problem = Problem::new(sample_ingredients(), 100.0)
        .with_requirement("Protein", NutrientBound::at_least(22.0))
        .with_requirement("Fat", NutrientBound::at_most(22.0))
        .with_requirement("Fibre", NutrientBound::at_least(6.0))
        .with_requirement("Salt", NutrientBound::at_most(3.0))
        .with_requirement("Sugar", NutrientBound::at_most(20.0));

    match RecipeOptimizer::new().solve(&problem) {
        // Every bound is reachable alone; the conflict is joint.
        Err(OptimizerError::Infeasible { violated }) => assert!(violated.is_empty()),
        other => panic!("expected Infeasible, got {:?}", other),
    }
}

#[test]
fn test_invalid_input_rejected_before_solving() {
    let mut problem = small_problem();
    problem.ingredients[1].cost_per_gram = -1.0;

    assert!(matches!(
        RecipeOptimizer::new().solve(&problem),
        Err(OptimizerError::InvalidInput(_))
    ));
}

#[test]
fn test_sample_scenario() {
    let problem = sample_problem();
    let recipe = RecipeOptimizer::new().solve(&problem).unwrap();
    assert_invariants(&problem, &recipe);

    assert_float_absolute_eq!(recipe.total_cost(), 3.6935652, 1e-5);
    assert_float_absolute_eq!(recipe.grams("Beef").unwrap(), 2096.0 / 115.0, 1e-4);
    assert_float_absolute_eq!(recipe.grams("Wheat bran").unwrap(), 5224.0 / 115.0, 1e-4);
    assert_float_absolute_eq!(recipe.grams("Peanuts").unwrap(), 1296.0 / 23.0, 1e-4);
    for unused in ["Chicken", "Mutton", "Rice", "Corn"] {
        assert_float_absolute_eq!(recipe.grams(unused).unwrap(), 0.0, 1e-4);
    }

    // Protein minimum and fat maximum are the binding constraints.
    assert_float_absolute_eq!(recipe.nutrient("Protein"), 20.0, 1e-5);
    assert_float_absolute_eq!(recipe.nutrient("Fat"), 30.0, 1e-5);
}

#[test]
fn test_sample_scenario_is_reproducible() {
    let problem = sample_problem();
    let optimizer = RecipeOptimizer::new();
    let first = optimizer.solve(&problem).unwrap();
    let second = optimizer.solve(&problem).unwrap();

    assert_eq!(first.lines(), second.lines());
    assert_eq!(first.total_cost(), second.total_cost());
}

#[test]
fn test_ingredient_order_does_not_change_result() {
    let problem = sample_problem();
    let mut reversed = problem.clone();
    reversed.ingredients.reverse();

    let optimizer = RecipeOptimizer::new();
    let a = optimizer.solve(&problem).unwrap();
    let b = optimizer.solve(&reversed).unwrap();

    for line in a.lines() {
        assert_float_absolute_eq!(line.grams, b.grams(&line.ingredient).unwrap(), 1e-6);
    }
}
