use good_lp::solvers::microlp::microlp;
use good_lp::{
    constraint, variable, Constraint, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use tracing::{debug, info, warn};

use crate::error::{OptimizerError, Result};
use crate::models::{Ingredient, NutrientRequirements, Problem, Recipe, RecipeLine};
use crate::optimizer::constants::{COST_TIE_TOLERANCE, FEASIBILITY_TOLERANCE, ZERO_SNAP};
use crate::optimizer::diagnosis::unreachable_bounds;
use crate::optimizer::validation::validate_problem;

/// Which linear objective a solve stage minimizes.
#[derive(Debug, Clone, Copy)]
enum Objective {
    /// Total cost of the bar.
    Cost,
    /// Grams weighted by each ingredient's position in name order.
    NameRank,
}

/// Finds the cheapest gram allocation that meets the weight and nutrient bounds.
///
/// Degenerate optima are resolved deterministically: after the cost solve, a
/// second solve holds cost at its optimum and pushes grams toward ingredients
/// whose names sort first (case-insensitive).
#[derive(Debug, Clone)]
pub struct RecipeOptimizer {
    tie_break: bool,
}

impl Default for RecipeOptimizer {
    fn default() -> Self {
        Self { tie_break: true }
    }
}

impl RecipeOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the name-order tie-break stage and return the first optimum found.
    pub fn without_tie_break(mut self) -> Self {
        self.tie_break = false;
        self
    }

    /// Validate `problem`, solve it and check the result.
    pub fn solve(&self, problem: &Problem) -> Result<Recipe> {
        validate_problem(problem)?;

        let formulation = Formulation::new(problem);
        debug!(
            ingredients = formulation.ingredients.len(),
            requirements = problem.requirements.len(),
            target_weight = problem.target_weight,
            "building recipe model"
        );

        let mut grams = formulation
            .solve(Objective::Cost, None)
            .map_err(|e| resolution_error(e, problem))?;
        let optimal_cost = formulation.cost_of(&grams);
        debug!(cost = optimal_cost, "cost stage solved");

        if self.tie_break && formulation.ingredients.len() > 1 {
            let cap = optimal_cost + COST_TIE_TOLERANCE * optimal_cost.abs().max(1.0);
            match formulation.solve(Objective::NameRank, Some(cap)) {
                Ok(tied) => grams = tied,
                Err(e) => warn!(error = %e, "tie-break stage failed, keeping cost-stage optimum"),
            }
        }

        let grams = snap_solution(&grams, problem.target_weight)?;
        let recipe = formulation.into_recipe(problem, &grams);
        check_recipe(problem, &recipe)?;

        info!(
            cost = recipe.total_cost(),
            weight = recipe.total_weight(),
            "recipe optimized"
        );
        Ok(recipe)
    }
}

/// The LP built from a problem, with ingredients held in name order.
struct Formulation<'a> {
    ingredients: Vec<&'a Ingredient>,
    requirements: &'a NutrientRequirements,
    target_weight: f64,
}

impl<'a> Formulation<'a> {
    fn new(problem: &'a Problem) -> Self {
        let mut ingredients: Vec<&Ingredient> = problem.ingredients.iter().collect();
        ingredients.sort_by(|a, b| a.key().cmp(&b.key()).then_with(|| a.name.cmp(&b.name)));

        for ingredient in &ingredients {
            debug!("{}", ingredient.debug_string());
        }

        Self {
            ingredients,
            requirements: &problem.requirements,
            target_weight: problem.target_weight,
        }
    }

    fn cost_expression(&self, grams: &[Variable]) -> Expression {
        self.ingredients
            .iter()
            .zip(grams)
            .map(|(i, &g)| i.cost_per_gram * g)
            .sum()
    }

    fn nutrient_expression(&self, nutrient: &str, grams: &[Variable]) -> Expression {
        self.ingredients
            .iter()
            .zip(grams)
            .map(|(i, &g)| i.content(nutrient) * g)
            .sum()
    }

    /// Weight equality plus one inequality per nutrient bound side.
    fn constraints(&self, grams: &[Variable]) -> Vec<Constraint> {
        let total: Expression = grams.iter().copied().sum();
        let weight = self.target_weight;
        let mut constraints = vec![constraint!(total == weight)];

        for (nutrient, bound) in self.requirements {
            let amount = self.nutrient_expression(nutrient, grams);
            if let Some(min) = bound.min {
                let lower = amount.clone();
                constraints.push(constraint!(lower >= min));
            }
            if let Some(max) = bound.max {
                constraints.push(constraint!(amount <= max));
            }
        }

        constraints
    }

    /// Solve once; grams come back in name order.
    fn solve(
        &self,
        objective: Objective,
        cost_cap: Option<f64>,
    ) -> std::result::Result<Vec<f64>, ResolutionError> {
        let mut vars = ProblemVariables::new();
        let grams: Vec<Variable> = self
            .ingredients
            .iter()
            .map(|_| vars.add(variable().min(0.0)))
            .collect();

        let objective = match objective {
            Objective::Cost => self.cost_expression(&grams),
            Objective::NameRank => grams
                .iter()
                .enumerate()
                .map(|(rank, &g)| rank as f64 * g)
                .sum(),
        };

        let mut model = vars
            .minimise(objective)
            .using(microlp)
            .with_all(self.constraints(&grams));

        if let Some(cap) = cost_cap {
            let cost = self.cost_expression(&grams);
            model = model.with(constraint!(cost <= cap));
        }

        let solution = model.solve()?;
        Ok(grams.iter().map(|&g| solution.value(g)).collect())
    }

    fn cost_of(&self, grams: &[f64]) -> f64 {
        self.ingredients
            .iter()
            .zip(grams)
            .map(|(i, &g)| i.cost_of(g))
            .sum()
    }

    /// Build the recipe with lines in the caller's ingredient order.
    fn into_recipe(self, problem: &Problem, grams: &[f64]) -> Recipe {
        let lines: Vec<RecipeLine> = problem
            .ingredients
            .iter()
            .map(|ingredient| {
                let amount = self
                    .ingredients
                    .iter()
                    .position(|i| std::ptr::eq(*i, ingredient))
                    .map(|idx| grams[idx])
                    .unwrap_or(0.0);
                RecipeLine {
                    ingredient: ingredient.name.clone(),
                    grams: amount,
                    cost: ingredient.cost_of(amount),
                }
            })
            .collect();

        let nutrients = problem
            .nutrient_names()
            .into_iter()
            .chain(problem.requirements.keys().cloned())
            .map(|nutrient| {
                let total = problem
                    .ingredients
                    .iter()
                    .zip(&lines)
                    .map(|(i, line)| i.content(&nutrient) * line.grams)
                    .sum();
                (nutrient, total)
            })
            .collect();

        Recipe::new(lines, problem.target_weight, nutrients)
    }
}

fn resolution_error(err: ResolutionError, problem: &Problem) -> OptimizerError {
    match err {
        ResolutionError::Infeasible => {
            let violated = unreachable_bounds(problem);
            info!(violated = violated.len(), "recipe problem is infeasible");
            OptimizerError::Infeasible { violated }
        }
        ResolutionError::Unbounded => OptimizerError::Unbounded,
        other => OptimizerError::Solver(other.to_string()),
    }
}

/// Reject non-finite or clearly negative solver output and snap round-off to zero.
fn snap_solution(grams: &[f64], target_weight: f64) -> Result<Vec<f64>> {
    let snap = ZERO_SNAP * target_weight.max(1.0);
    let tolerance = FEASIBILITY_TOLERANCE * target_weight.max(1.0);

    grams
        .iter()
        .map(|&g| {
            if !g.is_finite() || g < -tolerance {
                Err(OptimizerError::Solver(format!(
                    "solver returned invalid quantity {}",
                    g
                )))
            } else if g.abs() < snap {
                Ok(0.0)
            } else {
                Ok(g.max(0.0))
            }
        })
        .collect()
}

/// Verify the weight equality and every nutrient bound on the finished recipe.
fn check_recipe(problem: &Problem, recipe: &Recipe) -> Result<()> {
    let tolerance = FEASIBILITY_TOLERANCE * problem.target_weight.max(1.0);

    let weight = recipe.total_weight();
    if (weight - problem.target_weight).abs() > tolerance {
        return Err(OptimizerError::Solver(format!(
            "numerical instability: recipe weighs {} g instead of {} g",
            weight, problem.target_weight
        )));
    }

    for (nutrient, bound) in &problem.requirements {
        let amount = recipe.nutrient(nutrient);
        if !bound.contains(amount, tolerance) {
            return Err(OptimizerError::Solver(format!(
                "numerical instability: {} at {} g violates {}",
                nutrient,
                amount,
                bound.describe()
            )));
        }
    }

    Ok(())
}
