use std::fmt::{self, Write};

use crate::models::{Problem, Recipe};
use crate::optimizer::constants::REPORT_MIN_GRAMS;
use crate::sensitivity::{SolveStatus, SweepConfig, SweepPoint};

/// Display an optimized recipe: the ingredient table, totals and nutrient profile.
pub fn display_recipe(recipe: &Recipe, problem: &Problem) {
    print!("{}", recipe_report(recipe, problem));
}

/// Build the text printed by [`display_recipe`].
pub fn recipe_report(recipe: &Recipe, problem: &Problem) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = write_recipe(&mut out, recipe, problem);
    out
}

fn write_recipe(out: &mut String, recipe: &Recipe, problem: &Problem) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "=== Meal Bar Recipe ===")?;
    writeln!(out)?;
    writeln!(out, "Status: {}", SolveStatus::Optimal)?;
    writeln!(
        out,
        "Cost per bar ({} g): ${:.2}",
        recipe.target_weight(),
        recipe.total_cost()
    )?;
    writeln!(out)?;

    // Find max ingredient name length for alignment
    let width = recipe
        .lines()
        .iter()
        .map(|l| l.ingredient.len())
        .max()
        .unwrap_or(10)
        .max("Ingredient".len());

    writeln!(
        out,
        "{:<width$}  {:>12}  {:>10}",
        "Ingredient",
        "Quantity (g)",
        "Cost ($)",
        width = width
    )?;
    writeln!(out, "{}", "-".repeat(width + 26))?;

    for line in recipe.used_lines(REPORT_MIN_GRAMS) {
        writeln!(
            out,
            "{:<width$}  {:>12.2}  {:>10.4}",
            line.ingredient,
            line.grams,
            line.cost,
            width = width
        )?;
    }

    writeln!(out, "{}", "-".repeat(width + 26))?;
    writeln!(
        out,
        "{:<width$}  {:>12.2}  {:>10.4}",
        "Total",
        recipe.total_weight(),
        recipe.total_cost(),
        width = width
    )?;

    writeln!(out)?;
    writeln!(out, "--- Nutritional Profile ---")?;
    for (nutrient, amount) in recipe.nutrients() {
        match problem.requirements.get(nutrient) {
            Some(bound) => writeln!(
                out,
                "{}: {:.2} g  (required {})",
                nutrient,
                amount,
                bound.describe()
            )?,
            None => writeln!(out, "{}: {:.2} g", nutrient, amount)?,
        }
    }
    writeln!(out)
}

/// Display the input tables: nutrient content per gram and cost per gram.
pub fn display_problem(problem: &Problem) {
    let nutrients = problem.nutrient_names();
    let width = problem
        .ingredients
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    println!();
    println!("=== Nutrition Facts (g per g) ===");
    println!();

    let header: Vec<String> = nutrients.iter().map(|n| format!("{:>8}", n)).collect();
    println!("{:<width$} {}", "", header.join(" "), width = width);
    for ingredient in &problem.ingredients {
        let row: Vec<String> = nutrients
            .iter()
            .map(|n| format!("{:>8.3}", ingredient.content(n)))
            .collect();
        println!("{:<width$} {}", ingredient.name, row.join(" "), width = width);
    }

    println!();
    println!("=== Ingredient Costs ($ per g) ===");
    println!();
    for ingredient in &problem.ingredients {
        println!("  {}: ${:.3}", ingredient.name, ingredient.cost_per_gram);
    }

    println!();
    println!("Target weight: {} g", problem.target_weight);
    if problem.requirements.is_empty() {
        println!("Requirements: (none)");
    } else {
        println!("Requirements:");
        for (nutrient, bound) in &problem.requirements {
            println!("  {} {}", nutrient, bound.describe());
        }
    }
    println!();
}

/// Display a sensitivity sweep as a table.
pub fn display_sweep(config: &SweepConfig, points: &[SweepPoint]) {
    println!();
    println!(
        "=== Sensitivity Analysis: {} {:?} ===",
        config.nutrient, config.side
    );
    println!();
    println!("{:<12} {:<12} {:<12}", "Level (g)", "Cost ($)", "Status");
    println!("{}", "-".repeat(36));

    for point in points {
        let cost = point
            .cost
            .map(|c| format!("{:.2}", c))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:<12} {:<12}",
            point.level,
            cost,
            point.status.to_string()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::RecipeOptimizer;
    use crate::state::sample_problem;

    #[test]
    fn test_recipe_report_layout() {
        let problem = sample_problem();
        let recipe = RecipeOptimizer::new().solve(&problem).unwrap();
        let report = recipe_report(&recipe, &problem);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[1], "=== Meal Bar Recipe ===");
        assert_eq!(lines[3], "Status: Optimal");
        assert_eq!(lines[4], "Cost per bar (120 g): $3.69");

        // Unused ingredients are left out of the table.
        assert!(report.contains("Peanuts"));
        assert!(!report.contains("Chicken"));
        assert!(report.contains("Protein: 20.00 g  (required >= 20 g)"));
    }
}
