use std::path::Path;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use meal_bar_optimizer::cli::{Cli, Command};
use meal_bar_optimizer::error::Result;
use meal_bar_optimizer::interface::{display_problem, display_recipe, display_sweep};
use meal_bar_optimizer::models::Problem;
use meal_bar_optimizer::optimizer::RecipeOptimizer;
use meal_bar_optimizer::sensitivity::{
    resolve_levels, run_sweep, write_csv, write_json, BoundSide, SweepConfig,
};
use meal_bar_optimizer::state::{
    load_or_sample, load_problem, sample_problem, save_problem, sensitivity_base_problem,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    let problem_path = cli.problem.as_deref();

    match command {
        Command::Solve { json, no_tie_break } => cmd_solve(problem_path, json, no_tie_break),
        Command::Sensitivity {
            nutrient,
            bound,
            levels,
            csv,
            out_json,
        } => cmd_sensitivity(
            problem_path,
            nutrient,
            bound,
            levels.as_deref(),
            csv.as_deref(),
            out_json.as_deref(),
        ),
        Command::Show => cmd_show(problem_path),
        Command::Sample { out } => cmd_sample(&out),
    }
}

/// Solve for the cheapest recipe and print it.
fn cmd_solve(problem_path: Option<&Path>, json: bool, no_tie_break: bool) -> Result<()> {
    let problem = load_or_sample(problem_path)?;
    let optimizer = if no_tie_break {
        RecipeOptimizer::new().without_tie_break()
    } else {
        RecipeOptimizer::new()
    };
    let recipe = optimizer.solve(&problem)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
    } else {
        display_recipe(&recipe, &problem);
    }

    Ok(())
}

/// Sweep one nutrient bound and report cost per level.
fn cmd_sensitivity(
    problem_path: Option<&Path>,
    nutrient: String,
    side: BoundSide,
    levels: Option<&str>,
    csv: Option<&Path>,
    out_json: Option<&Path>,
) -> Result<()> {
    // Without a file, sweep the looser 100 g base rather than the 120 g sample.
    let base: Problem = match problem_path {
        Some(path) => load_problem(path)?,
        None => sensitivity_base_problem(),
    };

    let levels = resolve_levels(levels)?;
    let config = SweepConfig {
        nutrient,
        side,
        levels,
    };
    let points = run_sweep(&base, &config, &RecipeOptimizer::new());

    display_sweep(&config, &points);

    if let Some(path) = csv {
        write_csv(&points, path)?;
        println!("Wrote sweep to {:?}", path);
    }

    if let Some(path) = out_json {
        write_json(&config, &points, path)?;
        println!("Wrote sweep to {:?}", path);
    }

    Ok(())
}

/// Print the input tables.
fn cmd_show(problem_path: Option<&Path>) -> Result<()> {
    let problem = load_or_sample(problem_path)?;
    display_problem(&problem);
    Ok(())
}

/// Write the built-in sample to disk as a starting point for custom problems.
fn cmd_sample(out: &Path) -> Result<()> {
    save_problem(out, &sample_problem())?;
    println!("Sample problem written to {:?}", out);
    Ok(())
}
