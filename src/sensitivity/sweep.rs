use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::error::{OptimizerError, Result};
use crate::models::Problem;
use crate::optimizer::constants::DEFAULT_SENSITIVITY_LEVELS;
use crate::optimizer::RecipeOptimizer;

/// Which side of a nutrient bound a sweep moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoundSide {
    Min,
    Max,
}

/// Outcome of one solve in a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    Error(String),
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::Infeasible => write!(f, "Infeasible"),
            SolveStatus::Unbounded => write!(f, "Unbounded"),
            SolveStatus::Error(_) => write!(f, "Error"),
        }
    }
}

/// Configuration for a sensitivity sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub nutrient: String,
    pub side: BoundSide,
    pub levels: Vec<f64>,
}

/// Cost and status at one bound level.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub level: f64,
    pub status: SolveStatus,
    /// Only present when the solve was optimal.
    pub cost: Option<f64>,
}

/// Re-solve `base` once per level, with the configured bound side set to that level.
///
/// The other side of the swept bound and all other requirements stay as in `base`.
pub fn run_sweep(
    base: &Problem,
    config: &SweepConfig,
    optimizer: &RecipeOptimizer,
) -> Vec<SweepPoint> {
    config
        .levels
        .iter()
        .map(|&level| {
            let mut problem = base.clone();
            let bound = problem
                .requirements
                .entry(config.nutrient.clone())
                .or_default();
            match config.side {
                BoundSide::Min => bound.min = Some(level),
                BoundSide::Max => bound.max = Some(level),
            }

            let point = match optimizer.solve(&problem) {
                Ok(recipe) => SweepPoint {
                    level,
                    status: SolveStatus::Optimal,
                    cost: Some(recipe.total_cost()),
                },
                Err(e) => SweepPoint {
                    level,
                    status: status_of(&e),
                    cost: None,
                },
            };
            debug!(level, status = %point.status, "sweep point solved");
            point
        })
        .collect()
}

fn status_of(err: &OptimizerError) -> SolveStatus {
    match err {
        OptimizerError::Infeasible { .. } => SolveStatus::Infeasible,
        OptimizerError::Unbounded => SolveStatus::Unbounded,
        other => SolveStatus::Error(other.to_string()),
    }
}

/// Parse comma-separated levels, skipping anything that is not a number.
pub fn parse_levels(s: &str) -> Vec<f64> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

/// Levels from a comma-separated list, or the default protein sweep when absent.
pub fn resolve_levels(input: Option<&str>) -> Result<Vec<f64>> {
    let levels = match input {
        Some(s) => parse_levels(s),
        None => DEFAULT_SENSITIVITY_LEVELS.to_vec(),
    };

    if levels.is_empty() {
        return Err(OptimizerError::InvalidInput(
            "no valid sweep levels provided".to_string(),
        ));
    }
    Ok(levels)
}
