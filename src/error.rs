use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No feasible recipe: {}", describe_violations(.violated))]
    Infeasible { violated: Vec<String> },

    #[error("Problem is unbounded")]
    Unbounded,

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn describe_violations(violated: &[String]) -> String {
    if violated.is_empty() {
        "constraints conflict jointly".to_string()
    } else {
        format!("unreachable bounds [{}]", violated.join("; "))
    }
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
