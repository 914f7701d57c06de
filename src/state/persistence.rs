use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::Problem;
use crate::state::sample::sample_problem;

/// Load a problem from a JSON file.
pub fn load_problem<P: AsRef<Path>>(path: P) -> Result<Problem> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let problem: Problem = serde_json::from_str(&content)?;
    debug!(
        path = %path.display(),
        ingredients = problem.ingredients.len(),
        "loaded problem"
    );
    Ok(problem)
}

/// Save a problem to a JSON file.
pub fn save_problem<P: AsRef<Path>>(path: P, problem: &Problem) -> Result<()> {
    let json = serde_json::to_string_pretty(problem)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load from `path` when given, otherwise fall back to the built-in sample.
pub fn load_or_sample<P: AsRef<Path>>(path: Option<P>) -> Result<Problem> {
    match path {
        Some(path) => load_problem(path),
        None => Ok(sample_problem()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"{
            "ingredients": [
                {"name": "Rice", "cost_per_gram": 0.002, "nutrients": {"Fibre": 0.1}},
                {"name": "Beef", "cost_per_gram": 0.15, "nutrients": {"Protein": 0.2}}
            ],
            "requirements": {"Protein": {"min": 10}},
            "target_weight": 100
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let problem = load_problem(file.path()).unwrap();
        assert_eq!(problem.ingredients.len(), 2);
        assert_eq!(problem.requirements["Protein"].min, Some(10.0));

        // Save and reload
        let out_file = NamedTempFile::new().unwrap();
        save_problem(out_file.path(), &problem).unwrap();

        let reloaded = load_problem(out_file.path()).unwrap();
        assert_eq!(reloaded, problem);
    }

    #[test]
    fn test_requirements_default_to_empty() {
        let json = r#"{"ingredients": [{"name": "Rice", "cost_per_gram": 0.0}], "target_weight": 5}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let problem = load_problem(file.path()).unwrap();
        assert!(problem.requirements.is_empty());
    }

    #[test]
    fn test_load_or_sample_without_path() {
        let problem = load_or_sample(None::<&Path>).unwrap();
        assert_eq!(problem, sample_problem());
    }
}
