use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Allowed range, in grams, for one nutrient in the finished bar.
///
/// Either side may be absent (unbounded).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientBound {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Nutrient name to bound. Ordered so constraints are always built in the same order.
pub type NutrientRequirements = BTreeMap<String, NutrientBound>;

impl NutrientBound {
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Check `value` against both sides, allowing `tolerance` slack.
    pub fn contains(&self, value: f64, tolerance: f64) -> bool {
        self.min.is_none_or(|min| value >= min - tolerance)
            && self.max.is_none_or(|max| value <= max + tolerance)
    }

    /// Short human-readable form, e.g. `>= 20 g` or `6 g ..= 12 g`.
    pub fn describe(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{} g ..= {} g", min, max),
            (Some(min), None) => format!(">= {} g", min),
            (None, Some(max)) => format!("<= {} g", max),
            (None, None) => "unbounded".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_with_tolerance() {
        let bound = NutrientBound::between(6.0, 12.0);
        assert!(bound.contains(6.0, 0.0));
        assert!(bound.contains(5.9999999, 1e-6));
        assert!(!bound.contains(5.9, 1e-6));
        assert!(!bound.contains(12.1, 1e-6));
    }

    #[test]
    fn test_one_sided_bounds() {
        assert!(NutrientBound::at_least(20.0).contains(1e9, 0.0));
        assert!(NutrientBound::at_most(3.0).contains(0.0, 0.0));
        assert!(NutrientBound::default().contains(-1.0, 0.0));
    }

    #[test]
    fn test_describe() {
        assert_eq!(NutrientBound::at_least(20.0).describe(), ">= 20 g");
        assert_eq!(NutrientBound::at_most(3.5).describe(), "<= 3.5 g");
    }

    #[test]
    fn test_serde_skips_missing_sides() {
        let json = serde_json::to_string(&NutrientBound::at_most(30.0)).unwrap();
        assert_eq!(json, r#"{"max":30.0}"#);

        let parsed: NutrientBound = serde_json::from_str(r#"{"min": 6}"#).unwrap();
        assert_eq!(parsed, NutrientBound::at_least(6.0));
    }
}
