/// Bar weight used by the sample scenario, in grams.
pub const DEFAULT_BAR_WEIGHT: f64 = 120.0;

/// Absolute slack when checking the weight equality and nutrient bounds of a solution.
pub const FEASIBILITY_TOLERANCE: f64 = 1e-6;

/// Relative slack on the optimal cost when running the tie-break stage.
pub const COST_TIE_TOLERANCE: f64 = 1e-9;

/// Solver outputs this close to zero are snapped to zero.
pub const ZERO_SNAP: f64 = 1e-9;

/// Minimum jaro-winkler score for a nutrient-name suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

// ─────────────────────────────────────────────────────────────────────────────
// Display thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Ingredients below this many grams are left out of the recipe table.
pub const REPORT_MIN_GRAMS: f64 = 0.01;

/// Protein minimums swept by the default sensitivity analysis.
pub const DEFAULT_SENSITIVITY_LEVELS: [f64; 7] = [15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0];
