pub mod output;
pub mod sweep;

pub use output::{write_csv, write_json};
pub use sweep::{
    parse_levels, resolve_levels, run_sweep, BoundSide, SolveStatus, SweepConfig, SweepPoint,
};
