use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sensitivity::sweep::{SweepConfig, SweepPoint};

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write all sweep points to a CSV file.
pub fn write_csv(points: &[SweepPoint], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["level", "status", "cost"])?;

    for point in points {
        wtr.write_record([
            point.level.to_string(),
            point.status.to_string(),
            point.cost.map(|c| format!("{:.4}", c)).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the sweep configuration and results to a JSON file.
pub fn write_json(config: &SweepConfig, points: &[SweepPoint], path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "nutrient": config.nutrient,
        "bound": config.side,
        "points": points.iter().map(|p| {
            serde_json::json!({
                "level": p.level,
                "status": p.status.to_string(),
                "cost": p.cost.map(|c| truncate(c, 4)),
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}
