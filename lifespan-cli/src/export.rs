//! Age-curve export — CSV file or plain table.

use std::path::Path;

use anyhow::{Context, Result};
use lifespan_core::CurvePoint;

/// Render curve points as CSV.
///
/// Columns: age, life_expectancy, remaining_years
pub fn curve_csv(points: &[CurvePoint]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["age", "life_expectancy", "remaining_years"])?;
    for p in points {
        wtr.write_record([
            p.age.to_string(),
            format!("{:.1}", p.life_expectancy),
            format!("{:.1}", p.remaining_years),
        ])?;
    }
    let bytes = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

pub fn write_curve_csv(points: &[CurvePoint], path: &Path) -> Result<()> {
    let csv = curve_csv(points)?;
    std::fs::write(path, csv).with_context(|| format!("failed to write {}", path.display()))
}

/// Fixed-width table for terminal output.
pub fn curve_table(points: &[CurvePoint]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>5} {:>16} {:>10}\n", "Age", "Life expectancy", "Remaining"));
    out.push_str(&format!("{}\n", "-".repeat(33)));
    for p in points {
        out.push_str(&format!(
            "{:>5} {:>16.1} {:>10.1}\n",
            p.age, p.life_expectancy, p.remaining_years
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<CurvePoint> {
        vec![
            CurvePoint {
                age: 40,
                life_expectancy: 85.0,
                remaining_years: 45.0,
            },
            CurvePoint {
                age: 41,
                life_expectancy: 84.5,
                remaining_years: 43.5,
            },
        ]
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let csv = curve_csv(&points()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "age,life_expectancy,remaining_years");
        assert_eq!(lines[1], "40,85.0,45.0");
        assert_eq!(lines[2], "41,84.5,43.5");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.csv");
        write_curve_csv(&points(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("age,"));
    }

    #[test]
    fn table_lists_every_age() {
        let table = curve_table(&points());
        assert!(table.contains("   40"));
        assert!(table.contains("84.5"));
        assert_eq!(table.lines().count(), 4);
    }
}
