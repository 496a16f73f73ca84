use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::engine::SavingsResult;
use crate::error::ExportError;
use crate::state::{Calculator, Field};

/// Inputs and projections as written by the exporters.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub old_habit_cost: &'a str,
    pub new_habit_cost: &'a str,
    pub frequency: &'a str,
    pub savings: &'a SavingsResult,
}

impl<'a> Report<'a> {
    pub fn from_calculator(calc: &'a Calculator) -> Self {
        Self {
            old_habit_cost: calc.amount(Field::OldHabitCost).as_str(),
            new_habit_cost: calc.amount(Field::NewHabitCost).as_str(),
            frequency: calc.frequency(),
            savings: calc.savings(),
        }
    }

    pub fn rows(&self) -> [(&'static str, f64); 6] {
        let s = self.savings;
        [
            ("Daily", s.daily),
            ("Weekly", s.weekly),
            ("Monthly", s.monthly),
            ("6 Months", s.six_months),
            ("Yearly", s.yearly),
            ("5 Years", s.five_years),
        ]
    }
}

pub fn write_csv<W: Write>(mut out: W, report: &Report) -> io::Result<()> {
    writeln!(out, "Old Habit Cost,{}", report.old_habit_cost)?;
    writeln!(out, "New Habit Cost,{}", report.new_habit_cost)?;
    writeln!(out, "Frequency Per Week,{}", report.frequency)?;
    writeln!(out)?;
    writeln!(out, "Horizon,Savings")?;
    for (label, value) in report.rows() {
        writeln!(out, "{},{:.2}", label, value)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: W, report: &Report) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(out, report)?;
    Ok(())
}

/// Writes the report to `path`; a `.json` extension selects JSON, anything
/// else CSV.
pub fn export_to_file(path: &Path, report: &Report) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        write_json(&mut file, report)?;
        writeln!(file).map_err(io_err)?;
    } else {
        write_csv(&mut file, report).map_err(io_err)?;
    }
    info!(path = %path.display(), json = is_json, "exported savings report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn computed() -> Calculator {
        let mut calc = Calculator::new();
        calc.set_amount(Field::OldHabitCost, "50000");
        calc.set_amount(Field::NewHabitCost, "20000");
        calc.set_frequency("7");
        calc.calculate().unwrap();
        calc
    }

    #[test]
    fn csv_lists_inputs_then_horizons() {
        let calc = computed();
        let mut buf = Vec::new();
        write_csv(&mut buf, &Report::from_calculator(&calc)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Old Habit Cost,50000");
        assert_eq!(lines[2], "Frequency Per Week,7");
        assert_eq!(lines[4], "Horizon,Savings");
        assert_eq!(lines[5], "Daily,30000.00");
        assert_eq!(lines[6], "Weekly,210000.00");
        assert_eq!(lines[7], "Monthly,909300.00");
        assert_eq!(lines[10], "5 Years,54600000.00");
    }

    #[test]
    fn json_carries_all_six_fields() {
        let calc = computed();
        let mut buf = Vec::new();
        write_json(&mut buf, &Report::from_calculator(&calc)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["old_habit_cost"], "50000");
        assert_eq!(value["frequency"], "7");
        assert_eq!(value["savings"]["weekly"], 210_000.0);
        assert_eq!(value["savings"]["five_years"], 54_600_000.0);
        assert!(value["savings"]["six_months"].is_f64());
    }

    #[test]
    fn file_format_follows_extension() {
        let calc = computed();
        let report = Report::from_calculator(&calc);
        let dir = std::env::temp_dir();
        let csv_path = dir.join(format!("habit-savings-{}.csv", std::process::id()));
        let json_path = dir.join(format!("habit-savings-{}.json", std::process::id()));

        export_to_file(&csv_path, &report).unwrap();
        export_to_file(&json_path, &report).unwrap();

        assert!(fs::read_to_string(&csv_path).unwrap().starts_with("Old Habit Cost,"));
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["savings"]["yearly"], 10_920_000.0);

        fs::remove_file(csv_path).ok();
        fs::remove_file(json_path).ok();
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let calc = computed();
        let path = std::env::temp_dir()
            .join("habit-savings-no-such-dir")
            .join("out.csv");
        let err = export_to_file(&path, &Report::from_calculator(&calc)).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
