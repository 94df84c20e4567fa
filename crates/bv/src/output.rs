//! Output formatting helpers for the `bv` CLI.

use std::io::{self, Write};

use beatv_core::stats::VelocityReport;
use serde::Serialize;

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the velocity report as a two-column metric table.
pub fn print_report(report: &VelocityReport) {
    let headers = &["METRIC", "VALUE"];
    let rows = report_rows(report);
    output_table(headers, &rows);
}

/// Rows for the report table, in presentation order.
fn report_rows(report: &VelocityReport) -> Vec<Vec<String>> {
    vec![
        vec!["Points committed".into(), format_metric(report.points_committed)],
        vec!["Beat length (days)".into(), format_metric(report.beat_length)],
        vec!["Number of devs".into(), format_metric(report.number_of_devs)],
        vec!["Points closed".into(), format_metric(report.points_closed)],
        vec!["Points per dev".into(), format_metric(report.points_per_dev)],
        vec!["Points per day".into(), format_metric(report.points_per_day)],
        vec!["Missed points".into(), format_metric(report.missed_points)],
    ]
}

/// Format a metric value: whole numbers without a decimal point, everything
/// else (fractions, NaN, infinities) with the default float rendering.
fn format_metric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Print a simple table with headers and rows.
///
/// Column widths are computed from the data for alignment.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    // Compute column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    // Print header
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{:<width$}", header, width = widths[i]);
    }
    let _ = writeln!(handle);

    // Print separator
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{}", "-".repeat(*width));
    }
    let _ = writeln!(handle);

    // Print rows
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                let _ = write!(handle, "  ");
            }
            if i < widths.len() {
                let _ = write!(handle, "{:<width$}", cell, width = widths[i]);
            } else {
                let _ = write!(handle, "{}", cell);
            }
        }
        let _ = writeln!(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beatv_core::stats::{compute_stats, Answers};
    use pretty_assertions::assert_eq;

    #[test]
    fn whole_numbers_print_without_decimals() {
        assert_eq!(format_metric(5.0), "5");
        assert_eq!(format_metric(0.0), "0");
        assert_eq!(format_metric(-5.0), "-5");
    }

    #[test]
    fn fractions_and_degenerates_use_float_rendering() {
        assert_eq!(format_metric(0.5), "0.5");
        assert_eq!(format_metric(10.5), "10.5");
        assert_eq!(format_metric(f64::INFINITY), "inf");
        assert_eq!(format_metric(f64::NAN), "NaN");
    }

    #[test]
    fn report_rows_cover_every_metric() {
        let report = compute_stats(
            10.0,
            &Answers {
                devs: 2.0,
                points: 15.0,
                days: 5.0,
            },
        );
        let rows = report_rows(&report);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[3], vec!["Points closed".to_string(), "10".to_string()]);
        assert_eq!(rows[6], vec!["Missed points".to_string(), "5".to_string()]);
    }

    #[test]
    fn table_output_smoke() {
        // Just ensure it doesn't panic
        let headers = &["METRIC", "VALUE"];
        let rows = vec![
            vec!["Points closed".into(), "10".into()],
            vec!["Points per day".into(), "1".into()],
        ];
        output_table(headers, &rows);
    }
}
