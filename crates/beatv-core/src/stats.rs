//! Derived velocity metrics.
//!
//! [`compute_stats`] is pure arithmetic over the closed-points total and the
//! interactively collected answers. Degenerate input (zero devs, zero days,
//! non-numeric answers parsed to NaN) is passed through as IEEE-754
//! `inf`/`NaN` rather than rejected; the table makes the bad input visible.

use serde::Serialize;

/// Interactively collected inputs for one beat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Answers {
    /// Developer head count for the beat.
    pub devs: f64,
    /// Points the team committed to.
    pub points: f64,
    /// Beat length in days.
    pub days: f64,
}

/// The derived velocity record printed at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityReport {
    /// Points the team committed to.
    pub points_committed: f64,
    /// Beat length in days.
    pub beat_length: f64,
    /// Developer head count.
    pub number_of_devs: f64,
    /// Points actually closed (summed from card labels).
    pub points_closed: f64,
    /// Closed points per developer.
    pub points_per_dev: f64,
    /// Closed points per developer per day.
    pub points_per_day: f64,
    /// Committed minus closed; negative when the team over-delivered.
    pub missed_points: f64,
}

/// Derives the velocity report from the closed-points total and the answers.
pub fn compute_stats(total_points: f64, answers: &Answers) -> VelocityReport {
    let points_per_dev = total_points / answers.devs;
    let points_per_day = points_per_dev / answers.days;
    let missed_points = answers.points - total_points;

    VelocityReport {
        points_committed: answers.points,
        beat_length: answers.days,
        number_of_devs: answers.devs,
        points_closed: total_points,
        points_per_dev,
        points_per_day,
        missed_points,
    }
}
