//! Daily aggregation over backend-returned sessions.
//!
//! Pure functions of the session list: no hidden counters, recomputed on
//! every call. Effective and overtime hours are summed from the values the
//! backend computed; only the gross total is wall-clock arithmetic on the
//! session timestamps.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::location::WorkLocation;
use crate::models::session::AttendanceSession;
use crate::models::summary::DailyStat;

/// Aggregate one day's sessions.
pub fn daily_stat<'a>(sessions: impl IntoIterator<Item = &'a AttendanceSession>) -> DailyStat {
    let mut stat = DailyStat::default();
    for s in sessions {
        stat.sessions += 1;
        stat.total_effective_hours += s.effective_hours;
        stat.total_gross_hours += s.gross_hours();
        stat.total_overtime += s.overtime_hours;
        if s.is_late_arrival {
            stat.late_arrivals += 1;
        }
        if s.is_early_departure {
            stat.early_departures += 1;
        }
    }
    stat
}

/// Group sessions by calendar date and aggregate each group.
pub fn daily_stats(sessions: &[AttendanceSession]) -> BTreeMap<NaiveDate, DailyStat> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&AttendanceSession>> = BTreeMap::new();
    for s in sessions {
        grouped.entry(s.day()).or_default().push(s);
    }
    grouped
        .into_iter()
        .map(|(day, group)| (day, daily_stat(group)))
        .collect()
}

/// Aggregate only the sessions belonging to `day`.
pub fn stats_for_day(sessions: &[AttendanceSession], day: NaiveDate) -> DailyStat {
    daily_stat(sessions.iter().filter(|s| s.day() == day))
}

/// Office vs work-from-home session counts over a period.
pub fn location_counts(sessions: &[AttendanceSession]) -> (usize, usize) {
    let wfh = sessions
        .iter()
        .filter(|s| s.work_location == WorkLocation::WorkFromHome)
        .count();
    (sessions.len() - wfh, wfh)
}
