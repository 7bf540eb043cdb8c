use crate::errors::{AppError, AppResult};
use crate::models::session::AttendanceSession;
use crate::utils::time::{format_date, format_optional_time, format_time};
use csv::Writer;
use std::path::Path;

/// Write the fetched sessions as CSV.
pub fn write_csv(path: &Path, sessions: &[AttendanceSession]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record([
        "date",
        "clock_in",
        "clock_out",
        "location",
        "effective_hours",
        "overtime_hours",
        "status",
        "late",
        "early",
    ])
    .map_err(|e| AppError::Export(e.to_string()))?;

    for s in sessions {
        wtr.write_record(&[
            format_date(&s.date),
            format_time(&s.clock_in),
            format_optional_time(s.clock_out.as_ref()),
            s.work_location.as_wire_str().to_string(),
            format!("{:.2}", s.effective_hours),
            format!("{:.2}", s.overtime_hours),
            s.status.as_str().to_string(),
            s.is_late_arrival.to_string(),
            s.is_early_departure.to_string(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::WorkLocation;
    use crate::models::status::AttendanceStatus;
    use chrono::{TimeZone, Utc};

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let sessions = vec![AttendanceSession {
            id: "s1".into(),
            clock_in: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
            clock_out: Some(Utc.with_ymd_and_hms(2026, 3, 2, 17, 30, 0).unwrap()),
            work_location: WorkLocation::Office,
            effective_hours: 8.5,
            overtime_hours: 0.5,
            status: AttendanceStatus::Present,
            is_late_arrival: false,
            is_early_departure: false,
            date: Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap(),
        }];

        write_csv(&path, &sessions).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("date,clock_in"));
        assert!(content.contains("office"));
        assert!(content.contains("8.50"));
    }
}
