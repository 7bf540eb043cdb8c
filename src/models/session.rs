use super::{location::WorkLocation, status::AttendanceStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One clock-in-to-clock-out work interval, as returned by the backend.
/// The backend is the source of truth: effective/overtime hours and the
/// late/early flags are computed server-side and only displayed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSession {
    #[serde(rename = "_id")]
    pub id: String,
    pub clock_in: DateTime<Utc>,
    /// None while the session is still open.
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
    pub work_location: WorkLocation,
    #[serde(default)]
    pub effective_hours: f64,
    #[serde(default)]
    pub overtime_hours: f64,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub is_late_arrival: bool,
    #[serde(default)]
    pub is_early_departure: bool,
    /// Calendar day the session belongs to.
    pub date: DateTime<Utc>,
}

impl AttendanceSession {
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Wall-clock duration in hours, clock-in to clock-out. Zero while the
    /// session is open. Display-only arithmetic on backend timestamps.
    pub fn gross_hours(&self) -> f64 {
        match self.clock_out {
            Some(out) => (out - self.clock_in).num_seconds() as f64 / 3600.0,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(clock_out: Option<&str>) -> AttendanceSession {
        AttendanceSession {
            id: "s1".into(),
            clock_in: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
            clock_out: clock_out.map(|s| s.parse().unwrap()),
            work_location: WorkLocation::Office,
            effective_hours: 0.0,
            overtime_hours: 0.0,
            status: AttendanceStatus::Present,
            is_late_arrival: false,
            is_early_departure: false,
            date: Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn open_session_has_no_gross_hours() {
        let s = session(None);
        assert!(s.is_open());
        assert_eq!(s.gross_hours(), 0.0);
    }

    #[test]
    fn gross_hours_is_wall_clock() {
        let s = session(Some("2026-03-02T17:30:00Z"));
        assert!(!s.is_open());
        assert!((s.gross_hours() - 8.5).abs() < 1e-9);
    }

    #[test]
    fn deserializes_backend_shape() {
        let raw = r#"{
            "_id": "68a1",
            "clockIn": "2026-03-02T09:00:00.000Z",
            "clockOut": null,
            "workLocation": "work_from_home",
            "effectiveHours": 0,
            "overtimeHours": 0,
            "status": "present",
            "isLateArrival": true,
            "isEarlyDeparture": false,
            "date": "2026-03-02T00:00:00.000Z"
        }"#;
        let s: AttendanceSession = serde_json::from_str(raw).unwrap();
        assert_eq!(s.id, "68a1");
        assert!(s.is_open());
        assert_eq!(s.work_location, WorkLocation::WorkFromHome);
        assert!(s.is_late_arrival);
        assert_eq!(s.day(), chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }
}
