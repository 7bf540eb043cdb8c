//! Read-only view models for the admin attendance screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::AttendanceStatus;

/// A row of the employee directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub active: bool,
}

/// Minimal employee reference embedded in today-status rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
}

/// One employee's state in the today-status overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStatusEntry {
    pub employee: EmployeeRef,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub is_on_break: bool,
    #[serde(default)]
    pub clock_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_late_arrival: bool,
}

/// Present/absent/on-break headcounts for the today-status overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStatusCounts {
    #[serde(default)]
    pub present: u32,
    #[serde(default)]
    pub absent: u32,
    #[serde(default)]
    pub on_break: u32,
}

/// One row of the all-employee attendance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStatsRow {
    pub employee: EmployeeRef,
    #[serde(default)]
    pub present_days: u32,
    #[serde(default)]
    pub half_days: u32,
    #[serde(default)]
    pub absent_days: u32,
    #[serde(default)]
    pub total_effective_hours: f64,
    #[serde(default)]
    pub total_overtime: f64,
    #[serde(default)]
    pub late_arrivals: u32,
    #[serde(default)]
    pub early_departures: u32,
}

/// Employee header block of the per-employee attendance detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPeriod {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub working_days: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailStatistics {
    #[serde(default)]
    pub present_days: u32,
    #[serde(default)]
    pub half_days: u32,
    #[serde(default)]
    pub absent_days: u32,
    /// Fraction in 0..=1, rendered as a percentage.
    #[serde(default)]
    pub attendance_rate: f64,
    #[serde(default)]
    pub total_overtime: f64,
}

/// One recent attendance record in the per-employee detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub clock_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub effective_hours: Option<f64>,
    #[serde(default)]
    pub overtime_hours: Option<f64>,
}
