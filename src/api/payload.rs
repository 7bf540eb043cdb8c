//! Request and response bodies for the backend endpoints.

use serde::{Deserialize, Serialize};

use crate::models::employee::{
    AttendanceRecord, DetailPeriod, DetailStatistics, EmployeeDetail, EmployeeListEntry,
    EmployeeStatsRow, TodayStatusCounts, TodayStatusEntry,
};
use crate::models::location::WorkLocation;
use crate::models::notification::Notification;
use crate::models::session::AttendanceSession;
use crate::models::summary::PeriodSummary;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockInRequest {
    pub work_location: WorkLocation,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub sessions: Vec<AttendanceSession>,
    #[serde(default)]
    pub summary: Option<PeriodSummary>,
}

#[derive(Debug, Deserialize)]
pub struct TodayStatusResponse {
    #[serde(default)]
    pub data: Vec<TodayStatusEntry>,
    #[serde(default)]
    pub counts: TodayStatusCounts,
}

#[derive(Debug, Deserialize)]
pub struct AllStatsResponse {
    #[serde(default)]
    pub stats: Vec<EmployeeStatsRow>,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeListResponse {
    #[serde(default)]
    pub employees: Vec<EmployeeListEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAttendanceResponse {
    pub employee: EmployeeDetail,
    #[serde(default)]
    pub period: DetailPeriod,
    #[serde(default)]
    pub statistics: DetailStatistics,
    #[serde(default)]
    pub recent_records: Vec<AttendanceRecord>,
}

#[derive(Debug, Serialize)]
pub struct CreateNotificationRequest {
    pub message: String,
}

pub type CreateNotificationResponse = Notification;

/// Error envelope used by the backend on rejections. A clock-in conflict
/// additionally carries the canonical open session.
#[derive(Debug, Default, Deserialize)]
pub struct ApiFailure {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub session: Option<AttendanceSession>,
}

impl ApiFailure {
    /// The user-facing message, verbatim when present.
    pub fn display_message(&self, status: u16) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| format!("Request failed with status {status}"))
    }
}
