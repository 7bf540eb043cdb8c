use async_trait::async_trait;

use crate::api::payload::LogsResponse;
use crate::errors::AppResult;
use crate::models::break_session::BreakSession;
use crate::models::location::WorkLocation;
use crate::models::session::AttendanceSession;
use crate::utils::date::DateRange;

/// The attendance command surface the session tracker depends on.
/// `ApiClient` is the production implementation; tests drive the tracker
/// with an in-memory implementation instead.
#[async_trait]
pub trait AttendanceBackend {
    async fn clock_in(&self, location: WorkLocation) -> AppResult<AttendanceSession>;

    async fn clock_out(&self) -> AppResult<AttendanceSession>;

    async fn break_in(&self) -> AppResult<BreakSession>;

    async fn break_out(&self) -> AppResult<AttendanceSession>;

    async fn fetch_logs(&self, range: Option<DateRange>) -> AppResult<LogsResponse>;
}
