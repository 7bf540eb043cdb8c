//! Attendance session tracker: the client-side clock state for the current
//! user and the four state-changing commands.
//!
//! State changes only after backend confirmation; there are no optimistic
//! updates and no automatic retries. Preconditions that are checkable
//! locally fail before any network traffic.

use chrono::NaiveDate;

use crate::api::backend::AttendanceBackend;
use crate::errors::{AppError, AppResult};
use crate::models::break_session::BreakSession;
use crate::models::location::WorkLocation;
use crate::models::session::AttendanceSession;
use crate::models::summary::{DailyStat, PeriodSummary};
use crate::utils::date::DateRange;
use crate::utils::time::format_time;

use super::aggregate;

/// Local mirror of the authoritative clock state.
#[derive(Debug, Default)]
pub struct AttendanceState {
    pub sessions: Vec<AttendanceSession>,
    pub summary: Option<PeriodSummary>,
    pub active_break: Option<BreakSession>,
}

impl AttendanceState {
    /// The currently open session, if any: first session with no clock-out.
    pub fn open_session(&self) -> Option<&AttendanceSession> {
        self.sessions.iter().find(|s| s.is_open())
    }

    pub fn is_on_break(&self) -> bool {
        self.active_break.is_some()
    }

    /// Aggregate of the sessions belonging to `day`.
    pub fn stats_for(&self, day: NaiveDate) -> DailyStat {
        aggregate::stats_for_day(&self.sessions, day)
    }

    /// Replace the record matching the returned session's id. Unknown ids
    /// are ignored: the next fetch will reconcile.
    fn replace_session(&mut self, updated: AttendanceSession) {
        if let Some(slot) = self.sessions.iter_mut().find(|s| s.id == updated.id) {
            *slot = updated;
        }
    }

    /// Adopt the backend's canonical open session after a clock-in
    /// conflict, discarding whatever drifted locally.
    fn adopt_open_session(&mut self, session: AttendanceSession) {
        self.sessions = vec![session];
    }
}

/// The tracker pairs local state with a backend; every command is one
/// round trip whose response is applied to the state.
pub struct Tracker<B> {
    backend: B,
    pub state: AttendanceState,
}

impl<B: AttendanceBackend> Tracker<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: AttendanceState::default(),
        }
    }

    /// Direct access to the transport, for callers that must let the
    /// backend arbitrate state the client cannot see (a one-shot process
    /// has no memory of an active break).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Clock in at the given location.
    ///
    /// Refused locally, with no backend call, while an open session exists.
    /// On a backend conflict that carries the canonical open session, local
    /// state adopts it before the error is surfaced.
    pub async fn clock_in(&mut self, location: WorkLocation) -> AppResult<AttendanceSession> {
        if let Some(open) = self.state.open_session() {
            return Err(AppError::OpenSession(format_time(&open.clock_in)));
        }

        match self.backend.clock_in(location).await {
            Ok(session) => {
                self.state.sessions.push(session.clone());
                Ok(session)
            }
            Err(AppError::Api {
                status,
                message,
                session: Some(canonical),
            }) => {
                self.state.adopt_open_session(*canonical);
                Err(AppError::Api {
                    status,
                    message,
                    session: None,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Clock out of the open session. Blocked while a break is active.
    pub async fn clock_out(&mut self) -> AppResult<AttendanceSession> {
        if self.state.open_session().is_none() {
            return Err(AppError::NoOpenSession);
        }
        if self.state.is_on_break() {
            return Err(AppError::BreakActive);
        }

        let closed = self.backend.clock_out().await?;
        self.state.replace_session(closed.clone());
        Ok(closed)
    }

    /// Start a break within the open session.
    pub async fn break_in(&mut self) -> AppResult<BreakSession> {
        if self.state.open_session().is_none() {
            return Err(AppError::NoOpenSession);
        }
        if self.state.is_on_break() {
            return Err(AppError::BreakActive);
        }

        let brk = self.backend.break_in().await?;
        self.state.active_break = Some(brk.clone());
        Ok(brk)
    }

    /// End the active break. The backend returns the updated parent
    /// session, which replaces the local record.
    pub async fn break_out(&mut self) -> AppResult<()> {
        if !self.state.is_on_break() {
            return Err(AppError::NoActiveBreak);
        }

        let updated = self.backend.break_out().await?;
        self.state.active_break = None;
        self.state.replace_session(updated);
        Ok(())
    }

    /// Fetch sessions and the period summary, replacing local state
    /// verbatim. Read-only and idempotent.
    pub async fn fetch_logs(&mut self, range: Option<DateRange>) -> AppResult<()> {
        let logs = self.backend.fetch_logs(range).await?;
        self.state.sessions = logs.sessions;
        self.state.summary = logs.summary;
        Ok(())
    }
}
