//! Tracker behavior against a scripted in-memory backend: local
//! preconditions, state application, and the self-healing clock-in
//! conflict path.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};

use emstrack::api::backend::AttendanceBackend;
use emstrack::api::payload::LogsResponse;
use emstrack::core::tracker::Tracker;
use emstrack::errors::{AppError, AppResult};
use emstrack::models::break_session::BreakSession;
use emstrack::models::location::WorkLocation;
use emstrack::models::session::AttendanceSession;
use emstrack::models::status::AttendanceStatus;
use emstrack::models::summary::PeriodSummary;
use emstrack::utils::date::DateRange;

fn session(id: &str, clock_out: Option<(u32, u32)>, effective: f64) -> AttendanceSession {
    AttendanceSession {
        id: id.into(),
        clock_in: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
        clock_out: clock_out.map(|(h, m)| Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap()),
        work_location: WorkLocation::Office,
        effective_hours: effective,
        overtime_hours: 0.0,
        status: AttendanceStatus::Present,
        is_late_arrival: false,
        is_early_departure: false,
        date: Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap(),
    }
}

fn break_session(id: &str) -> BreakSession {
    BreakSession {
        id: id.into(),
        break_in: Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap(),
        break_out: None,
    }
}

fn march_2() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

/// Scripted backend: each command consumes its queued response and records
/// the call. An unscripted command answers with an error, which doubles as
/// a "this should never have been called" tripwire.
#[derive(Default)]
struct FakeBackend {
    calls: Arc<Mutex<Vec<&'static str>>>,
    clock_in: Mutex<Option<AppResult<AttendanceSession>>>,
    clock_out: Mutex<Option<AppResult<AttendanceSession>>>,
    break_in: Mutex<Option<AppResult<BreakSession>>>,
    break_out: Mutex<Option<AppResult<AttendanceSession>>>,
    logs: Mutex<Option<LogsResponse>>,
}

impl FakeBackend {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }

    fn unscripted(name: &str) -> AppError {
        AppError::Other(format!("unscripted backend call: {name}"))
    }
}

#[async_trait]
impl AttendanceBackend for &FakeBackend {
    async fn clock_in(&self, _location: WorkLocation) -> AppResult<AttendanceSession> {
        self.record("clock_in");
        self.clock_in
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(FakeBackend::unscripted("clock_in")))
    }

    async fn clock_out(&self) -> AppResult<AttendanceSession> {
        self.record("clock_out");
        self.clock_out
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(FakeBackend::unscripted("clock_out")))
    }

    async fn break_in(&self) -> AppResult<BreakSession> {
        self.record("break_in");
        self.break_in
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(FakeBackend::unscripted("break_in")))
    }

    async fn break_out(&self) -> AppResult<AttendanceSession> {
        self.record("break_out");
        self.break_out
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(FakeBackend::unscripted("break_out")))
    }

    async fn fetch_logs(&self, _range: Option<DateRange>) -> AppResult<LogsResponse> {
        self.record("fetch_logs");
        Ok(self.logs.lock().unwrap().take().unwrap_or(LogsResponse {
            sessions: Vec::new(),
            summary: None,
        }))
    }
}

#[tokio::test]
async fn clock_in_appends_the_returned_session() {
    let backend = FakeBackend::default();
    *backend.clock_in.lock().unwrap() = Some(Ok(session("s1", None, 0.0)));

    let mut tracker = Tracker::new(&backend);
    let created = tracker.clock_in(WorkLocation::Office).await.unwrap();

    assert_eq!(created.id, "s1");
    assert!(tracker.state.open_session().is_some());
    assert_eq!(backend.calls(), vec!["clock_in"]);
}

#[tokio::test]
async fn clock_in_with_open_session_never_reaches_the_backend() {
    let backend = FakeBackend::default();
    *backend.logs.lock().unwrap() = Some(LogsResponse {
        sessions: vec![session("s1", None, 0.0)],
        summary: None,
    });

    let mut tracker = Tracker::new(&backend);
    tracker.fetch_logs(None).await.unwrap();

    let err = tracker.clock_in(WorkLocation::Office).await.unwrap_err();
    assert!(matches!(err, AppError::OpenSession(_)));
    // Only the fetch hit the backend; the clock-in was refused locally.
    assert_eq!(backend.calls(), vec!["fetch_logs"]);
}

#[tokio::test]
async fn clock_in_conflict_adopts_the_canonical_session() {
    let backend = FakeBackend::default();
    *backend.clock_in.lock().unwrap() = Some(Err(AppError::Api {
        status: 409,
        message: "Already clocked in".into(),
        session: Some(Box::new(session("srv", None, 0.0))),
    }));

    let mut tracker = Tracker::new(&backend);
    let err = tracker.clock_in(WorkLocation::Office).await.unwrap_err();

    // The backend message is surfaced verbatim...
    assert_eq!(err.to_string(), "Already clocked in");
    // ...and local state resynced to the server's open session.
    assert_eq!(tracker.state.sessions.len(), 1);
    assert_eq!(tracker.state.open_session().unwrap().id, "srv");
}

#[tokio::test]
async fn clock_out_closes_the_open_session_and_updates_totals() {
    let backend = FakeBackend::default();
    *backend.logs.lock().unwrap() = Some(LogsResponse {
        sessions: vec![session("s1", None, 0.0)],
        summary: None,
    });
    *backend.clock_out.lock().unwrap() = Some(Ok(session("s1", Some((17, 30)), 8.5)));

    let mut tracker = Tracker::new(&backend);
    tracker.fetch_logs(None).await.unwrap();
    let closed = tracker.clock_out().await.unwrap();

    assert_eq!(closed.effective_hours, 8.5);
    assert!(tracker.state.open_session().is_none());
    assert_eq!(tracker.state.stats_for(march_2()).total_effective_hours, 8.5);
}

#[tokio::test]
async fn clock_out_without_open_session_is_local() {
    let backend = FakeBackend::default();
    let mut tracker = Tracker::new(&backend);

    let err = tracker.clock_out().await.unwrap_err();
    assert!(matches!(err, AppError::NoOpenSession));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn clock_out_is_blocked_while_on_break() {
    let backend = FakeBackend::default();
    *backend.logs.lock().unwrap() = Some(LogsResponse {
        sessions: vec![session("s1", None, 0.0)],
        summary: None,
    });
    *backend.break_in.lock().unwrap() = Some(Ok(break_session("b1")));

    let mut tracker = Tracker::new(&backend);
    tracker.fetch_logs(None).await.unwrap();
    tracker.break_in().await.unwrap();

    let err = tracker.clock_out().await.unwrap_err();
    assert!(matches!(err, AppError::BreakActive));
    assert_eq!(backend.calls(), vec!["fetch_logs", "break_in"]);
}

#[tokio::test]
async fn break_in_requires_an_open_session() {
    let backend = FakeBackend::default();
    let mut tracker = Tracker::new(&backend);

    let err = tracker.break_in().await.unwrap_err();
    assert!(matches!(err, AppError::NoOpenSession));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn break_out_without_break_is_a_precondition_violation() {
    let backend = FakeBackend::default();
    let mut tracker = Tracker::new(&backend);

    let err = tracker.break_out().await.unwrap_err();
    assert!(matches!(err, AppError::NoActiveBreak));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn break_out_clears_the_break_and_updates_the_parent_session() {
    let backend = FakeBackend::default();
    *backend.logs.lock().unwrap() = Some(LogsResponse {
        sessions: vec![session("s1", None, 0.0)],
        summary: None,
    });
    *backend.break_in.lock().unwrap() = Some(Ok(break_session("b1")));
    *backend.break_out.lock().unwrap() = Some(Ok({
        let mut s = session("s1", None, 0.0);
        s.effective_hours = 3.0;
        s
    }));

    let mut tracker = Tracker::new(&backend);
    tracker.fetch_logs(None).await.unwrap();
    tracker.break_in().await.unwrap();
    assert!(tracker.state.is_on_break());

    tracker.break_out().await.unwrap();
    assert!(!tracker.state.is_on_break());
    assert_eq!(tracker.state.sessions[0].effective_hours, 3.0);
}

#[tokio::test]
async fn at_most_one_open_session_across_a_command_sequence() {
    let backend = FakeBackend::default();
    let mut tracker = Tracker::new(&backend);

    *backend.clock_in.lock().unwrap() = Some(Ok(session("s1", None, 0.0)));
    tracker.clock_in(WorkLocation::Office).await.unwrap();
    assert_eq!(open_count(&tracker), 1);

    *backend.clock_out.lock().unwrap() = Some(Ok(session("s1", Some((12, 0)), 3.0)));
    tracker.clock_out().await.unwrap();
    assert_eq!(open_count(&tracker), 0);

    *backend.clock_in.lock().unwrap() = Some(Ok({
        let mut s = session("s2", None, 0.0);
        s.clock_in = Utc.with_ymd_and_hms(2026, 3, 2, 13, 0, 0).unwrap();
        s
    }));
    tracker.clock_in(WorkLocation::WorkFromHome).await.unwrap();
    assert_eq!(open_count(&tracker), 1);
}

fn open_count(tracker: &Tracker<&FakeBackend>) -> usize {
    tracker.state.sessions.iter().filter(|s| s.is_open()).count()
}

#[tokio::test]
async fn fetch_logs_replaces_state_verbatim() {
    let backend = FakeBackend::default();
    *backend.logs.lock().unwrap() = Some(LogsResponse {
        sessions: vec![session("a", Some((17, 0)), 8.0), session("b", None, 0.0)],
        summary: Some(PeriodSummary {
            total_days: 2,
            total_effective_hours: 8.0,
            ..PeriodSummary::default()
        }),
    });

    let mut tracker = Tracker::new(&backend);
    tracker.fetch_logs(None).await.unwrap();

    assert_eq!(tracker.state.sessions.len(), 2);
    assert_eq!(tracker.state.summary.as_ref().unwrap().total_days, 2);
    assert_eq!(tracker.state.open_session().unwrap().id, "b");
}
