use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::backend::AttendanceBackend;
use crate::api::payload::{
    AllStatsResponse, ApiFailure, ClockInRequest, CreateNotificationRequest,
    CreateNotificationResponse, EmployeeAttendanceResponse, EmployeeListResponse, LoginRequest,
    LoginResponse, LogsResponse, TodayStatusResponse,
};
use crate::config::Config;
use crate::config::credentials::Credentials;
use crate::errors::{AppError, AppResult};
use crate::models::break_session::BreakSession;
use crate::models::location::WorkLocation;
use crate::models::notification::{MAX_MESSAGE_LEN, Notification};
use crate::models::session::AttendanceSession;
use crate::utils::date::DateRange;

/// JSON client for the EMS backend. Credentials (session cookie and,
/// when present, bearer token) are replayed on every request.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    credentials: Credentials,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        Self::with_credentials(cfg, Credentials::load())
    }

    pub fn with_credentials(cfg: &Config, credentials: Credentials) -> AppResult<Self> {
        // Only a connect timeout at client level: the announcement stream
        // must be allowed to stay open indefinitely. Plain requests get a
        // per-request total timeout instead.
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url: cfg.server_url.trim_end_matches('/').to_string(),
            http,
            credentials,
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut req = req;
        if let Some(cookie) = &self.credentials.cookie {
            req = req.header(COOKIE, cookie);
        }
        if let Some(token) = &self.credentials.token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        req
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let req = self
            .apply_auth(self.http.get(self.url(path)))
            .query(query)
            .timeout(self.request_timeout);
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> AppResult<T> {
        let mut req = self
            .apply_auth(self.http.post(self.url(path)))
            .timeout(self.request_timeout);
        if let Some(b) = body {
            req = req.json(b);
        }
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Decode a success body, or map a failure body to `AppError::Api`
    /// keeping the backend message verbatim (and the canonical session on
    /// clock-in conflicts).
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let failure: ApiFailure = serde_json::from_str(&text).unwrap_or_default();

        // A bare 401 means the stored credentials are gone or expired; a
        // 401 with a message (e.g. wrong password at login) is surfaced
        // verbatim like any other rejection.
        if status == StatusCode::UNAUTHORIZED && failure.message.is_none() && failure.error.is_none()
        {
            return Err(AppError::NotLoggedIn);
        }

        Err(AppError::Api {
            status: status.as_u16(),
            message: failure.display_message(status.as_u16()),
            session: failure.session.map(Box::new),
        })
    }

    /// Credentialed GET used by the announcement stream; no total timeout.
    pub(crate) fn stream_request(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.get(self.url(path)))
    }

    // -----------------------------------------------------------------
    // Auth
    // -----------------------------------------------------------------

    /// Log in against `{role}/auth/login` and capture the session cookie
    /// from the response headers plus the bearer token from the body.
    pub async fn login(
        &self,
        role: &str,
        email: &str,
        password: &str,
    ) -> AppResult<Credentials> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.url(&format!("{role}/auth/login")))
            .json(&req)
            .timeout(self.request_timeout)
            .send()
            .await?;

        let cookie = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .map(str::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        let body: LoginResponse = Self::handle_response(response).await?;

        Ok(Credentials {
            cookie: (!cookie.is_empty()).then_some(cookie),
            token: body.token,
            role: Some(role.to_string()),
        })
    }

    /// Best-effort logout on the backend side; local credentials are
    /// cleared by the caller regardless.
    pub async fn logout(&self, role: &str) -> AppResult<()> {
        let _: serde_json::Value = self
            .post_json(&format!("{role}/auth/logout"), None::<&()>)
            .await?;
        Ok(())
    }

    // -----------------------------------------------------------------
    // Admin attendance views (read-only)
    // -----------------------------------------------------------------

    pub async fn today_status(&self) -> AppResult<TodayStatusResponse> {
        self.get_json("attendance/today-status", &[]).await
    }

    /// All-employee attendance report. One of the two operations the
    /// original backend served from a single overloaded path.
    pub async fn fetch_all_stats(
        &self,
        range: Option<&str>,
        year: Option<i32>,
        month: Option<u32>,
        department: Option<&str>,
    ) -> AppResult<AllStatsResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(r) = range {
            query.push(("range", r.to_string()));
        }
        if let Some(y) = year {
            query.push(("year", y.to_string()));
        }
        if let Some(m) = month {
            query.push(("month", m.to_string()));
        }
        if let Some(d) = department {
            query.push(("department", d.to_string()));
        }
        self.get_json("attendance/all-employee-list", &query).await
    }

    /// Employee directory. The other face of the overloaded path.
    pub async fn fetch_employee_list(
        &self,
        department: Option<&str>,
        include_inactive: bool,
    ) -> AppResult<EmployeeListResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(d) = department {
            query.push(("department", d.to_string()));
        }
        if include_inactive {
            query.push(("includeInactive", "true".to_string()));
        }
        self.get_json("attendance/all-employee-list", &query).await
    }

    pub async fn employee_attendance(
        &self,
        employee_id: &str,
        range: Option<DateRange>,
    ) -> AppResult<EmployeeAttendanceResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(r) = range {
            query.push(("startDate", r.start_str()));
            query.push(("endDate", r.end_str()));
        }
        self.get_json(
            &format!("attendance/employee/{employee_id}/attendance"),
            &query,
        )
        .await
    }

    // -----------------------------------------------------------------
    // Announcements
    // -----------------------------------------------------------------

    /// Create a broadcast announcement. The 500-character cap is enforced
    /// here, before any network traffic, as in the original client.
    pub async fn create_notification(&self, message: &str) -> AppResult<Notification> {
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(AppError::MessageTooLong(message.chars().count()));
        }
        let req = CreateNotificationRequest {
            message: message.to_string(),
        };
        let created: CreateNotificationResponse = self
            .post_json("notification/create-notification", Some(&req))
            .await?;
        Ok(created)
    }
}

#[async_trait]
impl AttendanceBackend for ApiClient {
    async fn clock_in(&self, location: WorkLocation) -> AppResult<AttendanceSession> {
        let req = ClockInRequest {
            work_location: location,
        };
        self.post_json("attendance/clock-in", Some(&req)).await
    }

    async fn clock_out(&self) -> AppResult<AttendanceSession> {
        self.post_json("attendance/clock-out", None::<&()>).await
    }

    async fn break_in(&self) -> AppResult<BreakSession> {
        self.post_json("attendance/break-in", None::<&()>).await
    }

    async fn break_out(&self) -> AppResult<AttendanceSession> {
        self.post_json("attendance/break-out", None::<&()>).await
    }

    async fn fetch_logs(&self, range: Option<DateRange>) -> AppResult<LogsResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(r) = range {
            query.push(("startDate", r.start_str()));
            query.push(("endDate", r.end_str()));
        }
        self.get_json("attendance/get-logs", &query).await
    }
}
