//! Unified application error type.
//! All modules (api, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

use crate::models::session::AttendanceSession;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Transport-related
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejection. The message is surfaced verbatim; a clock-in
    /// conflict may carry the canonical open session in `session`.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        session: Option<Box<AttendanceSession>>,
    },

    // ---------------------------
    // Local precondition violations (no network call was made)
    // ---------------------------
    #[error("You have an open session since {0}. Please clock out first.")]
    OpenSession(String),

    #[error("No open session. Clock in first.")]
    NoOpenSession,

    #[error("A break is active. End the break before clocking out.")]
    BreakActive,

    #[error("No active break to end.")]
    NoActiveBreak,

    #[error("Announcement too long: {0} characters (maximum is 500)")]
    MessageTooLong(usize),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid work location: {0}")]
    InvalidLocation(String),

    // ---------------------------
    // Auth errors
    // ---------------------------
    #[error("Not logged in. Run 'emstrack login' first.")]
    NotLoggedIn,

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
