use crate::errors::{AppError, AppResult};
use crate::models::session::AttendanceSession;
use std::fs;
use std::path::Path;

/// Write the fetched sessions as pretty-printed JSON, wire shape.
pub fn write_json(path: &Path, sessions: &[AttendanceSession]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(sessions)
        .map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
