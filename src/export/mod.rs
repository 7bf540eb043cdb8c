// src/export/mod.rs

mod csv;
mod json;

use crate::errors::AppResult;
use crate::models::session::AttendanceSession;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn write(&self, path: &Path, sessions: &[AttendanceSession]) -> AppResult<()> {
        match self {
            ExportFormat::Csv => {
                csv::write_csv(path, sessions)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                json::write_json(path, sessions)?;
                notify_export_success("JSON", path);
            }
        }
        Ok(())
    }
}
