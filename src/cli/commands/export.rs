use std::path::Path;

use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date;

/// Export fetched attendance sessions to a file.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        let range = match period {
            Some(p) => Some(date::resolve_period(p)?),
            None => None,
        };

        let mut tracker = Tracker::new(ApiClient::new(cfg)?);
        tracker.fetch_logs(range).await?;

        if tracker.state.sessions.is_empty() {
            messages::info("No sessions to export.");
            return Ok(());
        }

        format.write(path, &tracker.state.sessions)?;
    }
    Ok(())
}
