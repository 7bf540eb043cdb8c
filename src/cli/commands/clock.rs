use crate::api::ApiClient;
use crate::api::backend::AttendanceBackend;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::errors::{AppError, AppResult};
use crate::models::location::WorkLocation;
use crate::ui::messages;
use crate::utils::time::format_time;

/// Handle the four attendance commands. Each run loads the authoritative
/// session list first so local preconditions are checked against fresh
/// state before the command round trip.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::ClockIn { location } => {
            // Parse errors stay local; no request leaves for a bad code.
            let location = resolve_location(location.as_deref(), cfg)?;
            let mut tracker = fresh_tracker(cfg).await?;

            match tracker.clock_in(location).await {
                Ok(session) => {
                    messages::success(format!(
                        "Checked in at {} ({})",
                        format_time(&session.clock_in),
                        session.work_location.label()
                    ));
                }
                Err(e) => {
                    // A conflict may have resynced local state with the
                    // server's canonical open session.
                    if matches!(e, AppError::Api { .. })
                        && let Some(open) = tracker.state.open_session()
                    {
                        messages::warning(format!(
                            "Server reports an open session since {}.",
                            format_time(&open.clock_in)
                        ));
                    }
                    return Err(e);
                }
            }
        }

        Commands::ClockOut => {
            let mut tracker = fresh_tracker(cfg).await?;
            let session = tracker.clock_out().await?;
            messages::success(format!(
                "Checked out at {}. Effective hours: {:.2}",
                session
                    .clock_out
                    .map(|t| format_time(&t))
                    .unwrap_or_else(|| "--:--".into()),
                session.effective_hours
            ));
            if session.is_early_departure {
                messages::warning("This session is flagged as an early departure.");
            }
        }

        Commands::BreakIn => {
            let mut tracker = fresh_tracker(cfg).await?;
            let brk = tracker.break_in().await?;
            messages::success(format!("Break started at {}", format_time(&brk.break_in)));
        }

        Commands::BreakOut => {
            // Break state is not part of get-logs, so a fresh process
            // cannot check this precondition locally; the backend decides
            // and its rejection is surfaced verbatim.
            let client = ApiClient::new(cfg)?;
            let updated = client.break_out().await?;
            messages::success("Break ended.");
            if updated.is_open() {
                messages::info(format!(
                    "Session open since {}.",
                    format_time(&updated.clock_in)
                ));
            }
        }

        _ => {}
    }

    Ok(())
}

async fn fresh_tracker(cfg: &Config) -> AppResult<Tracker<ApiClient>> {
    let mut tracker = Tracker::new(ApiClient::new(cfg)?);
    tracker.fetch_logs(None).await?;
    Ok(tracker)
}

fn resolve_location(arg: Option<&str>, cfg: &Config) -> AppResult<WorkLocation> {
    let code = arg.unwrap_or(&cfg.default_location);
    WorkLocation::from_code(code).ok_or_else(|| {
        AppError::InvalidLocation(format!("'{}'. Use O/office or H/home/wfh.", code))
    })
}
