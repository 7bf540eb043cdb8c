use crate::api::ApiClient;
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::formatting::hours2readable;
use crate::utils::time::format_time;

/// Today's attendance box: current session, break, daily totals.
pub async fn handle(cfg: &Config) -> AppResult<()> {
    let mut tracker = Tracker::new(ApiClient::new(cfg)?);
    tracker.fetch_logs(None).await?;

    messages::header("Today's Attendance");

    match tracker.state.open_session() {
        Some(open) => {
            messages::info(format!(
                "Checked in since {} ({})",
                format_time(&open.clock_in),
                open.work_location.label()
            ));
            if open.is_late_arrival {
                messages::warning("Flagged as a late arrival.");
            }
        }
        None => {
            messages::info("Not checked in.");
        }
    }

    let today = tracker.state.stats_for(date::today());
    println!();
    println!("Sessions today:   {}", today.sessions);
    println!(
        "Effective hours:  {}",
        hours2readable(Some(today.total_effective_hours))
    );
    println!(
        "Gross hours:      {}",
        hours2readable(Some(today.total_gross_hours))
    );
    if today.total_overtime > 0.0 {
        println!(
            "Overtime:         {}",
            hours2readable(Some(today.total_overtime))
        );
    }

    Ok(())
}
