use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::models::session::AttendanceSession;
use crate::models::summary::PeriodSummary;
use crate::ui::messages;
use crate::utils::colors::colorize_optional;
use crate::utils::date::{self, DateRange};
use crate::utils::formatting::{describe_status, hours2readable};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_date, format_optional_time, format_time};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Logs { period, now } = cmd {
        let range = resolve_range(period.as_deref(), *now)?;

        let mut tracker = Tracker::new(ApiClient::new(cfg)?);
        tracker.fetch_logs(range).await?;

        if tracker.state.sessions.is_empty() {
            messages::info("No attendance data available.");
            return Ok(());
        }

        if let Some(summary) = &tracker.state.summary {
            print_summary(summary);
        }
        print_locations(&tracker.state.sessions);
        print_sessions(&tracker.state.sessions);
    }
    Ok(())
}

fn resolve_range(period: Option<&str>, now: bool) -> AppResult<Option<DateRange>> {
    if now {
        let t = date::today();
        return Ok(Some(DateRange { start: t, end: t }));
    }
    match period {
        Some(p) => Ok(Some(date::resolve_period(p)?)),
        None => Ok(None),
    }
}

fn print_summary(summary: &PeriodSummary) {
    messages::header("Attendance Summary");
    println!("Total days:            {}", summary.total_days);
    println!(
        "Total effective hours: {}",
        hours2readable(Some(summary.total_effective_hours))
    );
    println!(
        "Total overtime:        {}",
        hours2readable(Some(summary.total_overtime))
    );
    println!(
        "Attendance issues:     {}",
        summary.total_late_arrivals + summary.total_early_departures
    );
    println!();
}

fn print_locations(sessions: &[AttendanceSession]) {
    let (office, wfh) = aggregate::location_counts(sessions);
    println!("Office: {office}  |  Work From Home: {wfh}");
    println!();
}

fn print_sessions(sessions: &[AttendanceSession]) {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("In", 5),
        Column::new("Out", 5),
        Column::new("Hours", 6),
        Column::new("Status", 8),
        Column::new("Location", 14),
    ]);

    for s in sessions {
        let (status, _) = describe_status(s.status.as_str(), s.is_late_arrival, s.is_early_departure);
        let hours = if s.effective_hours > 0.0 {
            format!("{:.2}", s.effective_hours)
        } else {
            "--".to_string()
        };
        table.add_row(vec![
            format_date(&s.date),
            format_time(&s.clock_in),
            colorize_optional(&format_optional_time(s.clock_out.as_ref())),
            colorize_optional(&hours),
            status,
            s.work_location.label().to_string(),
        ]);
    }

    print!("{}", table.render());
}
