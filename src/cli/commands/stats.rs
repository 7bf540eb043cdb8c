use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::table::{Column, Table};

/// Admin: the all-employee attendance report.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        range,
        year,
        month,
        department,
    } = cmd
    {
        let client = ApiClient::new(cfg)?;
        let report = client
            .fetch_all_stats(range.as_deref(), *year, *month, department.as_deref())
            .await?;

        if report.stats.is_empty() {
            messages::info("No attendance statistics for the selected filters.");
            return Ok(());
        }

        messages::header("All-Employee Attendance Report");
        let mut table = Table::new(vec![
            Column::new("Name", 24),
            Column::new("Department", 16),
            Column::new("Present", 7),
            Column::new("Half", 5),
            Column::new("Absent", 6),
            Column::new("Hours", 8),
            Column::new("Overtime", 8),
            Column::new("Late", 5),
            Column::new("Early", 5),
        ]);
        for row in &report.stats {
            table.add_row(vec![
                row.employee.name.clone(),
                row.employee.department.clone(),
                row.present_days.to_string(),
                row.half_days.to_string(),
                row.absent_days.to_string(),
                format!("{:.2}", row.total_effective_hours),
                format!("{:.2}", row.total_overtime),
                row.late_arrivals.to_string(),
                row.early_departures.to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
