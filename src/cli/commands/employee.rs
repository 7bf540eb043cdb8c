use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::formatting::hours2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_date, format_optional_time};

/// Admin: one employee's attendance detail over a period.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { id, period } = cmd {
        let range = match period {
            Some(p) => Some(date::resolve_period(p)?),
            None => None,
        };

        let client = ApiClient::new(cfg)?;
        let detail = client.employee_attendance(id, range).await?;

        messages::header(format!(
            "{} ({})",
            detail.employee.name, detail.employee.employee_id
        ));
        println!("Department: {}", detail.employee.department);
        println!("Position:   {}", detail.employee.position);
        println!("Email:      {}", detail.employee.email);
        println!();

        println!(
            "Period {} → {} ({} working days)",
            detail.period.start, detail.period.end, detail.period.working_days
        );
        println!(
            "Present: {}  Half-day: {}  Absent: {}",
            detail.statistics.present_days,
            detail.statistics.half_days,
            detail.statistics.absent_days
        );
        println!(
            "Attendance rate: {:.1}%  |  Overtime: {}",
            detail.statistics.attendance_rate * 100.0,
            hours2readable(Some(detail.statistics.total_overtime))
        );
        println!();

        if detail.recent_records.is_empty() {
            messages::info("No recent attendance records.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Status", 8),
            Column::new("In", 5),
            Column::new("Out", 5),
            Column::new("Hours", 6),
            Column::new("OT", 5),
        ]);
        for r in &detail.recent_records {
            table.add_row(vec![
                format_date(&r.date),
                r.status.as_str().to_string(),
                format_optional_time(r.clock_in.as_ref()),
                format_optional_time(r.clock_out.as_ref()),
                hours2readable(r.effective_hours),
                hours2readable(r.overtime_hours),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
