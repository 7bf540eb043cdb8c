use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::employee::TodayStatusEntry;
use crate::ui::messages;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_optional_time;

/// Admin overview: who is present, absent or on break right now.
pub async fn handle(cfg: &Config) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;
    let status = client.today_status().await?;

    messages::header("Today's Attendance Overview");
    println!(
        "Present: {}  |  Absent: {}  |  On break: {}",
        status.counts.present, status.counts.absent, status.counts.on_break
    );
    println!();

    let present: Vec<&TodayStatusEntry> = status
        .data
        .iter()
        .filter(|e| e.status.is_present() && !e.is_on_break)
        .collect();
    let on_break: Vec<&TodayStatusEntry> =
        status.data.iter().filter(|e| e.is_on_break).collect();
    let absent: Vec<&TodayStatusEntry> = status
        .data
        .iter()
        .filter(|e| !e.status.is_present())
        .collect();

    print_group("Present", &present);
    print_group("On Break", &on_break);
    print_group("Absent", &absent);

    Ok(())
}

fn print_group(label: &str, entries: &[&TodayStatusEntry]) {
    println!("{} ({})", label, entries.len());
    if entries.is_empty() {
        println!("  -");
        println!();
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Name", 24),
        Column::new("Department", 16),
        Column::new("Clock In", 9),
        Column::new("", 6),
    ]);
    for e in entries {
        table.add_row(vec![
            e.employee.name.clone(),
            e.employee.department.clone(),
            format_optional_time(e.clock_in.as_ref()),
            if e.is_late_arrival {
                "(Late)".to_string()
            } else {
                String::new()
            },
        ]);
    }
    print!("{}", table.render());
    println!();
}
