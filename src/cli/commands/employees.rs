use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::table::{Column, Table};

/// Admin: the employee directory.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employees {
        department,
        include_inactive,
    } = cmd
    {
        let client = ApiClient::new(cfg)?;
        let list = client
            .fetch_employee_list(department.as_deref(), *include_inactive)
            .await?;

        if list.employees.is_empty() {
            messages::info("No employees match the selected filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Id", 24),
            Column::new("Name", 24),
            Column::new("Department", 16),
            Column::new("Position", 16),
            Column::new("Status", 8),
        ]);
        for e in &list.employees {
            table.add_row(vec![
                e.id.clone(),
                e.name.clone(),
                e.department.clone(),
                e.position.clone(),
                if e.active { "Active" } else { "Inactive" }.to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
