use std::fs;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "config file not found: {} (run 'emstrack init')",
                    path.display()
                )));
            }
            let content = fs::read_to_string(&path)?;
            println!("{}", content);
            return Ok(());
        }

        if *check {
            let missing = Config::missing_fields()?;
            if missing.is_empty() {
                messages::success("Configuration file is complete.");
            } else {
                for key in missing {
                    messages::warning(format!("Missing field '{}', default in use", key));
                }
            }
            return Ok(());
        }

        messages::info("Nothing to do. Use --print or --check.");
    }
    Ok(())
}
