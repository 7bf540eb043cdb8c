use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::credentials::Credentials;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

fn validate_role(role: &str) -> AppResult<&str> {
    match role {
        "admin" | "employee" => Ok(role),
        other => Err(AppError::InvalidRole(other.to_string())),
    }
}

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login {
        role,
        email,
        password,
    } = cmd
    {
        let role = validate_role(role)?;

        let client = ApiClient::with_credentials(cfg, Credentials::default())?;
        let creds = client.login(role, email, password).await?;

        if !creds.is_logged_in() {
            return Err(AppError::Other(
                "login succeeded but no credentials were returned".into(),
            ));
        }

        creds.save()?;
        messages::success(format!("Logged in as {} ({})", email, role));
    }
    Ok(())
}

pub async fn handle_logout(cfg: &Config) -> AppResult<()> {
    let creds = Credentials::load();
    if !creds.is_logged_in() {
        messages::info("Already logged out.");
        return Ok(());
    }

    // Best effort on the backend side; local credentials go away regardless.
    let role = creds.role.clone().unwrap_or_else(|| "employee".to_string());
    let client = ApiClient::with_credentials(cfg, creds)?;
    if let Err(e) = client.logout(&role).await {
        tracing::warn!("backend logout failed: {e}");
    }

    Credentials::clear()?;
    messages::success("Logged out.");
    Ok(())
}
