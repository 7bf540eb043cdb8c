use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::notification::MAX_MESSAGE_LEN;
use crate::ui::messages;

/// Admin: broadcast an announcement to all connected clients.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Announce { message } = cmd {
        // Length cap is checked before any network traffic.
        let len = message.chars().count();
        if len > MAX_MESSAGE_LEN {
            return Err(AppError::MessageTooLong(len));
        }

        let client = ApiClient::new(cfg)?;
        let created = client.create_notification(message).await?;
        messages::success(format!("Announcement sent (id {}).", created.id));
    }
    Ok(())
}
