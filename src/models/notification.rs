use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum announcement length, enforced client-side before sending.
pub const MAX_MESSAGE_LEN: usize = 500;

/// A broadcast announcement pushed by the backend over the event stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
