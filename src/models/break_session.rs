use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sub-interval of an open attendance session during which the user is
/// not working. The backend associates it with the currently open session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakSession {
    #[serde(rename = "_id")]
    pub id: String,
    pub break_in: DateTime<Utc>,
    /// None while the break is active.
    #[serde(default)]
    pub break_out: Option<DateTime<Utc>>,
}

impl BreakSession {
    pub fn is_active(&self) -> bool {
        self.break_out.is_none()
    }
}
