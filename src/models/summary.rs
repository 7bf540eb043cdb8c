use serde::{Deserialize, Serialize};

/// Period totals computed by the backend and displayed verbatim.
/// Never recomputed locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    #[serde(default)]
    pub total_days: u32,
    #[serde(default)]
    pub total_effective_hours: f64,
    #[serde(default)]
    pub total_gross_hours: f64,
    #[serde(default)]
    pub total_overtime: f64,
    #[serde(default)]
    pub total_late_arrivals: u32,
    #[serde(default)]
    pub total_early_departures: u32,
}

/// Per-day aggregate derived locally from the session list.
/// A pure function of the sessions for that date, recomputed on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyStat {
    pub sessions: usize,
    pub total_effective_hours: f64,
    pub total_gross_hours: f64,
    pub total_overtime: f64,
    pub late_arrivals: u32,
    pub early_departures: u32,
}
