use serde::{Deserialize, Serialize};

/// One class meeting as returned by the backend. Timestamps stay raw strings
/// until a window is resolved from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRow {
    pub id: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub closes_at: Option<String>,
    pub on_time_minutes: Option<i64>,
    pub late_minutes: Option<i64>,
    pub qr_period_secs: Option<u32>,
}
