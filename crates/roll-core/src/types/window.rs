use crate::types::enums::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved attendance window. Durations are unsigned so
/// `start <= on_time_end <= late_end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    pub start: DateTime<Utc>,
    pub on_time_minutes: u32,
    pub late_minutes: u32,
}

/// A window as supplied by the backend, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInput {
    pub start: Option<String>,
    #[serde(default)]
    pub on_time_minutes: Option<i64>,
    #[serde(default)]
    pub late_minutes: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowStatus {
    pub phase: Phase,
    pub start: Option<DateTime<Utc>>,
    pub on_time_end: Option<DateTime<Utc>>,
    pub late_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    Opens,
    OnTimeEnds,
    Closes,
}

/// Next phase change after some instant, for countdown display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub boundary: Boundary,
    pub at: DateTime<Utc>,
    pub remaining_secs: i64,
}
