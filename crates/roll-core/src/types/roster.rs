use crate::types::enums::DisplayStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

/// A check-in row stored by the backend. `status` is the raw backend code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub student_id: String,
    #[serde(default)]
    pub checked_in_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    pub student_id: String,
    pub name: String,
    pub code: String,
    pub checked_in_at: Option<String>,
    pub status: DisplayStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTally {
    pub on_time: u32,
    pub late: u32,
    pub absent: u32,
    pub pending: u32,
    pub before: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub rows: Vec<RosterRow>,
    pub tally: RosterTally,
}
