use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an instant falls relative to a session's attendance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Before,
    OnTime,
    Late,
    Closed,
    /// The window start was missing or unparseable.
    Invalid,
}

impl Phase {
    /// Position in the `Before -> OnTime -> Late -> Closed` progression.
    /// `Invalid` has no position.
    pub fn ordinal(self) -> Option<u8> {
        match self {
            Phase::Before => Some(0),
            Phase::OnTime => Some(1),
            Phase::Late => Some(2),
            Phase::Closed => Some(3),
            Phase::Invalid => None,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Phase::OnTime | Phase::Late)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::OnTime => "ontime",
            Phase::Late => "late",
            Phase::Closed => "closed",
            Phase::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome already stored by the backend for one student in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordedStatus {
    OnTime,
    Late,
}

impl RecordedStatus {
    /// Parses a backend status code. Codes that do not mark the student as
    /// present (`vang`, empty, unknown) yield `None` so the live window decides.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "dung_gio" | "ontime" | "on_time" => Some(RecordedStatus::OnTime),
            "tre" | "tre_gio" | "late" => Some(RecordedStatus::Late),
            _ => None,
        }
    }
}

/// User-facing attendance outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    OnTime,
    Late,
    Absent,
    Pending,
    Before,
}

impl DisplayStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayStatus::OnTime => "ontime",
            DisplayStatus::Late => "late",
            DisplayStatus::Absent => "absent",
            DisplayStatus::Pending => "pending",
            DisplayStatus::Before => "before",
        }
    }

    /// Short chip label.
    pub fn label(self) -> &'static str {
        match self {
            DisplayStatus::OnTime => "On time",
            DisplayStatus::Late => "Late",
            DisplayStatus::Absent => "Absent",
            DisplayStatus::Pending => "Not checked in",
            DisplayStatus::Before => "Not open yet",
        }
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_status_codes() {
        assert_eq!(RecordedStatus::from_code("dung_gio"), Some(RecordedStatus::OnTime));
        assert_eq!(RecordedStatus::from_code("tre"), Some(RecordedStatus::Late));
        assert_eq!(RecordedStatus::from_code("tre_gio"), Some(RecordedStatus::Late));
        assert_eq!(RecordedStatus::from_code(" LATE "), Some(RecordedStatus::Late));
        assert_eq!(RecordedStatus::from_code("vang"), None);
        assert_eq!(RecordedStatus::from_code(""), None);
    }

    #[test]
    fn test_phase_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Phase::OnTime).unwrap();
        assert_eq!(json, "\"ontime\"");
        let phase: Phase = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(phase, Phase::Closed);
    }

    #[test]
    fn test_phase_ordinal() {
        assert!(Phase::Before.ordinal() < Phase::OnTime.ordinal());
        assert!(Phase::Late.ordinal() < Phase::Closed.ordinal());
        assert_eq!(Phase::Invalid.ordinal(), None);
        assert!(Phase::Late.is_open());
        assert!(!Phase::Closed.is_open());
    }
}
