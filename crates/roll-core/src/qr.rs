//! QR rotation slots.
//!
//! The displayed code changes every `period_secs`. The slot index is the
//! number of whole periods since the Unix epoch; signing a payload for a
//! slot is the backend's job.

use crate::error::RollError;
use crate::types::{Phase, SessionRow, WindowStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_QR_PERIOD_SECS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrRotation {
    period_secs: u32,
}

impl Default for QrRotation {
    fn default() -> Self {
        Self {
            period_secs: DEFAULT_QR_PERIOD_SECS,
        }
    }
}

impl QrRotation {
    pub fn new(period_secs: u32) -> Result<Self, RollError> {
        if period_secs == 0 {
            return Err(RollError::invalid_input("qr period must be positive"));
        }
        Ok(Self { period_secs })
    }

    pub fn period_secs(&self) -> u32 {
        self.period_secs
    }

    pub fn slot_at(&self, now: DateTime<Utc>) -> i64 {
        now.timestamp().div_euclid(i64::from(self.period_secs))
    }

    pub fn slot_start(&self, slot: i64) -> Option<DateTime<Utc>> {
        let secs = slot.checked_mul(i64::from(self.period_secs))?;
        DateTime::from_timestamp(secs, 0)
    }

    pub fn next_rotation(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.slot_start(self.slot_at(now).checked_add(1)?)
    }
}

/// What the classroom QR display should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum QrGate {
    /// Not open yet, or the window could not be evaluated.
    Hidden,
    Showing { slot: i64, phase: Phase },
    Closed,
}

pub fn qr_gate(status: &WindowStatus, ended: bool, rotation: &QrRotation, now: DateTime<Utc>) -> QrGate {
    if ended {
        return QrGate::Closed;
    }
    match status.phase {
        Phase::Before | Phase::Invalid => QrGate::Hidden,
        Phase::Closed => QrGate::Closed,
        phase @ (Phase::OnTime | Phase::Late) => QrGate::Showing {
            slot: rotation.slot_at(now),
            phase,
        },
    }
}

impl SessionRow {
    /// Uses the row's own period when it carries a positive one.
    pub fn qr_rotation(&self, fallback: QrRotation) -> QrRotation {
        self.qr_period_secs
            .and_then(|secs| QrRotation::new(secs).ok())
            .unwrap_or(fallback)
    }

    pub fn qr_gate(&self, fallback: QrRotation, now: DateTime<Utc>) -> QrGate {
        qr_gate(
            &self.evaluate(now),
            self.has_ended(now),
            &self.qr_rotation(fallback),
            now,
        )
    }
}
