use chrono::{DateTime, Utc};
use clap::Args;
use roll_core::qr::QrRotation;
use roll_core::{RollConfig, RollError};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct SlotArgs {
    /// Rotation period in seconds; defaults to the configured value
    #[arg(long)]
    pub period: Option<u32>,
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SlotReport {
    pub now: DateTime<Utc>,
    pub period_secs: u32,
    pub slot: i64,
    pub slot_started_at: Option<DateTime<Utc>>,
    pub next_rotation_at: Option<DateTime<Utc>>,
}

pub fn handle_slot(args: &SlotArgs, config: &RollConfig, now: DateTime<Utc>) -> Result<SlotReport, RollError> {
    let rotation = match args.period {
        Some(secs) => QrRotation::new(secs)?,
        None => config.qr_rotation(),
    };
    let slot = rotation.slot_at(now);
    Ok(SlotReport {
        now,
        period_secs: rotation.period_secs(),
        slot,
        slot_started_at: rotation.slot_start(slot),
        next_rotation_at: rotation.next_rotation(now),
    })
}
