use chrono::{DateTime, Utc};
use clap::Args;
use roll_core::types::{Countdown, DisplayStatus, Phase, RecordedStatus, WindowInput, WindowStatus};
use roll_core::{RollConfig, derive_status_for_input, evaluate_input};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct WindowArgs {
    /// Session start (RFC 3339)
    #[arg(long)]
    pub start: String,
    /// On-time minutes; defaults to the configured value
    #[arg(long = "on-time", allow_negative_numbers = true)]
    pub on_time: Option<i64>,
    /// Late minutes; defaults to the configured value
    #[arg(long, allow_negative_numbers = true)]
    pub late: Option<i64>,
    /// Evaluate at this instant instead of now
    #[arg(long)]
    pub now: Option<String>,
}

impl WindowArgs {
    pub fn window_input(&self, config: &RollConfig) -> WindowInput {
        WindowInput::new(
            Some(self.start.as_str()),
            Some(self.on_time.unwrap_or(config.window.on_time_minutes)),
            Some(self.late.unwrap_or(config.window.late_minutes)),
        )
    }
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Backend status code of an existing record (dung_gio, tre, ...)
    #[arg(long)]
    pub record: Option<String>,
    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Debug, Serialize)]
pub struct PhaseReport {
    pub now: DateTime<Utc>,
    #[serde(flatten)]
    pub status: WindowStatus,
    pub next: Option<Countdown>,
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub now: DateTime<Utc>,
    pub record: Option<RecordedStatus>,
    pub status: DisplayStatus,
    pub label: &'static str,
    pub window: PhaseReport,
}

pub fn handle_phase(args: &WindowArgs, config: &RollConfig, now: DateTime<Utc>) -> PhaseReport {
    let input = args.window_input(config);
    tracing::debug!(?input, %now, "evaluating window");
    let status = evaluate_input(&input, now);
    if status.phase == Phase::Invalid {
        tracing::warn!(start = %args.start, "session start could not be parsed");
    }
    PhaseReport {
        now,
        status,
        next: status.next_boundary(now),
    }
}

pub fn handle_status(args: &StatusArgs, config: &RollConfig, now: DateTime<Utc>) -> StatusReport {
    let record = args.record.as_deref().and_then(RecordedStatus::from_code);
    if let (Some(code), None) = (args.record.as_deref(), record) {
        tracing::debug!(code, "record code does not mark presence, using live window");
    }
    let input = args.window.window_input(config);
    let status = derive_status_for_input(record, &input, now);
    StatusReport {
        now,
        record,
        status,
        label: status.label(),
        window: handle_phase(&args.window, config, now),
    }
}
