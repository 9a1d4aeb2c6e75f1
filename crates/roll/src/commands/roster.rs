use chrono::{DateTime, Utc};
use clap::Args;
use roll_core::qr::QrGate;
use roll_core::roster::summarize_roster;
use roll_core::sessions::find_open_session;
use roll_core::types::{Mark, RosterSummary, SessionRow, Student, WindowStatus};
use roll_core::{RollConfig, RollError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::read_json;

#[derive(Args, Debug)]
pub struct RosterArgs {
    /// JSON file with `session`, `students` and `marks`
    pub file: PathBuf,
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// JSON file holding an array of sessions
    pub file: PathBuf,
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RosterFile {
    pub session: SessionRow,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub marks: Vec<Mark>,
}

#[derive(Debug, Serialize)]
pub struct RosterReport {
    pub now: DateTime<Utc>,
    pub session_id: String,
    pub window: WindowStatus,
    #[serde(flatten)]
    pub summary: RosterSummary,
}

#[derive(Debug, Serialize)]
pub struct OpenReport {
    pub now: DateTime<Utc>,
    pub session: Option<SessionRow>,
    pub window: Option<WindowStatus>,
    pub qr: Option<QrGate>,
}

pub fn handle_roster(args: &RosterArgs, now: DateTime<Utc>) -> Result<RosterReport, RollError> {
    let file: RosterFile = read_json(&args.file)?;
    tracing::debug!(
        session = %file.session.id,
        students = file.students.len(),
        marks = file.marks.len(),
        "loaded roster"
    );
    Ok(roster_report(file, now))
}

pub fn roster_report(file: RosterFile, now: DateTime<Utc>) -> RosterReport {
    let input = file.session.window_input();
    let summary = summarize_roster(&file.students, &file.marks, &input, now);
    RosterReport {
        now,
        window: file.session.evaluate(now),
        session_id: file.session.id,
        summary,
    }
}

pub fn handle_open(args: &OpenArgs, config: &RollConfig, now: DateTime<Utc>) -> Result<OpenReport, RollError> {
    let rows: Vec<SessionRow> = read_json(&args.file)?;
    Ok(open_report(&rows, config, now))
}

pub fn open_report(rows: &[SessionRow], config: &RollConfig, now: DateTime<Utc>) -> OpenReport {
    let Some(open) = find_open_session(rows, now) else {
        tracing::debug!(sessions = rows.len(), "no open session");
        return OpenReport {
            now,
            session: None,
            window: None,
            qr: None,
        };
    };
    OpenReport {
        now,
        window: Some(open.evaluate(now)),
        qr: Some(open.qr_gate(config.qr_rotation(), now)),
        session: Some(open.clone()),
    }
}
