use crate::commands::qr::SlotReport;
use crate::commands::roster::{OpenReport, RosterReport};
use crate::commands::window::{PhaseReport, StatusReport};
use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Stream};
use roll_core::RollError;
use roll_core::qr::QrGate;
use roll_core::types::{Boundary, Countdown, DisplayStatus, Phase, WindowStatus};
use serde::Serialize;

pub enum CommandOutput {
    Phase(PhaseReport),
    Status(StatusReport),
    Slot(SlotReport),
    Roster(RosterReport),
    Open(OpenReport),
}

impl CommandOutput {
    pub fn render(&self, json: bool) -> Result<String, RollError> {
        if json {
            return match self {
                CommandOutput::Phase(report) => to_json(report),
                CommandOutput::Status(report) => to_json(report),
                CommandOutput::Slot(report) => to_json(report),
                CommandOutput::Roster(report) => to_json(report),
                CommandOutput::Open(report) => to_json(report),
            };
        }
        Ok(match self {
            CommandOutput::Phase(report) => render_phase(report),
            CommandOutput::Status(report) => render_status(report),
            CommandOutput::Slot(report) => render_slot(report),
            CommandOutput::Roster(report) => render_roster(report),
            CommandOutput::Open(report) => render_open(report),
        })
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, RollError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn time(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%SZ").to_string()
}

fn phase_label(phase: Phase) -> String {
    let label = phase.as_str();
    match phase {
        Phase::Before => label.if_supports_color(Stream::Stdout, |s| s.blue()).to_string(),
        Phase::OnTime => label.if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
        Phase::Late => label.if_supports_color(Stream::Stdout, |s| s.yellow()).to_string(),
        Phase::Closed => label.if_supports_color(Stream::Stdout, |s| s.red()).to_string(),
        Phase::Invalid => label.if_supports_color(Stream::Stdout, |s| s.magenta()).to_string(),
    }
}

fn status_label(status: DisplayStatus) -> String {
    let label = status.label();
    match status {
        DisplayStatus::OnTime => label.if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
        DisplayStatus::Late => label.if_supports_color(Stream::Stdout, |s| s.yellow()).to_string(),
        DisplayStatus::Absent => label.if_supports_color(Stream::Stdout, |s| s.red()).to_string(),
        DisplayStatus::Pending => label.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string(),
        DisplayStatus::Before => label.if_supports_color(Stream::Stdout, |s| s.dimmed()).to_string(),
    }
}

fn countdown(next: &Countdown) -> String {
    let what = match next.boundary {
        Boundary::Opens => "opens",
        Boundary::OnTimeEnds => "late from",
        Boundary::Closes => "closes",
    };
    let secs = next.remaining_secs;
    format!("{what} {} (in {}m{:02}s)", time(next.at), secs / 60, secs % 60)
}

fn window_lines(status: &WindowStatus, next: Option<&Countdown>) -> Vec<String> {
    let mut lines = vec![format!("phase:    {}", phase_label(status.phase))];
    if let (Some(on_time_end), Some(late_end)) = (status.on_time_end, status.late_end) {
        lines.push(format!("on time:  until {}", time(on_time_end)));
        lines.push(format!("closes:   {}", time(late_end)));
    }
    if let Some(next) = next {
        lines.push(format!("next:     {}", countdown(next)));
    }
    lines
}

fn render_phase(report: &PhaseReport) -> String {
    let now = time(report.now);
    let mut lines = vec![format!("now:      {}", now.if_supports_color(Stream::Stdout, |s| s.dimmed()))];
    lines.extend(window_lines(&report.status, report.next.as_ref()));
    lines.join("\n")
}

fn render_status(report: &StatusReport) -> String {
    let label = status_label(report.status);
    let mut lines = vec![format!("status:   {}", label.if_supports_color(Stream::Stdout, |s| s.bold()))];
    if let Some(record) = report.record {
        lines.push(format!("record:   {record:?}"));
    }
    lines.push(render_phase(&report.window));
    lines.join("\n")
}

fn render_slot(report: &SlotReport) -> String {
    let mut lines = vec![
        format!("slot:     {}", report.slot.if_supports_color(Stream::Stdout, |s| s.bold())),
        format!("period:   {}s", report.period_secs),
    ];
    if let Some(next) = report.next_rotation_at {
        lines.push(format!("rotates:  {}", time(next)));
    }
    lines.join("\n")
}

fn render_roster(report: &RosterReport) -> String {
    let mut lines = vec![format!(
        "session {}  {}",
        report.session_id.if_supports_color(Stream::Stdout, |s| s.bold()),
        phase_label(report.window.phase)
    )];
    for row in &report.summary.rows {
        let checked_in = row.checked_in_at.as_deref().unwrap_or("-");
        lines.push(format!(
            "  {:<24} {:<10} {:<16} {}",
            row.name,
            row.code,
            status_label(row.status),
            checked_in.if_supports_color(Stream::Stdout, |s| s.dimmed())
        ));
    }
    let tally = &report.summary.tally;
    lines.push(format!(
        "present {}/{}  on time {}  late {}  absent {}  pending {}",
        tally.present(),
        tally.total(),
        tally.on_time,
        tally.late,
        tally.absent,
        tally.pending
    ));
    lines.join("\n")
}

fn render_open(report: &OpenReport) -> String {
    let Some(session) = &report.session else {
        return "no open session"
            .if_supports_color(Stream::Stdout, |s| s.dimmed())
            .to_string();
    };
    let id = session.id.if_supports_color(Stream::Stdout, |s| s.bold());
    let mut lines = vec![format!("session {id}")];
    if let Some(window) = &report.window {
        lines.extend(window_lines(window, window.next_boundary(report.now).as_ref()));
    }
    match report.qr {
        Some(QrGate::Showing { slot, phase }) => {
            lines.push(format!("qr:       slot {slot} ({})", phase_label(phase)));
        }
        Some(QrGate::Closed) => {
            let closed = "closed".if_supports_color(Stream::Stdout, |s| s.red());
            lines.push(format!("qr:       {closed}"));
        }
        Some(QrGate::Hidden) | None => {}
    }
    lines.join("\n")
}
