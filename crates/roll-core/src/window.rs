//! Attendance window evaluation.
//!
//! A window is three consecutive half-open intervals starting at the session
//! start: `[start, on_time_end)` is on time, `[on_time_end, late_end)` is late
//! and everything from `late_end` on is closed. Every boundary instant
//! belongs to the interval that starts there.

use crate::types::{Boundary, Countdown, Phase, SessionWindow, WindowInput, WindowStatus};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};

impl SessionWindow {
    pub fn new(start: DateTime<Utc>, on_time_minutes: u32, late_minutes: u32) -> Self {
        Self {
            start,
            on_time_minutes,
            late_minutes,
        }
    }

    pub fn on_time_end(&self) -> DateTime<Utc> {
        add_minutes(self.start, self.on_time_minutes)
    }

    pub fn late_end(&self) -> DateTime<Utc> {
        add_minutes(self.on_time_end(), self.late_minutes)
    }

    pub fn phase_at(&self, now: DateTime<Utc>) -> Phase {
        if now < self.start {
            Phase::Before
        } else if now < self.on_time_end() {
            Phase::OnTime
        } else if now < self.late_end() {
            Phase::Late
        } else {
            Phase::Closed
        }
    }
}

impl WindowInput {
    pub fn new(start: Option<&str>, on_time_minutes: Option<i64>, late_minutes: Option<i64>) -> Self {
        Self {
            start: start.map(str::to_string),
            on_time_minutes,
            late_minutes,
        }
    }

    /// Resolves the raw input. Returns `None` when the start is missing or
    /// cannot be parsed. Missing or negative durations become zero.
    pub fn resolve(&self) -> Option<SessionWindow> {
        let start = parse_instant(self.start.as_deref()?)?;
        Some(SessionWindow::new(
            start,
            clamp_minutes(self.on_time_minutes),
            clamp_minutes(self.late_minutes),
        ))
    }
}

impl WindowStatus {
    pub fn invalid() -> Self {
        Self {
            phase: Phase::Invalid,
            start: None,
            on_time_end: None,
            late_end: None,
        }
    }

    pub fn closes_at(&self) -> Option<DateTime<Utc>> {
        self.late_end
    }

    /// Advisory only: the backend makes the real accept/reject decision.
    pub fn accepts_check_in(&self) -> bool {
        self.phase.is_open()
    }

    /// The first boundary strictly after `now`, or `None` once the window has
    /// closed (or could not be evaluated).
    pub fn next_boundary(&self, now: DateTime<Utc>) -> Option<Countdown> {
        let candidates = [
            (Boundary::Opens, self.start?),
            (Boundary::OnTimeEnds, self.on_time_end?),
            (Boundary::Closes, self.late_end?),
        ];
        candidates
            .into_iter()
            .find(|(_, at)| *at > now)
            .map(|(boundary, at)| Countdown {
                boundary,
                at,
                remaining_secs: (at - now).num_seconds(),
            })
    }
}

pub fn evaluate(window: &SessionWindow, now: DateTime<Utc>) -> WindowStatus {
    WindowStatus {
        phase: window.phase_at(now),
        start: Some(window.start),
        on_time_end: Some(window.on_time_end()),
        late_end: Some(window.late_end()),
    }
}

pub fn evaluate_input(input: &WindowInput, now: DateTime<Utc>) -> WindowStatus {
    match input.resolve() {
        Some(window) => evaluate(&window, now),
        None => WindowStatus::invalid(),
    }
}

pub fn evaluate_now(window: &SessionWindow) -> WindowStatus {
    evaluate(window, Utc::now())
}

pub fn evaluate_input_now(input: &WindowInput) -> WindowStatus {
    evaluate_input(input, Utc::now())
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an RFC 3339 instant, also accepting the space-separated form
/// Postgres emits (`2025-01-01 08:00:00+00`). Timestamps without an offset
/// (`timestamp without time zone` columns) are read as UTC.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

pub fn clamp_minutes(value: Option<i64>) -> u32 {
    u32::try_from(value.unwrap_or(0).max(0)).unwrap_or(u32::MAX)
}

pub(crate) fn add_minutes(at: DateTime<Utc>, minutes: u32) -> DateTime<Utc> {
    at.checked_add_signed(Duration::minutes(i64::from(minutes)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
