use crate::types::{SessionRow, WindowInput, WindowStatus};
use crate::window::{add_minutes, clamp_minutes, evaluate_input, parse_instant};
use chrono::{DateTime, Duration, Utc};

impl SessionRow {
    /// Rebuilds the window from the row. An explicit late duration wins;
    /// otherwise it is the rounded number of minutes between the end of the
    /// on-time sub-window and `closes_at`.
    pub fn window_input(&self) -> WindowInput {
        let on_time_minutes = clamp_minutes(self.on_time_minutes);
        let late_minutes = self.late_minutes.or_else(|| {
            let start = parse_instant(self.start.as_deref()?)?;
            let closes_at = parse_instant(self.closes_at.as_deref()?)?;
            Some(rounded_minutes(closes_at - add_minutes(start, on_time_minutes)))
        });
        WindowInput {
            start: self.start.clone(),
            on_time_minutes: Some(i64::from(on_time_minutes)),
            late_minutes,
        }
    }

    pub fn evaluate(&self, now: DateTime<Utc>) -> WindowStatus {
        evaluate_input(&self.window_input(), now)
    }

    /// `true` once `now` reaches the session end. Unknown ends never end.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.end
            .as_deref()
            .and_then(parse_instant)
            .is_some_and(|end| now >= end)
    }

    pub fn accepts_check_in(&self, now: DateTime<Utc>) -> bool {
        self.evaluate(now).accepts_check_in() && !self.has_ended(now)
    }
}

/// The first session, in list order, whose window is open at `now`.
pub fn find_open_session(rows: &[SessionRow], now: DateTime<Utc>) -> Option<&SessionRow> {
    rows.iter().find(|row| row.accepts_check_in(now))
}

/// Minutes rounded half up.
fn rounded_minutes(delta: Duration) -> i64 {
    (delta.num_milliseconds() + 30_000).div_euclid(60_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, h, m, s).unwrap()
    }

    fn row(id: &str, start: &str, on_time: Option<i64>, late: Option<i64>) -> SessionRow {
        SessionRow {
            id: id.to_string(),
            start: Some(start.to_string()),
            on_time_minutes: on_time,
            late_minutes: late,
            ..SessionRow::default()
        }
    }

    #[test]
    fn test_explicit_durations_pass_through() {
        let input = row("s1", "2025-01-01T08:00:00Z", Some(15), Some(10)).window_input();
        assert_eq!(input.on_time_minutes, Some(15));
        assert_eq!(input.late_minutes, Some(10));
    }

    #[test]
    fn test_late_minutes_derived_from_close() {
        let mut session = row("s1", "2025-01-01T08:00:00Z", Some(15), None);
        session.closes_at = Some("2025-01-01T08:24:40Z".to_string());
        assert_eq!(session.window_input().late_minutes, Some(10));

        session.closes_at = Some("2025-01-01T08:24:20Z".to_string());
        assert_eq!(session.window_input().late_minutes, Some(9));
    }

    #[test]
    fn test_close_before_on_time_end_clamps() {
        let mut session = row("s1", "2025-01-01T08:00:00Z", Some(15), None);
        session.closes_at = Some("2025-01-01T08:05:00Z".to_string());
        let input = session.window_input();
        assert_eq!(input.late_minutes, Some(-10));
        assert_eq!(input.resolve().unwrap().late_minutes, 0);
    }

    #[test]
    fn test_oversized_on_time_is_clamped_before_late_fallback() {
        let mut session = row("s1", "2025-01-01T08:00:00Z", Some(i64::MAX), None);
        session.closes_at = Some("2025-01-01T09:00:00Z".to_string());
        let input = session.window_input();
        assert_eq!(input.on_time_minutes, Some(i64::from(u32::MAX)));
        assert!(input.late_minutes.is_some_and(|late| late < 0));

        let window = input.resolve().unwrap();
        assert_eq!(window.on_time_minutes, u32::MAX);
        assert_eq!(window.late_minutes, 0);
        assert_eq!(session.evaluate(at(8, 30, 0)).phase, Phase::OnTime);
    }

    #[test]
    fn test_negative_on_time_derives_late_from_start() {
        let mut session = row("s1", "2025-01-01T08:00:00Z", Some(-5), None);
        session.closes_at = Some("2025-01-01T08:20:00Z".to_string());
        let input = session.window_input();
        assert_eq!(input.on_time_minutes, Some(0));
        assert_eq!(input.late_minutes, Some(20));
    }

    #[test]
    fn test_row_without_start_is_invalid() {
        let session = SessionRow {
            id: "s1".to_string(),
            ..SessionRow::default()
        };
        assert_eq!(session.evaluate(at(8, 0, 0)).phase, Phase::Invalid);
        assert!(!session.accepts_check_in(at(8, 0, 0)));
    }

    #[test]
    fn test_session_end_closes_check_in() {
        let mut session = row("s1", "2025-01-01T08:00:00Z", Some(60), Some(60));
        session.end = Some("2025-01-01T08:45:00Z".to_string());
        assert!(session.accepts_check_in(at(8, 44, 59)));
        assert!(!session.accepts_check_in(at(8, 45, 0)));
        assert!(session.has_ended(at(8, 45, 0)));
    }

    #[test]
    fn test_find_open_session_picks_first_open() {
        let rows = vec![
            row("later", "2025-01-01T10:00:00Z", Some(15), Some(10)),
            row("done", "2025-01-01T06:00:00Z", Some(15), Some(10)),
            row("open", "2025-01-01T08:00:00Z", Some(15), Some(10)),
            row("also-open", "2025-01-01T08:10:00Z", Some(15), Some(10)),
        ];
        let open = find_open_session(&rows, at(8, 12, 0)).unwrap();
        assert_eq!(open.id, "open");
        assert!(find_open_session(&rows, at(9, 0, 0)).is_none());
    }

    #[test]
    fn test_open_window_excludes_close_instant() {
        let rows = vec![row("s1", "2025-01-01T08:00:00Z", Some(15), Some(10))];
        assert!(find_open_session(&rows, at(8, 24, 59)).is_some());
        assert!(find_open_session(&rows, at(8, 25, 0)).is_none());
    }
}
