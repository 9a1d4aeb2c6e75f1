use crate::types::{DisplayStatus, Phase, RecordedStatus, SessionWindow, WindowInput};
use crate::window::{evaluate, evaluate_input};
use chrono::{DateTime, Utc};

/// Maps a live phase to what a student without a recorded check-in sees.
/// An invalid window is shown as not yet open.
pub fn status_for_phase(phase: Phase) -> DisplayStatus {
    match phase {
        Phase::Before | Phase::Invalid => DisplayStatus::Before,
        Phase::OnTime | Phase::Late => DisplayStatus::Pending,
        Phase::Closed => DisplayStatus::Absent,
    }
}

fn from_record(record: RecordedStatus) -> DisplayStatus {
    match record {
        RecordedStatus::OnTime => DisplayStatus::OnTime,
        RecordedStatus::Late => DisplayStatus::Late,
    }
}

/// A recorded outcome always wins; otherwise the window decides.
pub fn derive_status(
    record: Option<RecordedStatus>,
    window: &SessionWindow,
    now: DateTime<Utc>,
) -> DisplayStatus {
    match record {
        Some(record) => from_record(record),
        None => status_for_phase(evaluate(window, now).phase),
    }
}

pub fn derive_status_for_input(
    record: Option<RecordedStatus>,
    input: &WindowInput,
    now: DateTime<Utc>,
) -> DisplayStatus {
    match record {
        Some(record) => from_record(record),
        None => status_for_phase(evaluate_input(input, now).phase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, h, m, s).unwrap()
    }

    fn window() -> SessionWindow {
        SessionWindow::new(at(8, 0, 0), 15, 10)
    }

    #[test]
    fn test_unrecorded_follows_phase() {
        let w = window();
        assert_eq!(derive_status(None, &w, at(7, 30, 0)), DisplayStatus::Before);
        assert_eq!(derive_status(None, &w, at(8, 0, 0)), DisplayStatus::Pending);
        assert_eq!(derive_status(None, &w, at(8, 20, 0)), DisplayStatus::Pending);
        assert_eq!(derive_status(None, &w, at(8, 25, 0)), DisplayStatus::Absent);
    }

    #[test]
    fn test_record_wins_after_close() {
        let w = window();
        let late_night = at(23, 0, 0);
        assert_eq!(
            derive_status(Some(RecordedStatus::OnTime), &w, late_night),
            DisplayStatus::OnTime
        );
        assert_eq!(
            derive_status(Some(RecordedStatus::Late), &w, at(7, 0, 0)),
            DisplayStatus::Late
        );
    }

    #[test]
    fn test_invalid_window_is_neutral() {
        let input = WindowInput::new(Some("garbage"), Some(15), Some(10));
        let status = derive_status_for_input(None, &input, at(12, 0, 0));
        assert_eq!(status, DisplayStatus::Before);

        let recorded = derive_status_for_input(Some(RecordedStatus::Late), &input, at(12, 0, 0));
        assert_eq!(recorded, DisplayStatus::Late);
    }

    fn arb_record() -> impl Strategy<Value = Option<RecordedStatus>> {
        prop_oneof![
            Just(None),
            Just(Some(RecordedStatus::OnTime)),
            Just(Some(RecordedStatus::Late)),
        ]
    }

    proptest! {
        #[test]
        fn test_absent_iff_unrecorded_and_closed(
            record in arb_record(),
            on_time in 0u32..120,
            late in 0u32..120,
            offset in -20_000i64..20_000,
        ) {
            let w = SessionWindow::new(at(8, 0, 0), on_time, late);
            let now = w.start + Duration::seconds(offset);
            let closed = evaluate(&w, now).phase == Phase::Closed;
            let status = derive_status(record, &w, now);
            prop_assert_eq!(status == DisplayStatus::Absent, record.is_none() && closed);
            if let Some(recorded) = record {
                prop_assert_eq!(status, from_record(recorded));
            }
        }
    }
}
