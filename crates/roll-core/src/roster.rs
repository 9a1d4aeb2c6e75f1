use crate::status::derive_status_for_input;
use crate::types::{
    DisplayStatus, Mark, RecordedStatus, RosterRow, RosterSummary, RosterTally, Student, WindowInput,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

impl RosterTally {
    pub fn add(&mut self, status: DisplayStatus) {
        let counter = match status {
            DisplayStatus::OnTime => &mut self.on_time,
            DisplayStatus::Late => &mut self.late,
            DisplayStatus::Absent => &mut self.absent,
            DisplayStatus::Pending => &mut self.pending,
            DisplayStatus::Before => &mut self.before,
        };
        *counter += 1;
    }

    pub fn present(&self) -> u32 {
        self.on_time + self.late
    }

    pub fn total(&self) -> u32 {
        self.on_time + self.late + self.absent + self.pending + self.before
    }
}

/// Merges a class roster with the session's marks. Marks for students not on
/// the roster are dropped; a later mark for the same student replaces an
/// earlier one.
pub fn summarize_roster(
    students: &[Student],
    marks: &[Mark],
    window: &WindowInput,
    now: DateTime<Utc>,
) -> RosterSummary {
    let by_student: HashMap<&str, &Mark> = marks
        .iter()
        .map(|mark| (mark.student_id.as_str(), mark))
        .collect();

    let mut tally = RosterTally::default();
    let mut rows: Vec<RosterRow> = students
        .iter()
        .map(|student| {
            let mark = by_student.get(student.id.as_str()).copied();
            let record = mark
                .and_then(|m| m.status.as_deref())
                .and_then(RecordedStatus::from_code);
            let status = derive_status_for_input(record, window, now);
            tally.add(status);
            RosterRow {
                student_id: student.id.clone(),
                name: student.name.clone(),
                code: student.code.clone(),
                checked_in_at: mark.and_then(|m| m.checked_in_at.clone()),
                status,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.student_id.cmp(&b.student_id))
    });

    RosterSummary { rows, tally }
}
