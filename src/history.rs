use crate::models::StudyRecord;
use std::fmt;

/// Returned by [`best_day`] when no sessions were ever recorded; callers
/// decide whether that is a 404 or a placeholder line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHistory;

impl fmt::Display for EmptyHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no study sessions recorded yet")
    }
}

impl std::error::Error for EmptyHistory {}

/// Folds one finished study phase into the per-day history: minutes add up
/// cumulatively, the task counts are a snapshot and overwrite the previous
/// ones. Keeps the list sorted ascending by day.
pub fn record_session(
    records: &mut Vec<StudyRecord>,
    day: u32,
    study_minutes: u32,
    completed_tasks: u32,
    total_tasks: u32,
) {
    match records.iter_mut().find(|record| record.day == day) {
        Some(record) => {
            record.study_time = record.study_time.saturating_add(study_minutes);
            record.completed_tasks = completed_tasks;
            record.total_tasks = total_tasks;
        }
        None => records.push(StudyRecord {
            day,
            study_time: study_minutes,
            completed_tasks,
            total_tasks,
        }),
    }

    records.sort_by_key(|record| record.day);
}

/// Completion ratio of one record; a day that never had tasks counts as 0 so
/// ordering stays total.
pub fn completion_ratio(record: &StudyRecord) -> f64 {
    if record.total_tasks == 0 {
        return 0.0;
    }
    f64::from(record.completed_tasks) / f64::from(record.total_tasks)
}

/// The record with the highest completion ratio; ties go to the earliest
/// day.
pub fn best_day(records: &[StudyRecord]) -> Result<&StudyRecord, EmptyHistory> {
    let mut best: Option<&StudyRecord> = None;
    for record in records {
        best = match best {
            None => Some(record),
            Some(current) => {
                let challenger = completion_ratio(record);
                let incumbent = completion_ratio(current);
                if challenger > incumbent || (challenger == incumbent && record.day < current.day)
                {
                    Some(record)
                } else {
                    Some(current)
                }
            }
        };
    }
    best.ok_or(EmptyHistory)
}

pub fn best_day_message(record: &StudyRecord) -> String {
    format!(
        "On Day {}, you completed {}/{} tasks - your best day so far! Keep up the great work!",
        record.day, record.completed_tasks, record.total_tasks
    )
}

/// Motivation line for the history view; an empty history gets the prompt
/// instead of an error.
pub fn history_motivation(records: &[StudyRecord]) -> String {
    match best_day(records) {
        Ok(record) => best_day_message(record),
        Err(EmptyHistory) => "Complete study sessions to see your progress history!".to_string(),
    }
}
